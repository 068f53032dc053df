//! Size proposals offered to a layout before it commits to a size.

use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// A proposed size where either axis may be left unspecified.
///
/// An unspecified axis means "let the layout decide"; it is resolved by
/// substituting an ideal value with [`ProposedSize::replacing_unspecified`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProposedSize {
    /// Proposed width, `None` when unspecified
    pub width: Option<f32>,
    /// Proposed height, `None` when unspecified
    pub height: Option<f32>,
}

impl ProposedSize {
    /// Ideal size used when the host does not supply one.
    pub const DEFAULT_IDEAL: Size = Size::new(10.0, 10.0);

    /// Both axes unspecified.
    pub const UNSPECIFIED: Self = Self {
        width: None,
        height: None,
    };

    /// Create a proposal from optional axes.
    #[must_use]
    pub const fn new(width: Option<f32>, height: Option<f32>) -> Self {
        Self { width, height }
    }

    /// Create a fully specified proposal.
    #[must_use]
    pub const fn exact(size: Size) -> Self {
        Self::new(Some(size.width), Some(size.height))
    }

    /// Check whether both axes carry a concrete value.
    #[must_use]
    pub const fn is_fully_specified(&self) -> bool {
        self.width.is_some() && self.height.is_some()
    }

    /// Resolve unspecified axes using `ideal`.
    #[must_use]
    pub fn replacing_unspecified(&self, ideal: Size) -> Size {
        Size::new(
            self.width.unwrap_or(ideal.width),
            self.height.unwrap_or(ideal.height),
        )
    }

    /// Resolve unspecified axes using [`ProposedSize::DEFAULT_IDEAL`].
    #[must_use]
    pub fn replacing_unspecified_dimensions(&self) -> Size {
        self.replacing_unspecified(Self::DEFAULT_IDEAL)
    }
}

impl From<Size> for ProposedSize {
    fn from(size: Size) -> Self {
        Self::exact(size)
    }
}

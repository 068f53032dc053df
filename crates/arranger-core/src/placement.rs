//! Placement records produced by a layout pass.

use crate::geometry::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Reference point on a child's bounding box used when positioning it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Anchor {
    /// Position marks the center of the child
    #[default]
    Center,
    /// Position marks the left edge at the child's vertical center
    Leading,
    /// Position marks the top-left corner
    TopLeading,
    /// Position marks the bottom-left corner
    BottomLeading,
}

impl Anchor {
    /// Offset of this anchor from the top-left corner of a box of `size`.
    #[must_use]
    pub fn offset_in(self, size: Size) -> Point {
        match self {
            Self::Center => Point::new(size.width / 2.0, size.height / 2.0),
            Self::Leading => Point::new(0.0, size.height / 2.0),
            Self::TopLeading => Point::ORIGIN,
            Self::BottomLeading => Point::new(0.0, size.height),
        }
    }
}

/// Where and how large one child should be.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Position of the anchor point in the parent's coordinate space
    pub position: Point,
    /// Which point of the child `position` refers to
    pub anchor: Anchor,
    /// Size the child is asked to take
    pub proposal: Size,
}

impl Placement {
    /// Create a new placement.
    #[must_use]
    pub const fn new(position: Point, anchor: Anchor, proposal: Size) -> Self {
        Self {
            position,
            anchor,
            proposal,
        }
    }

    /// The child's frame with the anchor resolved to a top-left origin.
    #[must_use]
    pub fn frame(&self) -> Rect {
        let origin = self.position - self.anchor.offset_in(self.proposal);
        Rect::from_origin_size(origin, self.proposal)
    }

    /// Center of the child's frame.
    #[must_use]
    pub fn center(&self) -> Point {
        self.frame().center()
    }
}

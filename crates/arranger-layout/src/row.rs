//! Horizontal row of squares with a constant gap.

use arranger_core::{Anchor, Placement, Point, Rect, Size};
use serde::{Deserialize, Serialize};

use crate::layout::Layout;

/// Gap between neighbours unless configured otherwise.
pub const DEFAULT_SPACING: f32 = 8.0;

/// Squares sharing the proposed width after subtracting a fixed gap between
/// each pair, vertically centered in the bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpacedRowLayout {
    /// Gap between neighbouring children
    pub spacing: f32,
}

impl SpacedRowLayout {
    /// Create a row with the given gap.
    #[must_use]
    pub const fn new(spacing: f32) -> Self {
        Self { spacing }
    }

    /// Side of each square for `subviews` children across `width`.
    /// Zero once the gaps alone are wider than `width`.
    #[must_use]
    pub fn side(&self, width: f32, subviews: usize) -> f32 {
        let gaps = self.spacing * subviews.saturating_sub(1) as f32;
        ((width - gaps) / subviews as f32).max(0.0)
    }
}

impl Default for SpacedRowLayout {
    fn default() -> Self {
        Self::new(DEFAULT_SPACING)
    }
}

impl Layout for SpacedRowLayout {
    fn place_subviews(&self, bounds: Rect, proposal: Size, subviews: usize) -> Vec<Placement> {
        if subviews == 0 {
            return Vec::new();
        }

        let side = self.side(proposal.width, subviews);
        let first_x = bounds.min_x() + side / 2.0;
        let pitch = side + self.spacing;
        let y = bounds.mid_y();

        (0..subviews)
            .map(|i| {
                Placement::new(
                    Point::new(first_x + pitch * i as f32, y),
                    Anchor::Center,
                    Size::square(side),
                )
            })
            .collect()
    }
}

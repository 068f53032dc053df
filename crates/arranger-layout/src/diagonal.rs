//! Diagonal staircase layouts.

use arranger_core::{Anchor, Placement, Point, Rect, Size};
use serde::{Deserialize, Serialize};

use crate::layout::{spread, Layout};

/// Corner the staircase starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DiagonalStart {
    /// Start bottom-left and climb to the right
    #[default]
    Bottom,
    /// Start top-left and descend to the right
    Top,
}

/// Squares of side `height / n` stepping one side vertically and an even
/// share of the remaining width horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiagonalLayout {
    /// Starting corner
    pub start: DiagonalStart,
}

impl DiagonalLayout {
    /// Staircase ascending left to right.
    #[must_use]
    pub const fn bottom() -> Self {
        Self {
            start: DiagonalStart::Bottom,
        }
    }

    /// Staircase descending left to right.
    #[must_use]
    pub const fn top() -> Self {
        Self {
            start: DiagonalStart::Top,
        }
    }
}

impl Layout for DiagonalLayout {
    fn place_subviews(&self, bounds: Rect, proposal: Size, subviews: usize) -> Vec<Placement> {
        if subviews == 0 {
            return Vec::new();
        }

        let side = proposal.height / subviews as f32;
        let step_x = spread(proposal.width - side, subviews);
        let (start_y, step_y, anchor) = match self.start {
            DiagonalStart::Bottom => (bounds.max_y(), -side, Anchor::BottomLeading),
            DiagonalStart::Top => (bounds.min_y(), side, Anchor::TopLeading),
        };

        (0..subviews)
            .map(|i| {
                let i = i as f32;
                Placement::new(
                    Point::new(bounds.min_x() + step_x * i, start_y + step_y * i),
                    anchor,
                    Size::square(side),
                )
            })
            .collect()
    }
}

//! Spiral fan around the bounds center.

use arranger_core::{Anchor, Placement, Point, Rect, Size, Transform2D};
use serde::{Deserialize, Serialize};

use crate::layout::Layout;

/// Distance added along both axes per child before rotation.
const ARM_STEP: f32 = 20.0;

/// Rotation added per child, in radians.
const TWIST: f32 = 6.0;

/// Child `i` sits at `(20·i, 20·i)` rotated by `6·i + 6` radians around the
/// bounds center, with squares of side `width / n / 2`.
///
/// Radius and rotation both grow with the index, so the result is a spiral
/// rather than an even polar arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RadialLayout;

impl RadialLayout {
    /// Offset of child `index` from the bounds center.
    #[must_use]
    pub fn offset(index: usize) -> Point {
        let i = index as f32;
        Transform2D::rotate(TWIST * i + TWIST).apply(Point::new(ARM_STEP * i, ARM_STEP * i))
    }
}

impl Layout for RadialLayout {
    fn place_subviews(&self, bounds: Rect, proposal: Size, subviews: usize) -> Vec<Placement> {
        if subviews == 0 {
            return Vec::new();
        }

        let side = proposal.width / subviews as f32 / 2.0;
        let center = bounds.center();

        (0..subviews)
            .map(|i| Placement::new(center + Self::offset(i), Anchor::Center, Size::square(side)))
            .collect()
    }
}

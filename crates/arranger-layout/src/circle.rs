//! Squares evenly spaced around a ring.

use arranger_core::{Anchor, Placement, Point, Rect, Size};
use serde::{Deserialize, Serialize};

use crate::layout::Layout;

/// Places `n` squares of side `width / n` on a ring inscribed in the bounds,
/// starting at the top and proceeding clockwise.
///
/// Positions use [`Anchor::Leading`]: each position is the child's left edge
/// at its vertical center, so the child's center sits on a circle of radius
/// `min(w, h) / 2 - side / 2` around the bounds center.
///
/// The side follows the proposed width while the ring follows the shorter
/// bounds dimension. In a container wider than it is tall the squares can
/// therefore be taller than the bounds and overflow the measured size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CircleLayout;

impl CircleLayout {
    /// Angle between neighbours, in radians.
    #[must_use]
    pub fn angular_step(subviews: usize) -> f32 {
        (360.0 / subviews as f32).to_radians()
    }
}

impl Layout for CircleLayout {
    fn place_subviews(&self, bounds: Rect, proposal: Size, subviews: usize) -> Vec<Placement> {
        if subviews == 0 {
            return Vec::new();
        }

        let radius = bounds.size().min_dimension() / 2.0;
        let step = Self::angular_step(subviews);
        let side = proposal.width / subviews as f32;
        let reach = radius - side / 2.0;
        let center = bounds.center();

        (0..subviews)
            .map(|i| {
                let (sin, cos) = (step * i as f32 - std::f32::consts::FRAC_PI_2).sin_cos();
                Placement::new(
                    Point::new(center.x + cos * reach - side / 2.0, center.y + sin * reach),
                    Anchor::Leading,
                    Size::square(side),
                )
            })
            .collect()
    }
}

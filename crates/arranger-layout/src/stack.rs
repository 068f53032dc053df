//! Plain row and column stacks.

use arranger_core::{Anchor, Placement, Point, Rect, Size};
use serde::{Deserialize, Serialize};

use crate::layout::Layout;

/// Main axis of a stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StackAxis {
    /// Left to right
    #[default]
    Horizontal,
    /// Top to bottom
    Vertical,
}

/// Equal shares of the main axis, full extent on the cross axis, children
/// edge to edge apart from `spacing`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StackLayout {
    /// Main axis
    pub axis: StackAxis,
    /// Gap between neighbouring children
    pub spacing: f32,
}

impl StackLayout {
    /// Create a horizontal stack.
    #[must_use]
    pub const fn row(spacing: f32) -> Self {
        Self {
            axis: StackAxis::Horizontal,
            spacing,
        }
    }

    /// Create a vertical stack.
    #[must_use]
    pub const fn column(spacing: f32) -> Self {
        Self {
            axis: StackAxis::Vertical,
            spacing,
        }
    }
}

impl Layout for StackLayout {
    fn place_subviews(&self, bounds: Rect, proposal: Size, subviews: usize) -> Vec<Placement> {
        if subviews == 0 {
            return Vec::new();
        }

        let (main, cross) = match self.axis {
            StackAxis::Horizontal => (proposal.width, proposal.height),
            StackAxis::Vertical => (proposal.height, proposal.width),
        };
        let gaps = self.spacing * (subviews - 1) as f32;
        let share = ((main - gaps) / subviews as f32).max(0.0);
        let pitch = share + self.spacing;

        (0..subviews)
            .map(|i| {
                let along = pitch * i as f32;
                let (position, size) = match self.axis {
                    StackAxis::Horizontal => (
                        Point::new(bounds.min_x() + along, bounds.min_y()),
                        Size::new(share, cross),
                    ),
                    StackAxis::Vertical => (
                        Point::new(bounds.min_x(), bounds.min_y() + along),
                        Size::new(cross, share),
                    ),
                };
                Placement::new(position, Anchor::TopLeading, size)
            })
            .collect()
    }
}

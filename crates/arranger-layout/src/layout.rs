//! The measure/place protocol shared by every strategy.

use arranger_core::{Placement, Rect, Size};
use serde::{Deserialize, Serialize};

use crate::circle::CircleLayout;
use crate::diagonal::DiagonalLayout;
use crate::radial::RadialLayout;
use crate::row::SpacedRowLayout;
use crate::stack::StackLayout;

/// A custom layout: sizes itself for a proposal, then places its subviews.
///
/// Both methods receive a proposal whose unspecified axes have already been
/// resolved by [`crate::LayoutEngine`]. Subviews carry no intrinsic size; the
/// layout dictates every child's size through [`Placement::proposal`].
pub trait Layout {
    /// Space this layout wants for `proposal` with `subviews` children.
    ///
    /// Packs into the proposed envelope: zero children measure as
    /// [`Size::ZERO`], anything else takes exactly the proposal.
    fn size_that_fits(&self, proposal: Size, subviews: usize) -> Size {
        if subviews == 0 {
            Size::ZERO
        } else {
            proposal
        }
    }

    /// One placement per subview, in subview order.
    ///
    /// Must return an empty vector without doing any arithmetic when
    /// `subviews` is zero.
    fn place_subviews(&self, bounds: Rect, proposal: Size, subviews: usize) -> Vec<Placement>;
}

/// Distance between consecutive children when `span` is spread across
/// `count` children. A single child does not advance.
pub(crate) fn spread(span: f32, count: usize) -> f32 {
    if count > 1 {
        span / (count - 1) as f32
    } else {
        0.0
    }
}

/// Any strategy, dispatched by tag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AnyLayout {
    /// Staircase of squares
    Diagonal(DiagonalLayout),
    /// Evenly spaced row of squares
    SpacedRow(SpacedRowLayout),
    /// Plain row or column
    Stack(StackLayout),
    /// Squares on a ring
    Circle(CircleLayout),
    /// Spiral fan
    Radial(RadialLayout),
}

impl Layout for AnyLayout {
    fn size_that_fits(&self, proposal: Size, subviews: usize) -> Size {
        match self {
            Self::Diagonal(l) => l.size_that_fits(proposal, subviews),
            Self::SpacedRow(l) => l.size_that_fits(proposal, subviews),
            Self::Stack(l) => l.size_that_fits(proposal, subviews),
            Self::Circle(l) => l.size_that_fits(proposal, subviews),
            Self::Radial(l) => l.size_that_fits(proposal, subviews),
        }
    }

    fn place_subviews(&self, bounds: Rect, proposal: Size, subviews: usize) -> Vec<Placement> {
        match self {
            Self::Diagonal(l) => l.place_subviews(bounds, proposal, subviews),
            Self::SpacedRow(l) => l.place_subviews(bounds, proposal, subviews),
            Self::Stack(l) => l.place_subviews(bounds, proposal, subviews),
            Self::Circle(l) => l.place_subviews(bounds, proposal, subviews),
            Self::Radial(l) => l.place_subviews(bounds, proposal, subviews),
        }
    }
}

impl From<DiagonalLayout> for AnyLayout {
    fn from(layout: DiagonalLayout) -> Self {
        Self::Diagonal(layout)
    }
}

impl From<SpacedRowLayout> for AnyLayout {
    fn from(layout: SpacedRowLayout) -> Self {
        Self::SpacedRow(layout)
    }
}

impl From<StackLayout> for AnyLayout {
    fn from(layout: StackLayout) -> Self {
        Self::Stack(layout)
    }
}

impl From<CircleLayout> for AnyLayout {
    fn from(layout: CircleLayout) -> Self {
        Self::Circle(layout)
    }
}

impl From<RadialLayout> for AnyLayout {
    fn from(layout: RadialLayout) -> Self {
        Self::Radial(layout)
    }
}

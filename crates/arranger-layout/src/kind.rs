//! The closed set of selectable layouts.

use arranger_core::{next_case, CaseIterable};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::circle::CircleLayout;
use crate::config::LayoutConfig;
use crate::diagonal::DiagonalLayout;
use crate::layout::AnyLayout;
use crate::radial::RadialLayout;
use crate::row::SpacedRowLayout;
use crate::stack::StackLayout;

/// Identifier of one layout strategy. Declaration order is the toggle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    /// Row of squares with a fixed gap
    #[default]
    SpacedRow,
    /// Staircase ascending left to right
    BottomDiagonal,
    /// Staircase descending left to right
    TopDiagonal,
    /// Plain vertical stack
    Column,
    /// Plain horizontal stack
    Row,
    /// Squares on a ring
    Circle,
    /// Spiral fan
    Radial,
}

impl CaseIterable for LayoutKind {
    const ALL: &'static [Self] = &[
        Self::SpacedRow,
        Self::BottomDiagonal,
        Self::TopDiagonal,
        Self::Column,
        Self::Row,
        Self::Circle,
        Self::Radial,
    ];
}

impl LayoutKind {
    /// Display name shown by the host.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::SpacedRow => "HStack",
            Self::BottomDiagonal => "Diagonal",
            Self::TopDiagonal => "Diagonal (top)",
            Self::Column => "simple VStack",
            Self::Row => "simple HStack",
            Self::Circle => "Circle",
            Self::Radial => "Radial",
        }
    }

    /// The kind after this one, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        next_case(self)
    }

    /// Build the strategy for this kind.
    #[must_use]
    pub fn layout(self, config: &LayoutConfig) -> AnyLayout {
        match self {
            Self::SpacedRow => SpacedRowLayout::new(config.spacing).into(),
            Self::BottomDiagonal => DiagonalLayout::bottom().into(),
            Self::TopDiagonal => DiagonalLayout::top().into(),
            Self::Column => StackLayout::column(config.stack_spacing).into(),
            Self::Row => StackLayout::row(config.stack_spacing).into(),
            Self::Circle => CircleLayout.into(),
            Self::Radial => RadialLayout.into(),
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

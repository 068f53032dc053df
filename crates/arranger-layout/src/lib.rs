#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]
//! Custom layout strategies for the Arranger layout engine.
//!
//! Each strategy answers two questions for a host: how much space it wants
//! for a proposed size ([`Layout::size_that_fits`]) and where every child goes
//! ([`Layout::place_subviews`]). Strategies are stateless; a host selects one
//! through [`LayoutKind`] and cycles through them in a fixed order.
//!
//! # Strategies
//!
//! - **Spaced row**: squares in a row with a constant gap
//! - **Diagonal**: staircase from the bottom-left or top-left corner
//! - **Row / column**: plain stacks
//! - **Circle**: squares on a ring, clockwise from the top
//! - **Radial**: spiral fan around the center
//!
//! # Example
//!
//! ```
//! use arranger_core::{ProposedSize, Rect, Size};
//! use arranger_layout::{LayoutEngine, LayoutKind};
//!
//! let engine = LayoutEngine::new();
//! let bounds = Rect::new(0.0, 0.0, 350.0, 350.0);
//! let proposal = ProposedSize::exact(Size::new(350.0, 350.0));
//!
//! let placements = engine.place(LayoutKind::Circle, bounds, proposal, 7);
//! assert_eq!(placements.len(), 7);
//! assert_eq!(placements[0].proposal, Size::new(50.0, 50.0));
//! ```

mod circle;
mod config;
mod diagonal;
mod engine;
mod error;
mod kind;
mod layout;
mod radial;
mod row;
mod stack;
mod toggle;

pub use circle::CircleLayout;
pub use config::LayoutConfig;
pub use diagonal::{DiagonalLayout, DiagonalStart};
pub use engine::{LayoutEngine, LayoutPass};
pub use error::LayoutError;
pub use kind::LayoutKind;
pub use layout::{AnyLayout, Layout};
pub use radial::RadialLayout;
pub use row::{SpacedRowLayout, DEFAULT_SPACING};
pub use stack::{StackAxis, StackLayout};
pub use toggle::{ToggleMessage, ToggleState};

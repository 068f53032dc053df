#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Core types for the Arranger layout engine.
//!
//! This crate provides the vocabulary shared between a UI host and the
//! layout strategies in `arranger-layout`:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`Transform2D`]
//! - Size proposals with unspecified axes: [`ProposedSize`]
//! - Placement output: [`Placement`], [`Anchor`]
//! - Cyclic enumerations: [`CaseIterable`], [`next_case`]

mod cycle;
mod geometry;
mod placement;
mod proposal;

pub use cycle::{next_case, CaseIterable};
pub use geometry::{Point, Rect, Size, Transform2D};
pub use placement::{Anchor, Placement};
pub use proposal::ProposedSize;

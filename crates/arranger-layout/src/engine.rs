//! Layout engine implementation.

use arranger_core::{next_case, Placement, ProposedSize, Rect, Size};

use crate::config::LayoutConfig;
use crate::kind::LayoutKind;
use crate::layout::Layout;

/// Result of one measure-then-place pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutPass {
    /// Size the layout asked for
    pub size: Size,
    /// One placement per child, in child order
    pub placements: Vec<Placement>,
}

/// Stateless facade the host calls into.
///
/// Holds only configuration; every call receives all of its inputs and the
/// strategy for `kind` is built fresh per call.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    /// Create an engine with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with the given configuration.
    #[must_use]
    pub const fn with_config(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration.
    #[must_use]
    pub const fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Resolve unspecified proposal axes with the configured ideal size.
    #[must_use]
    pub fn resolve(&self, proposal: ProposedSize) -> Size {
        proposal.replacing_unspecified(self.config.ideal_size)
    }

    /// Space `kind` wants for `proposal` with `count` children.
    #[must_use]
    pub fn measure(&self, kind: LayoutKind, proposal: ProposedSize, count: usize) -> Size {
        kind.layout(&self.config)
            .size_that_fits(self.resolve(proposal), count)
    }

    /// Place `count` children inside `bounds`.
    #[must_use]
    pub fn place(
        &self,
        kind: LayoutKind,
        bounds: Rect,
        proposal: ProposedSize,
        count: usize,
    ) -> Vec<Placement> {
        if count == 0 {
            return Vec::new();
        }
        tracing::trace!(%kind, count, ?bounds, "placing subviews");
        kind.layout(&self.config)
            .place_subviews(bounds, self.resolve(proposal), count)
    }

    /// Place each of `children`, pairing it with its placement.
    #[must_use]
    pub fn place_children<'a, C>(
        &self,
        kind: LayoutKind,
        bounds: Rect,
        proposal: ProposedSize,
        children: &'a [C],
    ) -> Vec<(&'a C, Placement)> {
        children
            .iter()
            .zip(self.place(kind, bounds, proposal, children.len()))
            .collect()
    }

    /// Measure for `proposal`, then place inside `bounds`, as a host does
    /// once per frame.
    #[must_use]
    pub fn compute(
        &self,
        kind: LayoutKind,
        bounds: Rect,
        proposal: ProposedSize,
        count: usize,
    ) -> LayoutPass {
        let size = self.measure(kind, proposal, count);
        let placements = self.place(kind, bounds, proposal, count);
        LayoutPass { size, placements }
    }

    /// The kind that follows `kind` in toggle order.
    #[must_use]
    pub fn advance(&self, kind: LayoutKind) -> LayoutKind {
        let next = next_case(kind);
        tracing::debug!(from = %kind, to = %next, "advancing layout kind");
        next
    }
}

//! Host-side toggle state: the current layout kind and child count.
//!
//! Follows the `State + Message` update pattern: the host owns a
//! [`ToggleState`], feeds it [`ToggleMessage`]s from its input handlers and
//! re-runs the layout engine when [`ToggleState::update`] reports a change.

use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;
use crate::kind::LayoutKind;

/// Input events the toggle view reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleMessage {
    /// A child was tapped: switch to the next layout
    Tap,
    /// Add a child
    Increment,
    /// Remove a child, unless already at the floor
    Decrement,
}

/// Current layout selection and child count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleState {
    /// Selected layout
    pub kind: LayoutKind,
    /// Number of children shown
    pub count: usize,
    /// Floor for `count`
    pub min_count: usize,
}

impl ToggleState {
    /// Initial state described by `config`.
    #[must_use]
    pub const fn from_config(config: &LayoutConfig) -> Self {
        Self {
            kind: config.initial_kind,
            count: config.initial_count,
            min_count: config.min_count,
        }
    }

    /// Apply a message. Returns `true` if the state changed.
    pub fn update(&mut self, msg: ToggleMessage) -> bool {
        let before = *self;
        match msg {
            ToggleMessage::Tap => self.kind = self.kind.next(),
            ToggleMessage::Increment => self.count = self.count.saturating_add(1),
            ToggleMessage::Decrement => {
                if self.count > self.min_count {
                    self.count -= 1;
                }
            }
        }
        let changed = *self != before;
        tracing::debug!(?msg, kind = %self.kind, count = self.count, changed, "toggle update");
        changed
    }

    /// Title for the current layout.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.kind.title()
    }
}

impl Default for ToggleState {
    fn default() -> Self {
        Self::from_config(&LayoutConfig::default())
    }
}

//! Host-tunable layout configuration.
//!
//! # Examples
//!
//! ```
//! use arranger_layout::{LayoutConfig, LayoutKind};
//!
//! let config = LayoutConfig::from_yaml("spacing: 4\ninitial_kind: circle\n").unwrap();
//! assert_eq!(config.spacing, 4.0);
//! assert_eq!(config.initial_kind, LayoutKind::Circle);
//! assert_eq!(config.min_count, 2);
//! ```

use arranger_core::{ProposedSize, Size};
use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::kind::LayoutKind;
use crate::row::DEFAULT_SPACING;

/// Configuration shared by the engine and the toggle state.
///
/// Every field has a default, so a partial YAML document is enough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Gap used by the spaced row
    pub spacing: f32,
    /// Gap used by the plain row and column stacks
    pub stack_spacing: f32,
    /// Substituted for unspecified proposal axes
    pub ideal_size: Size,
    /// Lowest child count the toggle state allows
    pub min_count: usize,
    /// Child count the toggle state starts with
    pub initial_count: usize,
    /// Layout the toggle state starts with
    pub initial_kind: LayoutKind,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_SPACING,
            stack_spacing: DEFAULT_SPACING,
            ideal_size: ProposedSize::DEFAULT_IDEAL,
            min_count: 2,
            initial_count: 7,
            initial_kind: LayoutKind::SpacedRow,
        }
    }
}

impl LayoutConfig {
    /// Parse and validate configuration from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, LayoutError> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        tracing::debug!(
            spacing = config.spacing,
            stack_spacing = config.stack_spacing,
            initial_kind = %config.initial_kind,
            initial_count = config.initial_count,
            "loaded layout config"
        );
        Ok(config)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String, LayoutError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Check that every field is usable.
    pub fn validate(&self) -> Result<(), LayoutError> {
        check_gap("spacing", self.spacing)?;
        check_gap("stack_spacing", self.stack_spacing)?;

        let ideal = self.ideal_size;
        if !(ideal.width.is_finite() && ideal.height.is_finite())
            || ideal.width <= 0.0
            || ideal.height <= 0.0
        {
            return Err(LayoutError::invalid(
                "ideal_size",
                format!("must be positive and finite, got {}x{}", ideal.width, ideal.height),
            ));
        }

        if self.min_count == 0 {
            return Err(LayoutError::invalid("min_count", "must be at least 1"));
        }
        if self.initial_count < self.min_count {
            return Err(LayoutError::invalid(
                "initial_count",
                format!(
                    "{} is below min_count {}",
                    self.initial_count, self.min_count
                ),
            ));
        }
        Ok(())
    }
}

fn check_gap(field: &'static str, value: f32) -> Result<(), LayoutError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(LayoutError::invalid(
            field,
            format!("must be non-negative and finite, got {value}"),
        ))
    }
}

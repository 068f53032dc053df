//! Error types for arranger-layout.

use thiserror::Error;

/// Errors raised while loading or validating layout configuration.
///
/// Layout passes themselves cannot fail.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Configuration text was not valid YAML for [`crate::LayoutConfig`].
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// A configuration field holds a value the engine cannot use.
    #[error("Invalid value for '{field}': {message}")]
    InvalidConfig {
        /// Field name
        field: &'static str,
        /// Error message
        message: String,
    },
}

impl LayoutError {
    pub(crate) fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            message: message.into(),
        }
    }
}

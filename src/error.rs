use std::path::PathBuf;

use thiserror::Error;

use crate::scroll::TargetRef;

/// Reasons a scroll binding is refused at registration
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BindingError {
    #[error("target `{0}` is not present in the host")]
    MissingTarget(TargetRef),

    #[error("trigger range [{start}, {end}] is empty or not finite")]
    InvalidRange { start: f32, end: f32 },

    #[error("binding for `{0}` animates no properties")]
    NoProperties(TargetRef),
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scene config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid scene config: {0}")]
    Invalid(String),
}

//! Error types for repository discovery.
//!
//! Only configuration problems and a failed background thread are ever
//! reported. Errors met while walking the tree are absorbed by the scanner.

use thiserror::Error;

/// Invalid arguments, detected before any scanning starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The starting path was empty.
    #[error("Must provide non-empty starting path.")]
    EmptyRoot,

    /// No progress sink was supplied.
    #[error("Must provide a progress callback.")]
    MissingProgressCallback,

    /// An options value was passed that is not an object.
    #[error("Options argument must be an object, if passed.")]
    OptionsNotObject,

    /// The throttle timeout was present but not a number.
    #[error("options.throttleTimeoutMS must be a number, if passed.")]
    ThrottleNotNumeric,

    /// The throttle timeout was outside the accepted range.
    #[error("options.throttleTimeoutMS must be >= 0 and <= 60000, if passed (got {value}).")]
    ThrottleOutOfRange { value: f64 },
}

/// Errors returned by a discovery run.
#[derive(Debug, Error)]
pub enum FindError {
    /// The request was rejected before scanning.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The background scanning thread did not finish normally.
    #[error("Background scan failed: {message}")]
    Background { message: String },
}

impl FindError {
    /// Returns the configuration error, if this is one.
    pub fn as_config(&self) -> Option<&ConfigError> {
        match self {
            Self::Config(err) => Some(err),
            Self::Background { .. } => None,
        }
    }
}

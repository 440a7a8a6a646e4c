//! Core types for repofind.
//!
//! This crate holds the pieces shared by the discovery engine and its
//! front-ends: scan options, the two error tiers, root path normalization
//! and scan statistics.

mod config;
mod error;
mod path;
mod stats;

pub use config::{
    FindOptions, FindOptionsBuilder, FindOptionsBuilderError, MAX_THROTTLE_TIMEOUT_MS,
    THROTTLE_TIMEOUT_KEY,
};
pub use error::{ConfigError, FindError};
pub use path::{GIT_DIR_NAME, normalize_root};
pub use stats::ScanStats;

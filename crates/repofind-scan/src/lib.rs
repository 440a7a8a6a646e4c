//! Git repository discovery engine for repofind.
//!
//! Walks a directory tree breadth first on a background thread and reports
//! every `.git` directory it finds, without descending into repositories and
//! without following symbolic links.
//!
//! # Overview
//!
//! - [`NativeScanner`] walks the tree ([`DirectoryScanner`] is the seam).
//! - [`PathQueue`] hands discoveries from the scanning thread to the caller.
//! - [`Throttle`] limits how often progress is delivered.
//! - [`ScanTask`] ties them together and resolves with the full result.
//!
//! # Example
//!
//! ```rust,no_run
//! use repofind_scan::{FindOptions, find_git_repos};
//!
//! # async fn run() -> Result<(), repofind_scan::FindError> {
//! let options = FindOptions::with_throttle_ms(100);
//! let repos = find_git_repos(
//!     "/home/user/code",
//!     |batch: Vec<std::path::PathBuf>| println!("found {} more", batch.len()),
//!     Some(options),
//! )
//! .await?;
//!
//! println!("{} repositories", repos.len());
//! # Ok(())
//! # }
//! ```

mod queue;
mod scanner;
mod sink;
mod sys;
mod task;
mod throttle;

pub use queue::PathQueue;
pub use scanner::{DirectoryScanner, GitDirWalk, NativeScanner};
pub use sink::{ChannelSink, ProgressSink};
pub use task::{ScanReport, ScanTask, ScanTaskBuilder, find_git_repos};
pub use throttle::{Throttle, should_flush};

// Re-export core types for convenience
pub use repofind_core::{ConfigError, FindError, FindOptions, MAX_THROTTLE_TIMEOUT_MS, ScanStats};

//! Scan statistics.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Counters collected while walking a tree.
///
/// These are informational only. Skipped directories and entries never turn
/// into errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    /// Directories whose entries were listed.
    pub dirs_scanned: u64,
    /// Directories that could not be listed.
    pub dirs_unreadable: u64,
    /// Entries skipped because their type could not be determined.
    pub entries_unclassified: u64,
    /// Repositories found.
    pub repos_found: u64,
    /// Wall time of the scan.
    pub elapsed: Duration,
}

impl ScanStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a directory that was listed.
    pub fn record_dir(&mut self) {
        self.dirs_scanned += 1;
    }

    /// Record a directory whose listing failed.
    pub fn record_unreadable(&mut self) {
        self.dirs_unreadable += 1;
    }

    /// Record an entry that could not be classified.
    pub fn record_unclassified(&mut self) {
        self.entries_unclassified += 1;
    }

    /// Record a discovered repository.
    pub fn record_repo(&mut self) {
        self.repos_found += 1;
    }

    /// Total directories visited, listed or not.
    pub fn dirs_visited(&self) -> u64 {
        self.dirs_scanned + self.dirs_unreadable
    }
}

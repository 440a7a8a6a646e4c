use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use repofind_core::GIT_DIR_NAME;

/// Scan root as handed to the OS. Paths are used unchanged.
#[derive(Debug, Clone)]
pub(crate) struct NativeRoot {
    path: PathBuf,
}

impl NativeRoot {
    pub(crate) fn new(root: PathBuf) -> Self {
        Self { path: root }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn report(&self, found: PathBuf) -> PathBuf {
        found
    }
}

/// Exact, case-sensitive comparison.
pub(crate) fn is_git_dir_name(name: &OsStr) -> bool {
    name == GIT_DIR_NAME
}

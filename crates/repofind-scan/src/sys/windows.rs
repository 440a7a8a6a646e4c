use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use repofind_core::GIT_DIR_NAME;

const VERBATIM_PREFIX: &str = r"\\?\";
const VERBATIM_UNC_PREFIX: &str = r"\\?\UNC\";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prefix {
    /// Root was relative or already verbatim.
    None,
    /// `C:\x` became `\\?\C:\x`.
    Disk,
    /// `\\server\share` became `\\?\UNC\server\share`.
    Unc,
}

/// Scan root in extended-length form, so deep trees are not cut off at
/// `MAX_PATH`. Reported paths get the prefix removed again.
#[derive(Debug, Clone)]
pub(crate) struct NativeRoot {
    path: PathBuf,
    prefix: Prefix,
}

impl NativeRoot {
    pub(crate) fn new(root: PathBuf) -> Self {
        let Some(text) = root.to_str() else {
            return Self {
                path: root,
                prefix: Prefix::None,
            };
        };

        if text.starts_with(VERBATIM_PREFIX) || !root.is_absolute() {
            return Self {
                path: root,
                prefix: Prefix::None,
            };
        }

        // Verbatim paths are not normalized by the OS, so `.` and `..` have
        // to be resolved before the prefix goes on.
        let full = match std::path::absolute(&root) {
            Ok(full) => full,
            Err(_) => {
                return Self {
                    path: root,
                    prefix: Prefix::None,
                };
            }
        };
        let Some(text) = full.to_str() else {
            return Self {
                path: root,
                prefix: Prefix::None,
            };
        };

        let text = text.replace('/', "\\");
        match text.strip_prefix(r"\\") {
            Some(share) => Self {
                path: PathBuf::from(format!("{VERBATIM_UNC_PREFIX}{share}")),
                prefix: Prefix::Unc,
            },
            None => Self {
                path: PathBuf::from(format!("{VERBATIM_PREFIX}{text}")),
                prefix: Prefix::Disk,
            },
        }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn report(&self, found: PathBuf) -> PathBuf {
        let Some(text) = found.to_str() else {
            return found;
        };
        match self.prefix {
            Prefix::None => found,
            Prefix::Disk => text
                .strip_prefix(VERBATIM_PREFIX)
                .map(PathBuf::from)
                .unwrap_or(found),
            Prefix::Unc => text
                .strip_prefix(VERBATIM_UNC_PREFIX)
                .map(|share| PathBuf::from(format!(r"\\{share}")))
                .unwrap_or(found),
        }
    }
}

/// NTFS names are case-insensitive.
pub(crate) fn is_git_dir_name(name: &OsStr) -> bool {
    name.to_str()
        .is_some_and(|name| name.eq_ignore_ascii_case(GIT_DIR_NAME))
}

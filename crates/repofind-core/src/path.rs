//! Root path normalization.

use std::path::{Path, PathBuf, is_separator};

/// Name of the directory that marks a repository root.
pub const GIT_DIR_NAME: &str = ".git";

/// Strip trailing separators from a scan root.
///
/// A root made only of separators is the filesystem root and keeps a single
/// separator, as does a Windows drive root such as `C:\`. An empty input
/// stays empty. Non-UTF-8 roots are rebuilt from their components, which also
/// drops trailing separators.
pub fn normalize_root(root: &Path) -> PathBuf {
    let raw = root.as_os_str();
    if raw.is_empty() {
        return PathBuf::new();
    }

    let Some(text) = raw.to_str() else {
        return root.components().collect();
    };

    let trimmed = text.trim_end_matches(is_separator);
    if trimmed.len() == text.len() {
        return root.to_path_buf();
    }

    let keeps_separator = trimmed.is_empty() || (cfg!(windows) && trimmed.ends_with(':'));
    if keeps_separator {
        // The separator is a single ASCII byte.
        PathBuf::from(&text[..trimmed.len() + 1])
    } else {
        PathBuf::from(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stays_empty() {
        assert_eq!(normalize_root(Path::new("")), PathBuf::new());
    }

    #[test]
    fn test_untouched_without_trailing_separator() {
        assert_eq!(normalize_root(Path::new("a/b")), PathBuf::from("a/b"));
    }

    #[cfg(unix)]
    #[test]
    fn test_trailing_separators_stripped() {
        assert_eq!(normalize_root(Path::new("/tmp/work///")), PathBuf::from("/tmp/work"));
        assert_eq!(normalize_root(Path::new("rel/")), PathBuf::from("rel"));
    }

    #[cfg(unix)]
    #[test]
    fn test_filesystem_root_kept() {
        assert_eq!(normalize_root(Path::new("/")), PathBuf::from("/"));
        assert_eq!(normalize_root(Path::new("///")), PathBuf::from("/"));
    }

    #[cfg(windows)]
    #[test]
    fn test_drive_root_kept() {
        assert_eq!(normalize_root(Path::new(r"C:\")), PathBuf::from(r"C:\"));
        assert_eq!(normalize_root(Path::new(r"C:\work\\")), PathBuf::from(r"C:\work"));
    }
}

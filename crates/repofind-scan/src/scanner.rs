//! Breadth-first repository walker.

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use repofind_core::{GIT_DIR_NAME, ScanStats, normalize_root};
use tracing::debug;

use crate::sys::{self, EntryKind, NativeRoot};

/// Something that can walk a tree and report every repository it finds.
///
/// The scan task only depends on this trait, so the traversal can be swapped
/// without touching throttling or delivery.
pub trait DirectoryScanner: Send + Sync {
    /// Walk `root`, calling `on_match` with each `.git` directory in discovery
    /// order. Returns the counters collected along the way.
    ///
    /// Walking never fails: unreadable directories and unclassifiable entries
    /// are skipped.
    fn scan(&self, root: &Path, on_match: &mut dyn FnMut(PathBuf)) -> ScanStats;
}

/// The scanner for the current platform.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeScanner;

impl NativeScanner {
    /// Create a new scanner.
    pub fn new() -> Self {
        Self
    }

    /// Lazily walk `root`, yielding `.git` directories as they are found.
    pub fn walk(&self, root: impl AsRef<Path>) -> GitDirWalk {
        GitDirWalk::new(root.as_ref())
    }
}

impl DirectoryScanner for NativeScanner {
    fn scan(&self, root: &Path, on_match: &mut dyn FnMut(PathBuf)) -> ScanStats {
        let mut walk = self.walk(root);
        for found in walk.by_ref() {
            on_match(found);
        }
        walk.into_stats()
    }
}

/// Iterator over the `.git` directories below a root, breadth first.
///
/// A directory containing `.git` is a repository: its `.git` path is yielded
/// and none of its other children are visited. Symbolic links are never
/// followed.
#[derive(Debug)]
pub struct GitDirWalk {
    root: NativeRoot,
    worklist: VecDeque<PathBuf>,
    stats: ScanStats,
}

impl GitDirWalk {
    fn new(root: &Path) -> Self {
        let normalized = normalize_root(root);
        let root = NativeRoot::new(normalized);

        let mut worklist = VecDeque::new();
        if !root.path().as_os_str().is_empty() {
            worklist.push_back(root.path().to_path_buf());
        }

        Self {
            root,
            worklist,
            stats: ScanStats::new(),
        }
    }

    /// Counters collected so far.
    pub fn stats(&self) -> &ScanStats {
        &self.stats
    }

    /// Consume the walk, keeping only its counters.
    pub fn into_stats(self) -> ScanStats {
        self.stats
    }

    /// List one directory. Returns its `.git` path if it is a repository,
    /// otherwise queues its subdirectories.
    fn visit(&mut self, current: PathBuf) -> Option<PathBuf> {
        let entries = match fs::read_dir(&current) {
            Ok(entries) => entries,
            Err(err) => {
                debug!(path = %current.display(), error = %err, "skipping unreadable directory");
                self.stats.record_unreadable();
                return None;
            }
        };
        self.stats.record_dir();

        // `read_dir` never yields `.` or `..`.
        let mut staged = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    debug!(path = %current.display(), error = %err, "skipping unreadable entry");
                    self.stats.record_unclassified();
                    continue;
                }
            };

            match sys::entry_kind(&entry) {
                Ok(EntryKind::Directory) => {}
                Ok(EntryKind::Symlink | EntryKind::Other) => continue,
                Err(err) => {
                    debug!(path = %entry.path().display(), error = %err, "skipping unclassifiable entry");
                    self.stats.record_unclassified();
                    continue;
                }
            }

            if sys::is_git_dir_name(&entry.file_name()) {
                self.stats.record_repo();
                return Some(self.root.report(current.join(GIT_DIR_NAME)));
            }

            staged.push(entry.path());
        }

        self.worklist.extend(staged);
        None
    }
}

impl Iterator for GitDirWalk {
    type Item = PathBuf;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.worklist.pop_front() {
            if let Some(found) = self.visit(current) {
                return Some(found);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn mkdirs(root: &Path, dirs: &[&str]) {
        for dir in dirs {
            fs::create_dir_all(root.join(dir)).unwrap();
        }
    }

    fn walk_all(root: &Path) -> Vec<PathBuf> {
        NativeScanner::new().walk(root).collect()
    }

    #[test]
    fn test_finds_repos_breadth_first() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        mkdirs(root, &["a/.git", "b/c/.git", "d"]);

        let found = walk_all(root);
        assert_eq!(found, vec![root.join("a/.git"), root.join("b/c/.git")]);
    }

    #[test]
    fn test_shallower_repos_come_first() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        mkdirs(root, &["deep/er/est/.git", "top/.git", "mid/dle/.git"]);

        let found = walk_all(root);
        assert_eq!(
            found,
            vec![
                root.join("top/.git"),
                root.join("mid/dle/.git"),
                root.join("deep/er/est/.git"),
            ]
        );
    }

    #[test]
    fn test_nested_repo_is_pruned() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        mkdirs(root, &["x/.git/y/.git", "x/sub/.git", "x/src"]);

        let mut walk = NativeScanner::new().walk(root);
        let found: Vec<PathBuf> = walk.by_ref().collect();
        assert_eq!(found, vec![root.join("x/.git")]);
        // Only the root and `x` are ever listed.
        assert_eq!(walk.stats().dirs_scanned, 2);
        assert_eq!(walk.stats().repos_found, 1);
    }

    #[test]
    fn test_root_itself_is_repo() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        mkdirs(root, &[".git", "nested/.git"]);

        assert_eq!(walk_all(root), vec![root.join(".git")]);
    }

    #[test]
    fn test_git_file_is_not_a_repo() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        mkdirs(root, &["worktree", "worktree/inner/.git"]);
        fs::write(root.join("worktree/.git"), "gitdir: elsewhere").unwrap();

        assert_eq!(walk_all(root), vec![root.join("worktree/inner/.git")]);
    }

    #[test]
    fn test_trailing_separator_on_root() {
        let temp = TempDir::new().unwrap();
        mkdirs(temp.path(), &["a/.git"]);

        let mut with_sep = temp.path().as_os_str().to_owned();
        with_sep.push(std::path::MAIN_SEPARATOR_STR);
        with_sep.push(std::path::MAIN_SEPARATOR_STR);

        assert_eq!(walk_all(Path::new(&with_sep)), vec![temp.path().join("a/.git")]);
    }

    #[test]
    fn test_empty_root_yields_nothing() {
        let mut walk = NativeScanner::new().walk("");
        assert!(walk.next().is_none());
        assert_eq!(walk.stats().dirs_visited(), 0);
    }

    #[test]
    fn test_missing_root_yields_nothing() {
        let temp = TempDir::new().unwrap();
        let mut walk = NativeScanner::new().walk(temp.path().join("does-not-exist"));
        assert!(walk.next().is_none());
        assert_eq!(walk.stats().dirs_unreadable, 1);
    }

    #[test]
    fn test_file_root_yields_nothing() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("plain.txt");
        fs::write(&file, "data").unwrap();

        assert!(walk_all(&file).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directories_are_not_followed() {
        let temp = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        mkdirs(outside.path(), &["hidden/.git"]);
        mkdirs(temp.path(), &["real/.git"]);
        std::os::unix::fs::symlink(outside.path(), temp.path().join("link")).unwrap();
        std::os::unix::fs::symlink(temp.path().join("real"), temp.path().join("alias")).unwrap();

        assert_eq!(walk_all(temp.path()), vec![temp.path().join("real/.git")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_git_dir_is_ignored() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        mkdirs(root, &["store/.git", "checkout/inner/.git"]);
        std::os::unix::fs::symlink(root.join("store/.git"), root.join("checkout/.git")).unwrap();

        let found = walk_all(root);
        assert_eq!(
            found,
            vec![root.join("store/.git"), root.join("checkout/inner/.git")]
        );
    }

    #[test]
    fn test_scan_trait_reports_in_order() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        mkdirs(root, &["one/.git", "two/.git", "three/four/.git"]);

        let mut seen = Vec::new();
        let stats = NativeScanner::new().scan(root, &mut |found| seen.push(found));

        assert_eq!(seen.len(), 3);
        assert_eq!(seen.last(), Some(&root.join("three/four/.git")));
        assert_eq!(stats.repos_found, 3);
    }
}

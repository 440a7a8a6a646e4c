//! Platform-specific pieces of directory traversal.
//!
//! Each platform module provides `NativeRoot` (how the root is presented to
//! the OS and how discovered paths are reported back) and `is_git_dir_name`.
//! Entry classification goes through `std::fs::FileType`, which wraps the
//! native listing type on every platform.

use std::fs::DirEntry;
use std::io;

#[cfg(not(windows))]
mod unix;
#[cfg(not(windows))]
pub(crate) use unix::{NativeRoot, is_git_dir_name};

#[cfg(windows)]
mod windows;
#[cfg(windows)]
pub(crate) use windows::{NativeRoot, is_git_dir_name};

/// What a directory entry turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EntryKind {
    Directory,
    Symlink,
    Other,
}

/// Classify a listing entry without following symbolic links.
///
/// The type reported by the listing is used when available; the standard
/// library falls back to an `lstat` of the entry when it is not.
pub(crate) fn entry_kind(entry: &DirEntry) -> io::Result<EntryKind> {
    let file_type = entry.file_type()?;
    Ok(if file_type.is_symlink() {
        EntryKind::Symlink
    } else if file_type.is_dir() {
        EntryKind::Directory
    } else {
        EntryKind::Other
    })
}

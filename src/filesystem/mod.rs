// src/filesystem/mod.rs
pub mod dir;

pub use dir::DirNavigator;

use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    ParentLink,
    Directory,
    File,
}

/// One row in a directory listing: a subdirectory, a regular file, or the
/// special "go to parent" link.
#[derive(Debug, Clone)]
pub struct DirEntry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn is_hidden(name: &str) -> bool {
        name.starts_with('.')
    }
}

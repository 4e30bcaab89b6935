// src/filesystem/dir.rs
use super::{DirEntry, EntryKind};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Mutable view of one directory at a time. The entry list is rebuilt in
/// full on every navigation; nothing outside this struct mutates it.
pub struct DirNavigator {
    pub current_path: PathBuf,
    pub entries: Vec<DirEntry>,
}

impl DirNavigator {
    pub fn new(path: PathBuf) -> Self {
        let mut nav = DirNavigator {
            current_path: path,
            entries: Vec::new(),
        };
        nav.refresh();
        nav
    }

    /// Rebuilds the listing for the current directory. Hidden names are
    /// skipped, directories sort before files, and each group is ordered
    /// case-insensitively. Unreadable entries are omitted rather than
    /// reported; browsing is best-effort.
    pub fn refresh(&mut self) {
        self.entries.clear();
        let path = &self.current_path;

        let mut listed: Vec<DirEntry> = Vec::new();
        for entry in WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .flatten()
        {
            let name = entry.file_name().to_string_lossy().to_string();
            if DirEntry::is_hidden(&name) {
                continue;
            }
            let kind = if entry.path().is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            listed.push(DirEntry {
                name,
                path: entry.path().to_path_buf(),
                kind,
            });
        }

        listed.sort_by(|a, b| {
            let a_key = (a.kind != EntryKind::Directory, a.name.to_lowercase());
            let b_key = (b.kind != EntryKind::Directory, b.name.to_lowercase());
            a_key.cmp(&b_key)
        });

        // No parent link at the filesystem root, so the listing can never
        // navigate above it.
        if let Some(parent) = path.parent() {
            if parent != path.as_path() {
                self.entries.push(DirEntry {
                    name: "..".to_string(),
                    path: parent.to_path_buf(),
                    kind: EntryKind::ParentLink,
                });
            }
        }

        self.entries.extend(listed);
    }

    /// Navigates into `path` if it is a directory, rebuilding the listing.
    pub fn enter(&mut self, path: &Path) {
        if path.is_dir() {
            tracing::debug!(path = %path.display(), "entering directory");
            self.current_path = path.to_path_buf();
            self.refresh();
        }
    }

    /// Acts on the entry at `index`. Directories and the parent link are
    /// entered in place; a regular file is returned to the caller as the
    /// selection, with the listing left untouched.
    pub fn select(&mut self, index: usize) -> Option<PathBuf> {
        let entry = self.entries.get(index)?.clone();
        match entry.kind {
            EntryKind::ParentLink | EntryKind::Directory => {
                self.enter(&entry.path);
                None
            }
            EntryKind::File => Some(entry.path),
        }
    }
}

//! src/fs/dir_lister.rs
//! ============================================================================
//! # `FsDataSource`: Synchronous Filesystem Listing
//!
//! Walks a directory with `std::fs::read_dir` and yields sorted `TreeEntry`
//! rows. Listing happens inline on the UI thread — directory sizes are
//! interactive-scale, and no listing is ever in flight across a
//! change-directory.
//!
//! Read failures (permission denied, path vanished) are swallowed at this
//! boundary: the affected directory simply lists as empty until the next
//! user-triggered refresh. They are logged, never propagated.

use std::cmp::Ordering;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use compact_str::CompactString;
use tracing::debug;

use crate::fs::data_source::TreeDataSource;
use crate::model::entry::{EntryKind, TreeEntry};

/// Filesystem-backed data source for one tree widget.
#[derive(Debug, Clone)]
pub struct FsDataSource {
    current: PathBuf,
    show_hidden: bool,
}

impl FsDataSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            current: root.into(),
            show_hidden: true,
        }
    }

    /// Same as `new`, with dot-entries filtered out when `show_hidden` is
    /// false.
    pub fn with_hidden(root: impl Into<PathBuf>, show_hidden: bool) -> Self {
        Self {
            current: root.into(),
            show_hidden,
        }
    }

    /// Lists `dir`, sorted directories-first then case-insensitive by name.
    /// `include_parent` prepends the synthetic `..` row when `dir` has a
    /// parent; only the browsed root ever asks for it.
    fn list_directory(&self, dir: &Path, include_parent: bool) -> Vec<TreeEntry> {
        let mut items: Vec<TreeEntry> = Vec::new();

        if include_parent
            && let Some(parent) = dir.parent()
        {
            items.push(TreeEntry::parent_link(parent));
        }

        let read_dir = match std::fs::read_dir(dir) {
            Ok(rd) => rd,
            Err(e) => {
                // Unreadable directory lists as empty; see module docs.
                debug!(
                    marker = "DIR_LISTING_FAILED",
                    path = %dir.display(),
                    error = %e,
                    "Directory listing failed, returning empty listing"
                );
                return items;
            }
        };

        let mut entries: Vec<TreeEntry> = Vec::new();

        for dirent in read_dir {
            let Ok(dirent) = dirent else { continue };
            let path: PathBuf = dirent.path();

            let name: CompactString = CompactString::new(
                path.file_name().and_then(OsStr::to_str).unwrap_or(""),
            );

            if !self.show_hidden && name.starts_with('.') {
                continue;
            }

            // `Path::is_dir` follows symlinks, so a symlinked directory
            // lists as an expandable Directory row.
            let kind = if path.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };

            entries.push(TreeEntry::new(name, path, kind));
        }

        Self::sort_entries(&mut entries);
        items.extend(entries);
        items
    }

    // Sort entries: directories first, then case-insensitive by name.
    fn sort_entries(entries: &mut [TreeEntry]) {
        entries.sort_by(|a: &TreeEntry, b: &TreeEntry| -> Ordering {
            match (a.is_directory(), b.is_directory()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            }
        });
    }
}

impl TreeDataSource for FsDataSource {
    fn root_items(&self) -> Vec<TreeEntry> {
        self.list_directory(&self.current, true)
    }

    fn children(&self, item: &TreeEntry) -> Vec<TreeEntry> {
        if !item.can_expand() {
            return Vec::new();
        }
        self.list_directory(&item.path, false)
    }

    fn change_directory(&mut self, path: &Path) {
        debug!(
            marker = "DATA_SOURCE_CHDIR",
            path = %path.display(),
            "Data source root changed"
        );
        self.current = path.to_path_buf();
    }

    fn current_path(&self) -> &Path {
        &self.current
    }
}

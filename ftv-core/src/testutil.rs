//! src/testutil.rs
//! ============================================================================
//! In-memory data source and entry builders shared by the unit tests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::fs::data_source::TreeDataSource;
use crate::model::entry::{EntryKind, TreeEntry};

pub fn dir(name: &str, path: &str) -> TreeEntry {
    TreeEntry::new(name, path, EntryKind::Directory)
}

pub fn file(name: &str, path: &str) -> TreeEntry {
    TreeEntry::new(name, path, EntryKind::File)
}

/// Maps a directory path to its (already sorted) listing. `root_items`
/// synthesizes the `..` parent link exactly like the filesystem source.
pub struct StaticSource {
    root: PathBuf,
    listings: HashMap<PathBuf, Vec<TreeEntry>>,
}

impl StaticSource {
    pub fn new(root: &str) -> Self {
        Self {
            root: PathBuf::from(root),
            listings: HashMap::new(),
        }
    }

    pub fn insert(&mut self, dir: &str, entries: Vec<TreeEntry>) {
        self.listings.insert(PathBuf::from(dir), entries);
    }
}

impl TreeDataSource for StaticSource {
    fn root_items(&self) -> Vec<TreeEntry> {
        let mut items = Vec::new();
        if let Some(parent) = self.root.parent() {
            items.push(TreeEntry::parent_link(parent));
        }
        items.extend(self.listings.get(&self.root).cloned().unwrap_or_default());
        items
    }

    fn children(&self, item: &TreeEntry) -> Vec<TreeEntry> {
        if !item.can_expand() {
            return Vec::new();
        }
        self.listings.get(&item.path).cloned().unwrap_or_default()
    }

    fn change_directory(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    fn current_path(&self) -> &Path {
        &self.root
    }
}

/// The scenario used throughout the tests:
///
/// ```text
/// /root
/// ├── ..            (parent link, synthesized)
/// ├── lib/
/// │   ├── core/
/// │   └── ui/
/// └── README.md
/// ```
pub fn sample_source() -> StaticSource {
    let mut s = StaticSource::new("/root");
    s.insert(
        "/root",
        vec![dir("lib", "/root/lib"), file("README.md", "/root/README.md")],
    );
    s.insert(
        "/root/lib",
        vec![dir("core", "/root/lib/core"), dir("ui", "/root/lib/ui")],
    );
    s
}

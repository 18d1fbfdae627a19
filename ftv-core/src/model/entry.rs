//! src/model/entry.rs
//! ============================================================================
//! # TreeEntry: One Row of the File Tree
//!
//! Immutable value object describing a single tree row: a file, a directory,
//! or the synthetic `..` parent link shown at the top of the browsed root.
//! The data source constructs entries fresh on every listing call; nothing in
//! the engine holds them beyond the layout cache's flattened snapshot.
//!
//! Identity is the *path*: two entries are equal iff their paths are equal,
//! regardless of kind or display name. Selection, hover and double-click
//! matching all rely on this.

use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Classification of a tree row.
///
/// A tagged union instead of runtime capability probing: expandability is
/// decided by the variant at compile time (`Directory` only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    File,
    Directory,
    ParentLink,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File => write!(f, "File"),
            Self::Directory => write!(f, "Dir"),
            Self::ParentLink => write!(f, "Parent"),
        }
    }
}

/// One row of the tree: display name, stable path identity, kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeEntry {
    /// File or directory name — rendering hot path.
    pub name: CompactString,

    /// Absolute path; the stable identity key.
    pub path: PathBuf,

    /// Row classification.
    pub kind: EntryKind,
}

impl TreeEntry {
    pub fn new(name: impl Into<CompactString>, path: impl Into<PathBuf>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind,
        }
    }

    /// Synthetic `..` row pointing at the parent of the browsed root.
    pub fn parent_link(parent: impl Into<PathBuf>) -> Self {
        Self::new("..", parent, EntryKind::ParentLink)
    }

    #[inline]
    #[must_use]
    pub const fn is_file(&self) -> bool {
        matches!(self.kind, EntryKind::File)
    }

    #[inline]
    #[must_use]
    pub const fn is_directory(&self) -> bool {
        matches!(self.kind, EntryKind::Directory)
    }

    #[inline]
    #[must_use]
    pub const fn is_parent_link(&self) -> bool {
        matches!(self.kind, EntryKind::ParentLink)
    }

    /// Only real directories expand; the parent link never does.
    #[inline]
    #[must_use]
    pub const fn can_expand(&self) -> bool {
        matches!(self.kind, EntryKind::Directory)
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

// Identity is path-only.
impl PartialEq for TreeEntry {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for TreeEntry {}

impl Hash for TreeEntry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}

impl std::fmt::Display for TreeEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

//! src/view/icons.rs
//! ============================================================================
//! # Row Icons
//!
//! Semantic icon identifiers per entry kind. The platform renderer owns the
//! actual image resources (an icon cache built at renderer construction) and
//! resolves these when `DrawSurface::draw_icon` is called — no process-wide
//! pixbuf singletons.

use crate::model::entry::{EntryKind, TreeEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    Folder,
    File,
    ParentArrow,
}

impl IconKind {
    #[must_use]
    pub const fn for_entry(entry: &TreeEntry) -> Self {
        match entry.kind {
            EntryKind::Directory => Self::Folder,
            EntryKind::File => Self::File,
            EntryKind::ParentLink => Self::ParentArrow,
        }
    }
}

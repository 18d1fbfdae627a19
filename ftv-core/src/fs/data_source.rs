//! src/fs/data_source.rs
//! ============================================================================
//! # TreeDataSource: Item-Production Seam of the Tree View
//!
//! The flattener and controller only ever talk to this trait; the concrete
//! filesystem walker lives in `dir_lister`, and tests substitute an
//! in-memory source.

use std::path::Path;

use crate::model::entry::TreeEntry;

/// Produces root items and children for the tree. Listings are ordered:
/// parent link first (roots only), then directories, then files, both
/// groups case-insensitive alphabetical.
pub trait TreeDataSource {
    /// Entries at the root of the browsed directory, parent link included
    /// when one exists.
    fn root_items(&self) -> Vec<TreeEntry>;

    /// Children of `item`, or empty if it is not expandable. Never contains
    /// a parent link.
    fn children(&self, item: &TreeEntry) -> Vec<TreeEntry>;

    /// Whether `item` can be expanded at all.
    fn can_expand(&self, item: &TreeEntry) -> bool {
        item.can_expand()
    }

    /// Switches the browsed root. Takes effect on the next `root_items`.
    fn change_directory(&mut self, path: &Path);

    /// The currently browsed root.
    fn current_path(&self) -> &Path;
}

//! src/model/tree_state.rs
//! ============================================================================
//! # TreeState: Mutable View State of One Tree Widget
//!
//! Expanded set, selection, hover, scroll offset and the browsed directory.
//! Owned exclusively by one `TreeController` instance — everything is
//! confined to the single UI thread, so no locking is needed.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;

use crate::model::entry::TreeEntry;

/// Per-widget view state. Expansion membership is keyed by path, matching
/// entry identity.
#[derive(Debug, Clone)]
pub struct TreeState {
    /// Paths of currently expanded directories.
    expanded: FxHashSet<PathBuf>,

    /// Currently selected row, if any.
    pub selected: Option<TreeEntry>,

    /// Row under the pointer, if any.
    pub hovered: Option<TreeEntry>,

    /// Vertical scroll position in pixels. Never negative; the upper clamp
    /// `max(total_height - viewport_height, 0)` is applied by the controller
    /// since only the host knows the viewport.
    scroll_offset: f64,

    /// Root of the currently browsed directory.
    current_directory: PathBuf,
}

impl TreeState {
    pub fn new(current_directory: impl Into<PathBuf>) -> Self {
        Self {
            expanded: FxHashSet::default(),
            selected: None,
            hovered: None,
            scroll_offset: 0.0,
            current_directory: current_directory.into(),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_expanded(&self, entry: &TreeEntry) -> bool {
        self.expanded.contains(&entry.path)
    }

    /// Marks a directory expanded. Non-expandable entries are refused.
    pub fn expand(&mut self, entry: &TreeEntry) {
        if entry.can_expand() {
            self.expanded.insert(entry.path.clone());
        }
    }

    pub fn collapse(&mut self, entry: &TreeEntry) {
        self.expanded.remove(&entry.path);
    }

    /// Flips expansion membership; applying it twice restores the prior set.
    pub fn toggle_expanded(&mut self, entry: &TreeEntry) {
        if self.is_expanded(entry) {
            self.collapse(entry);
        } else {
            self.expand(entry);
        }
    }

    #[inline]
    #[must_use]
    pub fn expanded_count(&self) -> usize {
        self.expanded.len()
    }

    pub fn select(&mut self, entry: TreeEntry) {
        self.selected = Some(entry);
    }

    pub fn hover(&mut self, entry: Option<TreeEntry>) {
        self.hovered = entry;
    }

    pub fn clear_hover(&mut self) {
        self.hovered = None;
    }

    #[inline]
    #[must_use]
    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Floors at zero; negative offsets are never stored.
    pub fn set_scroll_offset(&mut self, offset: f64) {
        self.scroll_offset = offset.max(0.0);
    }

    #[inline]
    #[must_use]
    pub fn current_directory(&self) -> &Path {
        &self.current_directory
    }

    /// Switches the browsed root and resets all per-directory view state.
    pub fn change_directory(&mut self, path: impl Into<PathBuf>) {
        self.current_directory = path.into();
        self.clear();
    }

    /// Resets expansion, selection, hover and scroll without changing
    /// the browsed directory.
    pub fn clear(&mut self) {
        self.expanded.clear();
        self.selected = None;
        self.hovered = None;
        self.scroll_offset = 0.0;
    }
}

impl Default for TreeState {
    fn default() -> Self {
        TreeState::new(PathBuf::from("."))
    }
}

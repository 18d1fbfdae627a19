//! src/controller/tree_controller.rs
//! ============================================================================
//! # TreeController: Owner of One Tree Widget's State
//!
//! Exclusive owner of the data source, `TreeState`, `LayoutCache` and
//! `EventBus` — unidirectional: collaborators receive `&mut` access through
//! method calls, never stored back-references. Structural mutations
//! invalidate the layout cache and announce themselves on the bus.

use std::path::Path;

use tracing::debug;

use crate::controller::events::{EventBus, TreeEvent};
use crate::fs::data_source::TreeDataSource;
use crate::model::entry::TreeEntry;
use crate::model::tree_state::TreeState;
use crate::view::flatten::flatten_tree;
use crate::view::layout::LayoutCache;

pub struct TreeController<D: TreeDataSource> {
    source: D,
    state: TreeState,
    layout: LayoutCache,
    events: EventBus,
}

impl<D: TreeDataSource> TreeController<D> {
    pub fn new(source: D, row_height: f64) -> Self {
        let state = TreeState::new(source.current_path());
        Self {
            source,
            state,
            layout: LayoutCache::new(row_height),
            events: EventBus::new(),
        }
    }

    // ------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------

    #[must_use]
    pub fn state(&self) -> &TreeState {
        &self.state
    }

    #[must_use]
    pub fn layout(&self) -> &LayoutCache {
        &self.layout
    }

    #[must_use]
    pub fn source(&self) -> &D {
        &self.source
    }

    pub fn events_mut(&mut self) -> &mut EventBus {
        &mut self.events
    }

    #[must_use]
    pub fn selected_entry(&self) -> Option<&TreeEntry> {
        self.state.selected.as_ref()
    }

    #[must_use]
    pub fn current_path(&self) -> &Path {
        self.state.current_directory()
    }

    // ------------------------------------------------------------
    // Layout refresh gate
    // ------------------------------------------------------------

    /// Re-flattens the tree if the cache is stale. The only sanctioned path
    /// to a clean cache; every geometry consumer calls this first.
    pub fn ensure_layout(&mut self) {
        if self.layout.needs_update() {
            let rows = flatten_tree(&self.source, &self.state);
            self.layout.update_layout(rows);
        }
    }

    /// Entry under widget-local `(x, y)`, refreshing the layout if needed.
    pub fn entry_at(&mut self, x: f64, y: f64) -> Option<TreeEntry> {
        self.ensure_layout();
        self.layout
            .row_at(x, y, self.state.scroll_offset())
            .cloned()
    }

    // ------------------------------------------------------------
    // Expansion
    // ------------------------------------------------------------

    pub fn expand_item(&mut self, entry: &TreeEntry) {
        if !self.source.can_expand(entry) {
            return;
        }
        self.state.expand(entry);
        self.layout.invalidate();
        self.events.emit(&TreeEvent::TreeChanged);
    }

    pub fn collapse_item(&mut self, entry: &TreeEntry) {
        self.state.collapse(entry);
        self.layout.invalidate();
        self.events.emit(&TreeEvent::TreeChanged);
    }

    pub fn toggle_expand(&mut self, entry: &TreeEntry) {
        if self.state.is_expanded(entry) {
            self.collapse_item(entry);
        } else {
            self.expand_item(entry);
        }
    }

    // ------------------------------------------------------------
    // Selection / activation / hover
    // ------------------------------------------------------------

    pub fn select_item(&mut self, entry: TreeEntry) {
        self.state.select(entry.clone());
        self.events.emit(&TreeEvent::ItemSelected(entry));
    }

    /// Announces activation ("open") of a row. Tree state is untouched; the
    /// host decides what opening means.
    pub fn activate_item(&mut self, entry: &TreeEntry) {
        debug!(
            marker = "ITEM_ACTIVATED",
            path = %entry.path.display(),
            "Item activated"
        );
        self.events.emit(&TreeEvent::ItemActivated(entry.clone()));
    }

    /// Updates hover state; emits only when the hovered row actually
    /// changed.
    pub fn hover_item(&mut self, entry: Option<TreeEntry>) {
        if self.state.hovered == entry {
            return;
        }
        self.state.hover(entry.clone());
        self.events.emit(&TreeEvent::HoverChanged(entry));
    }

    // ------------------------------------------------------------
    // Scrolling
    // ------------------------------------------------------------

    pub fn scroll_to(&mut self, offset: f64) {
        self.state.set_scroll_offset(offset);
        self.events.emit(&TreeEvent::ViewChanged);
    }

    pub fn scroll_by(&mut self, delta: f64) {
        self.scroll_to(self.state.scroll_offset() + delta);
    }

    /// Applies the upper scroll clamp `max(total_height - viewport, 0)`.
    /// Only the host knows the viewport height, so this is a separate call.
    pub fn clamp_scroll(&mut self, viewport_height: f64) {
        self.ensure_layout();
        let max_offset = (self.layout.total_height() - viewport_height).max(0.0);
        if self.state.scroll_offset() > max_offset {
            self.scroll_to(max_offset);
        }
    }

    // ------------------------------------------------------------
    // Sequential selection
    // ------------------------------------------------------------

    /// Index of the selected row in the flattened sequence, or -1 when
    /// nothing is selected or the selection went stale.
    pub(crate) fn selected_index(&mut self) -> isize {
        self.ensure_layout();
        match &self.state.selected {
            Some(sel) => self
                .layout
                .row_index_of(&sel.path)
                .map_or(-1, |i| i as isize),
            None => -1,
        }
    }

    pub(crate) fn select_row(&mut self, index: usize) {
        let Some(row) = self.layout.rows().get(index) else {
            return;
        };
        let entry = row.entry.clone();
        self.select_item(entry);
    }

    pub fn select_next(&mut self) {
        self.ensure_layout();
        let count = self.layout.row_count();
        if count == 0 {
            return;
        }
        let i = self.selected_index();
        let next = (i + 1).clamp(0, count as isize - 1) as usize;
        self.select_row(next);
    }

    pub fn select_previous(&mut self) {
        self.ensure_layout();
        if self.layout.row_count() == 0 {
            return;
        }
        let i = self.selected_index();
        let prev = (i - 1).max(0) as usize;
        self.select_row(prev);
    }

    // ------------------------------------------------------------
    // Directory navigation
    // ------------------------------------------------------------

    pub fn change_directory(&mut self, path: &Path) {
        debug!(
            marker = "CHANGE_DIRECTORY",
            path = %path.display(),
            "Browsing new root"
        );
        self.source.change_directory(path);
        self.state.change_directory(path);
        self.layout.invalidate();
        self.events
            .emit(&TreeEvent::DirectoryChanged(path.to_path_buf()));
    }

    /// Drops the cached layout so the next read re-lists the filesystem.
    pub fn refresh(&mut self) {
        self.layout.invalidate();
        self.events.emit(&TreeEvent::RefreshRequested);
    }
}

impl<D: TreeDataSource> std::fmt::Debug for TreeController<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreeController")
            .field("state", &self.state)
            .field("layout", &self.layout)
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}

//! src/controller/events.rs
//! ============================================================================
//! # TreeEvent + EventBus: Typed Observer Registry
//!
//! Controller actions fan out to host subscribers through a single typed
//! event enum — one variant per event kind with its payload — instead of
//! stringly-keyed callback tables. A host UI subscribes once and matches on
//! the variants it cares about (redraw on `TreeChanged`/`ViewChanged`, open
//! files on `ItemActivated`, ...).
//!
//! Single-threaded by design: listeners run synchronously on the UI thread
//! in subscription order, and the bus holds plain boxed closures.

use std::path::PathBuf;

use crate::model::entry::TreeEntry;

/// Everything the tree controller can announce.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeEvent {
    /// Selection moved to this row.
    ItemSelected(TreeEntry),
    /// The "open/enter" action on a row — distinct from selection.
    ItemActivated(TreeEntry),
    /// The browsed root changed.
    DirectoryChanged(PathBuf),
    /// Pointer hover moved to a different row (or off all rows).
    HoverChanged(Option<TreeEntry>),
    /// Tree shape changed (expand/collapse); layout is stale.
    TreeChanged,
    /// Scroll position changed; a redraw is needed.
    ViewChanged,
    /// An explicit refresh was requested.
    RefreshRequested,
}

type Listener = Box<dyn FnMut(&TreeEvent)>;

/// Listener registry for one tree widget.
#[derive(Default)]
pub struct EventBus {
    listeners: Vec<Listener>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&TreeEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn emit(&mut self, event: &TreeEvent) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }

    #[must_use]
    pub fn has_listeners(&self) -> bool {
        !self.listeners.is_empty()
    }

    pub fn clear(&mut self) {
        self.listeners.clear();
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

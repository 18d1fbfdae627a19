//! lib.rs — Virtualized File-Tree View Engine
//! -----------------------------------------------
//! Toolkit-independent tree-view core: data model, filesystem data source,
//! flattening, virtualization layout cache, abstract renderer, navigation
//! and input dispatch. A platform adapter implements `DrawSurface` and
//! feeds raw events to `InputDispatcher`; everything else lives here.
//!
//! Data flow: `TreeDataSource` → `flatten_tree` → `LayoutCache` →
//! `TreeRenderer`; input flows `InputDispatcher` → `NavigationEngine` →
//! `TreeController` → `TreeState`/`EventBus`.

/// --- Error handling (unified error type) ---
pub mod error;

/// --- Configuration: listing, timing and paging settings ---
pub mod config;

/// --- Controller: event bus, owner, navigation, input dispatch ---
pub mod controller {
    pub mod events;
    pub mod input;
    pub mod navigation;
    pub mod tree_controller;
}

/// --- State/data models ---
pub mod model {
    pub mod entry;
    pub mod tree_state;
}

/// --- Presentation: flattening, virtualization, theme, renderer ---
pub mod view {
    pub mod flatten;
    pub mod icons;
    pub mod layout;
    pub mod renderer;
    pub mod theme;
}

/// --- Filesystem abstraction ---
pub mod fs {
    pub mod data_source;
    pub mod dir_lister;
}

pub mod logging;
pub use logging::Logger;

#[cfg(test)]
pub(crate) mod testutil;

/// --- Crate-level re-exports for the most important types ---
pub use controller::events::{EventBus, TreeEvent};
pub use controller::input::{Dispatch, InputDispatcher, Key, RawKey, ScrollDirection};
pub use controller::navigation::NavigationEngine;
pub use controller::tree_controller::TreeController;
pub use error::AppError;
pub use fs::data_source::TreeDataSource;
pub use fs::dir_lister::FsDataSource;
pub use model::entry::{EntryKind, TreeEntry};
pub use model::tree_state::TreeState;
pub use view::flatten::{FlatRow, flatten_tree};
pub use view::layout::LayoutCache;
pub use view::renderer::{DrawSurface, TreeRenderer};
pub use view::theme::{Rgba, TreeTheme};

//! src/view/renderer.rs
//! ============================================================================
//! # Abstract Tree Renderer
//!
//! Draws the visible slice of the flattened tree against the `DrawSurface`
//! primitives. Everything here is toolkit-independent; a platform adapter
//! (Cairo, terminal cells, a test recorder) implements the trait.
//!
//! The renderer only reads: `LayoutCache` for geometry, `TreeState` for
//! selection/hover/scroll, `TreeTheme` for constants. The caller must
//! refresh the layout first — the cache asserts on dirty reads.

use tracing::trace;

use crate::model::entry::TreeEntry;
use crate::model::tree_state::TreeState;
use crate::view::icons::IconKind;
use crate::view::layout::LayoutCache;
use crate::view::theme::{Rgba, TreeTheme};

/// Display names longer than this are middle-ellipsized.
const MAX_NAME_CHARS: usize = 30;

/// Drawing primitives the engine issues. Coordinates are widget-local
/// pixels in the space defined by the layout cache.
pub trait DrawSurface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    fn clear_background(&mut self, color: Rgba);
    fn draw_rectangle(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba);
    fn draw_text(&mut self, x: f64, y: f64, text: &str, font_size: f64, color: Rgba);
    fn draw_icon(&mut self, x: f64, y: f64, icon: IconKind);
    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Rgba, width: f64);
}

/// Virtualized row renderer over an abstract surface.
#[derive(Debug, Clone)]
pub struct TreeRenderer {
    theme: TreeTheme,
}

impl TreeRenderer {
    pub fn new(theme: TreeTheme) -> Self {
        Self { theme }
    }

    #[must_use]
    pub fn theme(&self) -> &TreeTheme {
        &self.theme
    }

    /// Renders the visible rows. `layout` must be clean.
    pub fn render_tree(
        &self,
        surface: &mut dyn DrawSurface,
        layout: &LayoutCache,
        state: &TreeState,
    ) {
        surface.clear_background(self.theme.background);

        let visible = layout.visible_rows(surface.height(), state.scroll_offset());
        trace!(
            marker = "RENDER_TREE",
            visible_rows = visible.len(),
            scroll_offset = state.scroll_offset(),
            "Rendering visible slice"
        );

        for (row, y) in visible {
            self.render_item(surface, &row.entry, row.depth, y, state);
        }
    }

    fn render_item(
        &self,
        surface: &mut dyn DrawSurface,
        entry: &TreeEntry,
        depth: usize,
        y: f64,
        state: &TreeState,
    ) {
        self.render_item_background(surface, entry, y, state);
        self.render_item_icon(surface, entry, depth, y);
        self.render_item_text(surface, entry, depth, y);
    }

    fn render_item_background(
        &self,
        surface: &mut dyn DrawSurface,
        entry: &TreeEntry,
        y: f64,
        state: &TreeState,
    ) {
        let width = surface.width();
        let h = self.theme.row_height;

        if state.selected.as_ref() == Some(entry) {
            surface.draw_rectangle(1.0, y, width - 2.0, h, self.theme.selection);
        } else if state.hovered.as_ref() == Some(entry) {
            surface.draw_rectangle(1.0, y, width - 2.0, h, self.theme.hover);
        } else {
            surface.draw_rectangle(0.0, y, width, h, self.theme.item_background);
        }
    }

    fn render_item_icon(
        &self,
        surface: &mut dyn DrawSurface,
        entry: &TreeEntry,
        depth: usize,
        y: f64,
    ) {
        let icon_x = self.theme.icon_x(depth);
        let icon_y = self.theme.icon_y(y);
        surface.draw_icon(icon_x, icon_y, IconKind::for_entry(entry));
    }

    fn render_item_text(
        &self,
        surface: &mut dyn DrawSurface,
        entry: &TreeEntry,
        depth: usize,
        y: f64,
    ) {
        let text_x = self.theme.text_x(depth);
        let text_y = self.theme.text_y(y);
        let display = truncate_name(&entry.name, MAX_NAME_CHARS);
        surface.draw_text(text_x, text_y, &display, self.theme.font_size, self.theme.text);
    }
}

/// Middle-ellipsizes `name` to at most `max_chars` characters, keeping the
/// start and the end (extension) visible.
fn truncate_name(name: &str, max_chars: usize) -> String {
    let len = name.chars().count();
    if len <= max_chars {
        return name.to_string();
    }

    let start_len = (max_chars - 3) / 2;
    let end_len = max_chars - 3 - start_len;

    let start: String = name.chars().take(start_len).collect();
    let end: String = name.chars().skip(len - end_len).collect();
    format!("{start}...{end}")
}

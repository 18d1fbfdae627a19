//! src/view/layout.rs
//! ============================================================================
//! # LayoutCache: Virtualization Cache for the Flattened Tree
//!
//! Owns the last-computed flattened row sequence and the total pixel height,
//! behind a dirty flag. The cache starts dirty, goes dirty on every
//! structural change (expand/collapse, directory change, refresh) and is
//! cleaned only by `update_layout`.
//!
//! Reading a dirty cache is a programming-contract violation, not a
//! recoverable condition: every read path asserts cleanliness. The
//! controller's `ensure_layout` is the sanctioned refresh gate.

use std::path::Path;

use tracing::trace;

use crate::model::entry::TreeEntry;
use crate::view::flatten::FlatRow;

/// Pixel bounds of one row; rows span the full widget width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone)]
pub struct LayoutCache {
    rows: Vec<FlatRow>,
    total_height: f64,
    row_height: f64,
    dirty: bool,
}

impl LayoutCache {
    pub fn new(row_height: f64) -> Self {
        Self {
            rows: Vec::new(),
            total_height: 0.0,
            row_height,
            dirty: true,
        }
    }

    /// Marks the cached sequence stale. Any state → dirty.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    #[inline]
    #[must_use]
    pub fn needs_update(&self) -> bool {
        self.dirty
    }

    /// Installs a freshly flattened sequence and cleans the cache.
    pub fn update_layout(&mut self, rows: Vec<FlatRow>) {
        self.total_height = rows.len() as f64 * self.row_height;
        self.rows = rows;
        self.dirty = false;
        trace!(
            marker = "LAYOUT_UPDATED",
            rows = self.rows.len(),
            total_height = self.total_height,
            "Layout cache refreshed"
        );
    }

    #[inline]
    #[must_use]
    pub fn row_height(&self) -> f64 {
        self.row_height
    }

    #[must_use]
    pub fn total_height(&self) -> f64 {
        self.assert_clean();
        self.total_height
    }

    #[must_use]
    pub fn rows(&self) -> &[FlatRow] {
        self.assert_clean();
        &self.rows
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.assert_clean();
        self.rows.len()
    }

    /// Inclusive `(start, end)` index range of rows intersecting the
    /// viewport, or `None` for an empty tree.
    #[must_use]
    pub fn visible_range(&self, viewport_height: f64, scroll_offset: f64) -> Option<(usize, usize)> {
        self.assert_clean();
        if self.rows.is_empty() {
            return None;
        }

        let last = self.rows.len() - 1;
        let start = ((scroll_offset / self.row_height).floor().max(0.0) as usize).min(last);
        let end =
            ((((scroll_offset + viewport_height) / self.row_height).ceil()).max(0.0) as usize)
                .min(last);

        if start > end { None } else { Some((start, end)) }
    }

    /// Visible rows paired with their viewport-local y coordinate:
    /// `y = index * row_height - scroll_offset`.
    #[must_use]
    pub fn visible_rows(&self, viewport_height: f64, scroll_offset: f64) -> Vec<(&FlatRow, f64)> {
        let Some((start, end)) = self.visible_range(viewport_height, scroll_offset) else {
            return Vec::new();
        };

        self.rows[start..=end]
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let y = (start + i) as f64 * self.row_height - scroll_offset;
                (row, y)
            })
            .collect()
    }

    /// Entry under widget-local `(x, y)`, given the current scroll offset.
    #[must_use]
    pub fn row_at(&self, _x: f64, y: f64, scroll_offset: f64) -> Option<&TreeEntry> {
        self.assert_clean();
        if self.rows.is_empty() {
            return None;
        }

        let adjusted = y + scroll_offset;
        if adjusted < 0.0 {
            return None;
        }

        let index = (adjusted / self.row_height).floor() as usize;
        self.rows.get(index).map(|row| &row.entry)
    }

    /// Index of the row matching `path` identity, if present.
    #[must_use]
    pub fn row_index_of(&self, path: &Path) -> Option<usize> {
        self.assert_clean();
        self.rows.iter().position(|row| row.entry.path == path)
    }

    /// Viewport-local bounds of the row holding `entry`, if visible in the
    /// sequence at all.
    #[must_use]
    pub fn item_bounds(&self, entry: &TreeEntry, scroll_offset: f64) -> Option<RowBounds> {
        let index = self.row_index_of(&entry.path)?;
        Some(RowBounds {
            x: 0.0,
            y: index as f64 * self.row_height - scroll_offset,
            width: f64::INFINITY,
            height: self.row_height,
        })
    }

    /// Scroll offset that reveals `entry`: 0.0 when the row already fits in
    /// the viewport, otherwise an offset centering it, clamped to ≥ 0.
    #[must_use]
    pub fn scroll_offset_to_reveal(&self, entry: &TreeEntry, viewport_height: f64) -> f64 {
        let Some(index) = self.row_index_of(&entry.path) else {
            return 0.0;
        };

        let row_y = index as f64 * self.row_height;
        if row_y >= 0.0 && row_y + self.row_height <= viewport_height {
            return 0.0;
        }

        let center_offset = viewport_height / 2.0 - self.row_height / 2.0;
        (row_y - center_offset).max(0.0)
    }

    #[inline]
    fn assert_clean(&self) {
        assert!(!self.dirty, "layout cache read while dirty");
    }
}

//! src/controller/navigation.rs
//! ============================================================================
//! # NavigationEngine: Keyboard/Mouse Command Interpreter
//!
//! Pure state-transition logic over the controller's `TreeState` and the
//! flattened row sequence — no I/O of its own. Every command is a no-op when
//! the referenced row or the sequence is absent; there is no error path.

use tracing::trace;

use crate::controller::input::{Key, ScrollDirection};
use crate::controller::tree_controller::TreeController;
use crate::fs::data_source::TreeDataSource;

/// Rows jumped by a page command when no config overrides it.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Pixels scrolled per wheel notch when the event carries no amount.
pub const DEFAULT_SCROLL_STEP: f64 = 60.0;

#[derive(Debug, Clone)]
pub struct NavigationEngine {
    page_size: usize,
    scroll_step: f64,
}

impl Default for NavigationEngine {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, DEFAULT_SCROLL_STEP)
    }
}

impl NavigationEngine {
    pub fn new(page_size: usize, scroll_step: f64) -> Self {
        Self {
            page_size,
            scroll_step,
        }
    }

    /// Executes a navigation key. Returns false for keys that are not
    /// navigation at all.
    pub fn handle_navigation_key<D: TreeDataSource>(
        &self,
        ctl: &mut TreeController<D>,
        key: Key,
    ) -> bool {
        trace!(marker = "NAVIGATION_KEY", key = ?key, "Navigation command");

        match key {
            Key::Up => ctl.select_previous(),
            Key::Down => ctl.select_next(),
            Key::Left => self.handle_left_key(ctl),
            Key::Right => self.handle_right_key(ctl),
            Key::Home => self.select_first(ctl),
            Key::End => self.select_last(ctl),
            Key::PageUp => self.page_move(ctl, -(self.page_size as isize)),
            Key::PageDown => self.page_move(ctl, self.page_size as isize),
            _ => return false,
        }
        true
    }

    /// Executes an action key on the current selection. Returns false when
    /// the key is not an action key or nothing is selected.
    pub fn handle_action_key<D: TreeDataSource>(
        &self,
        ctl: &mut TreeController<D>,
        key: Key,
    ) -> bool {
        let Some(selected) = ctl.selected_entry().cloned() else {
            return false;
        };

        match key {
            Key::Enter => ctl.activate_item(&selected),
            Key::Space => ctl.toggle_expand(&selected),
            _ => return false,
        }
        true
    }

    /// Adjusts the scroll offset by `amount` pixels (default scroll step
    /// when `None`), floored at zero by the state.
    pub fn handle_scroll<D: TreeDataSource>(
        &self,
        ctl: &mut TreeController<D>,
        direction: ScrollDirection,
        amount: Option<f64>,
    ) -> bool {
        let amount = amount.unwrap_or(self.scroll_step);
        match direction {
            ScrollDirection::Up => ctl.scroll_by(-amount),
            ScrollDirection::Down => ctl.scroll_by(amount),
        }
        true
    }

    /// Single click: select the row; a directory additionally toggles its
    /// expansion.
    pub fn handle_click<D: TreeDataSource>(
        &self,
        ctl: &mut TreeController<D>,
        x: f64,
        y: f64,
    ) -> bool {
        let Some(entry) = ctl.entry_at(x, y) else {
            return false;
        };

        ctl.select_item(entry.clone());
        if entry.is_directory() {
            ctl.toggle_expand(&entry);
        }
        true
    }

    /// Double click: activate the row regardless of kind.
    pub fn handle_double_click<D: TreeDataSource>(
        &self,
        ctl: &mut TreeController<D>,
        x: f64,
        y: f64,
    ) -> bool {
        let Some(entry) = ctl.entry_at(x, y) else {
            return false;
        };
        ctl.activate_item(&entry);
        true
    }

    // ------------------------------------------------------------
    // Structural moves
    // ------------------------------------------------------------

    /// Left: collapse an expanded row, otherwise jump to its nearest
    /// visible ancestor (the previous row with strictly smaller depth).
    fn handle_left_key<D: TreeDataSource>(&self, ctl: &mut TreeController<D>) {
        let Some(selected) = ctl.selected_entry().cloned() else {
            return;
        };

        if ctl.state().is_expanded(&selected) {
            ctl.collapse_item(&selected);
            return;
        }

        ctl.ensure_layout();
        let ancestor = {
            let rows = ctl.layout().rows();
            let Some(idx) = rows.iter().position(|r| r.entry == selected) else {
                return;
            };
            let depth = rows[idx].depth;
            (0..idx).rev().find(|&i| rows[i].depth < depth)
        };
        if let Some(i) = ancestor {
            ctl.select_row(i);
        }
    }

    /// Right: expand a collapsed directory; when already expanded, step to
    /// its first child (the next row iff its depth is one greater).
    fn handle_right_key<D: TreeDataSource>(&self, ctl: &mut TreeController<D>) {
        let Some(selected) = ctl.selected_entry().cloned() else {
            return;
        };

        if !selected.can_expand() {
            return;
        }

        if !ctl.state().is_expanded(&selected) {
            ctl.expand_item(&selected);
            return;
        }

        ctl.ensure_layout();
        let first_child = {
            let rows = ctl.layout().rows();
            let Some(idx) = rows.iter().position(|r| r.entry == selected) else {
                return;
            };
            match rows.get(idx + 1) {
                Some(next) if next.depth == rows[idx].depth + 1 => Some(idx + 1),
                _ => None,
            }
        };
        if let Some(i) = first_child {
            ctl.select_row(i);
        }
    }

    fn select_first<D: TreeDataSource>(&self, ctl: &mut TreeController<D>) {
        ctl.ensure_layout();
        if ctl.layout().row_count() > 0 {
            ctl.select_row(0);
        }
    }

    fn select_last<D: TreeDataSource>(&self, ctl: &mut TreeController<D>) {
        ctl.ensure_layout();
        let count = ctl.layout().row_count();
        if count > 0 {
            ctl.select_row(count - 1);
        }
    }

    fn page_move<D: TreeDataSource>(&self, ctl: &mut TreeController<D>, delta: isize) {
        ctl.ensure_layout();
        let count = ctl.layout().row_count();
        if count == 0 {
            return;
        }
        let i = ctl.selected_index();
        let target = (i + delta).clamp(0, count as isize - 1) as usize;
        ctl.select_row(target);
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub fn scroll_step(&self) -> f64 {
        self.scroll_step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{dir, file, sample_source, StaticSource};

    const ROW_H: f64 = 16.0;

    fn controller() -> TreeController<StaticSource> {
        TreeController::new(sample_source(), ROW_H)
    }

    fn selected_name<D: TreeDataSource>(ctl: &TreeController<D>) -> String {
        ctl.selected_entry().unwrap().name.to_string()
    }

    #[test]
    fn test_home_and_end() {
        let nav = NavigationEngine::default();
        let mut ctl = controller();

        assert!(nav.handle_navigation_key(&mut ctl, Key::End));
        assert_eq!(selected_name(&ctl), "README.md");

        assert!(nav.handle_navigation_key(&mut ctl, Key::Home));
        assert_eq!(selected_name(&ctl), "..");
    }

    #[test]
    fn test_page_movement_clamps() {
        let nav = NavigationEngine::default();
        let mut ctl = controller();

        // 3 rows, page of 10: PageDown from nothing lands on the last row
        nav.handle_navigation_key(&mut ctl, Key::PageDown);
        assert_eq!(selected_name(&ctl), "README.md");

        nav.handle_navigation_key(&mut ctl, Key::PageUp);
        assert_eq!(selected_name(&ctl), "..");
    }

    #[test]
    fn test_right_expands_then_steps_into_first_child() {
        let nav = NavigationEngine::default();
        let mut ctl = controller();

        ctl.select_item(dir("lib", "/root/lib"));
        nav.handle_navigation_key(&mut ctl, Key::Right);
        assert!(ctl.state().is_expanded(&dir("lib", "/root/lib")));
        assert_eq!(selected_name(&ctl), "lib");

        nav.handle_navigation_key(&mut ctl, Key::Right);
        assert_eq!(selected_name(&ctl), "core");
    }

    #[test]
    fn test_right_on_file_is_noop() {
        let nav = NavigationEngine::default();
        let mut ctl = controller();
        ctl.select_item(file("README.md", "/root/README.md"));
        nav.handle_navigation_key(&mut ctl, Key::Right);
        assert_eq!(selected_name(&ctl), "README.md");
    }

    #[test]
    fn test_left_collapses_then_jumps_to_ancestor() {
        let nav = NavigationEngine::default();
        let mut ctl = controller();

        let lib = dir("lib", "/root/lib");
        ctl.expand_item(&lib);
        ctl.select_item(dir("core", "/root/lib/core"));

        // core is collapsed: left jumps to the shallower lib row
        nav.handle_navigation_key(&mut ctl, Key::Left);
        assert_eq!(selected_name(&ctl), "lib");

        // lib is expanded: left collapses it
        nav.handle_navigation_key(&mut ctl, Key::Left);
        assert!(!ctl.state().is_expanded(&lib));
        assert_eq!(selected_name(&ctl), "lib");
    }

    #[test]
    fn test_space_toggles_and_enter_activates() {
        let nav = NavigationEngine::default();
        let mut ctl = controller();
        let lib = dir("lib", "/root/lib");

        ctl.select_item(lib.clone());
        assert!(nav.handle_action_key(&mut ctl, Key::Space));
        assert!(ctl.state().is_expanded(&lib));
        assert!(nav.handle_action_key(&mut ctl, Key::Space));
        assert!(!ctl.state().is_expanded(&lib));

        assert!(nav.handle_action_key(&mut ctl, Key::Enter));
    }

    #[test]
    fn test_action_key_without_selection_is_unhandled() {
        let nav = NavigationEngine::default();
        let mut ctl = controller();
        assert!(!nav.handle_action_key(&mut ctl, Key::Enter));
    }

    #[test]
    fn test_scroll_floors_at_zero() {
        let nav = NavigationEngine::default();
        let mut ctl = controller();

        nav.handle_scroll(&mut ctl, ScrollDirection::Down, Some(100.0));
        assert_eq!(ctl.state().scroll_offset(), 100.0);

        nav.handle_scroll(&mut ctl, ScrollDirection::Up, None);
        assert_eq!(ctl.state().scroll_offset(), 40.0);

        nav.handle_scroll(&mut ctl, ScrollDirection::Up, Some(500.0));
        assert_eq!(ctl.state().scroll_offset(), 0.0);
    }

    #[test]
    fn test_click_selects_and_toggles_directories() {
        let nav = NavigationEngine::default();
        let mut ctl = controller();

        // rows: .. / lib / README.md — click row index 1
        assert!(nav.handle_click(&mut ctl, 5.0, ROW_H + 2.0));
        assert_eq!(selected_name(&ctl), "lib");
        assert!(ctl.state().is_expanded(&dir("lib", "/root/lib")));

        // click outside any row
        assert!(!nav.handle_click(&mut ctl, 5.0, 5_000.0));
    }

    #[test]
    fn test_double_click_activates_any_kind() {
        let nav = NavigationEngine::default();
        let mut ctl = controller();

        // row 2 is README.md
        assert!(nav.handle_double_click(&mut ctl, 5.0, 2.0 * ROW_H + 2.0));
        // selection untouched by pure activation
        assert!(ctl.selected_entry().is_none());
    }
}

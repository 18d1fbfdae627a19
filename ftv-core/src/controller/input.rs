//! src/controller/input.rs
//! ============================================================================
//! # InputDispatcher: Raw-Event Normalization
//!
//! Sits between the platform event adapter and the `NavigationEngine`.
//! Normalizes heterogeneous raw key identifiers (GDK-style names, ASCII
//! codes, X keysyms) into the canonical `Key` enum, owns the double-click
//! timing state, and tracks pointer hover. Keys the engine does not know
//! are reported back as `Unhandled` so the host can decide fallback
//! behavior.

use std::time::{Duration, Instant};

use tracing::trace;

use crate::controller::navigation::NavigationEngine;
use crate::controller::tree_controller::TreeController;
use crate::fs::data_source::TreeDataSource;
use crate::model::entry::TreeEntry;

/// Canonical key set the tree view reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Enter,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Space,
}

impl Key {
    /// Normalizes a GDK-style key name. `"Return"`, `"Enter"` and
    /// `"KP_Enter"` all collapse to `Enter`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Return" | "Enter" | "KP_Enter" => Some(Self::Enter),
            "Escape" => Some(Self::Escape),
            "Up" => Some(Self::Up),
            "Down" => Some(Self::Down),
            "Left" => Some(Self::Left),
            "Right" => Some(Self::Right),
            "Home" => Some(Self::Home),
            "End" => Some(Self::End),
            "Page_Up" | "Prior" => Some(Self::PageUp),
            "Page_Down" | "Next" => Some(Self::PageDown),
            "space" | "Space" => Some(Self::Space),
            _ => None,
        }
    }

    /// Normalizes a numeric key value: ASCII control codes and X11 keysyms.
    #[must_use]
    pub fn from_keyval(keyval: u32) -> Option<Self> {
        match keyval {
            13 | 0xFF0D | 0xFF8D => Some(Self::Enter), // CR, GDK_Return, GDK_KP_Enter
            27 | 0xFF1B => Some(Self::Escape),
            32 => Some(Self::Space),
            0xFF52 => Some(Self::Up),
            0xFF54 => Some(Self::Down),
            0xFF51 => Some(Self::Left),
            0xFF53 => Some(Self::Right),
            0xFF50 => Some(Self::Home),
            0xFF57 => Some(Self::End),
            0xFF55 => Some(Self::PageUp),
            0xFF56 => Some(Self::PageDown),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_navigation(self) -> bool {
        matches!(
            self,
            Self::Up
                | Self::Down
                | Self::Left
                | Self::Right
                | Self::Home
                | Self::End
                | Self::PageUp
                | Self::PageDown
        )
    }

    #[must_use]
    pub const fn is_action(self) -> bool {
        matches!(self, Self::Enter | Self::Space)
    }
}

/// A raw key identifier as delivered by the platform adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawKey<'a> {
    Name(&'a str),
    Code(u32),
}

impl RawKey<'_> {
    #[must_use]
    pub fn normalize(self) -> Option<Key> {
        match self {
            Self::Name(name) => Key::from_name(name),
            Self::Code(code) => Key::from_keyval(code),
        }
    }
}

impl<'a> From<&'a str> for RawKey<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

impl From<u32> for RawKey<'_> {
    fn from(code: u32) -> Self {
        Self::Code(code)
    }
}

/// Scroll-wheel direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// Whether the dispatcher consumed an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Handled,
    Unhandled,
}

impl Dispatch {
    #[must_use]
    pub const fn is_handled(self) -> bool {
        matches!(self, Self::Handled)
    }

    fn from_bool(handled: bool) -> Self {
        if handled { Self::Handled } else { Self::Unhandled }
    }
}

/// Per-widget input front end. Owns the double-click window state: a click
/// is a double iff it hits the same row (path identity) as the previous
/// click within the threshold. Every click, single or double, becomes the
/// new reference point.
pub struct InputDispatcher {
    navigation: NavigationEngine,
    double_click_threshold: Duration,
    last_click_time: Option<Instant>,
    last_click_entry: Option<TreeEntry>,
}

impl Default for InputDispatcher {
    fn default() -> Self {
        Self::new(NavigationEngine::default(), Duration::from_millis(350))
    }
}

impl InputDispatcher {
    pub fn new(navigation: NavigationEngine, double_click_threshold: Duration) -> Self {
        Self {
            navigation,
            double_click_threshold,
            last_click_time: None,
            last_click_entry: None,
        }
    }

    #[must_use]
    pub fn navigation(&self) -> &NavigationEngine {
        &self.navigation
    }

    /// Normalizes and routes one key press.
    pub fn handle_key_press<D: TreeDataSource>(
        &mut self,
        ctl: &mut TreeController<D>,
        raw: RawKey<'_>,
    ) -> Dispatch {
        let Some(key) = raw.normalize() else {
            trace!(marker = "KEY_UNHANDLED", raw = ?raw, "Unrecognized key");
            return Dispatch::Unhandled;
        };

        if key.is_navigation() {
            return Dispatch::from_bool(self.navigation.handle_navigation_key(ctl, key));
        }

        if key.is_action() {
            return Dispatch::from_bool(self.navigation.handle_action_key(ctl, key));
        }

        // Escape and friends: recognized, deliberately left to the host.
        Dispatch::Unhandled
    }

    /// Routes one click, classifying it as single or double first.
    pub fn handle_click<D: TreeDataSource>(
        &mut self,
        ctl: &mut TreeController<D>,
        x: f64,
        y: f64,
        timestamp: Instant,
    ) -> Dispatch {
        let Some(entry) = ctl.entry_at(x, y) else {
            return Dispatch::Unhandled;
        };

        let handled = if self.register_click(&entry, timestamp) {
            self.navigation.handle_double_click(ctl, x, y)
        } else {
            self.navigation.handle_click(ctl, x, y)
        };
        Dispatch::from_bool(handled)
    }

    pub fn handle_scroll<D: TreeDataSource>(
        &mut self,
        ctl: &mut TreeController<D>,
        direction: ScrollDirection,
        amount: Option<f64>,
    ) -> Dispatch {
        Dispatch::from_bool(self.navigation.handle_scroll(ctl, direction, amount))
    }

    /// Pointer motion: updates hover and lets the controller announce the
    /// change. Motion never consumes the event.
    pub fn handle_pointer_move<D: TreeDataSource>(
        &mut self,
        ctl: &mut TreeController<D>,
        x: f64,
        y: f64,
    ) {
        let entry = ctl.entry_at(x, y);
        ctl.hover_item(entry);
    }

    pub fn handle_pointer_leave<D: TreeDataSource>(&mut self, ctl: &mut TreeController<D>) {
        ctl.hover_item(None);
    }

    /// Classifies the click against the stored reference point, then
    /// unconditionally replaces it.
    fn register_click(&mut self, entry: &TreeEntry, timestamp: Instant) -> bool {
        let same_item = self.last_click_entry.as_ref() == Some(entry);
        let within_window = self
            .last_click_time
            .is_some_and(|last| timestamp.duration_since(last) < self.double_click_threshold);

        self.last_click_time = Some(timestamp);
        self.last_click_entry = Some(entry.clone());

        same_item && within_window
    }
}

impl std::fmt::Debug for InputDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputDispatcher")
            .field("double_click_threshold", &self.double_click_threshold)
            .field("last_click_entry", &self.last_click_entry)
            .finish_non_exhaustive()
    }
}

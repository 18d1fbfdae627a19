//! src/view/theme.rs
//! ============================================================================
//! # Solarized Light Tree Theme
//!
//! Layout constants and per-role colors consumed by the abstract renderer.
//! Colors are from the Solarized palette: https://ethanschoonover.com/solarized/

/// Straight-alpha RGBA color, components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

pub const BACKGROUND: Rgba = Rgba::new(0.992, 0.965, 0.890, 1.0); // base3
pub const ITEM_BACKGROUND: Rgba = Rgba::new(0.992, 0.965, 0.890, 1.0); // base3
pub const SELECTION: Rgba = Rgba::new(0.345, 0.431, 0.459, 0.12); // base01, translucent
pub const HOVER: Rgba = Rgba::new(0.345, 0.431, 0.459, 0.06); // base01, fainter
pub const TEXT: Rgba = Rgba::new(0.345, 0.431, 0.459, 1.0); // base01
pub const EXPANDER: Rgba = Rgba::new(0.514, 0.580, 0.588, 1.0); // base0
pub const BORDER: Rgba = Rgba::new(0.835, 0.835, 0.835, 1.0); // light border
pub const FILE_ICON: Rgba = Rgba::new(0.710, 0.537, 0.000, 0.7); // yellow, lighter
pub const FOLDER_ICON: Rgba = Rgba::new(0.149, 0.545, 0.824, 0.7); // blue, lighter
pub const PARENT_ICON: Rgba = Rgba::new(0.514, 0.580, 0.588, 0.7); // base0, lighter

/// Numeric layout constants plus the semantic color roles of one tree view.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeTheme {
    pub row_height: f64,
    pub indent_size: f64,
    pub icon_size: f64,
    pub font_size: f64,
    pub left_margin: f64,

    pub background: Rgba,
    pub item_background: Rgba,
    pub selection: Rgba,
    pub hover: Rgba,
    pub text: Rgba,
    pub expander: Rgba,
    pub border: Rgba,
    pub file_icon: Rgba,
    pub folder_icon: Rgba,
    pub parent_icon: Rgba,
}

impl Default for TreeTheme {
    fn default() -> Self {
        Self {
            row_height: 16.0,
            indent_size: 10.0,
            icon_size: 10.0,
            font_size: 9.0,
            left_margin: 6.0,

            background: BACKGROUND,
            item_background: ITEM_BACKGROUND,
            selection: SELECTION,
            hover: HOVER,
            text: TEXT,
            expander: EXPANDER,
            border: BORDER,
            file_icon: FILE_ICON,
            folder_icon: FOLDER_ICON,
            parent_icon: PARENT_ICON,
        }
    }
}

impl TreeTheme {
    /// Icon x for a row at `depth`.
    #[must_use]
    pub fn icon_x(&self, depth: usize) -> f64 {
        self.left_margin + depth as f64 * self.indent_size
    }

    /// Icon y, vertically centered in the row starting at `row_y`.
    #[must_use]
    pub fn icon_y(&self, row_y: f64) -> f64 {
        row_y + (self.row_height - self.icon_size) / 2.0
    }

    /// Text x, just right of the icon.
    #[must_use]
    pub fn text_x(&self, depth: usize) -> f64 {
        self.icon_x(depth) + self.icon_size + 3.0
    }

    /// Text baseline y: row center plus a small baseline offset.
    #[must_use]
    pub fn text_y(&self, row_y: f64) -> f64 {
        row_y + self.row_height / 2.0 + self.font_size / 4.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_positions() {
        let theme = TreeTheme::default();
        assert_eq!(theme.icon_x(0), 6.0);
        assert_eq!(theme.icon_x(2), 6.0 + 2.0 * 10.0);
        assert_eq!(theme.text_x(0), 6.0 + 10.0 + 3.0);
    }

    #[test]
    fn test_vertical_centering() {
        let theme = TreeTheme::default();
        assert_eq!(theme.icon_y(32.0), 32.0 + 3.0);
        assert_eq!(theme.text_y(32.0), 32.0 + 8.0 + 2.25);
    }
}

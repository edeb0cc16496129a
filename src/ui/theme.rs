//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the two-valued theme system for the plugin: a light
//! and a dark palette, toggled at runtime. Palettes are TOML files embedded
//! at compile time; custom palettes can be loaded from TOML files via
//! configuration. Only presentation is affected, the store and view logic
//! never consult the theme.
//!
//! # TOML Format
//!
//! ```toml
//! name = "dark"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! text_completed = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! form_border = "#89b4fa"
//! checkbox_done_fg = "#a6e3a1"
//! toast_fg = "#1e1e2e"
//! toast_bg = "#94e2d5"
//! empty_state_fg = "#89b4fa"
//! ```

use crate::domain::{Result, ZtodoError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The two display modes of the application shell.
///
/// Toggled by a single control; orthogonal to every other piece of state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light palette.
    Light,
    /// Dark palette (default).
    #[default]
    Dark,
}

impl ThemeMode {
    /// Returns the other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Parses a mode from its configuration name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Color scheme for UI rendering.
///
/// Contains theme metadata and color definitions, loaded from built-in
/// palettes or custom TOML files.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are hex strings (e.g., "#cdd6f4"). Optional fields default to
/// `None`, letting palettes opt out of certain styling.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected row foreground color.
    pub selection_fg: String,
    /// Selected row background color.
    pub selection_bg: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, affordance hints).
    pub text_dim: String,
    /// Text color for completed todos.
    pub text_completed: String,

    /// Border and separator line color.
    pub border: String,

    /// Search bar border color.
    pub search_bar_border: String,
    /// Entry form border color.
    pub form_border: String,

    /// Checkbox glyph color for completed todos.
    pub checkbox_done_fg: String,

    /// Toast notification foreground.
    pub toast_fg: String,
    /// Toast notification background.
    pub toast_bg: String,

    /// Empty state message color.
    pub empty_state_fg: String,
}

impl Theme {
    /// Loads the built-in palette for a theme mode.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        let toml_str = match mode {
            ThemeMode::Light => include_str!("../../themes/light.toml"),
            ThemeMode::Dark => include_str!("../../themes/dark.toml"),
        };

        // The embedded palettes are validated by tests; a parse failure here
        // is a build defect, not a runtime condition.
        toml::from_str(toml_str).expect("built-in theme palette should always parse")
    }

    /// Loads a palette from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ZtodoError::Theme`] if the file cannot be read or the TOML
    /// content cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| ZtodoError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| ZtodoError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to an RGB tuple.
    ///
    /// Strips a `#` prefix if present and parses the hex digits. Returns
    /// white on malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// Generates an ANSI 24-bit foreground color escape sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Generates an ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Returns the ANSI bold escape sequence.
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI dim escape sequence.
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI strikethrough escape sequence.
    ///
    /// Used to style the text of completed todos.
    #[must_use]
    pub const fn strikethrough() -> &'static str {
        "\u{001b}[9m"
    }

    /// Returns the ANSI reset escape sequence, clearing all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_mode(ThemeMode::default())
    }
}

/// The pair of palettes the application toggles between.
///
/// Built from the embedded light and dark palettes; a configured custom
/// palette file replaces the palette of the starting mode.
#[derive(Debug, Clone)]
pub struct ThemeSet {
    /// Palette used in [`ThemeMode::Light`].
    pub light: Theme,
    /// Palette used in [`ThemeMode::Dark`].
    pub dark: Theme,
}

impl ThemeSet {
    /// Builds the set from the embedded palettes.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            light: Theme::from_mode(ThemeMode::Light),
            dark: Theme::from_mode(ThemeMode::Dark),
        }
    }

    /// Returns the palette for the given mode.
    #[must_use]
    pub const fn for_mode(&self, mode: ThemeMode) -> &Theme {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }

    /// Replaces the palette of one mode (used for configured custom files).
    pub fn set_palette(&mut self, mode: ThemeMode, theme: Theme) {
        match mode {
            ThemeMode::Light => self.light = theme,
            ThemeMode::Dark => self.dark = theme,
        }
    }
}

impl Default for ThemeSet {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_palettes_parse() {
        assert_eq!(Theme::from_mode(ThemeMode::Light).name, "light");
        assert_eq!(Theme::from_mode(ThemeMode::Dark).name, "dark");
    }

    #[test]
    fn mode_toggle_is_an_involution() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
    }

    #[test]
    fn mode_parses_from_config_names() {
        assert_eq!(ThemeMode::from_name("light"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::from_name("dark"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::from_name("solarized"), None);
    }

    #[test]
    fn fg_produces_truecolor_sequence() {
        assert_eq!(Theme::fg("#ffffff"), "\u{001b}[38;2;255;255;255m");
        // Malformed input falls back to white rather than corrupting output.
        assert_eq!(Theme::fg("nonsense"), "\u{001b}[38;2;255;255;255m");
    }

    #[test]
    fn custom_palette_loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "{}",
            include_str!("../../themes/dark.toml").replace("name = \"dark\"", "name = \"custom\"")
        )
        .unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "custom");
    }

    #[test]
    fn from_file_reports_missing_file() {
        let err = Theme::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(err.to_string().contains("Theme error"));
    }
}

//! Theme-aware tag colors
//!
//! A [`ColorPalette`] is built from the fixed table in [`table`] for one
//! [`ThemeKind`]. Known tag names map straight to their adjusted color;
//! everything else picks from the same table, in order, by a name-derived
//! index (see [`fallback_index`]).

pub mod color;
mod table;

use indexmap::IndexMap;
use tracing::{debug, warn};

use color::Rgb;
pub use table::KNOWN_TAG_COLORS;

/// Saturation removed from colors that would not read well on the theme
const DESATURATE_BY: f32 = 0.7;
/// Lightness removed from colors that would not read well on the theme
const DARKEN_BY: f32 = 0.3;

/// Active color theme kind, as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeKind {
    Light,
    #[default]
    Dark,
    HighContrast,
    HighContrastLight,
}

impl ThemeKind {
    /// Whether table colors are shown as-is
    ///
    /// Only the plain dark kind qualifies; high contrast themes of either
    /// brightness get muted colors.
    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeKind::Dark)
    }

    /// Get the configuration name for this theme kind
    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Light => "light",
            ThemeKind::Dark => "dark",
            ThemeKind::HighContrast => "high-contrast",
            ThemeKind::HighContrastLight => "high-contrast-light",
        }
    }

    /// Parse a theme kind from its configuration name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "light" => Some(ThemeKind::Light),
            "dark" => Some(ThemeKind::Dark),
            "high-contrast" | "hc" => Some(ThemeKind::HighContrast),
            "high-contrast-light" | "hc-light" => Some(ThemeKind::HighContrastLight),
            _ => None,
        }
    }
}

/// Tag colors adjusted for one theme kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPalette {
    theme: ThemeKind,
    colors: IndexMap<&'static str, String>,
}

impl ColorPalette {
    /// Build the palette for a theme kind
    ///
    /// Pure: the same kind always yields an equal palette.
    pub fn build(theme: ThemeKind) -> Self {
        let colors: IndexMap<_, _> = KNOWN_TAG_COLORS
            .iter()
            .map(|&(name, base)| (name, adjust_for_theme(base, theme)))
            .collect();
        debug!(theme = theme.name(), entries = colors.len(), "built tag palette");
        Self { theme, colors }
    }

    pub fn theme(&self) -> ThemeKind {
        self.theme
    }

    /// Color for a known tag name
    pub fn get(&self, tag_name: &str) -> Option<&str> {
        self.colors.get(tag_name).map(String::as_str)
    }

    /// Every `(name, color)` pair in table order
    pub fn ordered(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.colors.iter().map(|(name, color)| (*name, color.as_str()))
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Resolve the color for any tag name
    ///
    /// Known names use their own entry. Unknown names use the fallback list
    /// at [`fallback_index`], wrapping when the index runs past the end.
    pub fn resolve(&self, tag_name: &str) -> &str {
        if let Some(color) = self.get(tag_name) {
            return color;
        }
        let index = fallback_index(tag_name) % self.colors.len();
        self.colors
            .get_index(index)
            .map(|(_, color)| color.as_str())
            .unwrap_or_default()
    }
}

/// Owned color for a tag name under a palette
pub fn resolve_color(tag_name: &str, palette: &ColorPalette) -> String {
    palette.resolve(tag_name).to_string()
}

/// Fallback position for a tag name: its length plus its lowercase vowels
pub fn fallback_index(tag_name: &str) -> usize {
    let vowels = tag_name
        .chars()
        .filter(|c| matches!(c, 'a' | 'i' | 'u' | 'e' | 'o'))
        .count();
    tag_name.chars().count() + vowels
}

/// Keep light colors on dark themes; mute everything else for contrast
fn adjust_for_theme(base: &str, theme: ThemeKind) -> String {
    let rgb = match Rgb::parse(base) {
        Ok(rgb) => rgb,
        Err(err) => {
            warn!(%err, "keeping unparseable palette color as-is");
            return base.to_string();
        }
    };

    if theme.is_dark() && rgb.is_light() {
        return base.to_string();
    }

    rgb.muted(DESATURATE_BY, DARKEN_BY).to_hex()
}

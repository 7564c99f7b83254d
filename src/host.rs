//! Host editor interface
//!
//! The engine never renders anything itself. It asks the host for the active
//! document and theme, and hands back one decoration per tag.

use crate::document::{TextDocument, TextRange};
use crate::palette::ThemeKind;

/// A renderable style: one foreground color
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecorationStyle {
    /// Color literal (`#rrggbb`, `#rgb` or `rgb(r, g, b)`)
    pub color: String,
}

impl DecorationStyle {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
        }
    }
}

/// Change notifications delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// Another editor became active (or none is)
    ActiveEditorChanged,
    /// The active document's text changed
    DocumentChanged,
    /// The color theme changed
    ThemeChanged,
}

/// Everything the controller needs from the editor
///
/// Handles are owned: [`EditorHost::dispose_decoration`] consumes one, so a
/// disposed decoration cannot be touched again.
pub trait EditorHost {
    type Handle;

    /// Snapshot of the active document, if any editor is active
    fn active_document(&self) -> Option<TextDocument>;

    /// Current theme kind
    fn theme_kind(&self) -> ThemeKind;

    /// Create a new decoration for a style
    fn create_decoration(&mut self, style: &DecorationStyle) -> Self::Handle;

    /// Replace the ranges shown for a decoration in the active editor
    fn set_decorations(&mut self, handle: &Self::Handle, ranges: &[TextRange]);

    /// Release a decoration and everything it renders
    fn dispose_decoration(&mut self, handle: Self::Handle);
}

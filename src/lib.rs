//! tagpaint - color HTML-like tags by name
//!
//! Finds every tag name in a document, gives each name a stable color for
//! the current theme and asks an [`EditorHost`] to draw the tag's ranges in
//! that color. Tags inside the language's comments are left alone.

pub mod config;
pub mod controller;
pub mod document;
pub mod error;
pub mod host;
pub mod palette;
pub mod registry;
pub mod scan;
pub mod terminal;

pub use config::Config;
pub use controller::DecorationController;
pub use document::{Position, TextDocument, TextRange};
pub use error::{Result, TagpaintError};
pub use host::{DecorationStyle, EditorHost, HostEvent};
pub use palette::{ColorPalette, ThemeKind};
pub use registry::{DecorationState, TagEntry, TagRegistry};
pub use scan::{CommentSetting, CommentTable, TagDiscovery, TagScanner};
pub use terminal::TerminalHost;

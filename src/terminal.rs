//! Terminal host using crossterm
//!
//! A minimal [`EditorHost`]: one document, a fixed theme kind, and
//! decorations kept in memory until [`TerminalHost::render`] prints the
//! document with each tag's ranges in its 24-bit color.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use tracing::warn;

use crate::document::{language_id_for_path, TextDocument, TextRange};
use crate::error::Result;
use crate::host::{DecorationStyle, EditorHost};
use crate::palette::color::Rgb;
use crate::palette::ThemeKind;

/// Handle to a decoration held by a [`TerminalHost`]
#[derive(Debug, PartialEq, Eq)]
pub struct DecorationId(u64);

#[derive(Debug)]
struct Decoration {
    color: Option<Rgb>,
    ranges: Vec<TextRange>,
}

/// In-memory host that renders to any writer
#[derive(Debug)]
pub struct TerminalHost {
    document: Option<TextDocument>,
    theme: ThemeKind,
    next_id: u64,
    decorations: BTreeMap<u64, Decoration>,
}

impl TerminalHost {
    pub fn new(theme: ThemeKind) -> Self {
        Self {
            document: None,
            theme,
            next_id: 0,
            decorations: BTreeMap::new(),
        }
    }

    /// Make a document the active one
    pub fn open(&mut self, document: TextDocument) {
        self.document = Some(document);
    }

    /// Read a file and make it the active document
    pub fn open_file(&mut self, path: &Path) -> Result<()> {
        let text = fs::read_to_string(path)?;
        self.open(TextDocument::new(text, language_id_for_path(path)));
        Ok(())
    }

    /// Close the active document
    pub fn close(&mut self) {
        self.document = None;
    }

    pub fn document(&self) -> Option<&TextDocument> {
        self.document.as_ref()
    }

    pub fn set_theme(&mut self, theme: ThemeKind) {
        self.theme = theme;
    }

    /// Number of decorations not yet disposed
    pub fn live_decorations(&self) -> usize {
        self.decorations.len()
    }

    /// Colored ranges sorted by start offset
    pub fn spans(&self) -> Vec<(TextRange, Rgb)> {
        let mut spans: Vec<_> = self
            .decorations
            .values()
            .filter_map(|decoration| decoration.color.map(|color| (decoration, color)))
            .flat_map(|(decoration, color)| decoration.ranges.iter().map(move |r| (*r, color)))
            .filter(|(range, _)| !range.is_empty())
            .collect();
        spans.sort_by_key(|(range, _)| (range.start, range.end));
        spans
    }

    /// Write the active document with decorations applied
    ///
    /// Overlapping ranges are clipped so every byte is written once.
    pub fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        let Some(document) = &self.document else {
            return Ok(());
        };
        let text = document.text();
        let mut cursor = 0;

        for (range, color) in self.spans() {
            let end = range.end.min(text.len());
            if end <= cursor {
                continue;
            }
            let start = range.start.max(cursor);
            if let (Some(plain), Some(colored)) = (text.get(cursor..start), text.get(start..end)) {
                queue!(
                    out,
                    Print(plain),
                    SetForegroundColor(Color::Rgb {
                        r: color.r,
                        g: color.g,
                        b: color.b,
                    }),
                    Print(colored),
                    ResetColor
                )?;
                cursor = end;
            }
        }

        if let Some(rest) = text.get(cursor..) {
            queue!(out, Print(rest))?;
        }
        out.flush()?;
        Ok(())
    }
}

impl EditorHost for TerminalHost {
    type Handle = DecorationId;

    fn active_document(&self) -> Option<TextDocument> {
        self.document.clone()
    }

    fn theme_kind(&self) -> ThemeKind {
        self.theme
    }

    fn create_decoration(&mut self, style: &DecorationStyle) -> DecorationId {
        self.next_id += 1;
        let color = match Rgb::parse(&style.color) {
            Ok(color) => Some(color),
            Err(err) => {
                warn!(%err, "decoration will render uncolored");
                None
            }
        };
        self.decorations.insert(
            self.next_id,
            Decoration {
                color,
                ranges: Vec::new(),
            },
        );
        DecorationId(self.next_id)
    }

    fn set_decorations(&mut self, handle: &DecorationId, ranges: &[TextRange]) {
        if let Some(decoration) = self.decorations.get_mut(&handle.0) {
            decoration.ranges = ranges.to_vec();
        }
    }

    fn dispose_decoration(&mut self, handle: DecorationId) {
        self.decorations.remove(&handle.0);
    }
}

//! Comment tracking state machine
//!
//! The scanner classifies every regex hit as a [`MatchEvent`] and feeds it to
//! a [`CommentTracker`]. The tracker only knows two states and never looks at
//! the regex, so it can be tested on hand-built event streams.

use crate::document::TextRange;

/// Whether the scan is currently inside a comment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanState {
    #[default]
    Outside,
    Inside,
}

/// A classified match from the combined pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchEvent<'a> {
    CommentStart,
    CommentEnd,
    /// A tag occurrence starting at byte `offset`
    Tag { offset: usize, text: &'a str },
}

/// Consumes match events and collects the ranges to highlight
#[derive(Debug, Default)]
pub struct CommentTracker {
    state: ScanState,
    ranges: Vec<TextRange>,
}

impl CommentTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Advance the machine by one event
    pub fn feed(&mut self, event: MatchEvent<'_>) {
        match (self.state, event) {
            (ScanState::Outside, MatchEvent::CommentStart) => self.state = ScanState::Inside,
            (ScanState::Inside, MatchEvent::CommentEnd) => self.state = ScanState::Outside,
            (_, MatchEvent::CommentStart | MatchEvent::CommentEnd) => {}
            (ScanState::Inside, MatchEvent::Tag { .. }) => {}
            (ScanState::Outside, MatchEvent::Tag { offset, text }) => {
                self.ranges.extend(split_tag_match(offset, text));
            }
        }
    }

    /// Stop scanning and take the collected ranges
    pub fn finish(self) -> Vec<TextRange> {
        self.ranges
    }
}

fn is_split_char(c: char) -> bool {
    matches!(c, '{' | '}' | '"')
}

/// Ranges to highlight for one tag match
///
/// The text is split on `{`, `}` and `"`. With more than two pieces, the
/// even-indexed pieces are highlighted and the odd ones (quoted values,
/// interpolations) are skipped. Otherwise the whole match is one range.
/// Empty pieces produce nothing.
pub fn split_tag_match(offset: usize, text: &str) -> Vec<TextRange> {
    let fragments: Vec<&str> = text.split(is_split_char).collect();
    if fragments.len() <= 2 {
        return vec![TextRange::new(offset, offset + text.len())];
    }

    let mut ranges = Vec::with_capacity(fragments.len() / 2 + 1);
    let mut cursor = offset;
    for (index, fragment) in fragments.iter().enumerate() {
        if index % 2 == 0 && !fragment.is_empty() {
            ranges.push(TextRange::new(cursor, cursor + fragment.len()));
        }
        // Every split char is a single byte
        cursor += fragment.len() + 1;
    }
    ranges
}

//! Comment-aware tag scanning
//!
//! This module finds where a tag name occurs in a document:
//! - [`TagDiscovery`] lists the tag names present in the raw text
//! - [`TagScanner`] produces highlight ranges for one tag, skipping
//!   anything between the language's comment delimiters
//! - [`CommentTable`] supplies those delimiters per language

mod builtin;
mod comment;
mod discover;
mod machine;
mod rules;

pub use comment::{CommentSetting, CommentTable, DEFAULT_LANGUAGE};
pub use discover::{discover_tag_names, TagDiscovery};
pub use machine::{split_tag_match, CommentTracker, MatchEvent, ScanState};
pub use rules::TAG_NAME;

use regex::{Match, Regex};

use crate::document::TextRange;
use crate::error::ScanError;

/// Compiled scanner for one tag name under one comment setting
#[derive(Debug, Clone)]
pub struct TagScanner {
    tag_name: String,
    comments: CommentSetting,
    pattern: Regex,
    alternatives: [(&'static str, Regex); 3],
}

impl TagScanner {
    /// Compile the scanner
    ///
    /// Fails when the comment setting has an empty delimiter or a pattern
    /// that does not compile.
    pub fn new(tag_name: &str, comments: &CommentSetting) -> Result<Self, ScanError> {
        let pattern = rules::compile_combined(tag_name, comments)?;
        let alternatives = rules::compile_alternatives(tag_name, comments)?;
        Ok(Self {
            tag_name: tag_name.to_string(),
            comments: comments.clone(),
            pattern,
            alternatives,
        })
    }

    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// The comment setting this scanner was compiled for
    pub fn comments(&self) -> &CommentSetting {
        &self.comments
    }

    /// Classified matches, left to right
    ///
    /// A delimiter pattern may match empty text at some position. Such a hit
    /// is never an event; the alternatives are retried one by one at that
    /// position so a real delimiter or tag starting there is still found.
    pub fn events<'t>(&'t self, text: &'t str) -> impl Iterator<Item = MatchEvent<'t>> + 't {
        let mut pos = 0;
        std::iter::from_fn(move || {
            while pos <= text.len() {
                let caps = self.pattern.captures_at(text, pos)?;
                let (group, found) = GROUP_ORDER
                    .into_iter()
                    .find_map(|group| caps.name(group).map(|m| (group, m)))?;
                if !found.is_empty() {
                    pos = found.end();
                    return Some(classify(group, found));
                }

                let offset = found.start();
                if let Some((group, found)) = self.non_empty_at(text, offset) {
                    pos = found.end();
                    return Some(classify(group, found));
                }
                pos = offset + text[offset..].chars().next().map_or(1, char::len_utf8);
            }
            None
        })
    }

    /// First alternative with a non-empty match starting exactly at `offset`
    fn non_empty_at<'t>(
        &self,
        text: &'t str,
        offset: usize,
    ) -> Option<(&'static str, Match<'t>)> {
        self.alternatives.iter().find_map(|(group, re)| {
            re.find_at(text, offset)
                .filter(|m| m.start() == offset && !m.is_empty())
                .map(|m| (*group, m))
        })
    }

    /// Highlight ranges for this tag, outside comments, in document order
    pub fn scan(&self, text: &str) -> Vec<TextRange> {
        let mut tracker = CommentTracker::new();
        for event in self.events(text) {
            tracker.feed(event);
        }
        tracker.finish()
    }
}

const GROUP_ORDER: [&str; 3] = [
    rules::GROUP_COMMENT_START,
    rules::GROUP_COMMENT_END,
    rules::GROUP_TAG,
];

fn classify<'t>(group: &str, found: Match<'t>) -> MatchEvent<'t> {
    match group {
        rules::GROUP_COMMENT_START => MatchEvent::CommentStart,
        rules::GROUP_COMMENT_END => MatchEvent::CommentEnd,
        _ => MatchEvent::Tag {
            offset: found.start(),
            text: found.as_str(),
        },
    }
}

/// One-shot scan: compile a scanner and run it once
pub fn scan(
    text: &str,
    tag_name: &str,
    comments: &CommentSetting,
) -> Result<Vec<TextRange>, ScanError> {
    Ok(TagScanner::new(tag_name, comments)?.scan(text))
}

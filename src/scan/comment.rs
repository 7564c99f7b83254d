//! Comment delimiters per language
//!
//! Tags inside comments are never highlighted, so every language needs to
//! say where its comments start and end. Delimiters are either literal
//! strings (escaped before they reach the regex) or regular expressions.

use std::borrow::Cow;
use std::collections::HashMap;

use regex::Regex;

use super::builtin;
use crate::error::ScanError;

/// Language key holding the fallback setting
pub const DEFAULT_LANGUAGE: &str = "default";

/// Comment start/end delimiters for one language
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CommentSetting {
    /// Plain text delimiters such as `<!--` and `-->`
    Literal { start: String, end: String },
    /// Regular expressions for delimiters that need them
    Pattern { start: String, end: String },
}

impl CommentSetting {
    /// Create a setting from literal delimiters
    pub fn literal(start: &str, end: &str) -> Self {
        Self::Literal {
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    /// Create a setting from regular expressions
    pub fn pattern(start: &str, end: &str) -> Self {
        Self::Pattern {
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    /// Regex source for the comment start
    pub fn start_pattern(&self) -> Cow<'_, str> {
        match self {
            Self::Literal { start, .. } => Cow::Owned(regex::escape(start)),
            Self::Pattern { start, .. } => Cow::Borrowed(start),
        }
    }

    /// Regex source for the comment end
    pub fn end_pattern(&self) -> Cow<'_, str> {
        match self {
            Self::Literal { end, .. } => Cow::Owned(regex::escape(end)),
            Self::Pattern { end, .. } => Cow::Borrowed(end),
        }
    }

    /// Check that both delimiters are usable
    ///
    /// Empty delimiters, patterns that fail to compile and patterns that
    /// match the empty string are rejected.
    pub fn validate(&self) -> Result<(), ScanError> {
        match self {
            Self::Literal { start, end } => {
                if start.is_empty() || end.is_empty() {
                    return Err(ScanError::EmptyDelimiter);
                }
            }
            Self::Pattern { start, end } => {
                for source in [start, end] {
                    if source.is_empty() {
                        return Err(ScanError::EmptyDelimiter);
                    }
                    let re = Regex::new(source).map_err(|err| ScanError::InvalidDelimiter {
                        reason: err.to_string(),
                    })?;
                    // An empty match would shadow every tag
                    if re.is_match("") {
                        return Err(ScanError::EmptyDelimiter);
                    }
                }
            }
        }
        Ok(())
    }
}

impl Default for CommentSetting {
    fn default() -> Self {
        Self::literal("<!--", "-->")
    }
}

/// Language identifier to comment setting lookup
#[derive(Debug, Clone)]
pub struct CommentTable {
    default: CommentSetting,
    languages: HashMap<String, CommentSetting>,
}

impl CommentTable {
    /// Create a table holding only the default entry
    pub fn new(default: CommentSetting) -> Self {
        Self {
            default,
            languages: HashMap::new(),
        }
    }

    /// Create a table with the built-in languages
    pub fn builtin() -> Self {
        let mut table = Self::new(CommentSetting::default());
        for (language, setting) in builtin::all_settings() {
            table.insert(language, setting);
        }
        table
    }

    /// Add or replace the entry for a language
    ///
    /// The `default` key replaces the fallback entry.
    pub fn insert(&mut self, language: &str, setting: CommentSetting) {
        if language == DEFAULT_LANGUAGE {
            self.default = setting;
        } else {
            self.languages.insert(language.to_string(), setting);
        }
    }

    /// Setting for a language, or the default entry
    pub fn get(&self, language: &str) -> &CommentSetting {
        self.languages.get(language).unwrap_or(&self.default)
    }

    /// The fallback entry
    pub fn default_setting(&self) -> &CommentSetting {
        &self.default
    }

    /// Check whether a language has its own entry
    pub fn has_language(&self, language: &str) -> bool {
        self.languages.contains_key(language)
    }

    /// List languages with their own entry, sorted
    pub fn list_languages(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.languages.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }
}

impl Default for CommentTable {
    fn default() -> Self {
        Self::builtin()
    }
}

//! Tag name discovery
//!
//! A cheap pass over the raw text that finds which tag names occur at all.
//! It does not look at comments; the per-tag scan filters those out later.

use indexmap::IndexSet;
use regex::Regex;

use super::rules;
use crate::error::ScanError;

/// Finds distinct tag names in a document
#[derive(Debug, Clone)]
pub struct TagDiscovery {
    pattern: Regex,
}

impl TagDiscovery {
    pub fn new() -> Result<Self, ScanError> {
        let pattern = Regex::new(&rules::discovery_pattern()).map_err(|err| {
            ScanError::InvalidDiscovery {
                reason: err.to_string(),
            }
        })?;
        Ok(Self { pattern })
    }

    /// Distinct tag names in order of first occurrence
    pub fn discover(&self, text: &str) -> Vec<String> {
        let names: IndexSet<&str> = self
            .pattern
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|name| name.as_str())
            .collect();
        names.into_iter().map(str::to_string).collect()
    }
}

/// One-shot discovery: compile the pattern and run it once
pub fn discover_tag_names(text: &str) -> Result<Vec<String>, ScanError> {
    Ok(TagDiscovery::new()?.discover(text))
}

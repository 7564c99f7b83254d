//! Pattern sources for tag scanning
//!
//! A tag occurrence is `<name` or `</name` followed by either the end of the
//! line, a bare `>`, or a space, same-line attribute text, and a `>` whose
//! preceding character is not one of `-`, `?`, `%`, `$` or `=`. The last rule
//! keeps template closers like `-->`, `?>`, `%>` and `$>` and attribute
//! assignments from being read as the tag boundary.

use regex::Regex;

use super::comment::CommentSetting;
use crate::error::ScanError;

/// Names the discovery pass recognises
pub const TAG_NAME: &str = "[a-zA-Z][a-zA-Z0-9.-]*";

/// Everything after the tag name up to and including the boundary
const TAG_BOUNDARY: &str = r"(?:$|(?: .*?[^-?%$=])?>)";

/// Multi-line mode with CRLF-aware `$` and `.`
const FLAGS: &str = "(?mR)";

/// Capture group names in the combined scanner pattern
pub const GROUP_COMMENT_START: &str = "comment_start";
pub const GROUP_COMMENT_END: &str = "comment_end";
pub const GROUP_TAG: &str = "tag";

/// Pattern matching one specific tag name
pub fn tag_pattern(tag_name: &str) -> String {
    format!("</?{}{}", regex::escape(tag_name), TAG_BOUNDARY)
}

/// Pattern matching any tag, capturing its name in group 1
pub fn discovery_pattern() -> String {
    format!("{FLAGS}</?({TAG_NAME}){TAG_BOUNDARY}")
}

/// Combined pattern: comment start, comment end, then the tag
///
/// Alternation order is priority order, so a delimiter starting at the same
/// position as a tag wins.
pub fn combined_pattern(tag_name: &str, comments: &CommentSetting) -> String {
    format!(
        "{FLAGS}(?P<{GROUP_COMMENT_START}>{})|(?P<{GROUP_COMMENT_END}>{})|(?P<{GROUP_TAG}>{})",
        comments.start_pattern(),
        comments.end_pattern(),
        tag_pattern(tag_name),
    )
}

/// Compile the combined pattern for a tag
pub fn compile_combined(tag_name: &str, comments: &CommentSetting) -> Result<Regex, ScanError> {
    comments.validate()?;
    compile(tag_name, &combined_pattern(tag_name, comments))
}

/// Compile each alternative of the combined pattern on its own, in the
/// same priority order: comment start, comment end, tag
pub fn compile_alternatives(
    tag_name: &str,
    comments: &CommentSetting,
) -> Result<[(&'static str, Regex); 3], ScanError> {
    Ok([
        (GROUP_COMMENT_START, compile(tag_name, &comments.start_pattern())?),
        (GROUP_COMMENT_END, compile(tag_name, &comments.end_pattern())?),
        (GROUP_TAG, compile(tag_name, &tag_pattern(tag_name))?),
    ])
}

fn compile(tag_name: &str, source: &str) -> Result<Regex, ScanError> {
    Regex::new(&format!("{FLAGS}{source}")).map_err(|err| ScanError::InvalidPattern {
        tag: tag_name.to_string(),
        reason: err.to_string(),
    })
}

//! Built-in comment delimiters
//!
//! Markup-flavoured languages editors commonly report. Anything missing
//! falls back to HTML comments.

use super::comment::CommentSetting;

const HTML_COMMENT: (&str, &str) = ("<!--", "-->");
const JSX_COMMENT: (&str, &str) = ("{/*", "*/}");

/// Get all built-in `(language id, setting)` pairs
pub fn all_settings() -> Vec<(&'static str, CommentSetting)> {
    let html = CommentSetting::literal(HTML_COMMENT.0, HTML_COMMENT.1);
    let jsx = CommentSetting::literal(JSX_COMMENT.0, JSX_COMMENT.1);

    let mut settings: Vec<(&'static str, CommentSetting)> = [
        "html", "xml", "xsl", "svg", "vue", "svelte", "astro", "markdown", "php",
    ]
    .into_iter()
    .map(|language| (language, html.clone()))
    .collect();

    settings.push(("javascriptreact", jsx.clone()));
    settings.push(("typescriptreact", jsx));
    settings.push(("handlebars", CommentSetting::literal("{{!--", "--}}")));
    settings.push(("blade", CommentSetting::literal("{{--", "--}}")));
    settings.push(("erb", CommentSetting::literal("<%#", "%>")));
    settings
}

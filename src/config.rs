//! Configuration file support
//!
//! Loads settings from ~/.tagpaint.toml (or %USERPROFILE%\.tagpaint.toml on
//! Windows).
//!
//! Example:
//! ```toml
//! # tagpaint configuration
//! enabled = true
//! theme = "dark"
//!
//! [comments.vue]
//! start = "<!--"
//! end = "-->"
//!
//! [comments.twig]
//! start-pattern = '\{#'
//! end-pattern = '#\}'
//! ```
//!
//! A missing file means defaults. Bad values are logged and skipped; only a
//! file that is not valid TOML fails to load.

use std::fs;
use std::path::{Path, PathBuf};

use toml::{Table, Value};
use tracing::{debug, warn};

use crate::error::ConfigError;
use crate::palette::ThemeKind;
use crate::scan::{CommentSetting, CommentTable};

const FILE_NAME: &str = ".tagpaint.toml";

/// Configuration settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Whether tag highlighting runs at all
    pub enabled: bool,
    /// Theme kind to assume when the host cannot report one
    pub theme: Option<ThemeKind>,
    /// Per-language comment overrides, in file order
    pub comments: Vec<(String, CommentSetting)>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enabled: true,
            theme: None,
            comments: Vec::new(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(FILE_NAME))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(FILE_NAME))
        }
    }

    /// Load configuration from the default path
    ///
    /// Never fails: unreadable or malformed files fall back to defaults.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path).unwrap_or_else(|err| {
                warn!(path = %path.display(), %err, "ignoring config file");
                Self::default()
            }),
            _ => Self::default(),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> crate::error::Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = Self::parse(&contents)?;
        debug!(path = %path.display(), overrides = config.comments.len(), "loaded config");
        Ok(config)
    }

    /// Parse config file contents
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let table: Table = contents.parse()?;
        let mut config = Config::default();
        config.apply(&table);
        Ok(config)
    }

    /// Apply settings from a parsed table
    fn apply(&mut self, table: &Table) {
        if let Some(value) = table.get("enabled") {
            match value.as_bool() {
                Some(enabled) => self.enabled = enabled,
                None => warn_invalid("enabled", value),
            }
        }

        if let Some(value) = table.get("theme") {
            match value.as_str().and_then(ThemeKind::from_name) {
                Some(theme) => self.theme = Some(theme),
                None => warn_invalid("theme", value),
            }
        }

        if let Some(value) = table.get("comments") {
            let Some(languages) = value.as_table() else {
                warn_invalid("comments", value);
                return;
            };
            for (language, entry) in languages {
                match parse_comment(language, entry) {
                    Ok(setting) => self.comments.push((language.clone(), setting)),
                    Err(err) => warn!(%err, "skipping comment override"),
                }
            }
        }
    }

    /// Built-in comment table with this config's overrides applied
    pub fn comment_table(&self) -> CommentTable {
        let mut table = CommentTable::builtin();
        for (language, setting) in &self.comments {
            table.insert(language, setting.clone());
        }
        table
    }
}

fn warn_invalid(key: &str, value: &Value) {
    let err = ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    };
    warn!(%err, "ignoring config value");
}

/// Parse one `[comments.<language>]` entry
fn parse_comment(language: &str, entry: &Value) -> Result<CommentSetting, ConfigError> {
    let key = format!("comments.{language}");
    let entry = entry.as_table().ok_or_else(|| ConfigError::InvalidValue {
        key: key.clone(),
        value: entry.to_string(),
    })?;
    let text = |name: &str| entry.get(name).and_then(Value::as_str);

    let setting = match (text("start"), text("end"), text("start-pattern"), text("end-pattern")) {
        (Some(start), Some(end), _, _) => CommentSetting::literal(start, end),
        (_, _, Some(start), Some(end)) => CommentSetting::pattern(start, end),
        _ => return Err(ConfigError::IncompleteComment(language.to_string())),
    };

    setting.validate().map_err(|err| ConfigError::InvalidValue {
        key,
        value: err.to_string(),
    })?;
    Ok(setting)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let contents = r#"
# Comment
enabled = false
theme = "light"

[comments.vue]
start = "<!--"
end = "-->"

[comments.twig]
start-pattern = '\{#'
end-pattern = '#\}'
        "#;

        let config = Config::parse(contents).unwrap();
        assert!(!config.enabled);
        assert_eq!(config.theme, Some(ThemeKind::Light));
        assert_eq!(config.comments.len(), 2);

        let table = config.comment_table();
        assert_eq!(table.get("twig"), &CommentSetting::pattern(r"\{#", r"#\}"));
        assert_eq!(table.get("vue"), &CommentSetting::literal("<!--", "-->"));
    }

    #[test]
    fn test_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.enabled);
        assert_eq!(config.theme, None);
    }

    #[test]
    fn test_invalid_values_skipped() {
        let contents = r#"
enabled = "sometimes"
theme = "sepia"

[comments.broken]
start-pattern = "("
end-pattern = ")"

[comments.half]
start = "<!--"

[comments.ok]
start = "%{"
end = "}%"
        "#;

        let config = Config::parse(contents).unwrap();
        assert!(config.enabled);
        assert_eq!(config.theme, None);
        assert_eq!(
            config.comments,
            vec![("ok".to_string(), CommentSetting::literal("%{", "}%"))]
        );
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            Config::parse("enabled = "),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_parse_comment_errors() {
        let value: Value = "x".into();
        assert!(matches!(
            parse_comment("md", &value),
            Err(ConfigError::InvalidValue { .. })
        ));

        let mut entry = Table::new();
        entry.insert("end".to_string(), "-->".into());
        assert!(matches!(
            parse_comment("md", &Value::Table(entry)),
            Err(ConfigError::IncompleteComment(lang)) if lang == "md"
        ));
    }

    #[test]
    fn test_default_override() {
        let config = Config::parse("[comments.default]\nstart = \"/*\"\nend = \"*/\"\n").unwrap();
        let table = config.comment_table();
        assert_eq!(table.get("unknown"), &CommentSetting::literal("/*", "*/"));
        // Built-in languages keep their own entry
        assert_eq!(table.get("html"), &CommentSetting::literal("<!--", "-->"));
    }
}

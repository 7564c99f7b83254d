//! Error types for tagpaint

use thiserror::Error;

/// Result type alias for tagpaint operations
pub type Result<T> = std::result::Result<T, TagpaintError>;

/// Crate-level error type
#[derive(Error, Debug)]
pub enum TagpaintError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("{0}")]
    Message(String),
}

/// Errors raised while building a tag scanner
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("invalid scan pattern for tag `{tag}`: {reason}")]
    InvalidPattern { tag: String, reason: String },

    #[error("invalid comment delimiter: {reason}")]
    InvalidDelimiter { reason: String },

    #[error("invalid tag discovery pattern: {reason}")]
    InvalidDiscovery { reason: String },

    #[error("empty comment delimiter")]
    EmptyDelimiter,
}

/// Errors raised while parsing a color literal
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("unrecognised color literal: {0}")]
    Unrecognised(String),

    #[error("color channel out of range in {0}")]
    ChannelOutOfRange(String),
}

/// Errors raised while loading the configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("malformed TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid value for `{key}`: {value}")]
    InvalidValue { key: String, value: String },

    #[error("comment entry `{0}` needs both a start and an end delimiter")]
    IncompleteComment(String),
}

//! Domain error types for fgarage
//!
//! Provides structured error types for different domains:
//! - `CarouselError` for selector preconditions
//! - `ConfigError` for the configuration file
//! - `ContentError` for site content loading and validation
//! - `GarageError` as the top-level error type for startup

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for fgarage
#[derive(Debug, Error)]
pub enum GarageError {
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    #[error("Carousel error: {0}")]
    Carousel(#[from] CarouselError),
}

/// Contract violations on a rotating selector.
///
/// These never reach the user: views log them and keep the current item.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CarouselError {
    #[error("A carousel needs at least one item")]
    Empty,

    #[error("Index {index} is out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors related to the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Interval '{name}' must be at least {min}ms (got {value}ms)")]
    IntervalTooShort {
        name: &'static str,
        value: u64,
        min: u64,
    },

    #[error("Slider nudge step must be between 0 and 100 (got {0})")]
    InvalidNudgeStep(f32),
}

/// Errors related to site content
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML content: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON content: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported content format: {0} (expected .toml or .json)")]
    UnsupportedFormat(PathBuf),

    #[error("Content section '{0}' must not be empty")]
    EmptySection(&'static str),

    #[error("Rating for '{name}' must be between 0 and 5 (got {rating})")]
    InvalidRating { name: String, rating: f32 },
}

/// Result type alias for GarageError
pub type Result<T> = std::result::Result<T, GarageError>;

/// Result type alias for ConfigError
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for ContentError
pub type ContentResult<T> = std::result::Result<T, ContentError>;

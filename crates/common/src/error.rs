//! Error types shared across touchmap crates.

use std::path::PathBuf;

/// Top-level error type for touchmap operations.
#[derive(Debug, thiserror::Error)]
pub enum TouchmapError {
    #[error("Log file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Malformed timestamp on line {line}: {content:?}")]
    MalformedTimestamp { line: usize, content: String },

    #[error("Malformed coordinate on line {line}: {token:?} is not a base-16 value")]
    MalformedCoordinate { line: usize, token: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Render error: {message}")]
    Render { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using TouchmapError.
pub type TouchmapResult<T> = Result<T, TouchmapError>;

impl TouchmapError {
    pub fn malformed_timestamp(line: usize, content: impl Into<String>) -> Self {
        Self::MalformedTimestamp {
            line,
            content: content.into(),
        }
    }

    pub fn malformed_coordinate(line: usize, token: impl Into<String>) -> Self {
        Self::MalformedCoordinate {
            line,
            token: token.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render {
            message: msg.into(),
        }
    }

    /// Whether the error was raised while scanning the log contents.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedTimestamp { .. } | Self::MalformedCoordinate { .. }
        )
    }
}

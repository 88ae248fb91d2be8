use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for cloudbuild-gen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// File operation failed on a specific path.
    #[error("Failed to {action} '{}': {source}", .path.display())]
    FileAccess {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// A disk operation was requested before a target path was assigned.
    #[error("No output path set for solution '{solution}'")]
    PathNotSet { solution: String },

    /// Solution identifier is invalid.
    #[error(
        "Invalid solution identifier '{0}': must be alphanumeric with hyphens, underscores, or periods"
    )]
    InvalidSolutionId(String),

    /// Template could not be parsed or rendered for a solution.
    #[error("Failed to render template for solution '{solution}': {reason}")]
    TemplateRender { solution: String, reason: String },

    /// Path escapes the repository root.
    #[error("Path traversal detected: {0}")]
    PathTraversal(String),

    /// Input failed validation.
    #[error("{0}")]
    Validation(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn file_access(
        action: &'static str,
        path: impl Into<PathBuf>,
        source: io::Error,
    ) -> Self {
        AppError::FileAccess { action, path: path.into(), source }
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::FileAccess { source, .. } => source.kind(),
            AppError::Configuration(_)
            | AppError::PathNotSet { .. }
            | AppError::InvalidSolutionId(_)
            | AppError::PathTraversal(_)
            | AppError::TemplateRender { .. }
            | AppError::Validation(_)
            | AppError::ParseError { .. }
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
        }
    }
}

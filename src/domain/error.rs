use std::io;

use thiserror::Error;

/// Library-wide error type for pake-config operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Required environment parameter is absent.
    #[error("{0} is not set")]
    MissingEnvVar(&'static str),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// A configuration document is not valid JSON.
    #[error("Failed to parse {path}: {details}")]
    JsonParse { path: String, details: String },

    /// A configuration document is valid JSON but lacks a field we must write.
    #[error("Malformed document {path}: {details}")]
    MalformedDocument { path: String, details: String },

    /// Template registration or rendering failed.
    #[error("Template error: {0}")]
    Template(String),

    /// Path escapes the project root.
    #[error("Path traversal detected: {0}")]
    PathTraversal(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn malformed<P: Into<String>, D: Into<String>>(path: P, details: D) -> Self {
        AppError::MalformedDocument { path: path.into(), details: details.into() }
    }

    /// Provide an `io::ErrorKind`-like view for callers that only care about the category.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::MissingEnvVar(_) => io::ErrorKind::NotFound,
            AppError::Configuration(_)
            | AppError::JsonParse { .. }
            | AppError::MalformedDocument { .. }
            | AppError::PathTraversal(_)
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::Template(_) => io::ErrorKind::Other,
        }
    }
}

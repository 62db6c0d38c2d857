use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the OpenAPI explorer library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Only loading and resolving the document can fail. Catalog queries answer
/// every condition (unknown path, unknown method, no match) with text.
#[derive(Debug, Error)]
pub enum Error {
    /// Document could not be located at the resolved path.
    #[error("OpenAPI document not found at {path}")]
    DocumentNotFound { path: PathBuf },

    /// The document was read but could not be parsed into the expected shape.
    #[error("invalid OpenAPI document{}: {message}", format_source(.path))]
    InvalidDocument {
        path: Option<PathBuf>,
        message: String,
    },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the default document location")]
    ProjectDirsUnavailable,

    /// Raised when a method token is not one of the canonical HTTP methods.
    #[error("unknown HTTP method: {token}")]
    UnknownMethod { token: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid_document(path: Option<PathBuf>, err: serde_json::Error) -> Self {
        Error::InvalidDocument {
            path,
            message: err.to_string(),
        }
    }
}

fn format_source(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" at {}", path.display()),
        None => String::new(),
    }
}

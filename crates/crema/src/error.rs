//! Error types for the theming system.

use std::path::PathBuf;

/// Result type alias for theming operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the theming system.
///
/// Only selection persistence is fallible. An unknown theme identifier is
/// not an error; the controller substitutes the default flavor for it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Selection file I/O error.
    #[error("Failed to access selection store '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Selection file exists but does not hold a JSON object.
    #[error("Malformed selection store '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Platform application directories could not be determined.
    #[error("Could not determine application directories for '{application}'")]
    AppDirs { application: String },
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a malformed-store error.
    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }

    /// Create an application-directories error.
    pub fn app_dirs(application: impl Into<String>) -> Self {
        Self::AppDirs {
            application: application.into(),
        }
    }
}

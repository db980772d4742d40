//! Error types for navcap
//!
//! Errors only come out of loading: configuration, catalogs and navigation
//! definitions. Building abilities, filtering and rendering never fail.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for navcap operations
#[derive(Debug, Error)]
pub enum NavError {
    #[error("unknown action: {0}")]
    UnknownAction(String),
    #[error("unknown subject: {0}")]
    UnknownSubject(String),
    #[error("permission id {0} is defined more than once")]
    DuplicatePermission(i64),
    #[error("duplicate sibling title at {path}")]
    DuplicateTitle { path: String },
    #[error("{path} is nested {depth} levels deep (max {max})")]
    TooDeep { path: String, depth: usize, max: usize },
    #[error("{path} declares an empty children list")]
    EmptyBranch { path: String },
    #[error("{path} has neither a link nor children")]
    DeadLeaf { path: String },
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid json in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Result type alias for navcap operations
pub type Result<T> = std::result::Result<T, NavError>;

/// Read a file into a string, tagging failures with the path
pub(crate) fn read_file(path: &std::path::Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| NavError::Io { path: path.to_path_buf(), source })
}

/// Wrap a serde_json error with where the document came from
pub(crate) fn json_err(origin: impl Into<String>) -> impl FnOnce(serde_json::Error) -> NavError {
    let origin = origin.into();
    move |source| NavError::Json { origin, source }
}

//! Error type for the fallible edges of the crate.
//!
//! Assembly and template loading are total; only reading a user templates
//! file and looking up a template by name can fail.

use std::path::PathBuf;

/// Errors from template-file loading and template lookup.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read templates file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse templates file '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown template: {0}")]
    UnknownTemplate(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

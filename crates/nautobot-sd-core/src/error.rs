//! Core error types for nautobot-sd-core

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort the discovery pipeline
#[derive(Error, Debug)]
pub enum CoreError {
    /// Required environment variable missing or blank
    #[error("{0} environment variable is not set")]
    MissingEnv(&'static str),

    /// Environment file exists but could not be read or parsed
    #[error("failed to load environment file {}: {source}", .path.display())]
    EnvFile {
        /// File that was read
        path: PathBuf,
        /// Underlying dotenv error
        #[source]
        source: dotenvy::Error,
    },

    /// Query directory could not be listed
    #[error("failed to read query directory {}: {source}", .path.display())]
    QueryDir {
        /// Directory that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Target list could not be serialized
    #[error("failed to serialize targets: {0}")]
    Serialize(#[from] serde_json::Error),
}

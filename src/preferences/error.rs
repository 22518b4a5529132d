//! Preference storage error types.

use std::path::PathBuf;

/// Errors that can occur while persisting preferences.
#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    /// Failed to read the preference file
    #[error("Failed to read preferences from {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write the preference file
    #[error("Failed to write preferences to {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to encode the preference file
    #[error("Failed to serialize preferences: {0}")]
    SerializationFailed(String),

    /// Failed to encode a single preference value
    #[error("Failed to encode preference '{key}': {message}")]
    EncodeFailed { key: String, message: String },
}

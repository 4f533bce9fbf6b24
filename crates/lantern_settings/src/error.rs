//! Settings error types

use thiserror::Error;

/// Failures from a persistence backend
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing a key failed
    #[error("I/O failed for {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The backend cannot serve requests at all
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Settings store errors
///
/// None of these escape the store's public operations; they are logged and
/// turn into [`StoreState::Degraded`](crate::StoreState::Degraded).
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A record could not be encoded or decoded
    #[error("Malformed settings record: {0}")]
    Malformed(#[from] serde_json::Error),

    /// An event sink refused a notification
    #[error("Event sink failed: {0}")]
    Sink(String),

    /// The weather collaborator had nothing to offer
    #[error("Weather unavailable: {0}")]
    Weather(String),
}

/// Result type for settings operations
pub type Result<T> = std::result::Result<T, SettingsError>;

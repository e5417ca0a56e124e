//! Persistence abstraction and JSON file implementation.

/// Pretty-printed JSON files on disk.
pub mod json;

use std::path::PathBuf;

use thiserror::Error;

use crate::{qso::ContactRecord, settings::StationSettings};

/// Failure reading or writing persisted state.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The file could not be read or written.
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The file content is not the expected JSON.
    #[error("invalid JSON: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result alias for persistence calls.
pub type PersistResult<T> = Result<T, PersistError>;

/// Where the log and settings live between sessions.
///
/// Loads report errors; deciding to fall back to empty state is the
/// caller's job. Saves overwrite whatever was there.
pub trait LogStorage: Send {
    /// Reads the persisted contact log.
    fn load_log(&mut self) -> PersistResult<Vec<ContactRecord>>;
    /// Overwrites the persisted contact log.
    fn save_log(&mut self, records: &[ContactRecord]) -> PersistResult<()>;
    /// Reads persisted settings.
    fn load_settings(&mut self) -> PersistResult<StationSettings>;
    /// Overwrites persisted settings.
    fn save_settings(&mut self, settings: &StationSettings) -> PersistResult<()>;
}

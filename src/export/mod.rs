//! Log exporters and export-file writing.

/// ADIF serializer.
pub mod adif;
/// Comma-separated table serializer.
pub mod csv;

use std::{
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// Extension added to ADIF exports chosen without one.
pub const ADIF_EXTENSION: &str = "adi";
/// Extension added to table exports chosen without one.
pub const CSV_EXTENSION: &str = "csv";

/// Failure writing an export file.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The destination could not be written.
    #[error("failed to write export to {}: {source}", .path.display())]
    Write {
        /// Destination file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// Returns `path` with `extension` added when it has none.
pub fn with_default_extension(path: &Path, extension: &str) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(extension)
    }
}

/// Writes `contents` as UTF-8, replacing any existing file.
pub fn write_export(path: &Path, contents: &str) -> Result<(), ExportError> {
    fs::write(path, contents).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

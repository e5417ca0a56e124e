//! JSON-file implementation of [`LogStorage`].

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Serialize, de::DeserializeOwned};

use crate::{qso::ContactRecord, settings::StationSettings};

use super::{LogStorage, PersistError, PersistResult};

/// Default log file name.
pub const LOG_FILE: &str = "qo100_logs.json";
/// Default settings file name.
pub const SETTINGS_FILE: &str = "qo100_settings.json";

/// Stores the log and settings as pretty-printed UTF-8 JSON files.
///
/// A missing file loads as empty state. Writes are whole-file overwrites.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    log_path: PathBuf,
    settings_path: PathBuf,
}

impl JsonFileStorage {
    /// Storage at explicit paths.
    pub fn new(log_path: impl Into<PathBuf>, settings_path: impl Into<PathBuf>) -> Self {
        Self {
            log_path: log_path.into(),
            settings_path: settings_path.into(),
        }
    }

    /// Storage using [`LOG_FILE`] and [`SETTINGS_FILE`] inside `dir`.
    pub fn default_paths(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(dir.join(LOG_FILE), dir.join(SETTINGS_FILE))
    }

    /// Path of the log file.
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Path of the settings file.
    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }
}

impl LogStorage for JsonFileStorage {
    fn load_log(&mut self) -> PersistResult<Vec<ContactRecord>> {
        read_json_or_default(&self.log_path)
    }

    fn save_log(&mut self, records: &[ContactRecord]) -> PersistResult<()> {
        write_json(&self.log_path, records)
    }

    fn load_settings(&mut self) -> PersistResult<StationSettings> {
        read_json_or_default(&self.settings_path)
    }

    fn save_settings(&mut self, settings: &StationSettings) -> PersistResult<()> {
        write_json(&self.settings_path, settings)
    }
}

fn read_json_or_default<T: DeserializeOwned + Default>(path: &Path) -> PersistResult<T> {
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(T::default()),
        Err(source) => {
            return Err(PersistError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    Ok(serde_json::from_str(&contents)?)
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> PersistResult<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).map_err(|source| PersistError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("wrote {}", path.display());
    Ok(())
}

//! Application state and the commands a front end drives it with.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::{
    core::store::{LogStore, StoreError},
    engine::{EngineError, builder::build_record},
    export::{self, ADIF_EXTENSION, CSV_EXTENSION, ExportError, adif, csv},
    persist::{LogStorage, PersistError},
    qso::{ContactDraft, ContactPatch, ContactRecord},
    settings::{SettingsError, SettingsUpdate, StationSettings, detect_system_language},
    types::RecordIndex,
};

/// Errors returned by [`Logbook`] commands.
///
/// Only [`AppError::NotPersisted`] follows a change that was applied; every
/// other variant leaves the state untouched.
#[derive(Debug, Error)]
pub enum AppError {
    /// Draft failed validation.
    #[error(transparent)]
    Validation(#[from] EngineError),
    /// Index does not name a record.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// Settings form value outside the offered choices.
    #[error(transparent)]
    Settings(#[from] SettingsError),
    /// The in-memory change stands but the file copy is stale.
    #[error("change kept in memory but not saved: {0}")]
    NotPersisted(#[source] PersistError),
    /// Export requested with an empty log.
    #[error("no contacts to export")]
    NothingToExport,
    /// Export file could not be written.
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Session state: settings, the contact log, and where both are saved.
#[derive(Debug)]
pub struct Logbook<S> {
    settings: StationSettings,
    store: LogStore,
    storage: S,
    startup_save_error: Option<PersistError>,
}

impl<S: LogStorage> Logbook<S> {
    /// Loads settings and log from `storage`.
    ///
    /// Unreadable files fall back to empty state. When no language is saved,
    /// one is detected from the locale and saved straight away; if that save
    /// fails the logbook still opens and [`Self::startup_save_error`] says why.
    pub fn open(mut storage: S) -> Self {
        let mut settings = storage.load_settings().unwrap_or_else(|err| {
            log::warn!("settings unreadable, using defaults: {err}");
            StationSettings::default()
        });

        let mut startup_save_error = None;
        if settings.language.is_empty() {
            settings.language = detect_system_language().to_string();
            log::info!("no language saved, detected {}", settings.language);
            if let Err(err) = storage.save_settings(&settings) {
                log::error!("failed to save settings: {err}");
                startup_save_error = Some(err);
            }
        }

        let records = storage.load_log().unwrap_or_else(|err| {
            log::warn!("log unreadable, starting empty: {err}");
            Vec::new()
        });
        log::info!("opened log with {} contacts", records.len());

        Self {
            settings,
            store: LogStore::from_records(records),
            storage,
            startup_save_error,
        }
    }

    /// Why the detected language could not be saved during [`Self::open`].
    ///
    /// Cleared by the next successful [`Self::update_settings`].
    pub fn startup_save_error(&self) -> Option<&PersistError> {
        self.startup_save_error.as_ref()
    }

    /// Current settings.
    pub fn settings(&self) -> &StationSettings {
        &self.settings
    }

    /// The contact log.
    pub fn store(&self) -> &LogStore {
        &self.store
    }

    /// All records in log order.
    pub fn records(&self) -> &[ContactRecord] {
        self.store.records()
    }

    /// Backing storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Validates `draft`, stamps it with the current UTC time, and appends it.
    pub fn append_record(&mut self, draft: &ContactDraft) -> Result<RecordIndex, AppError> {
        self.append_record_at(draft, Utc::now())
    }

    /// [`Self::append_record`] with an explicit timestamp.
    pub fn append_record_at(&mut self, draft: &ContactDraft, now: DateTime<Utc>) -> Result<RecordIndex, AppError> {
        let rec = build_record(draft, &self.settings, now)?;
        let index = self.store.append(rec);
        log::debug!("appended contact #{index}");
        self.persist_log()?;
        Ok(index)
    }

    /// Applies `patch` to the record at `index`.
    pub fn edit_record(&mut self, index: RecordIndex, patch: &ContactPatch) -> Result<(), AppError> {
        self.store.edit(index, patch)?;
        log::debug!("edited contact #{index}");
        self.persist_log()
    }

    /// Removes the record at `index`; later records move down by one.
    pub fn delete_record(&mut self, index: RecordIndex) -> Result<ContactRecord, AppError> {
        let removed = self.store.delete(index)?;
        log::debug!("deleted contact #{index}");
        self.persist_log()?;
        Ok(removed)
    }

    /// Replaces the settings. Records already logged keep their values.
    ///
    /// A rejected form value leaves the current settings in place.
    pub fn update_settings(&mut self, update: SettingsUpdate) -> Result<(), AppError> {
        self.settings = update.into_settings()?;
        self.storage.save_settings(&self.settings).map_err(|err| {
            log::error!("failed to save settings: {err}");
            AppError::NotPersisted(err)
        })?;
        self.startup_save_error = None;
        log::info!("settings saved");
        Ok(())
    }

    /// Writes the ADIF export to `destination`.
    ///
    /// `None` means the user cancelled and is not an error. Returns the path
    /// actually written, with `.adi` added if it had no extension.
    pub fn export_adif(&self, destination: Option<&Path>) -> Result<Option<PathBuf>, AppError> {
        self.export_with(destination, ADIF_EXTENSION, adif::serialize_log)
    }

    /// Writes the comma-separated export to `destination`; see [`Self::export_adif`].
    pub fn export_csv(&self, destination: Option<&Path>) -> Result<Option<PathBuf>, AppError> {
        self.export_with(destination, CSV_EXTENSION, csv::serialize_table)
    }

    fn export_with(
        &self,
        destination: Option<&Path>,
        extension: &str,
        serialize: fn(&[ContactRecord]) -> String,
    ) -> Result<Option<PathBuf>, AppError> {
        if self.store.is_empty() {
            return Err(AppError::NothingToExport);
        }
        let Some(destination) = destination else {
            return Ok(None);
        };

        let path = export::with_default_extension(destination, extension);
        export::write_export(&path, &serialize(self.store.records())).inspect_err(|err| {
            log::error!("{err}");
        })?;
        log::info!("exported {} contacts to {}", self.store.len(), path.display());
        Ok(Some(path))
    }

    fn persist_log(&mut self) -> Result<(), AppError> {
        self.storage.save_log(self.store.records()).map_err(|err| {
            log::error!("failed to save log: {err}");
            AppError::NotPersisted(err)
        })
    }
}

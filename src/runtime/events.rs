//! Runtime event stream payloads.

use std::path::PathBuf;

use crate::types::RecordIndex;

/// Events emitted from the single-writer runtime loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEvent {
    /// A contact was appended.
    Appended {
        /// Position of the new contact.
        index: RecordIndex,
    },
    /// A contact was edited in place.
    Edited {
        /// Position of the edited contact.
        index: RecordIndex,
    },
    /// A contact was removed; later positions moved down by one.
    Deleted {
        /// Position the contact occupied.
        index: RecordIndex,
    },
    /// Station settings were replaced.
    SettingsUpdated,
    /// An export file was written.
    Exported {
        /// File written.
        path: PathBuf,
    },
    /// Periodic UTC clock for the form's date/time display.
    ClockTick {
        /// `YYYY-MM-DD`
        date: String,
        /// `HH:MM:SS`
        time: String,
    },
}

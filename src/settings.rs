//! Station settings and interface-language detection.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Interface languages the front end ships strings for.
pub const AVAILABLE_LANGUAGES: &[&str] = &["en", "zh"];

/// CQ zones offered by the settings form; empty means unset.
pub const CQ_ZONES: RangeInclusive<u8> = 1..=40;

/// ITU zones offered by the settings form; empty means unset.
pub const ITU_ZONES: RangeInclusive<u8> = 1..=75;

/// Language used when the locale names none of [`AVAILABLE_LANGUAGES`].
pub const FALLBACK_LANGUAGE: &str = "en";

/// Locale variables consulted, most specific first.
const LOCALE_VARS: &[&str] = &["LC_ALL", "LC_MESSAGES", "LANG"];

/// A settings form value outside the offered choices.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// Language code is not one of [`AVAILABLE_LANGUAGES`].
    #[error("unsupported language {0:?}")]
    UnknownLanguage(String),
    /// Not empty and not a plain number in [`CQ_ZONES`].
    #[error("CQ zone {0:?} is not between 1 and 40")]
    InvalidCqZone(String),
    /// Not empty and not a plain number in [`ITU_ZONES`].
    #[error("ITU zone {0:?} is not between 1 and 75")]
    InvalidItuZone(String),
}

/// Persisted station settings.
///
/// Every key is optional in the file; a missing key loads as empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StationSettings {
    /// Interface language code.
    pub language: String,
    /// Own callsign.
    pub my_call: String,
    /// Own Maidenhead locator.
    pub grid: String,
    /// Own CQ zone.
    pub cq_zone: String,
    /// Own ITU zone.
    pub itu_zone: String,
    /// Own country.
    pub country: String,
}

impl StationSettings {
    /// True once an operator callsign is configured.
    pub fn has_callsign(&self) -> bool {
        !self.my_call.trim().is_empty()
    }
}

/// Values submitted from the settings form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SettingsUpdate {
    /// Interface language code.
    pub language: String,
    /// Own callsign.
    pub my_call: String,
    /// Own Maidenhead locator.
    pub grid: String,
    /// Own CQ zone.
    pub cq_zone: String,
    /// Own ITU zone.
    pub itu_zone: String,
    /// Own country.
    pub country: String,
}

impl SettingsUpdate {
    /// Checks and normalizes the form values into a settings value.
    ///
    /// Callsign and locator are trimmed and upper-cased, country is trimmed.
    /// Language and zones must be one of the form's choices; zones may be
    /// left empty.
    pub fn into_settings(self) -> Result<StationSettings, SettingsError> {
        let language = self.language.trim();
        if !AVAILABLE_LANGUAGES.contains(&language) {
            return Err(SettingsError::UnknownLanguage(self.language));
        }
        let cq_zone =
            checked_zone(&self.cq_zone, CQ_ZONES).ok_or_else(|| SettingsError::InvalidCqZone(self.cq_zone.clone()))?;
        let itu_zone =
            checked_zone(&self.itu_zone, ITU_ZONES).ok_or_else(|| SettingsError::InvalidItuZone(self.itu_zone.clone()))?;

        Ok(StationSettings {
            language: language.to_string(),
            my_call: self.my_call.trim().to_uppercase(),
            grid: self.grid.trim().to_uppercase(),
            cq_zone,
            itu_zone,
            country: self.country.trim().to_string(),
        })
    }
}

/// `""` or the zone number as the form lists it (`"7"`, never `"07"`).
fn checked_zone(text: &str, zones: RangeInclusive<u8>) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        return Some(String::new());
    }
    let zone: u8 = text.parse().ok()?;
    (zones.contains(&zone) && zone.to_string() == text).then(|| text.to_string())
}

impl From<&StationSettings> for SettingsUpdate {
    fn from(s: &StationSettings) -> Self {
        Self {
            language: s.language.clone(),
            my_call: s.my_call.clone(),
            grid: s.grid.clone(),
            cq_zone: s.cq_zone.clone(),
            itu_zone: s.itu_zone.clone(),
            country: s.country.clone(),
        }
    }
}

/// Maps a POSIX locale such as `zh_CN.UTF-8` to an available language code.
pub fn language_from_locale(locale: &str) -> Option<&'static str> {
    let code = locale
        .split(['_', '-', '.', '@'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    AVAILABLE_LANGUAGES.iter().copied().find(|l| *l == code)
}

/// Picks a language from the process locale, falling back to English.
pub fn detect_system_language() -> &'static str {
    LOCALE_VARS
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|v| !v.is_empty())
        .and_then(|v| language_from_locale(&v))
        .unwrap_or(FALLBACK_LANGUAGE)
}

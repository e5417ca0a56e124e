//! Derivation engine: uplink frequency, band names, and record building.

/// Frequency-to-band classifiers.
pub mod band;
/// Draft validation and record construction.
pub mod builder;
/// Uplink derivation and frequency formatting.
pub mod frequency;

use thiserror::Error;

/// Reasons a draft cannot become a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Settings carry no own callsign.
    #[error("own callsign is not set; configure it in settings first")]
    MissingOperatorCallsign,
    /// Peer callsign is empty.
    #[error("peer callsign is required")]
    MissingPeerCallsign,
    /// Downlink frequency is empty.
    #[error("downlink frequency is required")]
    MissingDownlinkFrequency,
    /// Frequency text is not a finite decimal.
    #[error("invalid frequency: {input:?}")]
    InvalidFrequency {
        /// Text as supplied.
        input: String,
    },
}

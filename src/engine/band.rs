//! Band classification for the `BAND` and `BAND_RX` tags.
//!
//! The two classifiers disagree outside the 2.4 GHz range: [`classify_band`]
//! reports `UNK` there while [`classify_rx_band`] reports `13CM`. Exported
//! logs depend on both spellings, so they stay separate functions.

use std::ops::RangeInclusive;

use crate::types::BandName;

use super::frequency::parse_frequency;

/// Frequencies labelled `13CM`, in MHz.
pub const CM13_RANGE_MHZ: RangeInclusive<f64> = 10400.0..=10500.0;
/// Frequencies labelled `3CM`, in MHz.
pub const CM3_RANGE_MHZ: RangeInclusive<f64> = 2400.0..=2500.0;

/// Three-way classification used for `BAND`.
pub fn classify_band(freq_mhz: f64) -> BandName {
    match freq_mhz {
        f if CM13_RANGE_MHZ.contains(&f) => BandName::Cm13,
        f if CM3_RANGE_MHZ.contains(&f) => BandName::Cm3,
        _ => BandName::Unknown,
    }
}

/// Two-way classification used for `BAND_RX`. Never returns `UNK`.
pub fn classify_rx_band(freq_mhz: f64) -> BandName {
    if CM3_RANGE_MHZ.contains(&freq_mhz) {
        BandName::Cm3
    } else {
        BandName::Cm13
    }
}

/// [`classify_band`] over stored text; unparseable text is `UNK`.
pub fn classify_band_text(text: &str) -> BandName {
    parse_frequency(text).map_or(BandName::Unknown, classify_band)
}

/// [`classify_rx_band`] over stored text; unparseable text takes the
/// classifier's fallback, `13CM`.
pub fn classify_rx_band_text(text: &str) -> BandName {
    parse_frequency(text).map_or(BandName::Cm13, classify_rx_band)
}

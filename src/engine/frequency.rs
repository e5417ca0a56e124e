//! Uplink derivation and frequency text handling.

use super::EngineError;

/// Offset between the QO-100 narrowband downlink and uplink, in MHz.
pub const TRANSPONDER_OFFSET_MHZ: f64 = 8089.5;

/// Decimal places of a stored uplink value.
pub const UPLINK_DECIMALS: usize = 5;

/// Uplink frequency for a given downlink frequency. No range check.
pub fn derive_uplink_frequency(downlink_mhz: f64) -> f64 {
    downlink_mhz - TRANSPONDER_OFFSET_MHZ
}

/// Parses frequency text, rejecting anything that is not a finite decimal.
pub fn parse_frequency(text: &str) -> Result<f64, EngineError> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(f) if f.is_finite() => Ok(f),
        _ => Err(EngineError::InvalidFrequency {
            input: text.to_string(),
        }),
    }
}

/// Formats an uplink value the way it is stored on the record.
pub fn format_uplink(uplink_mhz: f64) -> String {
    format!("{uplink_mhz:.UPLINK_DECIMALS$}")
}

/// Parses, derives, and formats in one step, as the form does on each keystroke.
pub fn uplink_text_for(downlink_text: &str) -> Result<String, EngineError> {
    parse_frequency(downlink_text).map(|d| format_uplink(derive_uplink_frequency(d)))
}

/// Reformats frequency text to `decimals` places, or returns it unchanged
/// when it does not parse.
pub fn reformat_or_raw(text: &str, decimals: usize) -> String {
    match parse_frequency(text) {
        Ok(f) => format!("{f:.decimals$}"),
        Err(_) => text.to_string(),
    }
}

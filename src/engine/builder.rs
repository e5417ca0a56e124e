use chrono::{DateTime, Utc};

use crate::{
    qso::{ContactDraft, ContactRecord},
    settings::StationSettings,
};

use super::{
    EngineError,
    frequency::{derive_uplink_frequency, format_uplink, parse_frequency},
};

/// `YYYY-MM-DD`
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// `HH:MM:SS`
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Validates a draft and fills the computed and station-context fields.
///
/// Checks run in form order: own callsign, peer callsign, downlink presence,
/// downlink parse. The first failure is returned and nothing is built.
pub fn build_record(
    draft: &ContactDraft,
    settings: &StationSettings,
    now: DateTime<Utc>,
) -> Result<ContactRecord, EngineError> {
    if !settings.has_callsign() {
        return Err(EngineError::MissingOperatorCallsign);
    }

    let peer_callsign = draft.peer_callsign.trim().to_uppercase();
    if peer_callsign.is_empty() {
        return Err(EngineError::MissingPeerCallsign);
    }

    let downlink = draft.downlink_frequency.trim();
    if downlink.is_empty() {
        return Err(EngineError::MissingDownlinkFrequency);
    }
    let uplink = derive_uplink_frequency(parse_frequency(downlink)?);

    Ok(ContactRecord {
        date: now.format(DATE_FORMAT).to_string(),
        time: now.format(TIME_FORMAT).to_string(),
        operator_callsign: settings.my_call.trim().to_string(),
        peer_callsign,
        uplink_frequency_mhz: format_uplink(uplink),
        downlink_frequency_mhz: downlink.to_string(),
        sent_report: draft.sent_report.clone(),
        received_report: draft.received_report.clone(),
        mode: draft.mode,
        comment: draft.comment.trim().to_string(),
        grid_locator: settings.grid.clone(),
        cq_zone: settings.cq_zone.clone(),
        itu_zone: settings.itu_zone.clone(),
        country_name: settings.country.clone(),
    })
}

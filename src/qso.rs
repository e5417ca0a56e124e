//! Contact record, draft, and patch types.

use serde::{Deserialize, Serialize};

use crate::types::Mode;

/// Signal report the form starts with.
pub const DEFAULT_REPORT: &str = "59";

/// One logged contact.
///
/// Serialized field names are the ones the log file has always used, so
/// existing `qo100_logs.json` files load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    /// UTC date, `YYYY-MM-DD`.
    pub date: String,
    /// UTC time, `HH:MM:SS`.
    pub time: String,
    /// Own station callsign.
    #[serde(rename = "my_call")]
    pub operator_callsign: String,
    /// Worked station callsign.
    #[serde(rename = "other_call")]
    pub peer_callsign: String,
    /// Derived transmit frequency in MHz, as formatted text.
    #[serde(rename = "my_freq")]
    pub uplink_frequency_mhz: String,
    /// Receive frequency in MHz, as entered.
    #[serde(rename = "other_freq")]
    pub downlink_frequency_mhz: String,
    /// Report sent to the peer.
    #[serde(rename = "my_rst")]
    pub sent_report: String,
    /// Report received from the peer.
    #[serde(rename = "other_rst")]
    pub received_report: String,
    /// Emission mode.
    pub mode: Mode,
    /// Free-text note.
    #[serde(default)]
    pub comment: String,
    /// Own Maidenhead locator at logging time.
    #[serde(rename = "grid", default)]
    pub grid_locator: String,
    /// Own CQ zone at logging time.
    #[serde(default)]
    pub cq_zone: String,
    /// Own ITU zone at logging time.
    #[serde(default)]
    pub itu_zone: String,
    /// Own country at logging time.
    #[serde(rename = "country", default)]
    pub country_name: String,
}

/// Raw form input for a new contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDraft {
    /// Worked station callsign as typed.
    pub peer_callsign: String,
    /// Receive frequency text as typed.
    pub downlink_frequency: String,
    /// Report sent.
    pub sent_report: String,
    /// Report received.
    pub received_report: String,
    /// Emission mode.
    pub mode: Mode,
    /// Free-text note.
    pub comment: String,
}

impl ContactDraft {
    /// Draft with the form defaults: `59`/`59`, SSB, no comment.
    pub fn new(peer_callsign: impl Into<String>, downlink_frequency: impl Into<String>) -> Self {
        Self {
            peer_callsign: peer_callsign.into(),
            downlink_frequency: downlink_frequency.into(),
            sent_report: DEFAULT_REPORT.to_string(),
            received_report: DEFAULT_REPORT.to_string(),
            mode: Mode::default(),
            comment: String::new(),
        }
    }
}

/// Sparse edit where each `Some` field overwrites the record value.
///
/// Station context (grid, zones, country) is not editable.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactPatch {
    /// Optional replacement date.
    pub date: Option<String>,
    /// Optional replacement time.
    pub time: Option<String>,
    /// Optional replacement own callsign.
    pub operator_callsign: Option<String>,
    /// Optional replacement peer callsign.
    pub peer_callsign: Option<String>,
    /// Optional replacement uplink text.
    pub uplink_frequency_mhz: Option<String>,
    /// Optional replacement downlink text.
    pub downlink_frequency_mhz: Option<String>,
    /// Optional replacement mode.
    pub mode: Option<Mode>,
    /// Optional replacement sent report.
    pub sent_report: Option<String>,
    /// Optional replacement received report.
    pub received_report: Option<String>,
    /// Optional replacement comment.
    pub comment: Option<String>,
}

impl ContactPatch {
    /// Returns true when no fields are set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Applies this patch in place to `rec`.
    ///
    /// The uplink is not re-derived from a new downlink value.
    pub fn apply_to(&self, rec: &mut ContactRecord) {
        if let Some(v) = &self.date {
            rec.date = v.clone();
        }
        if let Some(v) = &self.time {
            rec.time = v.clone();
        }
        if let Some(v) = &self.operator_callsign {
            rec.operator_callsign = v.clone();
        }
        if let Some(v) = &self.peer_callsign {
            rec.peer_callsign = v.clone();
        }
        if let Some(v) = &self.uplink_frequency_mhz {
            rec.uplink_frequency_mhz = v.clone();
        }
        if let Some(v) = &self.downlink_frequency_mhz {
            rec.downlink_frequency_mhz = v.clone();
        }
        if let Some(v) = self.mode {
            rec.mode = v;
        }
        if let Some(v) = &self.sent_report {
            rec.sent_report = v.clone();
        }
        if let Some(v) = &self.received_report {
            rec.received_report = v.clone();
        }
        if let Some(v) = &self.comment {
            rec.comment = v.trim().to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ContactRecord {
        ContactRecord {
            date: "2024-03-01".to_string(),
            time: "12:00:00".to_string(),
            operator_callsign: "OP1AW".to_string(),
            peer_callsign: "DL1ABC".to_string(),
            uplink_frequency_mhz: "2400.25000".to_string(),
            downlink_frequency_mhz: "10489.750".to_string(),
            sent_report: "59".to_string(),
            received_report: "57".to_string(),
            mode: Mode::SSB,
            comment: String::new(),
            grid_locator: "JN58".to_string(),
            cq_zone: "14".to_string(),
            itu_zone: "28".to_string(),
            country_name: "Germany".to_string(),
        }
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let mut rec = record();
        let patch = ContactPatch::default();
        assert!(patch.is_empty());
        patch.apply_to(&mut rec);
        assert_eq!(rec, record());
    }

    #[test]
    fn patch_leaves_uplink_alone_when_downlink_changes() {
        let mut rec = record();
        ContactPatch {
            downlink_frequency_mhz: Some("10490.000".to_string()),
            comment: Some("  tnx qso \n".to_string()),
            ..ContactPatch::default()
        }
        .apply_to(&mut rec);

        assert_eq!(rec.downlink_frequency_mhz, "10490.000");
        assert_eq!(rec.uplink_frequency_mhz, "2400.25000");
        assert_eq!(rec.comment, "tnx qso");
        assert_eq!(rec.grid_locator, "JN58");
    }

    #[test]
    fn record_uses_legacy_json_keys() {
        let json = serde_json::to_value(record()).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        for key in ["my_call", "other_call", "my_freq", "other_freq", "my_rst", "other_rst", "grid", "country"] {
            assert!(keys.contains(&key), "missing {key}");
        }
    }
}

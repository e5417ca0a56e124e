//! ADIF text writer.
//!
//! Fields use `<TAG:len>value` where `len` is the character count of
//! `value`. The record list ends with a single `<EOR>` line after the last
//! record rather than one per record; importers that read this logger's
//! files rely on that layout.

use crate::{
    engine::{
        band::{classify_band_text, classify_rx_band_text},
        frequency::reformat_or_raw,
    },
    qso::ContactRecord,
};

/// Free-text line at the top of the file.
pub const BANNER: &str = "ADIF export from QO-100 Logger";
/// Value of `ADIF_VER`.
pub const ADIF_VERSION: &str = "3.1.0";
/// Value of `PROGRAMID`.
pub const PROGRAM_ID: &str = "QO-100 Logger";
/// Value of `PROGRAMVERSION`.
pub const PROGRAM_VERSION: &str = "1.0.0";
/// Header terminator.
pub const EOH: &str = "<EOH>";
/// Terminator written once after all records.
pub const EOR: &str = "<EOR>";

/// Value of `SAT_NAME`.
pub const SAT_NAME: &str = "QO-100";
/// Value of `PROP_MODE`.
pub const PROP_MODE: &str = "SAT";
/// Value of `SAT_MODE`.
pub const SAT_MODE: &str = "SX";

const FREQ_DECIMALS: usize = 1;
const FREQ_RX_DECIMALS: usize = 5;

/// Formats one data field.
pub fn field(tag: &str, value: &str) -> String {
    format!("<{}:{}>{}", tag, value.chars().count(), value)
}

fn push_if_present(lines: &mut Vec<String>, tag: &str, value: &str) {
    if !value.is_empty() {
        lines.push(field(tag, value));
    }
}

fn header_lines() -> Vec<String> {
    vec![
        BANNER.to_string(),
        String::new(),
        field("ADIF_VER", ADIF_VERSION),
        field("PROGRAMID", PROGRAM_ID),
        field("PROGRAMVERSION", PROGRAM_VERSION),
        EOH.to_string(),
        String::new(),
    ]
}

/// Header block: banner, blank line, version and program tags, `<EOH>`,
/// blank line. Lines are newline-joined with no trailing newline.
pub fn serialize_header() -> String {
    header_lines().join("\n")
}

/// One record's fields, newline-joined, in fixed tag order.
pub fn serialize_record(rec: &ContactRecord) -> String {
    let date = rec.date.replace('-', "");
    let time = rec.time.replace(':', "");

    let mut lines = vec![
        field("STATION_CALLSIGN", &rec.operator_callsign),
        field("CALL", &rec.peer_callsign),
        field("QSO_DATE", &date),
        field("TIME_ON", &time),
        field("TIME_OFF", &time),
        field("BAND", classify_band_text(&rec.downlink_frequency_mhz).as_str()),
        field("FREQ", &reformat_or_raw(&rec.uplink_frequency_mhz, FREQ_DECIMALS)),
    ];
    push_if_present(&mut lines, "COMMENT", &rec.comment);
    lines.extend([
        field("FREQ_RX", &reformat_or_raw(&rec.downlink_frequency_mhz, FREQ_RX_DECIMALS)),
        field("MODE", rec.mode.as_str()),
        field("RST_RCVD", &rec.received_report),
        field("RST_SENT", &rec.sent_report),
        field("SAT_NAME", SAT_NAME),
        field("PROP_MODE", PROP_MODE),
        field("BAND_RX", classify_rx_band_text(&rec.downlink_frequency_mhz).as_str()),
        field("SAT_MODE", SAT_MODE),
    ]);
    push_if_present(&mut lines, "MY_GRIDSQUARE", &rec.grid_locator);
    push_if_present(&mut lines, "CQZ", &rec.cq_zone);
    push_if_present(&mut lines, "ITUZ", &rec.itu_zone);
    push_if_present(&mut lines, "COUNTRY", &rec.country_name);

    lines.join("\n")
}

/// Complete file: header, every record in order, then `<EOR>`.
pub fn serialize_log(records: &[ContactRecord]) -> String {
    let mut lines = header_lines();
    lines.extend(records.iter().map(serialize_record));
    lines.push(EOR.to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_length_counts_characters() {
        assert_eq!(field("CALL", "DL1ABC"), "<CALL:6>DL1ABC");
        assert_eq!(field("COUNTRY", "Österreich"), "<COUNTRY:10>Österreich");
        assert_eq!(field("COMMENT", ""), "<COMMENT:0>");
    }

    #[test]
    fn header_layout() {
        assert_eq!(
            serialize_header(),
            "ADIF export from QO-100 Logger\n\n<ADIF_VER:5>3.1.0\n<PROGRAMID:13>QO-100 Logger\n<PROGRAMVERSION:5>1.0.0\n<EOH>\n"
        );
    }

    #[test]
    fn empty_log_is_header_then_eor() {
        assert_eq!(serialize_log(&[]), format!("{}\n{}", serialize_header(), EOR));
    }
}

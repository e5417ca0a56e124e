//! Comma-separated table export.
//!
//! Only the comment column is quoted. Commas or quotes inside any other
//! field end up in the output as-is and shift the columns.

use crate::qso::ContactRecord;

/// Column titles, in output order.
pub const HEADERS: [&str; 14] = [
    "Date",
    "Time",
    "My Callsign",
    "Other Callsign",
    "TX Frequency",
    "RX Frequency",
    "My RST",
    "Other RST",
    "Mode",
    "Comment",
    "Grid",
    "CQ Zone",
    "ITU Zone",
    "Country",
];

/// One data line, without the trailing newline.
pub fn serialize_row(rec: &ContactRecord) -> String {
    let comment = format!("\"{}\"", rec.comment);
    [
        rec.date.as_str(),
        rec.time.as_str(),
        rec.operator_callsign.as_str(),
        rec.peer_callsign.as_str(),
        rec.uplink_frequency_mhz.as_str(),
        rec.downlink_frequency_mhz.as_str(),
        rec.sent_report.as_str(),
        rec.received_report.as_str(),
        rec.mode.as_str(),
        comment.as_str(),
        rec.grid_locator.as_str(),
        rec.cq_zone.as_str(),
        rec.itu_zone.as_str(),
        rec.country_name.as_str(),
    ]
    .join(",")
}

/// Header line plus one line per record, each newline-terminated.
pub fn serialize_table(records: &[ContactRecord]) -> String {
    let mut out = HEADERS.join(",");
    out.push('\n');
    for rec in records {
        out.push_str(&serialize_row(rec));
        out.push('\n');
    }
    out
}

use qo100log::{
    export::adif::{serialize_header, serialize_log, serialize_record},
    qso::ContactRecord,
    types::Mode,
};

fn record(call: &str) -> ContactRecord {
    ContactRecord {
        date: "2024-03-01".to_string(),
        time: "12:00:00".to_string(),
        operator_callsign: "OP1AW".to_string(),
        peer_callsign: call.to_string(),
        uplink_frequency_mhz: "2402.000".to_string(),
        downlink_frequency_mhz: "10491.500".to_string(),
        sent_report: "59".to_string(),
        received_report: "59".to_string(),
        mode: Mode::SSB,
        comment: String::new(),
        grid_locator: String::new(),
        cq_zone: String::new(),
        itu_zone: String::new(),
        country_name: String::new(),
    }
}

#[test]
fn minimal_record_has_expected_tags_and_omits_empty_ones() {
    let out = serialize_record(&record("DL1ABC"));

    assert!(out.contains("<QSO_DATE:8>20240301"));
    assert!(out.contains("<TIME_ON:6>120000"));
    assert!(out.contains("<BAND:4>13CM"));
    assert!(!out.contains("COMMENT"));
    assert!(!out.contains("MY_GRIDSQUARE"));
    assert!(!out.contains("CQZ"));
    assert!(!out.contains("ITUZ"));
    assert!(!out.contains("COUNTRY"));
}

#[test]
fn full_record_exact_layout() {
    let mut rec = record("DL1ABC");
    rec.comment = "tnx fer QSO".to_string();
    rec.grid_locator = "JN58TD".to_string();
    rec.cq_zone = "14".to_string();
    rec.itu_zone = "28".to_string();
    rec.country_name = "Germany".to_string();
    rec.received_report = "57".to_string();

    let expected = [
        "<STATION_CALLSIGN:5>OP1AW",
        "<CALL:6>DL1ABC",
        "<QSO_DATE:8>20240301",
        "<TIME_ON:6>120000",
        "<TIME_OFF:6>120000",
        "<BAND:4>13CM",
        "<FREQ:6>2402.0",
        "<COMMENT:11>tnx fer QSO",
        "<FREQ_RX:11>10491.50000",
        "<MODE:3>SSB",
        "<RST_RCVD:2>57",
        "<RST_SENT:2>59",
        "<SAT_NAME:6>QO-100",
        "<PROP_MODE:3>SAT",
        "<BAND_RX:4>13CM",
        "<SAT_MODE:2>SX",
        "<MY_GRIDSQUARE:6>JN58TD",
        "<CQZ:2>14",
        "<ITUZ:2>28",
        "<COUNTRY:7>Germany",
    ]
    .join("\n");

    assert_eq!(serialize_record(&rec), expected);
}

#[test]
fn band_tags_disagree_outside_both_ranges() {
    let mut rec = record("DL1ABC");
    rec.downlink_frequency_mhz = "145.800".to_string();

    let out = serialize_record(&rec);
    assert!(out.contains("<BAND:3>UNK"));
    assert!(out.contains("<BAND_RX:4>13CM"));
}

#[test]
fn unparseable_frequencies_are_written_raw() {
    let mut rec = record("DL1ABC");
    rec.uplink_frequency_mhz = "Input error".to_string();
    rec.downlink_frequency_mhz = "10491,5".to_string();

    let out = serialize_record(&rec);
    assert!(out.contains("<FREQ:11>Input error"));
    assert!(out.contains("<FREQ_RX:7>10491,5"));
    assert!(out.contains("<BAND:3>UNK"));
    assert!(out.contains("<BAND_RX:4>13CM"));
}

#[test]
fn empty_log_is_header_followed_by_single_eor() {
    assert_eq!(serialize_log(&[]), format!("{}\n<EOR>", serialize_header()));
}

#[test]
fn records_in_order_with_one_trailing_eor() {
    let out = serialize_log(&[record("AA1A"), record("BB2B"), record("CC3C")]);

    assert_eq!(out.matches("<EOR>").count(), 1);
    assert!(out.ends_with("\n<EOR>"));
    assert!(out.starts_with(&serialize_header()));

    let a = out.find("<CALL:4>AA1A").unwrap();
    let b = out.find("<CALL:4>BB2B").unwrap();
    let c = out.find("<CALL:4>CC3C").unwrap();
    assert!(a < b && b < c);

    assert!(!out.contains("<COUNTRY"));
    assert!(out.contains("<SAT_MODE:2>SX\n<STATION_CALLSIGN:5>OP1AW"));
}

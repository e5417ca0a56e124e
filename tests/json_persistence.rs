use tempfile::TempDir;

use qo100log::{
    app::Logbook,
    persist::{
        LogStorage,
        json::{JsonFileStorage, LOG_FILE, SETTINGS_FILE},
    },
    qso::{ContactDraft, ContactRecord},
    settings::StationSettings,
    types::Mode,
};

fn record(i: usize) -> ContactRecord {
    ContactRecord {
        date: "2024-03-01".to_string(),
        time: format!("12:00:{:02}", i % 60),
        operator_callsign: "OP1AW".to_string(),
        peer_callsign: format!("DL{i}ABC"),
        uplink_frequency_mhz: "2400.25000".to_string(),
        downlink_frequency_mhz: "10489.750".to_string(),
        sent_report: "59".to_string(),
        received_report: "57".to_string(),
        mode: Mode::ALL[i % Mode::ALL.len()],
        comment: if i % 2 == 0 { "北京 tnx".to_string() } else { String::new() },
        grid_locator: "JN58".to_string(),
        cq_zone: "14".to_string(),
        itu_zone: String::new(),
        country_name: "Deutschland".to_string(),
    }
}

#[test]
fn log_round_trips_losslessly() {
    let tmp = TempDir::new().expect("tmp");
    let mut storage = JsonFileStorage::default_paths(tmp.path());

    let records: Vec<ContactRecord> = (0..25).map(record).collect();
    storage.save_log(&records).expect("save");

    let mut reopened = JsonFileStorage::default_paths(tmp.path());
    assert_eq!(reopened.load_log().expect("load"), records);
}

#[test]
fn log_file_is_pretty_printed_with_legacy_keys_and_raw_unicode() {
    let tmp = TempDir::new().expect("tmp");
    let mut storage = JsonFileStorage::default_paths(tmp.path());
    storage.save_log(&[record(0)]).expect("save");

    let text = std::fs::read_to_string(tmp.path().join(LOG_FILE)).expect("read");
    assert!(text.starts_with("[\n  {\n    \"date\": \"2024-03-01\",\n    \"time\""));
    assert!(text.contains("\"my_call\": \"OP1AW\""));
    assert!(text.contains("\"other_freq\": \"10489.750\""));
    assert!(text.contains("\"my_freq\": \"2400.25000\""));
    assert!(text.contains("北京"));
}

#[test]
fn legacy_file_without_optional_keys_loads() {
    let tmp = TempDir::new().expect("tmp");
    let legacy = r#"[
  {
    "date": "2023-11-02",
    "time": "08:15:00",
    "my_call": "OP1AW",
    "other_call": "G4XYZ",
    "my_freq": "2400.30000",
    "other_freq": "10489.800",
    "my_rst": "59",
    "other_rst": "59",
    "mode": "CW"
  }
]"#;
    std::fs::write(tmp.path().join(LOG_FILE), legacy).expect("write");

    let records = JsonFileStorage::default_paths(tmp.path()).load_log().expect("load");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].peer_callsign, "G4XYZ");
    assert_eq!(records[0].mode, Mode::CW);
    assert!(records[0].comment.is_empty());
    assert!(records[0].country_name.is_empty());
}

#[test]
fn missing_files_load_as_empty() {
    let tmp = TempDir::new().expect("tmp");
    let mut storage = JsonFileStorage::default_paths(tmp.path());
    assert!(storage.load_log().expect("log").is_empty());
    assert_eq!(storage.load_settings().expect("settings"), StationSettings::default());
}

#[test]
fn corrupt_files_are_reported_and_logbook_starts_empty() {
    let _ = env_logger::builder().is_test(true).try_init();
    let tmp = TempDir::new().expect("tmp");
    std::fs::write(tmp.path().join(LOG_FILE), "[{ not json").expect("write");
    std::fs::write(tmp.path().join(SETTINGS_FILE), "{").expect("write");

    let mut storage = JsonFileStorage::default_paths(tmp.path());
    assert!(storage.load_log().is_err());
    assert!(storage.load_settings().is_err());

    let logbook = Logbook::open(storage);
    assert!(logbook.records().is_empty());
    assert!(!logbook.settings().language.is_empty());
}

#[test]
fn settings_file_uses_plain_keys() {
    let tmp = TempDir::new().expect("tmp");
    let mut storage = JsonFileStorage::default_paths(tmp.path());
    let settings = StationSettings {
        language: "zh".to_string(),
        my_call: "OP1AW".to_string(),
        grid: "OM89".to_string(),
        cq_zone: "24".to_string(),
        itu_zone: "44".to_string(),
        country: "中国".to_string(),
    };
    storage.save_settings(&settings).expect("save");

    let text = std::fs::read_to_string(storage.settings_path()).expect("read");
    for key in ["language", "my_call", "grid", "cq_zone", "itu_zone", "country"] {
        assert!(text.contains(&format!("\"{key}\"")), "missing {key}");
    }
    assert_eq!(storage.load_settings().expect("load"), settings);
}

#[test]
fn logbook_session_survives_reopen() {
    let tmp = TempDir::new().expect("tmp");
    let mut storage = JsonFileStorage::default_paths(tmp.path());
    storage
        .save_settings(&StationSettings {
            language: "en".to_string(),
            my_call: "OP1AW".to_string(),
            ..StationSettings::default()
        })
        .expect("settings");

    let mut logbook = Logbook::open(storage);
    for call in ["AA1A", "BB2B", "CC3C"] {
        logbook.append_record(&ContactDraft::new(call, "10489.5")).expect("append");
    }
    logbook.delete_record(1).expect("delete");
    let expected = logbook.records().to_vec();
    drop(logbook);

    let reopened = Logbook::open(JsonFileStorage::default_paths(tmp.path()));
    assert_eq!(reopened.records(), expected.as_slice());
    assert_eq!(reopened.settings().my_call, "OP1AW");
}

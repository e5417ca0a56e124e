//! QO-100 satellite contact logging with ADIF export.
//!
//! # Examples
//!
//! Building records and exporting ADIF without any storage:
//! ```
//! use chrono::{TimeZone, Utc};
//! use qo100log::{
//!     core::store::LogStore,
//!     engine::builder::build_record,
//!     export::adif::serialize_log,
//!     qso::ContactDraft,
//!     settings::StationSettings,
//! };
//!
//! let settings = StationSettings {
//!     my_call: "OP1AW".to_string(),
//!     ..StationSettings::default()
//! };
//! let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
//!
//! let mut store = LogStore::new();
//! let rec = build_record(&ContactDraft::new("dl1abc", "10491.500"), &settings, now).expect("valid");
//! assert_eq!(rec.uplink_frequency_mhz, "2402.00000");
//! let idx = store.append(rec);
//! assert_eq!(idx, 0);
//!
//! let adi = serialize_log(store.records());
//! assert!(adi.contains("<BAND:4>13CM"));
//! assert!(adi.ends_with("<EOR>"));
//! ```
//!
//! Driving a file-backed logbook through the runtime handle:
//! ```no_run
//! use qo100log::{
//!     app::Logbook,
//!     persist::json::JsonFileStorage,
//!     qso::ContactDraft,
//!     runtime::handle::{spawn_logbook, RuntimeConfig},
//! };
//!
//! # #[tokio::main]
//! # async fn main() {
//! let logbook = Logbook::open(JsonFileStorage::default_paths("."));
//! let handle = spawn_logbook(logbook, RuntimeConfig::default());
//! let _idx = handle.append(ContactDraft::new("DL1ABC", "10489.750")).await.expect("append");
//! handle.export_adif(Some("qo100.adi".into())).await.expect("export");
//! handle.shutdown().await.expect("shutdown");
//! # }
//! ```
#![deny(missing_docs)]

/// Application state and command operations.
pub mod app;
/// In-memory contact store.
pub mod core;
/// Uplink derivation, band classification, and record building.
pub mod engine;
/// ADIF and table exporters.
pub mod export;
/// Persistence abstraction and JSON file implementation.
pub mod persist;
/// Contact records, drafts, and patches.
pub mod qso;
/// Single-writer runtime handle and events.
pub mod runtime;
/// Station settings and language detection.
pub mod settings;
/// Shared primitive types and enums.
pub mod types;

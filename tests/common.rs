#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rdl() -> Command {
    let mut cmd = cargo_bin_cmd!("rdutylog");
    // keep diagnostics out of assertions unless a test asks for them
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Create a temporary file path inside the system temp dir and make sure
/// nothing is there yet.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rdutylog.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Config file path for a test; the file itself is not created.
pub fn temp_config(name: &str) -> String {
    temp_path(&format!("{name}_cfg"), "conf")
}

pub fn write_fixture(name: &str, json: &str) -> String {
    let p = temp_path(name, "json");
    fs::write(&p, json).expect("write fixture");
    p
}

/// A day with a leading gap, a midnight-crossing drive and a malformed record.
pub const SAMPLE_LOG: &str = r#"{
  "driver_name": "Dana Reyes",
  "log_date": "2025-03-01",
  "vehicle_number": "TRK-42",
  "carrier_name": "Acme Freight",
  "duty_statuses": [
    {"status": "on_duty", "start_time": "2025-03-01T06:00:00", "end_time": "2025-03-01T06:30:00",
     "location": "Denver, CO", "remarks": "Pre-trip inspection"},
    {"status": "driving", "start_time": "2025-03-01T06:30:00", "end_time": "2025-03-01T11:00:00",
     "location": "Denver, CO", "remarks": ""},
    {"status": "off_duty", "start_time": "2025-03-01T11:00:00", "end_time": "2025-03-01T11:30:00",
     "location": "Limon, CO", "remarks": "Break"},
    {"status": "driving", "start_time": "2025-03-01T22:00:00", "end_time": "2025-03-02T01:00:00",
     "location": "Limon, CO", "remarks": "Night run"},
    {"status": "parked", "start_time": "2025-03-01T12:00:00", "end_time": "2025-03-01T13:00:00"}
  ],
  "off_duty_hours": 6.5,
  "sleeper_berth_hours": 0,
  "driving_hours": "6.5",
  "on_duty_hours": null
}"#;

/// Two consecutive days of a trip.
pub const SAMPLE_TRIP: &str = r#"{
  "id": 17,
  "eld_logs": [
    {"driver_name": "Dana Reyes", "log_date": "2025-03-01", "vehicle_number": "TRK-42",
     "duty_statuses": [
       {"status": "driving", "start_time": "2025-03-01T08:00:00", "end_time": "2025-03-01T12:00:00",
        "location": "Denver, CO", "remarks": ""}
     ],
     "driving_hours": 4, "off_duty_hours": 20, "sleeper_berth_hours": 0, "on_duty_hours": 0},
    {"driver_name": "Dana Reyes", "log_date": "2025-03-02", "vehicle_number": "TRK-42",
     "duty_statuses": [
       {"status": "sleeper_berth", "start_time": "2025-03-02T00:00:00", "end_time": "2025-03-02T08:00:00",
        "location": "Salina, KS", "remarks": ""}
     ],
     "driving_hours": 0, "off_duty_hours": 16, "sleeper_berth_hours": 8, "on_duty_hours": 0}
  ]
}"#;

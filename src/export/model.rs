// src/export/model.rs

use crate::chart::normalize::{NormalizedInterval, normalize};
use crate::models::DutyStatusLog;
use crate::utils::time::format_clock;
use serde::Serialize;

/// Flat row for one recorded duty-status interval, clipped to the log day.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DutyRow {
    pub date: String,
    pub start: String,
    pub end: String,
    pub status: String,
    pub hours: f64,
    pub location: String,
    pub remarks: String,
}

impl DutyRow {
    fn from_interval(date: &str, iv: &NormalizedInterval) -> Self {
        Self {
            date: date.to_string(),
            start: format_clock(iv.start_hour),
            end: format_clock(iv.end_hour),
            status: iv.status.title().to_string(),
            hours: (iv.duration_hours() * 100.0).round() / 100.0,
            location: iv.location.clone(),
            remarks: iv.remarks.clone(),
        }
    }

    /// Cells in header order (for PDF tables).
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            self.start.clone(),
            self.end.clone(),
            self.status.clone(),
            format!("{:.2}", self.hours),
            self.location.clone(),
            self.remarks.clone(),
        ]
    }
}

/// Header for CSV / JSON / PDF
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "date", "start", "end", "status", "hours", "location", "remarks",
    ]
}

/// Rows for every interval the chart would draw, in chart order. The
/// implicit leading off-duty run is not a recorded interval and is left out.
pub fn duty_rows(log: &DutyStatusLog) -> Vec<DutyRow> {
    let day = normalize(log);
    let date = day
        .day
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| log.log_date.clone());

    day.intervals
        .iter()
        .map(|iv| DutyRow::from_interval(&date, iv))
        .collect()
}

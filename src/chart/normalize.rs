//! Turns raw duty-status records into the ordered, day-clipped intervals
//! the renderers draw.

use crate::errors::IntervalError;
use crate::models::{DutyStatus, DutyStatusInterval, DutyStatusLog, DutyStatusRecord};
use crate::utils::time::hour_of_day;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::{debug, warn};

/// An interval clipped to `[midnight, next midnight)` of the display day.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NormalizedInterval {
    pub status: DutyStatus,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub start_hour: f64,
    pub end_hour: f64,
    pub location: String,
    pub remarks: String,
}

impl NormalizedInterval {
    pub fn duration_hours(&self) -> f64 {
        self.end_hour - self.start_hour
    }
}

/// A record that was left out of the render, with its position in the input.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    pub index: usize,
    pub reason: IntervalError,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct NormalizedDay {
    pub day: Option<NaiveDate>,
    /// Implicit off-duty run from midnight to the first recorded interval.
    pub leading_gap: Option<NormalizedInterval>,
    pub intervals: Vec<NormalizedInterval>,
    pub skipped: Vec<SkippedRecord>,
}

impl NormalizedDay {
    /// Leading gap (if any) followed by the recorded intervals.
    pub fn trace(&self) -> impl Iterator<Item = &NormalizedInterval> {
        self.leading_gap.iter().chain(self.intervals.iter())
    }
}

pub(crate) fn normalize(log: &DutyStatusLog) -> NormalizedDay {
    normalize_records(&log.duty_statuses, log.date())
}

/// Normalize `records` for `day`; without a day the earliest valid start
/// decides which calendar day is shown.
pub(crate) fn normalize_records(
    records: &[DutyStatusRecord],
    day: Option<NaiveDate>,
) -> NormalizedDay {
    let mut skipped = Vec::new();
    let mut parsed: Vec<DutyStatusInterval> = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        match record.parse() {
            Ok(interval) => parsed.push(interval),
            Err(reason) => {
                debug!(index, %reason, "skipping malformed duty-status record");
                skipped.push(SkippedRecord { index, reason });
            }
        }
    }

    // stable: same-instant records keep their input order
    parsed.sort_by_key(|iv| iv.start_time);

    let day = day.or_else(|| parsed.first().map(|iv| iv.start_time.date()));
    let Some(day) = day else {
        return NormalizedDay {
            skipped,
            ..Default::default()
        };
    };

    let window_start = day.and_time(NaiveTime::MIN);
    let Some(window_end) = day.succ_opt().map(|d| d.and_time(NaiveTime::MIN)) else {
        warn!(%day, "display day has no successor; nothing to draw");
        return NormalizedDay {
            day: Some(day),
            skipped,
            ..Default::default()
        };
    };

    let mut intervals = Vec::with_capacity(parsed.len());
    for iv in parsed {
        let before_day = iv.end_time < window_start
            || (iv.end_time == window_start && iv.start_time < window_start);
        if before_day || iv.start_time >= window_end {
            debug!(
                status = %iv.status,
                start = %iv.start_time,
                end = %iv.end_time,
                "interval outside display day"
            );
            continue;
        }

        let start = iv.start_time.max(window_start);
        let end = iv.end_time.min(window_end);
        if end < iv.end_time {
            debug!(status = %iv.status, end = %iv.end_time, "truncating interval at midnight");
        }

        intervals.push(NormalizedInterval {
            status: iv.status,
            start,
            end,
            start_hour: hour_of_day(start, window_start),
            end_hour: hour_of_day(end, window_start),
            location: iv.location,
            remarks: iv.remarks,
        });
    }

    let leading_gap = intervals
        .first()
        .filter(|first| first.start_hour > 0.0)
        .map(|first| NormalizedInterval {
            status: DutyStatus::OffDuty,
            start: window_start,
            end: first.start,
            start_hour: 0.0,
            end_hour: first.start_hour,
            location: String::new(),
            remarks: String::new(),
        });

    NormalizedDay {
        day: Some(day),
        leading_gap,
        intervals,
        skipped,
    }
}

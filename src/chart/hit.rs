//! Pointer position → time of day.

use super::geometry::GridGeometry;
use serde::Serialize;
use std::fmt;

const MINUTES_PER_DAY: u32 = 24 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Map a pointer `x` (canvas-relative) to the time under it.
///
/// The pointer addresses a whole device pixel and the time is read at that
/// pixel's center, so the first pixel of the axis is 00:00 and the last one
/// stays below 24:00. Anything left of or beyond the time axis is `None`,
/// never a clamped boundary value.
pub fn hit_test(geo: &GridGeometry, x: f64) -> Option<TimeOfDay> {
    if !geo.contains_time_x(x) {
        return None;
    }
    let hours = geo.hour_at(x.floor() + 0.5);
    let total = ((hours * 60.0).floor() as u32).min(MINUTES_PER_DAY - 1);
    Some(TimeOfDay {
        hour: total / 60,
        minute: total % 60,
    })
}

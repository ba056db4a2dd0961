//! Per-status hour totals and the summary column.
//!
//! Two totals exist side by side: the hours the upstream log *supplied*
//! and the hours *computed* from the drawn intervals. The column always
//! shows the supplied ones; the computed ones are there for callers that
//! want to compare. Neither is ever adjusted to match the other.

use super::geometry::GridGeometry;
use super::normalize::{NormalizedDay, normalize};
use super::scene::{Point, Role, Scene, TextAnchor, TextStyle};
use super::segments::BORDER_WIDTH;
use crate::models::{DutyStatus, DutyStatusLog};
use serde::Serialize;

/// Differences below this are rounding noise, not divergence.
const DIVERGENCE_EPSILON: f64 = 1e-6;

/// Hours per status, indexed by lane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StatusHours([f64; 4]);

impl StatusHours {
    pub fn get(&self, status: DutyStatus) -> f64 {
        self.0[status.lane()]
    }

    pub fn add(&mut self, status: DutyStatus, hours: f64) {
        self.0[status.lane()] += hours;
    }

    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DutyStatus, f64)> + '_ {
        DutyStatus::ALL.into_iter().map(|s| (s, self.get(s)))
    }
}

/// Totals as the upstream log states them.
pub fn supplied_hours(log: &DutyStatusLog) -> StatusHours {
    let mut hours = StatusHours::default();
    for status in DutyStatus::ALL {
        hours.add(status, log.supplied_hours(status));
    }
    hours
}

/// Totals summed from the recorded, day-clipped intervals. The synthesized
/// leading off-duty run is not a record and is not counted.
pub(crate) fn computed_hours(day: &NormalizedDay) -> StatusHours {
    let mut hours = StatusHours::default();
    for interval in &day.intervals {
        hours.add(interval.status, interval.duration_hours());
    }
    hours
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Divergence {
    pub status: DutyStatus,
    pub supplied: f64,
    pub computed: f64,
}

impl Divergence {
    pub fn delta(&self) -> f64 {
        self.supplied - self.computed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryColumn {
    pub supplied: StatusHours,
    pub computed: StatusHours,
}

impl SummaryColumn {
    pub fn from_log(log: &DutyStatusLog) -> Self {
        Self {
            supplied: supplied_hours(log),
            computed: computed_hours(&normalize(log)),
        }
    }

    /// Statuses whose supplied and computed totals disagree.
    pub fn divergence(&self) -> Vec<Divergence> {
        DutyStatus::ALL
            .into_iter()
            .map(|status| Divergence {
                status,
                supplied: self.supplied.get(status),
                computed: self.computed.get(status),
            })
            .filter(|d| d.delta().abs() > DIVERGENCE_EPSILON)
            .collect()
    }
}

/// Two decimals, as printed in the summary column.
pub fn format_hours(hours: f64) -> String {
    format!("{hours:.2}")
}

/// Draw the `TOTAL HOURS` column; `None` leaves the cells blank.
pub(crate) fn draw_summary(scene: &mut Scene, geo: &GridGeometry, hours: Option<&StatusHours>) {
    let left = geo.summary_left();
    let center_x = left + geo.summary_width / 2.0;

    scene.text(
        Point::new(center_x, geo.header_height - 5.0),
        "TOTAL HOURS",
        TextStyle::bold(12.0, TextAnchor::Middle),
        Role::SummaryHeader,
    );

    for status in DutyStatus::ALL {
        let top = geo.lane_top_y(status.lane());
        let origin = Point::new(left, top);
        scene.rect(
            origin,
            geo.summary_width,
            geo.row_height,
            status.background(),
            Role::SummaryCell(status),
        );
        scene.stroke_rect(
            origin,
            geo.summary_width,
            geo.row_height,
            BORDER_WIDTH,
            Role::Border,
        );
        if let Some(hours) = hours {
            scene.text(
                Point::new(center_x, geo.lane_center_y(status.lane()) - geo.row_height / 12.0),
                format_hours(hours.get(status)),
                TextStyle::bold(14.0, TextAnchor::Middle),
                Role::SummaryValue(status),
            );
        }
    }
}

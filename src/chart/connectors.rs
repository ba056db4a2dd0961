//! Vertical joins between consecutive runs of the trace.

use super::geometry::GridGeometry;
use super::normalize::NormalizedDay;
use super::scene::{Point, Role, Scene};
use super::segments::TRACE_WIDTH;
use crate::models::DutyStatus;
use crate::utils::colors::Rgb;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Transition {
    pub at_hour: f64,
    pub from: DutyStatus,
    pub to: DutyStatus,
}

/// Status changes between neighbours that touch exactly. A gap between two
/// runs yields no transition, leaving the hole visible on the chart.
pub(crate) fn transitions(day: &NormalizedDay) -> Vec<Transition> {
    let runs: Vec<_> = day.trace().collect();
    runs.windows(2)
        .filter_map(|pair| {
            let (current, next) = (pair[0], pair[1]);
            (current.end == next.start && current.status.lane() != next.status.lane()).then(|| {
                Transition {
                    at_hour: current.end_hour,
                    from: current.status,
                    to: next.status,
                }
            })
        })
        .collect()
}

pub(crate) fn draw_connectors(scene: &mut Scene, geo: &GridGeometry, day: &NormalizedDay) {
    for t in transitions(day) {
        let x = geo.time_to_x(t.at_hour);
        scene.line(
            Point::new(x, geo.lane_center_y(t.from.lane())),
            Point::new(x, geo.lane_center_y(t.to.lane())),
            Rgb::TRACE,
            TRACE_WIDTH,
            Role::Connector,
        );
    }
}

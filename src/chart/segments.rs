//! Grid (lane backgrounds, borders, labels, hour/quarter lines) and the
//! per-status trace runs.

use super::geometry::{GridGeometry, HOURS_PER_DAY, LANE_COUNT, QUARTER_TICK_RATIO};
use super::normalize::NormalizedDay;
use super::scene::{Point, Role, Scene, TextAnchor, TextStyle};
use crate::models::DutyStatus;
use crate::utils::colors::Rgb;

pub const BORDER_WIDTH: f64 = 2.0;
pub const HOUR_LINE_WIDTH: f64 = 2.0;
pub const QUARTER_TICK_WIDTH: f64 = 2.0;
/// Trace runs and connectors; well above the grid line widths.
pub const TRACE_WIDTH: f64 = 4.0;
pub const MARKER_SIZE: f64 = 6.0;

/// Text printed above the hour line `hour` (0..24).
pub fn hour_label(hour: u32) -> String {
    match hour {
        0 => "Midnight".to_string(),
        12 => "Noon".to_string(),
        h if h < 12 => h.to_string(),
        h => (h - 12).to_string(),
    }
}

/// Bottom layer: canvas, outer border, header labels, lanes and grid lines.
pub(crate) fn draw_grid(scene: &mut Scene, geo: &GridGeometry) {
    let origin = Point::new(0.0, 0.0);
    scene.rect(origin, geo.width, geo.height, Rgb::WHITE, Role::Canvas);
    scene.stroke_rect(origin, geo.width, geo.height, BORDER_WIDTH, Role::Border);

    let label_y = geo.header_height - 5.0;
    for hour in 0..HOURS_PER_DAY as u32 {
        let size = if hour == 0 { 10.0 } else { 12.0 };
        scene.text(
            Point::new(geo.time_to_x(hour as f64), label_y),
            hour_label(hour),
            TextStyle::bold(size, TextAnchor::Middle),
            Role::HourLabel,
        );
    }

    for status in DutyStatus::ALL {
        let lane = status.lane();
        let top = geo.lane_top_y(lane);
        scene.rect(
            Point::new(geo.grid_left(), top),
            geo.grid_width,
            geo.row_height,
            status.background(),
            Role::LaneBackground(status),
        );
        scene.text(
            Point::new(10.0, top + geo.row_height / 3.0),
            status.lane_label(),
            TextStyle::bold(11.0, TextAnchor::Start),
            Role::LaneLabel,
        );
        scene.stroke_rect(
            Point::new(geo.grid_left(), top),
            geo.grid_width,
            geo.row_height,
            BORDER_WIDTH,
            Role::Border,
        );
    }

    draw_hour_lines(scene, geo);
    draw_quarter_ticks(scene, geo);
}

fn draw_hour_lines(scene: &mut Scene, geo: &GridGeometry) {
    for hour in 0..=HOURS_PER_DAY as u32 {
        let x = geo.time_to_x(hour as f64);
        scene.line(
            Point::new(x, geo.grid_top()),
            Point::new(x, geo.grid_bottom()),
            Rgb::BLACK,
            HOUR_LINE_WIDTH,
            Role::HourLine,
        );
    }
}

/// Short ticks at :15, :30 and :45, anchored to the bottom of every lane.
fn draw_quarter_ticks(scene: &mut Scene, geo: &GridGeometry) {
    let tick = geo.row_height * QUARTER_TICK_RATIO;
    for hour in 0..HOURS_PER_DAY as u32 {
        for quarter in 1..4 {
            let x = geo.time_to_x(hour as f64 + quarter as f64 / 4.0);
            for lane in 0..LANE_COUNT {
                let bottom = geo.lane_bottom_y(lane);
                scene.line(
                    Point::new(x, bottom - tick),
                    Point::new(x, bottom),
                    Rgb::GRID_GREY,
                    QUARTER_TICK_WIDTH,
                    Role::QuarterTick,
                );
            }
        }
    }
}

/// One horizontal run per interval, the leading gap included. Later
/// intervals are pushed later and therefore paint over earlier ones.
pub(crate) fn draw_traces(scene: &mut Scene, geo: &GridGeometry, day: &NormalizedDay) {
    for interval in day.trace() {
        let y = geo.lane_center_y(interval.status.lane());
        scene.line(
            Point::new(geo.time_to_x(interval.start_hour), y),
            Point::new(geo.time_to_x(interval.end_hour), y),
            Rgb::TRACE,
            TRACE_WIDTH,
            Role::Trace(interval.status),
        );
    }
}

/// Small squares at both ends of every recorded run.
pub(crate) fn draw_markers(scene: &mut Scene, geo: &GridGeometry, day: &NormalizedDay) {
    let half = MARKER_SIZE / 2.0;
    for interval in &day.intervals {
        let y = geo.lane_center_y(interval.status.lane());
        for hour in [interval.start_hour, interval.end_hour] {
            let x = geo.time_to_x(hour);
            scene.rect(
                Point::new(x - half, y - half),
                MARKER_SIZE,
                MARKER_SIZE,
                interval.status.color(),
                Role::Marker(interval.status),
            );
        }
    }
}

//! Grid layout and the time ↔ x coordinate transform.

use crate::errors::{AppError, AppResult};

pub const DEFAULT_WIDTH: f64 = 1600.0;
pub const DEFAULT_HEIGHT: f64 = 320.0;

const DEFAULT_LABEL_WIDTH: f64 = 120.0;
const DEFAULT_GRID_WIDTH: f64 = 1400.0;
const DEFAULT_SUMMARY_WIDTH: f64 = 80.0;
const DEFAULT_HEADER_HEIGHT: f64 = 40.0;
const DEFAULT_ROW_HEIGHT: f64 = 60.0;

pub const LANE_COUNT: usize = 4;
pub const HOURS_PER_DAY: f64 = 24.0;
/// Quarter-hour ticks cover this share of a lane, measured up from its bottom edge.
pub const QUARTER_TICK_RATIO: f64 = 0.4;

/// Layout of the chart in logical units. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    pub width: f64,
    pub height: f64,
    pub label_width: f64,
    pub grid_width: f64,
    pub summary_width: f64,
    pub header_height: f64,
    pub row_height: f64,
    pub hour_width: f64,
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self::scaled(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl GridGeometry {
    /// Derive the layout for a canvas of `width` × `height` logical units.
    ///
    /// Columns scale with the width and rows with the height, both from the
    /// 1600×320 paper-form proportions.
    pub fn for_canvas(width: f64, height: f64) -> AppResult<Self> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(AppError::InvalidCanvas { width, height });
        }
        Ok(Self::scaled(width, height))
    }

    fn scaled(width: f64, height: f64) -> Self {
        let sx = width / DEFAULT_WIDTH;
        let sy = height / DEFAULT_HEIGHT;
        let grid_width = DEFAULT_GRID_WIDTH * sx;
        Self {
            width,
            height,
            label_width: DEFAULT_LABEL_WIDTH * sx,
            grid_width,
            summary_width: DEFAULT_SUMMARY_WIDTH * sx,
            header_height: DEFAULT_HEADER_HEIGHT * sy,
            row_height: DEFAULT_ROW_HEIGHT * sy,
            hour_width: grid_width / HOURS_PER_DAY,
        }
    }

    pub fn time_to_x(&self, hour_of_day: f64) -> f64 {
        self.label_width + hour_of_day * self.hour_width
    }

    /// Left edge of the time axis (midnight).
    pub fn grid_left(&self) -> f64 {
        self.label_width
    }

    /// Right edge of the time axis (the following midnight).
    pub fn grid_right(&self) -> f64 {
        self.label_width + self.grid_width
    }

    pub fn grid_top(&self) -> f64 {
        self.header_height
    }

    pub fn grid_bottom(&self) -> f64 {
        self.header_height + LANE_COUNT as f64 * self.row_height
    }

    pub fn summary_left(&self) -> f64 {
        self.grid_right()
    }

    pub fn lane_top_y(&self, lane: usize) -> f64 {
        self.header_height + lane as f64 * self.row_height
    }

    pub fn lane_bottom_y(&self, lane: usize) -> f64 {
        self.lane_top_y(lane) + self.row_height
    }

    /// Center line of a lane, where the trace runs.
    pub fn lane_center_y(&self, lane: usize) -> f64 {
        self.lane_top_y(lane) + self.row_height / 2.0
    }

    pub fn contains_time_x(&self, x: f64) -> bool {
        x >= self.grid_left() && x < self.grid_right()
    }

    /// Inverse of [`time_to_x`](Self::time_to_x). `None` outside the time axis.
    pub fn x_to_hour_of_day(&self, x: f64) -> Option<f64> {
        self.contains_time_x(x).then(|| self.hour_at(x))
    }

    pub(crate) fn hour_at(&self, x: f64) -> f64 {
        ((x - self.label_width) / self.hour_width).clamp(0.0, HOURS_PER_DAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_matches_paper_form() {
        let g = GridGeometry::default();
        assert_eq!(g.label_width, 120.0);
        assert_eq!(g.grid_width, 1400.0);
        assert_eq!(g.summary_width, 80.0);
        assert_eq!(g.header_height, 40.0);
        assert_eq!(g.row_height, 60.0);
        assert_eq!(g.grid_bottom(), 280.0);
        assert_eq!(g.summary_left() + g.summary_width, 1600.0);
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn time_axis_endpoints() {
        let g = GridGeometry::default();
        assert!(close(g.time_to_x(0.0), 120.0));
        assert!(close(g.time_to_x(24.0), 1520.0));
        assert!(close(g.time_to_x(12.0), 820.0));
    }

    #[test]
    fn lane_centers_and_tops() {
        let g = GridGeometry::default();
        assert_eq!(g.lane_top_y(0), 40.0);
        assert_eq!(g.lane_center_y(0), 70.0);
        assert_eq!(g.lane_center_y(3), 250.0);
        assert_eq!(g.lane_bottom_y(3), g.grid_bottom());
    }

    #[test]
    fn inverse_is_within_one_unit() {
        let g = GridGeometry::default();
        let mut x = g.grid_left();
        while x < g.grid_right() {
            let h = g.x_to_hour_of_day(x).unwrap();
            assert!((g.time_to_x(h) - x).abs() <= 1.0, "x={x}");
            x += 1.0;
        }
    }

    #[test]
    fn inverse_outside_axis_is_none() {
        let g = GridGeometry::default();
        assert_eq!(g.x_to_hour_of_day(119.0), None);
        assert_eq!(g.x_to_hour_of_day(1520.0), None);
        assert_eq!(g.x_to_hour_of_day(-5.0), None);
        assert_eq!(g.x_to_hour_of_day(120.0), Some(0.0));
    }

    #[test]
    fn scales_with_canvas() {
        let g = GridGeometry::for_canvas(800.0, 160.0).unwrap();
        assert_eq!(g.label_width, 60.0);
        assert_eq!(g.grid_width, 700.0);
        assert_eq!(g.row_height, 30.0);
        assert!(GridGeometry::for_canvas(0.0, 320.0).is_err());
        assert!(GridGeometry::for_canvas(1600.0, f64::NAN).is_err());
    }
}

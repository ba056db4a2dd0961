// src/chart/mod.rs

//! Duty-status grid chart engine.
//!
//! [`Chart::build_scene`] is a pure function of the log and the canvas
//! size; [`Chart::render`] replays that scene through any [`Painter`].
//! Pointer handling goes through [`Chart::pointer_event`].

pub mod connectors;
pub mod geometry;
pub mod hit;
pub(crate) mod normalize;
pub mod scene;
pub mod segments;
pub mod summary;

pub use geometry::GridGeometry;
pub use hit::{TimeOfDay, hit_test};
pub use normalize::SkippedRecord;
pub use scene::{DrawCommand, Painter, Point, Role, Scene, TextAnchor, TextStyle};
pub use summary::{Divergence, StatusHours, SummaryColumn, format_hours, supplied_hours};

use crate::errors::AppResult;
use crate::models::DutyStatusLog;
use std::fmt;
use tracing::debug;

type TimeHandler = Box<dyn FnMut(TimeOfDay)>;

pub struct Chart {
    geometry: GridGeometry,
    on_time_selected: Option<TimeHandler>,
}

impl fmt::Debug for Chart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chart")
            .field("geometry", &self.geometry)
            .field("on_time_selected", &self.on_time_selected.is_some())
            .finish()
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

impl Chart {
    /// A chart on the default 1600×320 canvas.
    pub fn new() -> Self {
        Self {
            geometry: GridGeometry::default(),
            on_time_selected: None,
        }
    }

    pub fn with_size(width: f64, height: f64) -> AppResult<Self> {
        Ok(Self {
            geometry: GridGeometry::for_canvas(width, height)?,
            on_time_selected: None,
        })
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    /// Build the full scene. `None` yields the blank form: grid, labels and
    /// an empty summary column.
    pub fn build_scene(&self, log: Option<&DutyStatusLog>) -> Scene {
        let geo = &self.geometry;
        let mut scene = Scene::new(geo.width, geo.height);
        segments::draw_grid(&mut scene, geo);

        match log {
            Some(log) => {
                let day = normalize::normalize(log);
                segments::draw_traces(&mut scene, geo, &day);
                segments::draw_markers(&mut scene, geo, &day);
                connectors::draw_connectors(&mut scene, geo, &day);
                summary::draw_summary(&mut scene, geo, Some(&supplied_hours(log)));
                debug!(
                    log_date = %log.log_date,
                    intervals = day.intervals.len(),
                    skipped = day.skipped.len(),
                    leading_gap = day.leading_gap.is_some(),
                    "built duty-status scene"
                );
            }
            None => summary::draw_summary(&mut scene, geo, None),
        }

        scene
    }

    /// Draw `log` (or the blank form) onto `painter`.
    pub fn render<P: Painter + ?Sized>(&self, painter: &mut P, log: Option<&DutyStatusLog>) {
        self.build_scene(log).paint(painter);
    }

    /// Records skipped by the normalizer for `log`.
    pub fn skipped_records(&self, log: &DutyStatusLog) -> Vec<SkippedRecord> {
        normalize::normalize(log).skipped
    }

    /// Install the handler called on every pointer hit. Replaces any
    /// previous handler.
    pub fn on_time_selected<F>(&mut self, handler: F)
    where
        F: FnMut(TimeOfDay) + 'static,
    {
        self.on_time_selected = Some(Box::new(handler));
    }

    /// Feed a pointer position (canvas-relative). On a hit the handler runs
    /// synchronously and the time is returned; misses call nothing.
    pub fn pointer_event(&mut self, x: f64, _y: f64) -> Option<TimeOfDay> {
        let time = hit_test(&self.geometry, x)?;
        if let Some(handler) = self.on_time_selected.as_mut() {
            handler(time);
        }
        Some(time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn handler_runs_on_hits_only() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut chart = Chart::new();
        chart.on_time_selected(move |t| sink.borrow_mut().push(t));

        assert!(chart.pointer_event(50.0, 100.0).is_none());
        assert!(chart.pointer_event(1550.0, 100.0).is_none());
        let hit = chart.pointer_event(120.0, 10.0);

        assert_eq!(hit, Some(TimeOfDay { hour: 0, minute: 0 }));
        assert_eq!(*seen.borrow(), vec![TimeOfDay { hour: 0, minute: 0 }]);
    }

    #[test]
    fn blank_form_has_no_trace() {
        let scene = Chart::new().build_scene(None);
        assert_eq!(scene.count_role(|r| matches!(r, Role::Trace(_))), 0);
        assert_eq!(scene.with_role(Role::Connector).count(), 0);
        assert_eq!(scene.count_role(|r| matches!(r, Role::LaneBackground(_))), 4);
    }

    #[test]
    fn rejects_degenerate_canvas() {
        assert!(Chart::with_size(-1.0, 320.0).is_err());
    }
}

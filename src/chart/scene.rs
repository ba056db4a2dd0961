//! Draw commands and the painter capability they are executed against.
//!
//! The engine never paints directly: it builds a [`Scene`] first, which
//! keeps the geometry testable without any surface, then a backend
//! replays it through [`Painter`].

use crate::models::DutyStatus;
use crate::utils::colors::Rgb;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f64,
    pub bold: bool,
    pub anchor: TextAnchor,
}

impl TextStyle {
    pub fn bold(size: f64, anchor: TextAnchor) -> Self {
        Self {
            size,
            bold: true,
            anchor,
        }
    }
}

/// What a draw command depicts. Painters ignore it; tests and the
/// terminal backend use it to tell chart parts apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Canvas,
    Border,
    HourLabel,
    LaneLabel,
    LaneBackground(DutyStatus),
    HourLine,
    QuarterTick,
    Trace(DutyStatus),
    Connector,
    Marker(DutyStatus),
    SummaryHeader,
    SummaryCell(DutyStatus),
    SummaryValue(DutyStatus),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line {
        from: Point,
        to: Point,
        color: Rgb,
        width: f64,
        role: Role,
    },
    Rect {
        origin: Point,
        width: f64,
        height: f64,
        color: Rgb,
        role: Role,
    },
    Text {
        at: Point,
        text: String,
        color: Rgb,
        style: TextStyle,
        role: Role,
    },
}

impl DrawCommand {
    pub fn role(&self) -> Role {
        match self {
            DrawCommand::Line { role, .. }
            | DrawCommand::Rect { role, .. }
            | DrawCommand::Text { role, .. } => *role,
        }
    }
}

/// The minimal surface a backend has to provide.
pub trait Painter {
    fn draw_line(&mut self, from: Point, to: Point, color: Rgb, width: f64);
    fn fill_rect(&mut self, origin: Point, width: f64, height: f64, color: Rgb);
    fn draw_text(&mut self, at: Point, text: &str, color: Rgb, style: TextStyle);
}

/// An ordered list of draw commands, bottom layer first.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn line(&mut self, from: Point, to: Point, color: Rgb, width: f64, role: Role) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            width,
            role,
        });
    }

    pub fn rect(&mut self, origin: Point, width: f64, height: f64, color: Rgb, role: Role) {
        self.commands.push(DrawCommand::Rect {
            origin,
            width,
            height,
            color,
            role,
        });
    }

    pub fn text(&mut self, at: Point, text: impl Into<String>, style: TextStyle, role: Role) {
        self.commands.push(DrawCommand::Text {
            at,
            text: text.into(),
            color: Rgb::BLACK,
            style,
            role,
        });
    }

    /// Outline a rectangle with four lines.
    pub fn stroke_rect(&mut self, origin: Point, width: f64, height: f64, stroke: f64, role: Role) {
        let (x0, y0) = (origin.x, origin.y);
        let (x1, y1) = (x0 + width, y0 + height);
        let corners = [
            (Point::new(x0, y0), Point::new(x1, y0)),
            (Point::new(x1, y0), Point::new(x1, y1)),
            (Point::new(x1, y1), Point::new(x0, y1)),
            (Point::new(x0, y1), Point::new(x0, y0)),
        ];
        for (from, to) in corners {
            self.line(from, to, Rgb::BLACK, stroke, role);
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn with_role(&self, role: Role) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(move |c| c.role() == role)
    }

    pub fn count_role(&self, pred: impl Fn(Role) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c.role())).count()
    }

    /// Replay every command, in order, against `painter`.
    pub fn paint<P: Painter + ?Sized>(&self, painter: &mut P) {
        for cmd in &self.commands {
            match cmd {
                DrawCommand::Line {
                    from,
                    to,
                    color,
                    width,
                    ..
                } => painter.draw_line(*from, *to, *color, *width),
                DrawCommand::Rect {
                    origin,
                    width,
                    height,
                    color,
                    ..
                } => painter.fill_rect(*origin, *width, *height, *color),
                DrawCommand::Text {
                    at,
                    text,
                    color,
                    style,
                    ..
                } => painter.draw_text(*at, text, *color, *style),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        lines: usize,
        rects: usize,
        texts: Vec<String>,
    }

    impl Painter for Counter {
        fn draw_line(&mut self, _: Point, _: Point, _: Rgb, _: f64) {
            self.lines += 1;
        }
        fn fill_rect(&mut self, _: Point, _: f64, _: f64, _: Rgb) {
            self.rects += 1;
        }
        fn draw_text(&mut self, _: Point, text: &str, _: Rgb, _: TextStyle) {
            self.texts.push(text.to_string());
        }
    }

    #[test]
    fn paint_replays_in_order() {
        let mut scene = Scene::new(100.0, 50.0);
        scene.rect(Point::new(0.0, 0.0), 100.0, 50.0, Rgb::WHITE, Role::Canvas);
        scene.stroke_rect(Point::new(0.0, 0.0), 100.0, 50.0, 2.0, Role::Border);
        scene.text(
            Point::new(5.0, 5.0),
            "Noon",
            TextStyle::bold(12.0, TextAnchor::Middle),
            Role::HourLabel,
        );

        let mut counter = Counter::default();
        scene.paint(&mut counter);
        assert_eq!(counter.rects, 1);
        assert_eq!(counter.lines, 4);
        assert_eq!(counter.texts, vec!["Noon".to_string()]);
        assert_eq!(scene.with_role(Role::Border).count(), 4);
    }
}

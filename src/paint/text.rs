// src/paint/text.rs

//! Character-cell backend for terminal output.

use crate::chart::{Painter, Point, TextAnchor, TextStyle};
use crate::utils::colors::{RESET, Rgb};
use unicode_width::UnicodeWidthChar;

/// Logical units per terminal row at the default canvas height.
const UNITS_PER_ROW: f64 = 20.0;
/// Lines at least this wide are drawn with heavy box characters.
const HEAVY_LINE_WIDTH: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    ch: char,
    fg: Option<Rgb>,
    bg: Option<Rgb>,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: None,
            bg: None,
        }
    }
}

/// Rasterizes painter calls onto a grid of character cells.
///
/// Text is kept on a layer above every shape: at this resolution a grid
/// line would otherwise eat into lane and hour labels.
#[derive(Debug)]
pub struct TextPainter {
    cols: usize,
    rows: usize,
    sx: f64,
    sy: f64,
    color: bool,
    cells: Vec<Cell>,
    glyphs: Vec<(usize, char, Rgb)>,
}

impl TextPainter {
    /// `columns` wide, with as many rows as keep the chart's aspect readable.
    pub fn new(width: f64, height: f64, columns: usize, color: bool) -> Self {
        let cols = columns.max(1);
        let rows = ((height / UNITS_PER_ROW).round() as usize).max(1);
        Self {
            cols,
            rows,
            sx: cols as f64 / width,
            sy: rows as f64 / height,
            color,
            cells: vec![Cell::default(); cols * rows],
            glyphs: Vec::new(),
        }
    }

    fn col(&self, x: f64) -> usize {
        ((x * self.sx).floor().max(0.0) as usize).min(self.cols - 1)
    }

    fn row(&self, y: f64) -> usize {
        ((y * self.sy).floor().max(0.0) as usize).min(self.rows - 1)
    }

    /// Cells covered by the span `[a, b]` on one axis.
    fn span(a: f64, b: f64, scale: f64, limit: usize) -> (usize, usize) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let first = (lo * scale).floor().max(0.0) as usize;
        let last = ((hi * scale).ceil() as usize).saturating_sub(1).max(first);
        (first.min(limit - 1), last.min(limit - 1))
    }

    fn put(&mut self, col: usize, row: usize, ch: char, fg: Option<Rgb>) {
        let cell = &mut self.cells[row * self.cols + col];
        cell.ch = ch;
        cell.fg = fg;
    }

    pub fn finish(mut self) -> String {
        for (idx, ch, fg) in std::mem::take(&mut self.glyphs) {
            let cell = &mut self.cells[idx];
            cell.ch = ch;
            cell.fg = Some(fg);
        }

        let mut out = String::new();
        for row in self.cells.chunks(self.cols) {
            let mut line = String::new();
            for cell in row {
                if self.color {
                    if let Some(bg) = cell.bg {
                        line.push_str(&bg.ansi_bg());
                    }
                    if let Some(fg) = cell.fg {
                        line.push_str(&fg.ansi_fg());
                    }
                    line.push(cell.ch);
                    if cell.bg.is_some() || cell.fg.is_some() {
                        line.push_str(RESET);
                    }
                } else {
                    line.push(cell.ch);
                }
            }
            if !self.color {
                line.truncate(line.trim_end().len());
            }
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

impl Painter for TextPainter {
    fn draw_line(&mut self, from: Point, to: Point, color: Rgb, width: f64) {
        let heavy = width >= HEAVY_LINE_WIDTH;
        if (from.y - to.y).abs() < f64::EPSILON {
            let row = self.row(from.y);
            let (c0, c1) = Self::span(from.x, to.x, self.sx, self.cols);
            let ch = if heavy { '━' } else { '─' };
            for col in c0..=c1 {
                self.put(col, row, ch, Some(color));
            }
        } else if (from.x - to.x).abs() < f64::EPSILON {
            let col = self.col(from.x);
            let (r0, r1) = Self::span(from.y, to.y, self.sy, self.rows);
            let ch = if heavy { '┃' } else { '│' };
            for row in r0..=r1 {
                self.put(col, row, ch, Some(color));
            }
        } else {
            let steps = (((to.x - from.x) * self.sx).abs())
                .max(((to.y - from.y) * self.sy).abs())
                .ceil()
                .max(1.0) as usize;
            for i in 0..=steps {
                let t = i as f64 / steps as f64;
                let col = self.col(from.x + (to.x - from.x) * t);
                let row = self.row(from.y + (to.y - from.y) * t);
                self.put(col, row, '*', Some(color));
            }
        }
    }

    fn fill_rect(&mut self, origin: Point, width: f64, height: f64, color: Rgb) {
        let (c0, c1) = Self::span(origin.x, origin.x + width, self.sx, self.cols);
        let (r0, r1) = Self::span(origin.y, origin.y + height, self.sy, self.rows);
        for row in r0..=r1 {
            for col in c0..=c1 {
                self.cells[row * self.cols + col] = Cell {
                    ch: ' ',
                    fg: None,
                    bg: Some(color),
                };
            }
        }
    }

    fn draw_text(&mut self, at: Point, text: &str, color: Rgb, style: TextStyle) {
        let row = self.row(at.y);
        let width: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
        let anchor_col = (at.x * self.sx).round() as isize;
        let mut col = match style.anchor {
            TextAnchor::Start => anchor_col,
            TextAnchor::Middle => anchor_col - width as isize / 2,
        };
        for ch in text.chars() {
            let w = ch.width().unwrap_or(0);
            if w == 0 {
                continue;
            }
            if col >= 0 && (col as usize) < self.cols {
                self.glyphs.push((row * self.cols + col as usize, ch, color));
            }
            col += w as isize;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_follow_canvas_height() {
        let p = TextPainter::new(1600.0, 320.0, 128, false);
        assert_eq!(p.rows, 16);
        assert_eq!(p.finish().lines().count(), 16);
    }

    #[test]
    fn draws_heavy_and_light_lines() {
        let mut p = TextPainter::new(160.0, 40.0, 16, false);
        p.draw_line(Point::new(0.0, 30.0), Point::new(80.0, 30.0), Rgb::TRACE, 4.0);
        p.draw_line(Point::new(100.0, 0.0), Point::new(100.0, 40.0), Rgb::BLACK, 1.0);
        let out = p.finish();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "          │");
        assert_eq!(lines[1], "━━━━━━━━  │");
    }

    #[test]
    fn text_stays_above_later_lines() {
        let mut p = TextPainter::new(100.0, 20.0, 10, false);
        p.draw_text(
            Point::new(0.0, 5.0),
            "OFF",
            Rgb::BLACK,
            TextStyle::bold(12.0, TextAnchor::Start),
        );
        p.draw_line(Point::new(15.0, 0.0), Point::new(15.0, 20.0), Rgb::BLACK, 1.0);
        assert_eq!(p.finish().trim_end(), "OFF");
    }

    #[test]
    fn centers_text_on_anchor() {
        let mut p = TextPainter::new(100.0, 20.0, 10, false);
        p.draw_text(
            Point::new(50.0, 5.0),
            "Noon",
            Rgb::BLACK,
            TextStyle::bold(12.0, TextAnchor::Middle),
        );
        assert_eq!(p.finish().trim_end(), "   Noon");
    }
}

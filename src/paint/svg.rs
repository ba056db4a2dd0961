// src/paint/svg.rs

use crate::chart::{Painter, Point, TextAnchor, TextStyle};
use crate::utils::colors::Rgb;
use std::fmt::Write;

/// Builds a standalone SVG document from painter calls.
#[derive(Debug)]
pub struct SvgPainter {
    width: f64,
    height: f64,
    body: String,
}

impl SvgPainter {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            body: String::new(),
        }
    }

    pub fn finish(self) -> String {
        let w = num(self.width);
        let h = num(self.height);
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" \
             viewBox=\"0 0 {w} {h}\" font-family=\"Arial, Helvetica, sans-serif\">\n{}</svg>\n",
            self.body
        )
    }
}

impl Painter for SvgPainter {
    fn draw_line(&mut self, from: Point, to: Point, color: Rgb, width: f64) {
        let _ = writeln!(
            self.body,
            "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\" stroke-linecap=\"square\"/>",
            num(from.x),
            num(from.y),
            num(to.x),
            num(to.y),
            color.hex(),
            num(width)
        );
    }

    fn fill_rect(&mut self, origin: Point, width: f64, height: f64, color: Rgb) {
        let _ = writeln!(
            self.body,
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
            num(origin.x),
            num(origin.y),
            num(width),
            num(height),
            color.hex()
        );
    }

    fn draw_text(&mut self, at: Point, text: &str, color: Rgb, style: TextStyle) {
        let anchor = match style.anchor {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
        };
        let weight = if style.bold { "bold" } else { "normal" };
        let _ = writeln!(
            self.body,
            "  <text x=\"{}\" y=\"{}\" font-size=\"{}\" font-weight=\"{weight}\" text-anchor=\"{anchor}\" fill=\"{}\">{}</text>",
            num(at.x),
            num(at.y),
            num(style.size),
            color.hex(),
            escape(text)
        );
    }
}

/// Up to three decimals, trailing zeros dropped.
fn num(v: f64) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_compact() {
        assert_eq!(num(120.0), "120");
        assert_eq!(num(178.33333), "178.333");
        assert_eq!(num(2.5), "2.5");
        assert_eq!(num(-0.0001), "0");
    }

    #[test]
    fn writes_escaped_text_and_shapes() {
        let mut p = SvgPainter::new(100.0, 50.0);
        p.fill_rect(Point::new(0.0, 0.0), 100.0, 50.0, Rgb::WHITE);
        p.draw_line(Point::new(0.0, 1.0), Point::new(10.0, 1.0), Rgb::TRACE, 4.0);
        p.draw_text(
            Point::new(5.0, 5.0),
            "A&B <x>",
            Rgb::BLACK,
            TextStyle::bold(12.0, TextAnchor::Start),
        );
        let svg = p.finish();
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains("viewBox=\"0 0 100 50\""));
        assert!(svg.contains("stroke=\"#0066CC\" stroke-width=\"4\""));
        assert!(svg.contains(">A&amp;B &lt;x&gt;</text>"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }
}

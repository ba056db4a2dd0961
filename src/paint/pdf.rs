// src/paint/pdf.rs

use crate::chart::{Chart, Painter, Point, TextAnchor, TextStyle, format_hours, supplied_hours};
use crate::export::model::{DutyRow, duty_rows, get_headers};
use crate::models::{DutyStatus, DutyStatusLog};
use crate::utils::colors::Rgb;
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub const REPORT_TITLE: &str = "FMCSA Electronic Logging Device - Daily Log";

/// Helvetica glyphs average about half an em.
const AVG_GLYPH_WIDTH: f32 = 0.5;

/// Multi-page daily-log report: one or more pages per log, each with the
/// header block, the grid chart, the duty-status table and the totals.
pub struct PdfReport {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,

    next_id: i32,
    font_id: Ref,
    bold_font_id: Ref,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

impl Default for PdfReport {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfReport {
    /// Landscape US Letter.
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let bold_font_id = Ref::new(4);
        let next_id = 5;

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));
        pdf.type1_font(bold_font_id).base_font(Name(b"Helvetica-Bold"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w: 792.0,
            page_h: 612.0,
            margin: 40.0,
            row_h: 16.0,

            next_id,
            font_id,
            bold_font_id,

            font_size: 8.0,
            header_font_size: 9.0,
            title_font_size: 14.0,
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_refs.len()
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        {
            let mut page = self.pdf.page(page_id);
            page.parent(self.pages_id)
                .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
                .contents(content_id);

            let mut resources = page.resources();
            let mut fonts = resources.fonts();
            fonts.pair(Name(b"F1"), self.font_id);
            fonts.pair(Name(b"F2"), self.bold_font_id);
        }

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    fn draw_cell_borders(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
        content.save_state();
        content.set_stroke_rgb(0.0, 0.0, 0.0);
        content.set_line_width(0.75);
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    fn draw_row(
        &self,
        content: &mut Content,
        y: f32,
        col_widths: &[f32],
        row: &[String],
        font: Name<'static>,
        font_size: f32,
    ) {
        let mut x = self.margin;

        for (i, text) in row.iter().enumerate() {
            let w = col_widths[i];
            let fitted = fit_text(text, w - 8.0, font_size);
            show_text(content, font, font_size, x + 4.0, y + 5.0, &fitted);
            self.draw_cell_borders(content, x, y, w, self.row_h);
            x += w;
        }
    }

    fn fill_band(&self, content: &mut Content, y: f32, width: f32, rgb: (f32, f32, f32)) {
        content.save_state();
        content.set_fill_rgb(rgb.0, rgb.1, rgb.2);
        content.rect(self.margin, y, width, self.row_h);
        content.fill_nonzero();
        content.restore_state();
    }

    /// Column widths from header + content, scaled down to the page.
    fn compute_col_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers.iter().map(|h| h.len() as f32 * 6.0 + 8.0).collect();

        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                let w = (cell.len() as f32 * 4.6 + 8.0).max(widths[i]);
                widths[i] = w;
            }
        }

        let total: f32 = widths.iter().sum();
        let max = self.page_w - 2.0 * self.margin;

        if total > max {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }

        widths
    }

    /// Header block: title plus driver/date/vehicle/carrier. Returns the y
    /// just below it.
    fn draw_header(&self, content: &mut Content, log: &DutyStatusLog, page: usize) -> f32 {
        let mut y = self.page_h - self.margin - self.title_font_size;
        show_text(content, Name(b"F2"), self.title_font_size, self.margin, y, REPORT_TITLE);

        let pg = format!("Page {}", page);
        show_text(
            content,
            Name(b"F1"),
            self.font_size,
            self.page_w - self.margin - 40.0,
            self.margin - 20.0,
            &pg,
        );

        y -= 8.0;
        let info = [
            ("Driver:", log.driver_display()),
            ("Date:", log.date_display()),
            ("Vehicle:", log.vehicle_display()),
            ("Carrier:", log.carrier_display()),
        ];
        for (label, value) in info {
            y -= self.header_font_size + 4.0;
            show_text(content, Name(b"F2"), self.header_font_size, self.margin, y, label);
            show_text(content, Name(b"F1"), self.header_font_size, self.margin + 60.0, y, value);
        }
        y - 10.0
    }

    /// Add the pages for one daily log.
    pub fn write_log(&mut self, chart: &Chart, log: &DutyStatusLog) {
        let mut page_idx = self.page_count() + 1;
        let mut content = self.new_page();
        let mut y = self.draw_header(&mut content, log, page_idx);

        // chart, scaled to the printable width
        let geo = chart.geometry();
        let scale = ((self.page_w - 2.0 * self.margin) as f64 / geo.width) as f32;
        let chart_h = geo.height as f32 * scale;
        {
            let mut painter = PdfPainter {
                content: &mut content,
                origin_x: self.margin,
                top_y: y,
                scale,
            };
            chart.render(&mut painter, Some(log));
        }
        y -= chart_h + 14.0;

        let headers = get_headers();
        let rows: Vec<Vec<String>> = duty_rows(log).iter().map(DutyRow::cells).collect();
        let col_widths = self.compute_col_widths(&headers, &rows);
        let header_row: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let table_w: f32 = col_widths.iter().sum();

        y -= self.row_h;
        self.fill_band(&mut content, y, table_w, (0.85, 0.87, 0.90));
        self.draw_row(&mut content, y, &col_widths, &header_row, Name(b"F2"), self.header_font_size);

        let mut remaining: &[Vec<String>] = &rows;
        while !remaining.is_empty() {
            let mut consumed = 0;
            for (i, row) in remaining.iter().enumerate() {
                if y - self.row_h < self.margin {
                    break;
                }
                y -= self.row_h;

                // zebra stripe
                if i % 2 == 0 {
                    self.fill_band(&mut content, y, table_w, (0.96, 0.96, 0.96));
                }
                self.draw_row(&mut content, y, &col_widths, row, Name(b"F1"), self.font_size);
                consumed += 1;
            }
            remaining = &remaining[consumed..];

            if !remaining.is_empty() {
                self.finalize_page(content);
                page_idx += 1;
                content = self.new_page();
                y = self.draw_header(&mut content, log, page_idx);
                y -= self.row_h;
                self.fill_band(&mut content, y, table_w, (0.85, 0.87, 0.90));
                self.draw_row(&mut content, y, &col_widths, &header_row, Name(b"F2"), self.header_font_size);
            }
        }

        let totals = totals_rows(log);
        if y - self.row_h * (totals.len() as f32 + 1.0) < self.margin {
            self.finalize_page(content);
            page_idx += 1;
            content = self.new_page();
            y = self.draw_header(&mut content, log, page_idx);
        }
        y -= 10.0;
        let widths = [140.0, 60.0];
        for (i, row) in totals.iter().enumerate() {
            y -= self.row_h;
            let font = if i + 1 == totals.len() { Name(b"F2") } else { Name(b"F1") };
            self.draw_row(&mut content, y, &widths, row, font, self.header_font_size);
        }

        self.finalize_page(content);
    }

    /// A single page holding the blank form.
    pub fn write_blank(&mut self, chart: &Chart) {
        let page_idx = self.page_count() + 1;
        let mut content = self.new_page();
        let y = self.draw_header(&mut content, &DutyStatusLog::default(), page_idx);
        let geo = chart.geometry();
        let scale = ((self.page_w - 2.0 * self.margin) as f64 / geo.width) as f32;
        {
            let mut painter = PdfPainter {
                content: &mut content,
                origin_x: self.margin,
                top_y: y,
                scale,
            };
            chart.render(&mut painter, None);
        }
        self.finalize_page(content);
    }

    pub fn finish(mut self) -> Vec<u8> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();
        self.pdf.finish()
    }

    pub fn save(self, path: &Path) -> std::io::Result<()> {
        let bytes = self.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

/// Supplied totals, as on the paper log, with a grand total row.
fn totals_rows(log: &DutyStatusLog) -> Vec<Vec<String>> {
    let hours = supplied_hours(log);
    let mut rows: Vec<Vec<String>> = DutyStatus::ALL
        .iter()
        .map(|s| vec![format!("{} Hours:", s.title()), format_hours(hours.get(*s))])
        .collect();
    rows.push(vec!["Total Hours:".to_string(), format_hours(hours.total())]);
    rows
}

fn show_text(content: &mut Content, font: Name<'_>, size: f32, x: f32, y: f32, text: &str) {
    content.begin_text();
    content.set_font(font, size);
    content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
    content.show(Str(text.as_bytes()));
    content.end_text();
}

fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * AVG_GLYPH_WIDTH
}

/// Cut `text` so it fits `max_w`, marking the cut with "..".
fn fit_text(text: &str, max_w: f32, size: f32) -> String {
    if text_width(text, size) <= max_w {
        return text.to_string();
    }
    let max_chars = ((max_w / (size * AVG_GLYPH_WIDTH)).floor() as usize).saturating_sub(2);
    let mut out: String = text.chars().take(max_chars).collect();
    out.push_str("..");
    out
}

/// Paints a chart scene into a PDF content stream.
///
/// Scene units are scaled by `scale` and flipped so the scene's top-left
/// corner lands at `(origin_x, top_y)` in PDF user space.
pub struct PdfPainter<'a> {
    pub content: &'a mut Content,
    pub origin_x: f32,
    pub top_y: f32,
    pub scale: f32,
}

impl PdfPainter<'_> {
    fn map(&self, p: Point) -> (f32, f32) {
        (
            self.origin_x + p.x as f32 * self.scale,
            self.top_y - p.y as f32 * self.scale,
        )
    }
}

impl Painter for PdfPainter<'_> {
    fn draw_line(&mut self, from: Point, to: Point, color: Rgb, width: f64) {
        let (x0, y0) = self.map(from);
        let (x1, y1) = self.map(to);
        let (r, g, b) = color.unit();
        self.content.save_state();
        self.content.set_stroke_rgb(r, g, b);
        self.content.set_line_width(width as f32 * self.scale);
        self.content.move_to(x0, y0);
        self.content.line_to(x1, y1);
        self.content.stroke();
        self.content.restore_state();
    }

    fn fill_rect(&mut self, origin: Point, width: f64, height: f64, color: Rgb) {
        let (x, top) = self.map(origin);
        let w = width as f32 * self.scale;
        let h = height as f32 * self.scale;
        let (r, g, b) = color.unit();
        self.content.save_state();
        self.content.set_fill_rgb(r, g, b);
        self.content.rect(x, top - h, w, h);
        self.content.fill_nonzero();
        self.content.restore_state();
    }

    fn draw_text(&mut self, at: Point, text: &str, color: Rgb, style: TextStyle) {
        let (mut x, y) = self.map(at);
        let size = style.size as f32 * self.scale;
        if style.anchor == TextAnchor::Middle {
            x -= text_width(text, size) / 2.0;
        }
        let font = if style.bold { Name(b"F2") } else { Name(b"F1") };
        let (r, g, b) = color.unit();
        self.content.save_state();
        self.content.set_fill_rgb(r, g, b);
        show_text(self.content, font, size, x, y, text);
        self.content.restore_state();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DutyStatusRecord;

    #[test]
    fn fit_text_truncates_long_cells() {
        assert_eq!(fit_text("Terminal", 100.0, 8.0), "Terminal");
        let cut = fit_text("On duty - fuel stops, deliveries, paperwork", 40.0, 8.0);
        assert!(cut.ends_with(".."));
        assert!(cut.chars().count() <= 10);
    }

    #[test]
    fn report_is_a_pdf_with_one_page_per_short_log() {
        let log = DutyStatusLog::new("2025-03-01")
            .with_record(DutyStatusRecord::new(
                DutyStatus::Driving,
                "2025-03-01T06:00",
                "2025-03-01T08:00",
            ))
            .with_hours(DutyStatus::Driving, 2.0);

        let chart = Chart::new();
        let mut report = PdfReport::new();
        report.write_log(&chart, &log);
        report.write_log(&chart, &log);
        assert_eq!(report.page_count(), 2);

        let bytes = report.finish();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn blank_form_is_one_page() {
        let mut report = PdfReport::new();
        report.write_blank(&Chart::new());
        assert_eq!(report.page_count(), 1);
        assert!(report.finish().len() > 100);
    }

    #[test]
    fn totals_include_grand_total() {
        let log = DutyStatusLog::new("2025-03-01")
            .with_hours(DutyStatus::Driving, 8.5)
            .with_hours(DutyStatus::OffDuty, 15.5);
        let rows = totals_rows(&log);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[2], vec!["Driving Hours:".to_string(), "8.50".to_string()]);
        assert_eq!(rows[4][1], "24.00");
    }
}

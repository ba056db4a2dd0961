use crate::chart::Chart;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::{ensure_parent, ensure_writable, notify_export_success};
use crate::models::DutyStatusLog;
use crate::paint::pdf::REPORT_TITLE;
use crate::paint::{ChartFormat, PdfReport, SvgPainter, TextPainter};
use crate::ui::messages::{info, warning};
use std::fs;
use std::path::Path;
use tracing::debug;

/// What `render` was asked for, after CLI flags and config are merged.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    pub format: ChartFormat,
    pub output: Option<String>,
    pub width: f64,
    pub height: f64,
    pub force: bool,
}

impl RenderRequest {
    /// Flags win over the configuration file.
    pub fn from_flags(
        cfg: &Config,
        format: Option<ChartFormat>,
        output: Option<String>,
        width: Option<f64>,
        height: Option<f64>,
        force: bool,
    ) -> Self {
        Self {
            format: format.unwrap_or(cfg.default_format),
            output,
            width: width.unwrap_or(cfg.width),
            height: height.unwrap_or(cfg.height),
            force,
        }
    }
}

pub struct RenderLogic;

impl RenderLogic {
    pub fn render(logs: &[DutyStatusLog], req: &RenderRequest, cfg: &Config) -> AppResult<()> {
        let chart = Chart::with_size(req.width, req.height)?;
        debug!(
            format = req.format.as_str(),
            logs = logs.len(),
            width = req.width,
            height = req.height,
            "rendering"
        );

        for log in logs {
            for skipped in chart.skipped_records(log) {
                warning(format!(
                    "{}: record #{} skipped ({})",
                    log.date_display(),
                    skipped.index,
                    skipped.reason
                ));
            }
        }

        match req.format {
            ChartFormat::Svg => Self::render_svg(&chart, logs, req),
            ChartFormat::Pdf => Self::render_pdf(&chart, logs, req),
            ChartFormat::Text => Self::render_text(&chart, logs, req, cfg),
        }
    }

    /// The empty form, for filling in by hand.
    pub fn render_blank(req: &RenderRequest, cfg: &Config) -> AppResult<()> {
        let chart = Chart::with_size(req.width, req.height)?;
        let geo = chart.geometry();
        debug!(format = req.format.as_str(), "rendering blank form");

        match req.format {
            ChartFormat::Svg => {
                let path = Self::output_path(req, "SVG")?;
                let mut painter = SvgPainter::new(geo.width, geo.height);
                chart.render(&mut painter, None);
                fs::write(path, painter.finish())?;
                notify_export_success("SVG", path);
            }
            ChartFormat::Pdf => {
                let path = Self::output_path(req, "PDF")?;
                let mut report = PdfReport::new();
                report.write_blank(&chart);
                report
                    .save(path)
                    .map_err(|e| AppError::Paint(format!("PDF write error: {e}")))?;
                notify_export_success("PDF", path);
            }
            ChartFormat::Text => {
                let color = cfg.color && req.output.is_none();
                let mut painter =
                    TextPainter::new(geo.width, geo.height, cfg.text_columns, color);
                chart.render(&mut painter, None);
                let mut out = text_header(&DutyStatusLog::default());
                out.push_str(&painter.finish());
                Self::write_text(req, out)?;
            }
        }
        Ok(())
    }

    fn output_path<'a>(req: &'a RenderRequest, label: &str) -> AppResult<&'a Path> {
        let file = req.output.as_deref().ok_or_else(|| {
            AppError::Paint(format!("{label} output needs --output FILE"))
        })?;
        let path = Path::new(file);
        ensure_writable(path, req.force)?;
        ensure_parent(path)?;
        Ok(path)
    }

    fn render_svg(chart: &Chart, logs: &[DutyStatusLog], req: &RenderRequest) -> AppResult<()> {
        let [log] = logs else {
            return Err(AppError::Selection(format!(
                "SVG holds one daily log but {} were selected; pick one with --date",
                logs.len()
            )));
        };
        let path = Self::output_path(req, "SVG")?;

        let geo = chart.geometry();
        let mut painter = SvgPainter::new(geo.width, geo.height);
        chart.render(&mut painter, Some(log));
        fs::write(path, painter.finish())?;

        notify_export_success("SVG", path);
        Ok(())
    }

    fn render_pdf(chart: &Chart, logs: &[DutyStatusLog], req: &RenderRequest) -> AppResult<()> {
        let path = Self::output_path(req, "PDF")?;
        info(format!("Rendering {} daily log(s) to PDF", logs.len()));

        let mut report = PdfReport::new();
        for log in logs {
            report.write_log(chart, log);
        }
        report
            .save(path)
            .map_err(|e| AppError::Paint(format!("PDF write error: {e}")))?;

        notify_export_success("PDF", path);
        Ok(())
    }

    fn render_text(
        chart: &Chart,
        logs: &[DutyStatusLog],
        req: &RenderRequest,
        cfg: &Config,
    ) -> AppResult<()> {
        // never write escape codes into a file
        let color = cfg.color && req.output.is_none();
        let mut out = String::new();

        for (i, log) in logs.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&text_header(log));

            let geo = chart.geometry();
            let mut painter = TextPainter::new(geo.width, geo.height, cfg.text_columns, color);
            chart.render(&mut painter, Some(log));
            out.push_str(&painter.finish());
        }

        Self::write_text(req, out)
    }

    fn write_text(req: &RenderRequest, out: String) -> AppResult<()> {
        match &req.output {
            Some(_) => {
                let path = Self::output_path(req, "Text")?;
                fs::write(path, out)?;
                notify_export_success("Text", path);
            }
            None => print!("{out}"),
        }
        Ok(())
    }
}

fn text_header(log: &DutyStatusLog) -> String {
    format!(
        "{REPORT_TITLE}\nDriver: {}   Date: {}   Vehicle: {}   Carrier: {}\n\n",
        log.driver_display(),
        log.date_display(),
        log.vehicle_display(),
        log.carrier_display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let cfg = Config {
            default_format: ChartFormat::Text,
            ..Config::default()
        };
        let req = RenderRequest::from_flags(&cfg, None, None, Some(800.0), None, false);
        assert_eq!(req.format, ChartFormat::Text);
        assert_eq!(req.width, 800.0);
        assert_eq!(req.height, cfg.height);

        let req = RenderRequest::from_flags(&cfg, Some(ChartFormat::Pdf), None, None, None, false);
        assert_eq!(req.format, ChartFormat::Pdf);
    }

    #[test]
    fn svg_refuses_several_logs() {
        let logs = vec![DutyStatusLog::new("2025-03-01"), DutyStatusLog::new("2025-03-02")];
        let req = RenderRequest::from_flags(
            &Config::default(),
            Some(ChartFormat::Svg),
            Some("unused.svg".into()),
            None,
            None,
            true,
        );
        let err = RenderLogic::render(&logs, &req, &Config::default()).unwrap_err();
        assert!(matches!(err, AppError::Selection(_)));
    }

    #[test]
    fn blank_svg_still_needs_an_output_file() {
        let req = RenderRequest::from_flags(
            &Config::default(),
            Some(ChartFormat::Svg),
            None,
            None,
            None,
            false,
        );
        let err = RenderLogic::render_blank(&req, &Config::default()).unwrap_err();
        assert!(matches!(err, AppError::Paint(_)));
    }

    #[test]
    fn header_uses_display_defaults() {
        let header = text_header(&DutyStatusLog::new("2025-03-01"));
        assert!(header.starts_with(REPORT_TITLE));
        assert!(header.contains("Driver: Driver"));
        assert!(header.contains("Carrier: N/A"));
    }
}

//! Paint backends for chart scenes.

pub mod pdf;
pub mod svg;
pub mod text;

pub use pdf::{PdfPainter, PdfReport};
pub use svg::SvgPainter;
pub use text::TextPainter;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Output format for `render`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartFormat {
    #[default]
    Svg,
    Pdf,
    Text,
}

impl ChartFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartFormat::Svg => "svg",
            ChartFormat::Pdf => "pdf",
            ChartFormat::Text => "text",
        }
    }
}

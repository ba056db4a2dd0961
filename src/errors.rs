//! Unified application error type.
//! Everything outside the rendering engine (input loading, config, paint
//! backends, export, cli) returns AppError so failures surface the same way.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Input
    // ---------------------------
    #[error("Invalid log document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Input selection error: {0}")]
    Selection(String),

    // ---------------------------
    // Chart setup
    // ---------------------------
    #[error("Invalid canvas size: {width}x{height}")]
    InvalidCanvas { width: f64, height: f64 },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Output errors
    // ---------------------------
    #[error("Paint error: {0}")]
    Paint(String),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// Why a single duty-status record was left out of a render pass.
///
/// These never abort a render; the normalizer collects them next to the
/// intervals it kept.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntervalError {
    #[error("expected an object, found {0}")]
    NotAnObject(&'static str),

    #[error("missing status")]
    MissingStatus,

    #[error("unknown status '{0}'")]
    UnknownStatus(String),

    #[error("missing {0}")]
    MissingTimestamp(&'static str),

    #[error("unparseable {field}: '{value}'")]
    InvalidTimestamp { field: &'static str, value: String },

    #[error("end_time {end} is before start_time {start}")]
    EndBeforeStart { start: String, end: String },
}

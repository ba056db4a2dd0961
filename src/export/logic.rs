// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_parent, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{DutyRow, duty_rows};
use crate::models::DutyStatusLog;
use crate::ui::messages::warning;
use std::path::Path;
use tracing::debug;

/// High-level export of the duty-status table.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the rows of every log in `logs`, in input order.
    ///
    /// - `format`: csv | json
    /// - `file`: output path (relative paths resolve against the cwd)
    pub fn export(
        logs: &[DutyStatusLog],
        format: &ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        ensure_writable(path, force)?;
        ensure_parent(path)?;

        let rows: Vec<DutyRow> = logs.iter().flat_map(duty_rows).collect();
        debug!(logs = logs.len(), rows = rows.len(), format = format.as_str(), "exporting duty-status rows");

        if rows.is_empty() {
            warning("No duty-status intervals found for the selected log(s).");
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(())
    }
}

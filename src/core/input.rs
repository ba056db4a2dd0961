//! Loading `DutyStatusLog` documents and picking the ones a command works on.
//!
//! Accepted documents: a single log object, an array of logs, or a trip
//! object carrying its logs under `eld_logs`.

use crate::errors::{AppError, AppResult};
use crate::models::DutyStatusLog;
use crate::utils::time::parse_date;
use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use tracing::debug;

/// Read logs from `path`; `-` reads stdin.
pub fn load_logs(path: &str) -> AppResult<Vec<DutyStatusLog>> {
    let text = if path == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path)?
    };

    let logs = parse_logs(&text)?;
    debug!(path, logs = logs.len(), "loaded duty-status logs");
    Ok(logs)
}

pub fn parse_logs(json: &str) -> AppResult<Vec<DutyStatusLog>> {
    let value: Value = serde_json::from_str(json)?;

    match value {
        Value::Array(_) => Ok(serde_json::from_value(value)?),
        Value::Object(mut map) => match map.remove("eld_logs") {
            Some(logs) => Ok(serde_json::from_value(logs)?),
            None => Ok(vec![serde_json::from_value(Value::Object(map))?]),
        },
        other => Err(AppError::Selection(format!(
            "expected a log object, an array of logs or a trip with eld_logs, found {}",
            kind_of(&other)
        ))),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// All logs, or only those whose `log_date` is `date`.
pub fn select_logs(logs: Vec<DutyStatusLog>, date: Option<&str>) -> AppResult<Vec<DutyStatusLog>> {
    if logs.is_empty() {
        return Err(AppError::Selection("input contains no logs".to_string()));
    }

    let Some(date) = date else {
        return Ok(logs);
    };

    let wanted = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
    let selected: Vec<DutyStatusLog> = logs
        .into_iter()
        .filter(|log| log.date() == Some(wanted))
        .collect();

    if selected.is_empty() {
        return Err(AppError::Selection(format!("no log for date {wanted}")));
    }
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_single_array_and_trip_documents() {
        let one = r#"{"log_date":"2025-03-01","duty_statuses":[]}"#;
        assert_eq!(parse_logs(one).unwrap().len(), 1);

        let many = r#"[{"log_date":"2025-03-01"},{"log_date":"2025-03-02"}]"#;
        assert_eq!(parse_logs(many).unwrap().len(), 2);

        let trip = r#"{"id":7,"eld_logs":[{"log_date":"2025-03-01"}]}"#;
        let logs = parse_logs(trip).unwrap();
        assert_eq!(logs[0].log_date, "2025-03-01");
    }

    #[test]
    fn rejects_scalars() {
        assert!(matches!(parse_logs("42"), Err(AppError::Selection(_))));
        assert!(matches!(parse_logs("{"), Err(AppError::Json(_))));
    }

    #[test]
    fn selects_by_date() {
        let logs = parse_logs(r#"[{"log_date":"2025-03-01"},{"log_date":"2025-03-02"}]"#).unwrap();

        let picked = select_logs(logs.clone(), Some("2025-03-02")).unwrap();
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].log_date, "2025-03-02");

        assert_eq!(select_logs(logs.clone(), None).unwrap().len(), 2);
        assert!(matches!(
            select_logs(logs.clone(), Some("2025-03-09")),
            Err(AppError::Selection(_))
        ));
        assert!(matches!(
            select_logs(logs, Some("March 1st")),
            Err(AppError::InvalidDate(_))
        ));
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(select_logs(Vec::new(), None).is_err());
    }
}

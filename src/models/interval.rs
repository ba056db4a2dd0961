use super::duty_status::DutyStatus;
use crate::errors::IntervalError;
use crate::utils::time::parse_timestamp;
use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

/// One duty-status record exactly as the upstream log generator sent it.
///
/// Fields stay textual so one broken record cannot fail the whole log;
/// [`DutyStatusRecord::parse`] does the validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DutyStatusRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub start_time: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub end_time: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub remarks: Option<String>,
    /// JSON type of the element when it was not an object at all.
    #[serde(skip)]
    pub not_object: Option<&'static str>,
}

/// A validated duty-status interval.
#[derive(Debug, Clone, PartialEq)]
pub struct DutyStatusInterval {
    pub status: DutyStatus,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub location: String,
    pub remarks: String,
}

impl DutyStatusRecord {
    pub fn new(status: DutyStatus, start_time: &str, end_time: &str) -> Self {
        Self {
            status: Some(status.as_str().to_string()),
            start_time: Some(start_time.to_string()),
            end_time: Some(end_time.to_string()),
            location: None,
            remarks: None,
            not_object: None,
        }
    }

    /// Read one `duty_statuses` element. Objects become records as usual;
    /// anything else becomes a placeholder that [`parse`] rejects.
    ///
    /// [`parse`]: DutyStatusRecord::parse
    pub fn from_value(value: serde_json::Value) -> Self {
        use serde_json::Value;

        let kind = match value {
            Value::Object(_) => match serde_json::from_value::<Self>(value) {
                Ok(rec) => return rec,
                Err(_) => "malformed object",
            },
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
        };
        Self {
            not_object: Some(kind),
            ..Default::default()
        }
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.location = Some(location.to_string());
        self
    }

    pub fn parse(&self) -> Result<DutyStatusInterval, IntervalError> {
        if let Some(kind) = self.not_object {
            return Err(IntervalError::NotAnObject(kind));
        }
        let raw_status = self
            .status
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or(IntervalError::MissingStatus)?;
        let status = DutyStatus::from_wire(raw_status)
            .ok_or_else(|| IntervalError::UnknownStatus(raw_status.to_string()))?;

        let start_time = timestamp_field("start_time", self.start_time.as_deref())?;
        let end_time = timestamp_field("end_time", self.end_time.as_deref())?;

        if end_time < start_time {
            return Err(IntervalError::EndBeforeStart {
                start: start_time.to_string(),
                end: end_time.to_string(),
            });
        }

        Ok(DutyStatusInterval {
            status,
            start_time,
            end_time,
            location: self.location.clone().unwrap_or_default(),
            remarks: self.remarks.clone().unwrap_or_default(),
        })
    }
}

fn timestamp_field(
    field: &'static str,
    value: Option<&str>,
) -> Result<NaiveDateTime, IntervalError> {
    let raw = value
        .filter(|s| !s.trim().is_empty())
        .ok_or(IntervalError::MissingTimestamp(field))?;
    parse_timestamp(raw).ok_or_else(|| IntervalError::InvalidTimestamp {
        field,
        value: raw.to_string(),
    })
}

/// Accept any JSON value; strings pass through, `null` is absent and
/// anything else keeps its JSON text so validation can report it.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_well_formed_record() {
        let rec = DutyStatusRecord::new(
            DutyStatus::Driving,
            "2025-03-01T06:00:00",
            "2025-03-01T08:30:00",
        )
        .with_location("En route");
        let iv = rec.parse().unwrap();
        assert_eq!(iv.status, DutyStatus::Driving);
        assert_eq!(iv.location, "En route");
        assert_eq!(iv.remarks, "");
    }

    #[test]
    fn rejects_end_before_start_on_same_day() {
        let rec = DutyStatusRecord::new(
            DutyStatus::OnDuty,
            "2025-03-01T10:00:00",
            "2025-03-01T09:00:00",
        );
        assert!(matches!(
            rec.parse(),
            Err(IntervalError::EndBeforeStart { .. })
        ));
    }

    #[test]
    fn accepts_end_on_following_day() {
        let rec = DutyStatusRecord::new(
            DutyStatus::Driving,
            "2025-03-01T23:00:00",
            "2025-03-02T01:30:00",
        );
        assert!(rec.parse().is_ok());
    }

    #[test]
    fn reports_missing_and_garbled_fields() {
        let json = r#"{"status": "driving", "start_time": 42}"#;
        let rec: DutyStatusRecord = serde_json::from_str(json).unwrap();
        assert_eq!(
            rec.parse(),
            Err(IntervalError::InvalidTimestamp {
                field: "start_time",
                value: "42".into()
            })
        );

        let json = r#"{"status": "driving", "start_time": "2025-03-01T06:00:00"}"#;
        let rec: DutyStatusRecord = serde_json::from_str(json).unwrap();
        assert_eq!(
            rec.parse(),
            Err(IntervalError::MissingTimestamp("end_time"))
        );

        let rec: DutyStatusRecord = serde_json::from_str(r#"{"status": null}"#).unwrap();
        assert_eq!(rec.parse(), Err(IntervalError::MissingStatus));

        let rec = DutyStatusRecord {
            status: Some("yard_move".into()),
            ..Default::default()
        };
        assert_eq!(
            rec.parse(),
            Err(IntervalError::UnknownStatus("yard_move".into()))
        );
    }

    #[test]
    fn non_object_elements_fail_validation() {
        let rec = DutyStatusRecord::from_value(serde_json::Value::Null);
        assert_eq!(rec.parse(), Err(IntervalError::NotAnObject("null")));

        let rec = DutyStatusRecord::from_value(serde_json::json!("garbage"));
        assert_eq!(rec.parse(), Err(IntervalError::NotAnObject("string")));

        let rec = DutyStatusRecord::from_value(serde_json::json!({
            "status": "driving",
            "start_time": "2025-03-01T06:00:00",
            "end_time": "2025-03-01T07:00:00"
        }));
        assert!(rec.parse().is_ok());
    }
}

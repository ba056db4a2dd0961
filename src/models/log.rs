use super::duty_status::DutyStatus;
use super::interval::DutyStatusRecord;
use crate::utils::time::parse_date;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// One driver's daily log as produced by the upstream log generator.
///
/// The four `*_hours` fields are supplied independently of
/// `duty_statuses` and may disagree with the interval sums.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DutyStatusLog {
    #[serde(default)]
    pub driver_name: String,
    #[serde(default)]
    pub log_date: String,
    #[serde(default)]
    pub vehicle_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub duty_statuses: Vec<DutyStatusRecord>,
    #[serde(default, deserialize_with = "lenient_hours")]
    pub off_duty_hours: f64,
    #[serde(default, deserialize_with = "lenient_hours")]
    pub sleeper_berth_hours: f64,
    #[serde(default, deserialize_with = "lenient_hours")]
    pub driving_hours: f64,
    #[serde(default, deserialize_with = "lenient_hours")]
    pub on_duty_hours: f64,
}

impl DutyStatusLog {
    pub fn new(log_date: &str) -> Self {
        Self {
            log_date: log_date.to_string(),
            ..Default::default()
        }
    }

    pub fn with_record(mut self, record: DutyStatusRecord) -> Self {
        self.duty_statuses.push(record);
        self
    }

    pub fn with_hours(mut self, status: DutyStatus, hours: f64) -> Self {
        *self.hours_mut(status) = hours;
        self
    }

    /// Aggregate hours for `status` as supplied upstream.
    pub fn supplied_hours(&self, status: DutyStatus) -> f64 {
        match status {
            DutyStatus::OffDuty => self.off_duty_hours,
            DutyStatus::SleeperBerth => self.sleeper_berth_hours,
            DutyStatus::Driving => self.driving_hours,
            DutyStatus::OnDuty => self.on_duty_hours,
        }
    }

    fn hours_mut(&mut self, status: DutyStatus) -> &mut f64 {
        match status {
            DutyStatus::OffDuty => &mut self.off_duty_hours,
            DutyStatus::SleeperBerth => &mut self.sleeper_berth_hours,
            DutyStatus::Driving => &mut self.driving_hours,
            DutyStatus::OnDuty => &mut self.on_duty_hours,
        }
    }

    /// The calendar day named by `log_date`, if it parses.
    pub fn date(&self) -> Option<NaiveDate> {
        parse_date(&self.log_date)
    }

    pub fn driver_display(&self) -> &str {
        non_empty_or(&self.driver_name, "Driver")
    }

    pub fn date_display(&self) -> &str {
        non_empty_or(&self.log_date, "N/A")
    }

    pub fn vehicle_display(&self) -> &str {
        non_empty_or(&self.vehicle_number, "N/A")
    }

    pub fn carrier_display(&self) -> &str {
        non_empty_or(self.carrier_name.as_deref().unwrap_or(""), "N/A")
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

/// `null` means no records; elements that are not objects are kept as
/// placeholders so the normalizer can skip them by index.
fn lenient_records<'de, D>(deserializer: D) -> Result<Vec<DutyStatusRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?;
    Ok(values
        .unwrap_or_default()
        .into_iter()
        .map(DutyStatusRecord::from_value)
        .collect())
}

/// Hours arrive as numbers, numeric strings or `null` (treated as 0).
fn lenient_hours<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(0.0),
        Some(serde_json::Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| D::Error::custom(format!("hours out of range: {n}"))),
        Some(serde_json::Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("invalid hours value '{s}'"))),
        Some(other) => Err(D::Error::custom(format!("invalid hours value {other}"))),
    }
}

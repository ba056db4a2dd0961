use crate::utils::colors::Rgb;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four duty statuses of the daily log, in paper-form lane order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DutyStatus {
    OffDuty,
    SleeperBerth,
    Driving,
    OnDuty,
}

impl DutyStatus {
    /// All statuses, top lane first.
    pub const ALL: [DutyStatus; 4] = [
        DutyStatus::OffDuty,
        DutyStatus::SleeperBerth,
        DutyStatus::Driving,
        DutyStatus::OnDuty,
    ];

    /// Lane index on the grid (0 = top).
    pub fn lane(self) -> usize {
        match self {
            DutyStatus::OffDuty => 0,
            DutyStatus::SleeperBerth => 1,
            DutyStatus::Driving => 2,
            DutyStatus::OnDuty => 3,
        }
    }

    /// Wire value (`"off_duty"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "off_duty",
            DutyStatus::SleeperBerth => "sleeper_berth",
            DutyStatus::Driving => "driving",
            DutyStatus::OnDuty => "on_duty",
        }
    }

    /// Convert wire string → enum. Case and surrounding blanks are ignored.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off_duty" => Some(DutyStatus::OffDuty),
            "sleeper_berth" => Some(DutyStatus::SleeperBerth),
            "driving" => Some(DutyStatus::Driving),
            "on_duty" => Some(DutyStatus::OnDuty),
            _ => None,
        }
    }

    /// Lane label printed in the label column.
    pub fn lane_label(&self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "OFF DUTY",
            DutyStatus::SleeperBerth => "SLEEPER BERTH",
            DutyStatus::Driving => "DRIVING",
            DutyStatus::OnDuty => "ON DUTY (NOT DRIVING)",
        }
    }

    /// Title-cased name for tables (`"Sleeper Berth"`).
    pub fn title(&self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "Off Duty",
            DutyStatus::SleeperBerth => "Sleeper Berth",
            DutyStatus::Driving => "Driving",
            DutyStatus::OnDuty => "On Duty",
        }
    }

    /// Pale lane background.
    pub fn background(&self) -> Rgb {
        match self {
            DutyStatus::OffDuty => Rgb(0xE6, 0xF3, 0xFF),
            DutyStatus::SleeperBerth => Rgb(0xB3, 0xD9, 0xFF),
            DutyStatus::Driving => Rgb(0xFF, 0xB3, 0x66),
            DutyStatus::OnDuty => Rgb(0xFF, 0xF2, 0xB3),
        }
    }

    /// Marker color for the start/end of each run.
    pub fn color(&self) -> Rgb {
        match self {
            DutyStatus::OffDuty => Rgb(0x1F, 0x5F, 0x99),
            DutyStatus::SleeperBerth => Rgb(0x2E, 0x75, 0xB6),
            DutyStatus::Driving => Rgb(0xC5, 0x5A, 0x11),
            DutyStatus::OnDuty => Rgb(0xBF, 0x90, 0x00),
        }
    }
}

impl fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

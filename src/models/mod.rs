pub mod duty_status;
pub mod interval;
pub mod log;

pub use duty_status::DutyStatus;
pub use interval::{DutyStatusInterval, DutyStatusRecord};
pub use log::DutyStatusLog;

pub mod colors;
pub mod formatting;
pub mod table;
pub mod time;

pub use formatting::{display_width, pad_left, pad_right};
pub use time::{format_clock, parse_date, parse_timestamp};

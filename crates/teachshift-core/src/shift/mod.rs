//! Daily shift windows and the two ways of mapping a time onto them.
//!
//! - [`ShiftCalendar`]: the ordered table of windows, numbered 1..n by position
//! - [`ShiftResolver`]: interval based, answers "which shift should be looked up next"
//! - [`TimestampClassifier`]: exact start-time match for a job's raw start timestamp

pub mod calendar;
pub mod classifier;
pub mod hhmm;
pub mod resolver;

pub use calendar::{ShiftCalendar, ShiftWindow};
pub use classifier::{parse_start_timestamp, Classification, TimestampClassifier, START_TIMESTAMP_FORMAT};
pub use resolver::{DesiredShift, ShiftPosition, ShiftResolver};

/// Shift numbers start at 1; 0 is never a valid shift.
pub type ShiftNumber = u8;

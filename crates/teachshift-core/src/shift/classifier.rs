//! Maps a job's raw start timestamp onto a shift number.
//!
//! Unlike [`ShiftResolver`](super::ShiftResolver) this is an exact match on
//! the window start time: a job starting at 09:21 belongs to no shift.

use chrono::NaiveDateTime;
use serde::Serialize;

use super::{ShiftCalendar, ShiftNumber};

/// Literal start timestamp format used by the scheduling API, local time.
/// A fractional-seconds suffix is tolerated.
pub const START_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parse a start timestamp such as `2024-05-10T09:20:00`.
///
/// Every field must be zero-padded to its full width; chrono alone would
/// also take `2024-5-10T9:20:0` or a signed year.
pub fn parse_start_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if !has_literal_shape(raw.as_bytes()) {
        return None;
    }
    NaiveDateTime::parse_from_str(raw, START_TIMESTAMP_FORMAT).ok()
}

/// `dddd-dd-ddTdd:dd:dd`, optionally followed by `.` and one or more digits.
fn has_literal_shape(raw: &[u8]) -> bool {
    if raw.len() < 19 {
        return false;
    }
    let (head, fraction) = raw.split_at(19);
    let head_ok = head.iter().enumerate().all(|(i, &b)| match i {
        4 | 7 => b == b'-',
        10 => b == b'T',
        13 | 16 => b == b':',
        _ => b.is_ascii_digit(),
    });
    let fraction_ok = match fraction.split_first() {
        None => true,
        Some((b'.', digits)) => !digits.is_empty() && digits.iter().all(u8::is_ascii_digit),
        Some(_) => false,
    };
    head_ok && fraction_ok
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Classification {
    /// Starts exactly at a window start.
    Shift { at: NaiveDateTime, number: ShiftNumber },
    /// Parsed, but the time of day is not a window start.
    Unmatched { at: NaiveDateTime },
    /// Not a timestamp in the expected format.
    Invalid,
}

impl Classification {
    pub fn shift(&self) -> Option<ShiftNumber> {
        match self {
            Classification::Shift { number, .. } => Some(*number),
            _ => None,
        }
    }

    /// Shift number, or 0 when no shift applies.
    pub fn shift_number(&self) -> ShiftNumber {
        self.shift().unwrap_or(0)
    }

    pub fn time(&self) -> Option<NaiveDateTime> {
        match self {
            Classification::Shift { at, .. } | Classification::Unmatched { at } => Some(*at),
            Classification::Invalid => None,
        }
    }
}

pub struct TimestampClassifier<'a> {
    calendar: &'a ShiftCalendar,
}

impl<'a> TimestampClassifier<'a> {
    pub fn new(calendar: &'a ShiftCalendar) -> Self {
        Self { calendar }
    }

    pub fn classify(&self, raw: &str) -> Classification {
        let Some(at) = parse_start_timestamp(raw) else {
            return Classification::Invalid;
        };
        match self.calendar.shift_starting_at(at.time()) {
            Some(number) => Classification::Shift { at, number },
            None => Classification::Unmatched { at },
        }
    }
}

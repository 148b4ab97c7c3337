//! Which shift should be looked up next, given the current time.
//!
//! Windows are scanned in day order and the first one that `now` is not
//! already past decides the outcome:
//!
//! - before its start: that window is the upcoming one
//! - inside it (start inclusive, end exclusive): the *next* window is wanted,
//!   or nothing if this is the last window of the day
//! - at or after its end: keep scanning
//!
//! Running off the end of the table means the day is over.

use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

use super::{ShiftCalendar, ShiftNumber};

/// Where `now` sits relative to the day's windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ShiftPosition {
    /// Earlier than the first window's start.
    BeforeAll,
    /// Inside a window.
    Inside { shift: ShiftNumber },
    /// In the gap between two consecutive windows.
    Between { after: ShiftNumber, before: ShiftNumber },
    /// At or after the last window's end.
    AfterAll,
}

/// The shift to look for, or none left today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DesiredShift {
    Shift(ShiftNumber),
    NoneToday,
}

impl DesiredShift {
    pub fn number(self) -> Option<ShiftNumber> {
        match self {
            DesiredShift::Shift(n) => Some(n),
            DesiredShift::NoneToday => None,
        }
    }
}

impl fmt::Display for DesiredShift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DesiredShift::Shift(n) => write!(f, "shift {n}"),
            DesiredShift::NoneToday => write!(f, "no shift left today"),
        }
    }
}

pub struct ShiftResolver<'a> {
    calendar: &'a ShiftCalendar,
}

impl<'a> ShiftResolver<'a> {
    pub fn new(calendar: &'a ShiftCalendar) -> Self {
        Self { calendar }
    }

    /// Locate `now` on its own calendar day.
    pub fn locate(&self, now: NaiveDateTime) -> ShiftPosition {
        let day = now.date();
        let mut previous: Option<ShiftNumber> = None;

        for window in self.calendar.windows() {
            if now < window.start_on(day) {
                return match previous {
                    None => ShiftPosition::BeforeAll,
                    Some(after) => ShiftPosition::Between {
                        after,
                        before: window.number,
                    },
                };
            }
            if window.contains(now.time()) {
                return ShiftPosition::Inside {
                    shift: window.number,
                };
            }
            previous = Some(window.number);
        }

        ShiftPosition::AfterAll
    }

    /// The shift whose jobs should be looked up at `now`.
    pub fn desired_shift(&self, now: NaiveDateTime) -> DesiredShift {
        let desired = match self.locate(now) {
            ShiftPosition::BeforeAll => self.calendar.first().map(|w| w.number),
            ShiftPosition::Between { before, .. } => Some(before),
            ShiftPosition::Inside { shift } => self.calendar.next_after(shift).map(|w| w.number),
            ShiftPosition::AfterAll => None,
        };
        desired.map_or(DesiredShift::NoneToday, DesiredShift::Shift)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 10)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn desired(now: NaiveDateTime) -> DesiredShift {
        ShiftResolver::new(&ShiftCalendar::default()).desired_shift(now)
    }

    fn locate(now: NaiveDateTime) -> ShiftPosition {
        ShiftResolver::new(&ShiftCalendar::default()).locate(now)
    }

    #[test]
    fn early_morning_wants_first_shift() {
        assert_eq!(desired(at(0, 0, 0)), DesiredShift::Shift(1));
        assert_eq!(desired(at(7, 19, 59)), DesiredShift::Shift(1));
        assert_eq!(locate(at(6, 0, 0)), ShiftPosition::BeforeAll);
    }

    #[test]
    fn start_is_inclusive() {
        assert_eq!(locate(at(7, 20, 0)), ShiftPosition::Inside { shift: 1 });
        assert_eq!(desired(at(7, 20, 0)), DesiredShift::Shift(2));
    }

    #[test]
    fn inside_shift_wants_next() {
        assert_eq!(desired(at(8, 0, 0)), DesiredShift::Shift(2));
        assert_eq!(desired(at(8, 59, 59)), DesiredShift::Shift(2));
        assert_eq!(desired(at(14, 0, 0)), DesiredShift::Shift(5));
    }

    #[test]
    fn end_is_exclusive_and_falls_into_gap() {
        assert_eq!(
            locate(at(9, 0, 0)),
            ShiftPosition::Between { after: 1, before: 2 }
        );
        assert_eq!(desired(at(9, 0, 0)), DesiredShift::Shift(2));
    }

    #[test]
    fn desired_shift_display() {
        assert_eq!(DesiredShift::Shift(3).to_string(), "shift 3");
        assert_eq!(DesiredShift::NoneToday.to_string(), "no shift left today");
    }

    #[test]
    fn gap_wants_upcoming_shift() {
        assert_eq!(desired(at(9, 5, 0)), DesiredShift::Shift(2));
        assert_eq!(desired(at(13, 10, 0)), DesiredShift::Shift(4));
    }

    #[test]
    fn inside_last_shift_has_nothing_left() {
        assert_eq!(locate(at(17, 20, 0)), ShiftPosition::Inside { shift: 6 });
        assert_eq!(desired(at(17, 20, 0)), DesiredShift::NoneToday);
        assert_eq!(desired(at(18, 59, 59)), DesiredShift::NoneToday);
    }

    #[test]
    fn after_last_shift_has_nothing_left() {
        assert_eq!(locate(at(19, 0, 0)), ShiftPosition::AfterAll);
        assert_eq!(desired(at(19, 0, 0)), DesiredShift::NoneToday);
        assert_eq!(desired(at(23, 59, 59)), DesiredShift::NoneToday);
    }

    #[test]
    fn gap_before_last_shift() {
        assert_eq!(desired(at(17, 10, 0)), DesiredShift::Shift(6));
    }

    #[test]
    fn custom_single_window_calendar() {
        let t = |h, m| chrono::NaiveTime::from_hms_opt(h, m, 0).unwrap();
        let cal = ShiftCalendar::new(vec![(t(10, 0), t(12, 0))]).unwrap();
        let resolver = ShiftResolver::new(&cal);
        assert_eq!(resolver.desired_shift(at(9, 0, 0)), DesiredShift::Shift(1));
        assert_eq!(resolver.desired_shift(at(11, 0, 0)), DesiredShift::NoneToday);
    }

    #[test]
    fn desired_shift_number_and_display() {
        assert_eq!(DesiredShift::Shift(3).number(), Some(3));
        assert_eq!(DesiredShift::NoneToday.number(), None);
        assert_eq!(DesiredShift::Shift(3).to_string(), "shift 3");
    }
}

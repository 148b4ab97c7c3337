//! The ordered table of daily shift windows.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::Serialize;

use super::{hhmm, ShiftNumber};
use crate::error::ValidationError;

/// Start/end of the six teaching shifts of a regular day.
const DEFAULT_SPANS: [((u32, u32), (u32, u32)); 6] = [
    ((7, 20), (9, 0)),
    ((9, 20), (11, 0)),
    ((11, 20), (13, 0)),
    ((13, 20), (15, 0)),
    ((15, 20), (17, 0)),
    ((17, 20), (19, 0)),
];

/// A single shift window. Start is inclusive, end is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShiftWindow {
    #[serde(rename = "shift")]
    pub number: ShiftNumber,
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
}

impl ShiftWindow {
    /// Concrete start of this window on `date`.
    pub fn start_on(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.start)
    }

    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start <= time && time < self.end
    }
}

/// Ordered, non-overlapping shift windows covering one calendar day.
///
/// Windows are numbered 1..n by their position; the resolver relies on that
/// ordering to find "the next" shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ShiftCalendar {
    windows: Vec<ShiftWindow>,
}

impl ShiftCalendar {
    /// Build a calendar from `(start, end)` spans in day order.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the table is empty, a window does not
    /// end after it starts, or a window starts before its predecessor ends.
    pub fn new<I>(spans: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (NaiveTime, NaiveTime)>,
    {
        let spans: Vec<_> = spans.into_iter().collect();
        if spans.is_empty() {
            return Err(ValidationError::EmptyCalendar);
        }
        if spans.len() > usize::from(ShiftNumber::MAX) {
            return Err(ValidationError::TooManyWindows(spans.len()));
        }

        let mut windows: Vec<ShiftWindow> = Vec::with_capacity(spans.len());
        for ((start, end), number) in spans.into_iter().zip(1..=ShiftNumber::MAX) {
            if start >= end {
                return Err(ValidationError::InvalidWindow {
                    shift: number,
                    start,
                    end,
                });
            }
            if let Some(previous) = windows.last() {
                if start < previous.end {
                    return Err(ValidationError::OverlappingWindows {
                        shift: number,
                        start,
                        previous_end: previous.end,
                    });
                }
            }
            windows.push(ShiftWindow { number, start, end });
        }

        Ok(Self { windows })
    }

    /// Windows in day order.
    pub fn windows(&self) -> &[ShiftWindow] {
        &self.windows
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// Always `false`: [`ShiftCalendar::new`] rejects an empty table and the
    /// default table has six windows.
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn first(&self) -> Option<&ShiftWindow> {
        self.windows.first()
    }

    pub fn window(&self, number: ShiftNumber) -> Option<&ShiftWindow> {
        let index = usize::from(number).checked_sub(1)?;
        self.windows.get(index)
    }

    /// The window following shift `number`, if there is one today.
    pub fn next_after(&self, number: ShiftNumber) -> Option<&ShiftWindow> {
        self.windows.get(usize::from(number))
    }

    /// Shift whose start equals the hour and minute of `time` (seconds ignored).
    pub fn shift_starting_at(&self, time: NaiveTime) -> Option<ShiftNumber> {
        let key = NaiveTime::from_hms_opt(time.hour(), time.minute(), 0)?;
        self.windows
            .iter()
            .find(|w| w.start == key)
            .map(|w| w.number)
    }

    /// Timestamp on the calendar day of `reference` at `time_of_day`, seconds = 0.
    ///
    /// Returns `None` if `time_of_day` is not a valid `HH:MM` string.
    pub fn timestamp_on(reference: NaiveDateTime, time_of_day: &str) -> Option<NaiveDateTime> {
        hhmm::parse(time_of_day).map(|time| reference.date().and_time(time))
    }
}

impl Default for ShiftCalendar {
    fn default() -> Self {
        let windows = DEFAULT_SPANS
            .iter()
            .zip(1..)
            .filter_map(|(&((sh, sm), (eh, em)), number)| {
                Some(ShiftWindow {
                    number,
                    start: NaiveTime::from_hms_opt(sh, sm, 0)?,
                    end: NaiveTime::from_hms_opt(eh, em, 0)?,
                })
            })
            .collect();
        Self { windows }
    }
}

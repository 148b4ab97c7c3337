//! Picks the teaching job for the upcoming shift out of an assistant's job list.

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::{debug, warn};

use crate::description::{DescriptionParser, PositionalParser};
use crate::error::SelectionError;
use crate::session::Session;
use crate::shift::{Classification, DesiredShift, ShiftCalendar, ShiftNumber, ShiftResolver, TimestampClassifier};

/// The job picked for the upcoming shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub shift: ShiftNumber,
    pub room: String,
    pub job: Session,
}

pub struct TeachingJobSelector<P = PositionalParser> {
    calendar: ShiftCalendar,
    parser: P,
}

impl TeachingJobSelector<PositionalParser> {
    pub fn new(calendar: ShiftCalendar) -> Self {
        Self::with_parser(calendar, PositionalParser)
    }
}

impl Default for TeachingJobSelector<PositionalParser> {
    fn default() -> Self {
        Self::new(ShiftCalendar::default())
    }
}

impl<P: DescriptionParser> TeachingJobSelector<P> {
    pub fn with_parser(calendar: ShiftCalendar, parser: P) -> Self {
        Self { calendar, parser }
    }

    /// Fill subject/class/room from the session's description.
    pub fn enrich(&self, session: &mut Session) {
        self.parser.parse(&session.description).apply_to(session);
    }

    /// All teaching jobs, each enriched from its description, in list order.
    pub fn teaching_jobs(&self, sessions: Vec<Session>) -> Vec<Session> {
        sessions
            .into_iter()
            .filter(Session::is_teaching)
            .map(|mut session| {
                self.enrich(&mut session);
                session
            })
            .collect()
    }

    /// First teaching job (in list order) that starts today in the shift
    /// desired at `now`.
    ///
    /// # Errors
    ///
    /// [`SelectionError::NoUpcomingShift`] when no shift is left today,
    /// [`SelectionError::NoMatchingSession`] when nothing starts in the
    /// desired shift today.
    pub fn select_next(
        &self,
        sessions: &[Session],
        now: NaiveDateTime,
    ) -> Result<Selection, SelectionError> {
        let resolved = ShiftResolver::new(&self.calendar).desired_shift(now);
        debug!(%now, desired = %resolved, "looking for teaching job");
        let desired = match resolved {
            DesiredShift::Shift(n) => n,
            DesiredShift::NoneToday => return Err(SelectionError::NoUpcomingShift),
        };

        let classifier = TimestampClassifier::new(&self.calendar);
        let today = now.date();

        for session in sessions.iter().filter(|s| s.is_teaching()) {
            match classifier.classify(&session.start_timestamp) {
                Classification::Invalid => {
                    warn!(
                        id = %session.external_id,
                        start = %session.start_timestamp,
                        "skipping job with unparsable start"
                    );
                }
                Classification::Unmatched { at } => {
                    debug!(id = %session.external_id, %at, "job does not start at a shift boundary");
                }
                Classification::Shift { at, number } => {
                    if number == desired && at.date() == today {
                        let mut job = session.clone();
                        self.enrich(&mut job);
                        return Ok(Selection {
                            shift: desired,
                            room: job.room.clone(),
                            job,
                        });
                    }
                }
            }
        }

        Err(SelectionError::NoMatchingSession { shift: desired })
    }
}

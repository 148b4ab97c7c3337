//! Fetch-then-select: the two operations the CLI exposes.
//!
//! Failures of the job source come back as [`CoreError::Source`]; the
//! selector's own outcomes come back as [`CoreError::Selection`].

use tracing::warn;

use crate::clock::{Clock, SystemClock};
use crate::description::{DescriptionParser, PositionalParser};
use crate::error::{CoreError, Result, SourceError, ValidationError};
use crate::lapi::{JobQuery, JobSource, DEFAULT_MODE};
use crate::selector::{Selection, TeachingJobSelector};
use crate::session::Session;
use crate::shift::ShiftCalendar;

pub struct JobLookup<S, P = PositionalParser> {
    source: S,
    clock: Box<dyn Clock>,
    selector: TeachingJobSelector<P>,
}

impl<S: JobSource> JobLookup<S, PositionalParser> {
    pub fn new(source: S, calendar: ShiftCalendar) -> Self {
        Self::with_selector(source, TeachingJobSelector::new(calendar))
    }
}

impl<S: JobSource, P: DescriptionParser> JobLookup<S, P> {
    pub fn with_selector(source: S, selector: TeachingJobSelector<P>) -> Self {
        Self {
            source,
            clock: Box::new(SystemClock),
            selector,
        }
    }

    /// Replace the system clock, e.g. to look up a past or future instant.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    async fn fetch(&self, username: &str, mode: &str) -> Result<Vec<Session>> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "username".into(),
                message: "must not be empty".into(),
            }
            .into());
        }

        let mode = if mode.is_empty() { DEFAULT_MODE } else { mode };

        let semester_id = self.source.active_semester().await.map_err(transport)?;
        let query = JobQuery {
            username: username.to_string(),
            semester_id,
            mode: mode.to_string(),
        };
        self.source.fetch_jobs(&query).await.map_err(transport)
    }

    /// All teaching jobs of `username`, enriched from their descriptions.
    pub async fn teaching_jobs(&self, username: &str, mode: &str) -> Result<Vec<Session>> {
        let sessions = self.fetch(username, mode).await?;
        Ok(self.selector.teaching_jobs(sessions))
    }

    /// The teaching job of `username` for the upcoming shift today.
    pub async fn next_teaching_job(&self, username: &str, mode: &str) -> Result<Selection> {
        let sessions = self.fetch(username, mode).await?;
        Ok(self.selector.select_next(&sessions, self.clock.now())?)
    }
}

fn transport(err: SourceError) -> CoreError {
    warn!(error = %err, "job source failed");
    CoreError::Source(err)
}

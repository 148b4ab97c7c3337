//! # teachshift Core Library
//!
//! Finds the teaching session an assistant should head to next. Jobs are
//! fetched from the LAPI scheduling service, filtered to teaching entries and
//! matched against a fixed table of daily shift windows.
//!
//! ## Architecture
//!
//! - **Shift calendar**: ordered table of daily windows, numbered by position
//! - **Resolver / classifier**: interval-based "which shift is next" and
//!   exact-start "which shift is this job in"
//! - **Description parser**: positional heuristic that mines subject, class
//!   and room from a job's free text
//! - **Selector**: ties the three together over a job list and a `now`
//! - **LAPI client**: token issuance, active semester and job listing
//!
//! ## Key Components
//!
//! - [`ShiftCalendar`]: the shift table
//! - [`TeachingJobSelector`]: pure selection over already-fetched jobs
//! - [`JobLookup`]: fetch + select, keeping transport failures apart
//! - [`Config`]: application configuration management

pub mod clock;
pub mod config;
pub mod description;
pub mod error;
pub mod lapi;
pub mod lookup;
pub mod selector;
pub mod session;
pub mod shift;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use description::{DescriptionParser, ParsedDescription, PositionalParser};
pub use error::{ConfigError, CoreError, SelectionError, SourceError, ValidationError};
pub use lapi::{Credentials, JobQuery, JobSource, LapiClient};
pub use lookup::JobLookup;
pub use selector::{Selection, TeachingJobSelector};
pub use session::Session;
pub use shift::{
    Classification, DesiredShift, ShiftCalendar, ShiftNumber, ShiftPosition, ShiftResolver,
    ShiftWindow, TimestampClassifier,
};

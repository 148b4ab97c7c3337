pub mod config;
pub mod describe;
pub mod jobs;
pub mod shift;

use chrono::NaiveDateTime;
use teachshift_core::shift::parse_start_timestamp;

/// Parse an `--at` argument in the scheduling API's timestamp format.
pub fn parse_at(raw: &str) -> Result<NaiveDateTime, Box<dyn std::error::Error>> {
    parse_start_timestamp(raw)
        .ok_or_else(|| format!("invalid timestamp '{raw}', expected YYYY-MM-DDTHH:MM:SS").into())
}

use clap::Subcommand;
use serde_json::json;
use teachshift_core::{Clock, Config, ShiftResolver, SystemClock, TimestampClassifier};

use super::parse_at;

#[derive(Subcommand)]
pub enum ShiftAction {
    /// Show the configured shift windows
    Table,
    /// Which shift to look for at a given time
    Desired {
        /// Local time to resolve (YYYY-MM-DDTHH:MM:SS), defaults to now
        #[arg(long)]
        at: Option<String>,
    },
    /// Which shift a job start timestamp belongs to
    Classify {
        /// Start timestamp as sent by the API, e.g. 2024-05-10T09:20:00
        timestamp: String,
    },
}

pub fn run(action: ShiftAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let calendar = config.calendar()?;

    match action {
        ShiftAction::Table => {
            println!("{}", serde_json::to_string_pretty(&calendar)?);
        }
        ShiftAction::Desired { at } => {
            let now = match at {
                Some(raw) => parse_at(&raw)?,
                None => SystemClock.now(),
            };
            let resolver = ShiftResolver::new(&calendar);
            let report = json!({
                "now": now,
                "position": resolver.locate(now),
                "desired_shift": resolver.desired_shift(now).number(),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        ShiftAction::Classify { timestamp } => {
            let classification = TimestampClassifier::new(&calendar).classify(&timestamp);
            let report = json!({
                "timestamp": timestamp,
                "time": classification.time(),
                "shift": classification.shift_number(),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

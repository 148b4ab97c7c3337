use clap::Subcommand;
use teachshift_core::{Config, FixedClock, JobLookup, LapiClient};

use super::parse_at;

#[derive(Subcommand)]
pub enum JobsAction {
    /// List teaching jobs, enriched from their descriptions
    List {
        /// Assistant username
        #[arg(long)]
        username: String,
        /// Listing mode passed to the API (defaults to lapi.default_mode)
        #[arg(long)]
        mode: Option<String>,
    },
    /// Show the teaching job and room for the upcoming shift today
    Next {
        /// Assistant username
        #[arg(long)]
        username: String,
        /// Listing mode passed to the API (defaults to lapi.default_mode)
        #[arg(long)]
        mode: Option<String>,
        /// Resolve as of this local time instead of now (YYYY-MM-DDTHH:MM:SS)
        #[arg(long)]
        at: Option<String>,
    },
}

pub async fn run(action: JobsAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    config.validate()?;
    let calendar = config.calendar()?;
    let client = LapiClient::from_config(&config)?;
    tracing::debug!(base_url = %client.base_url(), "using scheduling API");
    let lookup = JobLookup::new(client, calendar);

    match action {
        JobsAction::List { username, mode } => {
            let mode = mode.unwrap_or_else(|| config.lapi.default_mode.clone());
            let jobs = lookup.teaching_jobs(&username, &mode).await?;
            println!("{}", serde_json::to_string_pretty(&jobs)?);
        }
        JobsAction::Next { username, mode, at } => {
            let mode = mode.unwrap_or_else(|| config.lapi.default_mode.clone());
            let lookup = match at {
                Some(raw) => lookup.with_clock(FixedClock(parse_at(&raw)?)),
                None => lookup,
            };
            let selection = lookup.next_teaching_job(&username, &mode).await?;
            println!("{}", serde_json::to_string_pretty(&selection)?);
        }
    }
    Ok(())
}

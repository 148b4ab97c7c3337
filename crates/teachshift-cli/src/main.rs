use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "teachshift", version, about = "Find the next teaching room for an assistant")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Teaching jobs from the scheduling API
    Jobs {
        #[command(subcommand)]
        action: commands::jobs::JobsAction,
    },
    /// Shift table and time resolution
    Shift {
        #[command(subcommand)]
        action: commands::shift::ShiftAction,
    },
    /// Parse a job description into subject, class and room
    Describe {
        /// Description text, e.g. "MATH6183001-Scientific Computing BA09 622 1"
        text: String,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

#[tokio::main]
async fn main() {
    // stdout carries JSON, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Jobs { action } => commands::jobs::run(action).await,
        Commands::Shift { action } => commands::shift::run(action),
        Commands::Describe { text } => commands::describe::run(&text),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

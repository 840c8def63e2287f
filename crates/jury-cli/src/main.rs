use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod render;

use cli::{Cli, Command};
use commands::submit::Ratings;

fn main() -> Result<()> {
    // Initialize logging; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("jury=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    debug!("Using data source {}", config.base_url);

    match cli.command {
        Command::Sessions { search, sort } => commands::sessions::run(&config, &search, &sort),
        Command::ToggleSession { session } => commands::sessions::toggle(&config, &session),
        Command::Results { toggle, sort } => commands::results::run(&config, &toggle, &sort),
        Command::Export { output, format } => {
            commands::export::run(&config, output.as_deref(), format)
        }
        Command::Judges => commands::judges::run(&config),
        Command::Submit {
            poster,
            judge,
            clarity,
            presentation,
            design,
            impact,
            tiebreaker,
            comment,
        } => {
            let ratings = Ratings {
                clarity,
                presentation,
                design,
                impact,
                tiebreaker,
            };
            commands::submit::run(&config, &poster, &judge, &ratings, &comment)
        }
    }
}

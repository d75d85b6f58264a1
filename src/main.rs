//! XO Mobility - terminal game entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use xo_mobility::{GameSettings, Terminal};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing(cli.verbose);

    let settings = load_settings(&cli)?;

    let stdin = std::io::stdin();
    let mut terminal = Terminal::new(stdin.lock(), std::io::stdout());
    let result = xo_mobility::play(&settings, &mut terminal)?;
    info!(?result, "Exiting");

    Ok(())
}

/// Merges the settings file (if any) with command-line overrides.
#[instrument(skip(cli))]
fn load_settings(cli: &Cli) -> Result<GameSettings> {
    let mut settings = match &cli.config {
        Some(path) => GameSettings::from_file(path)?,
        None => GameSettings::default(),
    };

    if let Some(side) = cli.side {
        settings = settings.with_side(side);
    }
    if let Some(seed) = cli.seed {
        settings = settings.with_seed(seed);
    }
    if let Some(symbol) = cli.play_as {
        settings = settings.with_play_as(symbol);
    }
    if let Some(pieces) = cli.pieces {
        settings = settings.with_pieces(pieces);
    }
    if let Some(turns) = cli.turns {
        settings = settings.with_turns(turns);
    }

    settings.validate()?;
    Ok(settings)
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing(verbose: bool) {
    let default = if verbose {
        "warn,xo_mobility=info"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cityboard_core::{Board, Config, WeatherLookup, provider_from_config};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "cityboard", version, about = "City weather board")]
pub struct Cli {
    /// Verbosity level (repeat for more detail).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com key used for lookups.
    Configure,

    /// Look up one city and print its card.
    Show {
        /// City name, e.g. "Paris" or "New York".
        city: String,
    },

    /// Interactive board session (the default).
    Board,
}

impl Cli {
    pub fn init_logging(&self) {
        let filter = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        tracing_subscriber::registry()
            .with(tracing_subscriber::EnvFilter::new(filter))
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    pub async fn run(self) -> anyhow::Result<()> {
        match self.command.unwrap_or(Command::Board) {
            Command::Configure => configure(),
            Command::Show { city } => show(&city).await,
            Command::Board => board_session().await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Password::new("WeatherAPI.com API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key);
    config.save()?;

    println!("Saved to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(city: &str) -> anyhow::Result<()> {
    let config = Config::load()?;
    let provider = provider_from_config(&config)?;

    let weather = provider
        .current(city)
        .await
        .with_context(|| format!("Lookup failed for '{city}'"))?;

    print!("{}", render::card(&weather));
    Ok(())
}

async fn board_session() -> anyhow::Result<()> {
    let config = Config::load()?;
    let provider = provider_from_config(&config)?;

    let mut board = Board::new();

    println!("City weather board. Type a city name to add its card.");
    println!("Commands: :remove <name>, :quit");

    loop {
        println!();
        print!("{}", render::board(&board));

        let line = match inquire::Text::new("Search city:").prompt() {
            Ok(line) => line,
            Err(inquire::InquireError::OperationCanceled)
            | Err(inquire::InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e).context("Failed to read input"),
        };

        let line = line.trim().to_string();
        if line == ":quit" || line == ":q" {
            break;
        }
        if let Some(name) = line.strip_prefix(":remove ") {
            board.remove(name.trim());
            continue;
        }
        if line.starts_with(':') {
            println!("Unknown command: {line}");
            continue;
        }

        // The prompt is not shown again until the lookup resolves, so the
        // submit affordance is effectively disabled while loading.
        board.set_query(line);
        let Some(query) = board.begin_search() else {
            continue;
        };
        println!("Looking up \"{query}\"...");
        let outcome = provider.current(&query).await;
        board.complete_search(outcome);
    }

    Ok(())
}

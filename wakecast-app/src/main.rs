//! wakecast - personal podcast curation pipeline
//!
//! Three cron-driven entry points: sync podcast feeds onto board cards,
//! generate the daily spoken intro, and run a file through the effects
//! chain.

mod config;
mod feeds;
mod intro;
mod logging;
mod sync;

use clap::{Parser, Subcommand};
use config::AppConfig;
use std::path::PathBuf;
use wakecast_audio::EffectsConfig;

#[derive(Parser)]
#[command(name = "wakecast", version, about = "Podcast feed sync, daily intro, audio effects")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sync podcast feeds onto their board cards
    Sync {
        /// Sync only this feed (default: all feeds)
        feed_id: Option<String>,
        /// List the configured feeds and exit
        #[arg(long)]
        list: bool,
    },
    /// Generate today's spoken intro and attach it to the intro card
    Intro,
    /// Run an audio file through the effects chain
    Process {
        /// Input audio file (any decodable format)
        input: PathBuf,
        /// Output WAV path
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let _guard = logging::init(&config::log_dir())?;

    match cli.command {
        Command::Sync { feed_id, list } => {
            if list {
                println!("Configured feeds:");
                for feed in feeds::FEEDS {
                    println!("  {}: {}", feed.id, feed.card_name);
                }
                return Ok(());
            }
            let config = AppConfig::from_env()?;
            sync::run(&config, feed_id.as_deref())
        }
        Command::Intro => {
            let config = AppConfig::from_env()?;
            intro::run(&config)
        }
        Command::Process { input, output } => {
            wakecast_audio::process_file(&input, &output, &EffectsConfig::default())?;
            Ok(())
        }
    }
}

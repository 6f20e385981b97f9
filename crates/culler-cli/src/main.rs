use anyhow::Result;
use clap::Parser;
use culler_core::GroupBy;
use std::path::PathBuf;

mod commands;
mod config;
mod logging;
mod report;

use config::{Config, LogLevel};

#[derive(Debug, Parser)]
#[command(name = "culler", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Recommend albums to remove from an iTunes/Apple Music library
    ///
    /// Parses the library XML export, groups its tracks into albums and
    /// prints, largest album first, every album that is mostly rated but
    /// has no highly rated track.
    ///
    /// Output, one line per album:
    ///
    ///   artists - album - tracks: N - size: NMB - N% rated - max N - avg N.NN
    Recommend {
        /// Path to the library XML file (usually ~/Music/Music/Library.xml)
        library: PathBuf,

        /// Album grouping: album-and-year or album-name
        #[arg(long)]
        group_by: Option<GroupBy>,

        /// Only albums with strictly more than this fraction of rated tracks
        #[arg(long)]
        min_percent_rated: Option<f64>,

        /// Only albums whose highest rating is at most this many stars
        #[arg(long)]
        max_rating: Option<u8>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show track, album, size and play time totals for a library
    Stats {
        /// Path to the library XML file
        library: PathBuf,

        /// Album grouping: album-and-year or album-name
        #[arg(long)]
        group_by: Option<GroupBy>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file with defaults
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load()?;
    let level = if cli.verbose {
        LogLevel::Debug
    } else {
        config.log_level
    };
    logging::init(level)?;

    match cli.command {
        Commands::Recommend {
            library,
            group_by,
            min_percent_rated,
            max_rating,
            json,
        } => {
            let args = commands::RecommendArgs {
                library,
                group_by,
                min_percent_rated,
                max_rating,
                json,
            };
            commands::run_recommend(args, &config)?;
        }
        Commands::Stats { library, group_by } => {
            commands::show_stats(library, group_by.unwrap_or(config.group_by))?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show_config(&config)?,
            ConfigAction::Path => commands::config::show_path()?,
            ConfigAction::Example => commands::config::show_example()?,
            ConfigAction::Init => commands::config::init_config()?,
        },
    }

    Ok(())
}

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::source::DEFAULT_TIMEOUT_SECS;

#[derive(Parser, Debug)]
#[command(name = "skyriver")]
#[command(version, about = "Load Sky River records into a galaxy graph")]
pub struct Cli {
    /// More log output (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the galaxy and print a summary
    Load {
        /// Directory or .zip archive holding the source files
        input: PathBuf,

        /// Only load these sources and their parents (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        include: Option<Vec<String>>,

        /// Skip these sources and their children (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        exclude: Option<Vec<String>>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,

        /// Show progress in a terminal view
        #[arg(long, conflicts_with = "json")]
        tui: bool,
    },

    /// Download the source files from a base URL into the cache
    Fetch {
        /// URL the nine source files live under
        base_url: String,

        /// Force re-download even if cached
        #[arg(short, long)]
        force: bool,

        /// Custom cache directory
        #[arg(short, long, env = "SKYRIVER_CACHE_DIR")]
        cache_dir: Option<PathBuf>,

        /// Per-request timeout in seconds
        #[arg(short, long, default_value_t = DEFAULT_TIMEOUT_SECS)]
        timeout: u64,

        /// Remove other cached datasets afterwards
        #[arg(long)]
        prune: bool,
    },

    /// Show one system: position, territory, stars, orbits, neighbors
    Show {
        /// Directory or .zip archive holding the source files
        input: PathBuf,

        /// Wiki link of the system
        system: String,

        /// Base URL for wiki links
        #[arg(short, long)]
        wiki_url: Option<String>,

        /// Print the system as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one hyperlane's route
    Route {
        /// Directory or .zip archive holding the source files
        input: PathBuf,

        /// Wiki link of the hyperlane
        hyperlane: String,
    },

    /// List the sources in load order
    ListSources,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_load_with_excludes() {
        let cli = Cli::parse_from(["skyriver", "-v", "load", "data", "--exclude", "moons,asteroids"]);
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::Load { input, exclude, include, .. } => {
                assert_eq!(input, PathBuf::from("data"));
                assert_eq!(exclude, Some(vec!["moons".to_string(), "asteroids".to_string()]));
                assert!(include.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_json_and_tui_conflict() {
        let result = Cli::try_parse_from(["skyriver", "load", "data", "--json", "--tui"]);
        assert!(result.is_err());
    }
}

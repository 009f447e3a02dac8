use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for geodini
#[derive(Debug, Parser)]
#[command(
    name = "geodini",
    version,
    about = "Search the Geodini geocoding API from the terminal"
)]
pub struct CliArgs {
    /// API root (default: the public Geodini API)
    #[arg(short = 'u', long = "base-url", global = true)]
    pub base_url: Option<String>,

    /// JSON file with client settings; flags override it
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long = "timeout", global = true)]
    pub timeout: Option<u64>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search for places and print them in ranked order
    Search {
        /// Free-text query (e.g. London in Canada)
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Ignore the AI ranking hint and keep backend order
        #[arg(long)]
        raw: bool,

        /// Print the ranked rows as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search, then show the geometry of one result
    Show {
        /// Original index of the result (the number in the map column)
        index: usize,

        /// Free-text query
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
}

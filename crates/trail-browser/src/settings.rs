use clap::{Parser, Subcommand, ValueHint};
use std::path::PathBuf;

/// Trail Browser - browse village hiking routes stored as GPX tracks
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory containing the GPX route files
    #[arg(short, long, default_value = "routes", value_hint = ValueHint::DirPath)]
    pub routes_dir: PathBuf,

    /// Maximum number of parsed routes kept in the in-memory cache
    #[arg(long, default_value = "64")]
    pub cache_size: usize,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List all discovered routes with their summary metrics
    List {
        /// Emit machine-readable JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show one route in detail, including its elevation profile
    Show {
        /// Route name (as shown by `list`) or file name
        route: String,

        /// Emit machine-readable JSON instead of text
        #[arg(long)]
        json: bool,

        /// Print every profile row instead of a sampled table
        #[arg(long)]
        full_profile: bool,
    },
    /// Write a route's original GPX document to a file
    Export {
        /// Route name (as shown by `list`) or file name
        route: String,

        /// Output GPX path
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: PathBuf,
    },
}

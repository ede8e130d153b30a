use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "Bearos leaderboard backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Start the backend server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Create the database tables if they are missing
    InitDb {
        /// Drop every table first
        #[arg(long)]
        reset: bool,
    },
    /// Pull every manager's gameweek history from Fantasy Premier League
    SyncFpl,
    /// Print a competition's current table
    Standings {
        /// Competition slug, e.g. fifa or holdem
        slug: String,
    },
    /// Load finished seasons from a JSON file
    ImportArchive {
        path: PathBuf,
    },
    /// Print shell completions
    Completions {
        shell: Shell,
    },
}

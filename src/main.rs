use anyhow::Result;

use bearos_leaderboard::cli::Command;
use bearos_leaderboard::{
    handle_completions, handle_import_archive, handle_init_db, handle_serve, handle_standings, handle_sync_fpl,
    interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::InitDb { reset } => handle_init_db(*reset),
        Command::SyncFpl => handle_sync_fpl(),
        Command::Standings { slug } => handle_standings(slug),
        Command::ImportArchive { path } => handle_import_archive(path),
        Command::Completions { shell } => handle_completions(*shell),
    }
}

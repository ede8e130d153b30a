pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod errors;
pub mod http;
pub mod rate_limiter;
pub mod services;
pub mod standings;

use std::io;
use std::path::Path;

use anyhow::{anyhow, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use log::info;

use crate::cli::Command;
use crate::config::find_competition;
use crate::config::settings::AppConfig;
use crate::database::setup::{ensure_schema, reset_database};
use crate::services::archive::import_archive_file;
use crate::services::ingestion::FplSyncService;
use crate::services::report::render_standings;
use crate::services::server::ServerService;
use crate::services::standings::StandingsService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::from_env();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_init_db(reset: bool) -> Result<()> {
    let config = AppConfig::from_env();
    let pool = database::create_pool(&config.database.path)?;
    let mut conn = database::get_connection(&pool)?;

    if reset {
        reset_database(&mut conn)?;
    } else {
        ensure_schema(&mut conn)?;
    }
    info!("Database ready at {}", config.database.path);
    Ok(())
}

pub fn handle_sync_fpl() -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::from_env();
        let pool = database::create_pool(&config.database.path)?;
        ensure_schema(&mut database::get_connection(&pool)?)?;

        let mut service = FplSyncService::new(&config)?;
        let report = service.run(&pool).await?;

        println!("\n=== FPL Sync Results ===");
        println!("Gameweeks updated:   {}", report.updated);
        println!("Gameweeks unchanged: {}", report.unchanged);
        if !report.failed_managers.is_empty() {
            println!("\nFailed managers:");
            for name in &report.failed_managers {
                println!("  - {}", name);
            }
        }
        Ok(())
    })
}

pub fn handle_standings(slug: &str) -> Result<()> {
    let competition = find_competition(slug).ok_or_else(|| anyhow!("Unknown competition: {}", slug))?;
    let config = AppConfig::from_env();
    let pool = database::create_pool(&config.database.path)?;

    let standings = StandingsService::new(&pool, &competition).standings();
    print!("{}", render_standings(&competition, &standings));
    Ok(())
}

pub fn handle_import_archive(path: &Path) -> Result<()> {
    let config = AppConfig::from_env();
    let pool = database::create_pool(&config.database.path)?;
    let mut conn = database::get_connection(&pool)?;
    ensure_schema(&mut conn)?;

    let imported = import_archive_file(&mut conn, path)?;
    println!("Imported {} seasons from {}", imported, path.display());
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut io::stdout());
    Ok(())
}

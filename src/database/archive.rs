use anyhow::{Context, Result};
use rusqlite::params;

use super::connection::DbConn;
use super::models::{ArchivedSeason, ArchivedStanding, Champion};
use crate::errors::storage_context;

/// Replaces everything stored for the season's `(competition, season)` pair.
pub fn replace_season(conn: &mut DbConn, season: &ArchivedSeason) -> Result<()> {
    let competition = season.competition.as_str();
    let tx = conn
        .transaction()
        .with_context(|| storage_context("open a transaction", competition))?;

    tx.execute(
        "DELETE FROM archived_standings WHERE competition = ?1 AND season = ?2",
        params![competition, season.season],
    )?;
    tx.execute(
        "DELETE FROM season_highlights WHERE competition = ?1 AND season = ?2",
        params![competition, season.season],
    )?;

    for standing in &season.standings {
        tx.execute(
            "INSERT INTO archived_standings (competition, season, position, entrant_id, games_played, wins, score, score_difference, win_percentage) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                competition,
                season.season,
                standing.position,
                standing.entrant_id,
                standing.games_played,
                standing.wins,
                standing.score,
                standing.score_difference,
                standing.win_percentage
            ],
        )
        .with_context(|| format!("Failed to archive {} in season {}", standing.entrant_id, season.season))?;
    }

    for (ordinal, text) in season.highlights.iter().enumerate() {
        tx.execute(
            "INSERT INTO season_highlights (competition, season, ordinal, text) VALUES (?1, ?2, ?3, ?4)",
            params![competition, season.season, ordinal as i64, text],
        )?;
    }

    tx.commit()
        .with_context(|| storage_context("commit archived season", competition))
}

/// Archived season labels, newest first.
pub fn list_seasons(conn: &mut DbConn, competition: &str) -> Result<Vec<String>> {
    let sql = "SELECT DISTINCT season FROM archived_standings WHERE competition = ?1 ORDER BY season DESC";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![competition], |row| row.get(0))?
        .collect::<rusqlite::Result<Vec<String>>>()
        .with_context(|| storage_context("list archived seasons", competition))?;

    Ok(rows)
}

/// Winners of every archived season across all competitions, newest season first.
pub fn list_champions(conn: &mut DbConn) -> Result<Vec<Champion>> {
    let sql = "SELECT competition, season, entrant_id FROM archived_standings WHERE position = 1 ORDER BY season DESC, competition ASC";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], |row| {
            Ok(Champion {
                competition: row.get(0)?,
                season: row.get(1)?,
                entrant_id: row.get(2)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list archived champions")?;

    Ok(rows)
}

pub fn get_season(conn: &mut DbConn, competition: &str, season: &str) -> Result<Option<ArchivedSeason>> {
    let standings = list_standings(conn, competition, season)?;
    if standings.is_empty() {
        return Ok(None);
    }

    let highlights = list_highlights(conn, competition, season)?;
    Ok(Some(ArchivedSeason {
        competition: competition.to_string(),
        season: season.to_string(),
        standings,
        highlights,
    }))
}

fn list_standings(conn: &mut DbConn, competition: &str, season: &str) -> Result<Vec<ArchivedStanding>> {
    let sql = "SELECT position, entrant_id, games_played, wins, score, score_difference, win_percentage FROM archived_standings WHERE competition = ?1 AND season = ?2 ORDER BY position ASC";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![competition, season], parse_standing_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

fn parse_standing_row(row: &rusqlite::Row) -> rusqlite::Result<ArchivedStanding> {
    Ok(ArchivedStanding {
        position: row.get(0)?,
        entrant_id: row.get(1)?,
        games_played: row.get(2)?,
        wins: row.get(3)?,
        score: row.get(4)?,
        score_difference: row.get(5)?,
        win_percentage: row.get(6)?,
    })
}

fn list_highlights(conn: &mut DbConn, competition: &str, season: &str) -> Result<Vec<String>> {
    let sql = "SELECT text FROM season_highlights WHERE competition = ?1 AND season = ?2 ORDER BY ordinal ASC";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![competition, season], |row| row.get(0))?
        .collect::<rusqlite::Result<Vec<String>>>()?;

    Ok(rows)
}

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension, Transaction, TransactionBehavior};

use super::connection::DbConn;
use super::models::DbEntry;
use crate::errors::storage_context;
use crate::standings::{Entry, Period};

const ENTRY_COLUMNS: &str = "id, competition, period, entrant_id, games_played, wins, primary_score, secondary_score, draws, losses, goals_for, goals_against, five_k_count, external_id, created_at";

/// Inserts the entry, or overwrites the metrics of the existing
/// `(competition, period, entrant_id)` row.
pub fn upsert_entry(
    conn: &mut DbConn,
    competition: &str,
    entry: &Entry,
    external_id: Option<&str>,
) -> Result<DbEntry> {
    upsert_on(conn, competition, entry, external_id)
}

/// Upserts a whole batch atomically.
pub fn upsert_entries(conn: &mut DbConn, competition: &str, entries: &[Entry]) -> Result<Vec<DbEntry>> {
    let tx = write_transaction(conn, competition)?;
    let stored = upsert_all_on(&tx, competition, entries)?;

    tx.commit()
        .with_context(|| storage_context("commit entries", competition))?;
    Ok(stored)
}

/// Opens a transaction holding the database write lock from its first
/// statement, so a read of the latest period stays valid until commit.
pub fn write_transaction<'c>(conn: &'c mut DbConn, competition: &str) -> Result<Transaction<'c>> {
    conn.transaction_with_behavior(TransactionBehavior::Immediate)
        .with_context(|| storage_context("open a write transaction", competition))
}

pub fn upsert_all_on(conn: &Connection, competition: &str, entries: &[Entry]) -> Result<Vec<DbEntry>> {
    entries
        .iter()
        .map(|entry| upsert_on(conn, competition, entry, None))
        .collect()
}

fn upsert_on(conn: &Connection, competition: &str, entry: &Entry, external_id: Option<&str>) -> Result<DbEntry> {
    let sql = format!(
        "INSERT INTO entries (competition, period, entrant_id, games_played, wins, primary_score, secondary_score, draws, losses, goals_for, goals_against, five_k_count, external_id)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
         ON CONFLICT (competition, period, entrant_id) DO UPDATE SET
            games_played = excluded.games_played,
            wins = excluded.wins,
            primary_score = excluded.primary_score,
            secondary_score = excluded.secondary_score,
            draws = excluded.draws,
            losses = excluded.losses,
            goals_for = excluded.goals_for,
            goals_against = excluded.goals_against,
            five_k_count = excluded.five_k_count,
            external_id = COALESCE(excluded.external_id, entries.external_id)
         RETURNING {}",
        ENTRY_COLUMNS
    );

    conn.query_row(
        &sql,
        params![
            competition,
            entry.period,
            entry.entrant_id,
            entry.games_played,
            entry.wins,
            entry.primary_score,
            entry.secondary_score,
            entry.draws,
            entry.losses,
            entry.goals_for,
            entry.goals_against,
            entry.five_k_count,
            external_id
        ],
        parse_entry_row,
    )
    .with_context(|| format!("Failed to upsert entry {} for period {}", entry.entrant_id, entry.period))
}

fn parse_entry_row(row: &rusqlite::Row) -> rusqlite::Result<DbEntry> {
    Ok(DbEntry {
        id: row.get(0)?,
        competition: row.get(1)?,
        entry: Entry {
            period: row.get(2)?,
            entrant_id: row.get(3)?,
            games_played: row.get(4)?,
            wins: row.get(5)?,
            primary_score: row.get(6)?,
            secondary_score: row.get(7)?,
            draws: row.get(8)?,
            losses: row.get(9)?,
            goals_for: row.get(10)?,
            goals_against: row.get(11)?,
            five_k_count: row.get(12)?,
        },
        external_id: row.get(13)?,
        created_at: row.get(14)?,
    })
}

/// All entries of a competition, ordered by period then entrant.
pub fn list_by_competition(conn: &mut DbConn, competition: &str) -> Result<Vec<DbEntry>> {
    let sql = format!(
        "SELECT {} FROM entries WHERE competition = ?1 ORDER BY period ASC, entrant_id ASC",
        ENTRY_COLUMNS
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![competition], parse_entry_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .with_context(|| storage_context("list entries", competition))?;

    Ok(rows)
}

pub fn find_entry(
    conn: &mut DbConn,
    competition: &str,
    period: Period,
    entrant_id: &str,
) -> Result<Option<DbEntry>> {
    let sql = format!(
        "SELECT {} FROM entries WHERE competition = ?1 AND period = ?2 AND entrant_id = ?3",
        ENTRY_COLUMNS
    );

    conn.query_row(&sql, params![competition, period, entrant_id], parse_entry_row)
        .optional()
        .context("Failed to query entry by period and entrant")
}

/// `None` when nothing has been recorded for the competition yet.
pub fn latest_period(conn: &mut DbConn, competition: &str) -> Result<Option<Period>> {
    latest_period_on(conn, competition)
}

pub fn latest_period_on(conn: &Connection, competition: &str) -> Result<Option<Period>> {
    let sql = "SELECT MAX(period) FROM entries WHERE competition = ?1";

    conn.query_row(sql, params![competition], |row| row.get::<_, Option<Period>>(0))
        .with_context(|| storage_context("read the latest period", competition))
}

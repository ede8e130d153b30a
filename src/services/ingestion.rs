use anyhow::Result;
use log::{error, info};
use serde::Serialize;

use crate::api::fpl_client::{FplClient, FplHistory};
use crate::config::settings::AppConfig;
use crate::config::{get_fpl_managers, FplManager};
use crate::database::{self, entries, DbConn, DbPool};

const FPL_COMPETITION: &str = "fpl";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncReport {
    pub updated: usize,
    pub unchanged: usize,
    pub failed_managers: Vec<String>,
}

/// Pulls every manager's gameweek history from the provider into the
/// `fpl` competition.
pub struct FplSyncService {
    client: FplClient,
    managers: Vec<FplManager>,
}

impl FplSyncService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            client: FplClient::new(&config.provider)?,
            managers: get_fpl_managers(),
        })
    }

    pub async fn run(&mut self, pool: &DbPool) -> Result<SyncReport> {
        info!("=== Starting FPL Sync ===");
        let mut report = SyncReport::default();

        for manager in self.managers.clone() {
            info!("Fetching data for {}...", manager.name);
            let history = match self.client.fetch_history(manager.team_id).await {
                Ok(history) => history,
                Err(e) => {
                    error!("Error fetching data for {}: {:?}", manager.name, e);
                    report.failed_managers.push(manager.name.to_string());
                    continue;
                }
            };

            let mut conn = database::get_connection(pool)?;
            let (updated, unchanged) = apply_history(&mut conn, &manager, &history)?;
            info!("  → {}: {} gameweeks updated, {} unchanged", manager.name, updated, unchanged);
            report.updated += updated;
            report.unchanged += unchanged;
        }

        info!("=== FPL Sync Complete ===");
        Ok(report)
    }
}

/// Upserts every gameweek whose stored total differs from the feed.
/// Returns `(updated, unchanged)` counts.
pub fn apply_history(conn: &mut DbConn, manager: &FplManager, history: &FplHistory) -> Result<(usize, usize)> {
    let mut updated = 0;
    let mut unchanged = 0;

    for entry in history.to_entries(manager) {
        let stored = entries::find_entry(conn, FPL_COMPETITION, entry.period, &entry.entrant_id)?;
        let is_current = stored.is_some_and(|row| {
            row.entry.primary_score == entry.primary_score
                && row.entry.secondary_score == entry.secondary_score
                && row.entry.games_played == entry.games_played
        });

        if is_current {
            unchanged += 1;
            continue;
        }

        entries::upsert_entry(conn, FPL_COMPETITION, &entry, Some(manager.team_id))?;
        updated += 1;
    }

    Ok((updated, unchanged))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{create_memory_pool, setup::ensure_schema};

    fn history(json: &str) -> FplHistory {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_only_changed_gameweeks_are_written() {
        let pool = create_memory_pool().unwrap();
        let mut conn = database::get_connection(&pool).unwrap();
        ensure_schema(&mut conn).unwrap();
        let manager = FplManager::new("Choco", "3214199");

        let first = history(r#"{"current": [{"event": 1, "points": 70, "total_points": 70}]}"#);
        assert_eq!(apply_history(&mut conn, &manager, &first).unwrap(), (1, 0));

        let second = history(
            r#"{"current": [
                {"event": 1, "points": 70, "total_points": 70},
                {"event": 2, "points": 41, "total_points": 111}
            ]}"#,
        );
        assert_eq!(apply_history(&mut conn, &manager, &second).unwrap(), (1, 1));

        let stored = entries::find_entry(&mut conn, FPL_COMPETITION, 2, "Choco").unwrap().unwrap();
        assert_eq!(stored.entry.primary_score, 111);
        assert_eq!(stored.entry.secondary_score, Some(41));
        assert_eq!(stored.external_id.as_deref(), Some("3214199"));
    }

    #[test]
    fn test_corrected_total_is_rewritten() {
        let pool = create_memory_pool().unwrap();
        let mut conn = database::get_connection(&pool).unwrap();
        ensure_schema(&mut conn).unwrap();
        let manager = FplManager::new("Panda", "5663");

        apply_history(&mut conn, &manager, &history(r#"{"current": [{"event": 4, "points": 50, "total_points": 230}]}"#)).unwrap();
        let corrected = history(r#"{"current": [{"event": 4, "points": 53, "total_points": 233}]}"#);
        assert_eq!(apply_history(&mut conn, &manager, &corrected).unwrap(), (1, 0));
        assert_eq!(entries::list_by_competition(&mut conn, FPL_COMPETITION).unwrap().len(), 1);
    }
}

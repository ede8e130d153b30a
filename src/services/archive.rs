use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use log::info;

use crate::config::find_competition;
use crate::database::{archive, ArchivedSeason, DbConn};

/// Loads finished seasons from a JSON file holding a list of seasons and
/// stores them, replacing any season already archived under the same name.
pub fn import_archive_file(conn: &mut DbConn, path: &Path) -> Result<usize> {
    let raw = fs::read_to_string(path).with_context(|| format!("Failed to read archive: {}", path.display()))?;
    let seasons: Vec<ArchivedSeason> =
        serde_json::from_str(&raw).with_context(|| format!("Failed to parse archive: {}", path.display()))?;
    import_seasons(conn, &seasons)
}

pub fn import_seasons(conn: &mut DbConn, seasons: &[ArchivedSeason]) -> Result<usize> {
    validate_seasons(seasons)?;

    for season in seasons {
        archive::replace_season(conn, season)?;
        info!(
            "Archived {} season {} ({} rows, {} highlights)",
            season.competition,
            season.season,
            season.standings.len(),
            season.highlights.len()
        );
    }

    Ok(seasons.len())
}

fn validate_seasons(seasons: &[ArchivedSeason]) -> Result<()> {
    let mut seen = HashSet::new();
    for season in seasons {
        if find_competition(&season.competition).is_none() {
            bail!("Unknown competition in archive: {}", season.competition);
        }
        if season.season.trim().is_empty() {
            bail!("Archive for {} has an empty season name", season.competition);
        }
        if !seen.insert((season.competition.as_str(), season.season.as_str())) {
            bail!("Season {} of {} appears twice", season.season, season.competition);
        }
    }
    Ok(())
}

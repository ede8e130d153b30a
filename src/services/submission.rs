use std::collections::HashSet;

use anyhow::Context;
use log::info;
use serde::{Deserialize, Serialize};

use crate::config::CompetitionConfig;
use crate::database::{entries, DbConn};
use crate::errors::{storage_context, AppError};
use crate::standings::{Entry, Period, Score};

/// One entrant's result as posted by whoever keeps score.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntrySubmission {
    #[serde(alias = "player", alias = "bearo", alias = "team")]
    pub entrant_id: Option<String>,
    #[serde(alias = "games")]
    pub games_played: Option<i32>,
    pub wins: Option<i32>,
    #[serde(alias = "points")]
    pub primary_score: Option<Score>,
    #[serde(alias = "gamepoints")]
    pub secondary_score: Option<Score>,
    pub draws: Option<i32>,
    pub losses: Option<i32>,
    #[serde(alias = "goalsScored")]
    pub goals_for: Option<i32>,
    #[serde(alias = "goalsConceded")]
    pub goals_against: Option<i32>,
    #[serde(alias = "fiveK")]
    pub five_k_count: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub competition: String,
    pub period: Period,
    pub stored: usize,
}

/// Validates and stores one period of results.
///
/// Without an explicit `period` the batch opens the period after the latest
/// one; with one, the rows of that period are corrected in place.
pub fn submit_period(
    conn: &mut DbConn,
    competition: &CompetitionConfig,
    submissions: &[EntrySubmission],
    period: Option<Period>,
) -> Result<SubmissionReceipt, AppError> {
    if let Some(requested) = period {
        if requested < 1 {
            return Err(AppError::MalformedEntry(format!("period must be positive, got {}", requested)));
        }
    }

    let tx = entries::write_transaction(conn, competition.slug)?;
    let period = match period {
        Some(requested) => requested,
        None => next_period(entries::latest_period_on(&tx, competition.slug)?)?,
    };

    let batch = validate_batch(competition, submissions, period)?;
    let stored = entries::upsert_all_on(&tx, competition.slug, &batch)?;
    tx.commit()
        .with_context(|| storage_context("commit entries", competition.slug))?;

    info!(
        "Stored {} entries for {} period {}",
        stored.len(),
        competition.slug,
        period
    );

    Ok(SubmissionReceipt {
        competition: competition.slug.to_string(),
        period,
        stored: stored.len(),
    })
}

fn next_period(latest: Option<Period>) -> Result<Period, AppError> {
    match latest {
        None => Ok(1),
        Some(latest) => latest.checked_add(1).ok_or_else(|| {
            AppError::MalformedEntry(format!("period {} is the last one that can be stored", latest))
        }),
    }
}

pub fn validate_batch(
    competition: &CompetitionConfig,
    submissions: &[EntrySubmission],
    period: Period,
) -> Result<Vec<Entry>, AppError> {
    if submissions.is_empty() {
        return Err(AppError::MalformedEntry("submission contains no entries".to_string()));
    }

    let mut seen = HashSet::new();
    submissions
        .iter()
        .enumerate()
        .map(|(index, submission)| {
            let entry = validate_entry(competition, submission, period)
                .map_err(|reason| AppError::MalformedEntry(format!("entry {}: {}", index + 1, reason)))?;
            if !seen.insert(entry.entrant_id.clone()) {
                return Err(AppError::MalformedEntry(format!(
                    "entry {}: {} appears more than once",
                    index + 1,
                    entry.entrant_id
                )));
            }
            Ok(entry)
        })
        .collect()
}

fn validate_entry(
    competition: &CompetitionConfig,
    submission: &EntrySubmission,
    period: Period,
) -> Result<Entry, String> {
    let entrant_id = submission
        .entrant_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| format!("missing {}", competition.entrant_label.to_lowercase()))?;

    let games_played = required_count(submission.games_played, "games")?;
    let wins = required_count(submission.wins, "wins")?;
    if wins > games_played {
        return Err(format!("{} wins out of {} games", wins, games_played));
    }

    let mut entry = Entry::new(entrant_id, period, games_played, wins, 0);

    if competition.metrics.league_table {
        entry.draws = Some(required_count(submission.draws, "draws")?);
        entry.losses = Some(required_count(submission.losses, "losses")?);
        entry.goals_for = Some(required_count(submission.goals_for, "goalsFor")?);
        entry.goals_against = Some(required_count(submission.goals_against, "goalsAgainst")?);
        entry.primary_score = entry.league_points();
    } else {
        entry.primary_score = submission
            .primary_score
            .ok_or_else(|| "missing points".to_string())?;
    }

    if competition.metrics.secondary_score {
        entry.secondary_score = submission.secondary_score;
    }
    if competition.metrics.five_k {
        entry.five_k_count = Some(required_count(submission.five_k_count, "fiveK")?);
    }

    Ok(entry)
}

fn required_count(value: Option<i32>, field: &str) -> Result<i32, String> {
    match value {
        Some(v) if v >= 0 => Ok(v),
        Some(v) => Err(format!("{} must not be negative, got {}", field, v)),
        None => Err(format!("missing {}", field)),
    }
}

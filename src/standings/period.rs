use crate::errors::StandingsError;

use super::types::{Entry, Period};

/// Returns the highest period present.
///
/// Callers must short-circuit on an empty dataset before asking; an empty
/// slice is reported as [`StandingsError::EmptyDataset`] instead of a
/// sentinel that would silently filter everything out.
pub fn compute_latest_period(entries: &[Entry]) -> Result<Period, StandingsError> {
    entries
        .iter()
        .map(|entry| entry.period)
        .max()
        .ok_or(StandingsError::EmptyDataset)
}

/// Entries recorded for `period`, in input order.
pub fn entries_for_period(entries: &[Entry], period: Period) -> Vec<Entry> {
    entries
        .iter()
        .filter(|entry| entry.period == period)
        .cloned()
        .collect()
}

/// Latest-period subset, or nothing when no data has been recorded yet.
pub fn latest_entries(entries: &[Entry]) -> Vec<Entry> {
    if entries.is_empty() {
        return Vec::new();
    }

    match compute_latest_period(entries) {
        Ok(latest) => entries_for_period(entries, latest),
        Err(_) => Vec::new(),
    }
}

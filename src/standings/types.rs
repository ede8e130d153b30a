use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub type EntrantId = String;
pub type Period = i32;
pub type Score = i64;

/// One entrant's recorded result for one period of one competition.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub entrant_id: EntrantId,
    pub period: Period,
    pub games_played: i32,
    pub wins: i32,
    pub primary_score: Score,
    pub secondary_score: Option<Score>,
    pub draws: Option<i32>,
    pub losses: Option<i32>,
    pub goals_for: Option<i32>,
    pub goals_against: Option<i32>,
    pub five_k_count: Option<i32>,
}

impl Entry {
    pub fn new(entrant_id: &str, period: Period, games_played: i32, wins: i32, primary_score: Score) -> Self {
        Self {
            entrant_id: entrant_id.to_string(),
            period,
            games_played,
            wins,
            primary_score,
            ..Self::default()
        }
    }

    /// League points: three for a win, one for a draw.
    pub fn league_points(&self) -> Score {
        Score::from(self.wins) * 3 + Score::from(self.draws.unwrap_or(0))
    }

    pub fn goal_difference(&self) -> Option<i32> {
        match (self.goals_for, self.goals_against) {
            (Some(scored), Some(conceded)) => Some(scored - conceded),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RankingKey {
    /// `primary_score` descending, ties keep input order
    Simple,
    /// `wins*3 + draws` descending, then goal difference descending
    LeagueTable,
}

impl RankingKey {
    pub fn score(&self, entry: &Entry) -> Score {
        match self {
            RankingKey::Simple => entry.primary_score,
            RankingKey::LeagueTable => entry.league_points(),
        }
    }

    /// Ordering for a descending sort; `Equal` leaves input order intact.
    pub fn compare(&self, a: &Entry, b: &Entry) -> Ordering {
        let by_score = self.score(b).cmp(&self.score(a));
        match self {
            RankingKey::Simple => by_score,
            RankingKey::LeagueTable => by_score.then_with(|| {
                let gd_a = a.goal_difference().unwrap_or(0);
                let gd_b = b.goal_difference().unwrap_or(0);
                gd_b.cmp(&gd_a)
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DifferenceMode {
    /// Previous row's score minus this row's score
    Adjacent,
    /// Leader's score minus this row's score
    FromLeader,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WinPercentageMode {
    /// `wins / games_played`
    PerGame,
    /// `wins / sum(wins of every entrant in the period)`
    ShareOfTotalWins,
}

/// What the upstream feed reports for a cumulative competition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FeedKind {
    /// Every row already holds the running total.
    RunningTotal,
    /// Every row holds only that period's gain; totals are summed here.
    Deltas,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "mode", content = "feed")]
pub enum Accumulation {
    Cumulative(FeedKind),
    PerPeriodDelta,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "periods")]
pub enum ChartWindow {
    /// Keep periods up to and including the given one.
    Leading(Period),
    /// Keep the most recent N periods, counted back from the latest.
    Trailing(Period),
}

impl ChartWindow {
    pub fn contains(&self, period: Period, latest: Period) -> bool {
        match *self {
            ChartWindow::Leading(max) => period <= max,
            ChartWindow::Trailing(count) => period > latest - count,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartMetric {
    #[default]
    Primary,
    Secondary,
}

impl ChartMetric {
    pub fn value(&self, entry: &Entry) -> Score {
        match self {
            ChartMetric::Primary => entry.primary_score,
            ChartMetric::Secondary => entry.secondary_score.unwrap_or(0),
        }
    }
}

/// Per-competition knobs consumed by the computer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsConfig {
    pub ranking_key: RankingKey,
    pub difference_mode: DifferenceMode,
    pub win_percentage_mode: WinPercentageMode,
    pub accumulation: Accumulation,
    pub chart_window: ChartWindow,
    pub tracks_secondary_score: bool,
}

/// One ranked entrant for the latest period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsRow {
    pub rank: usize,
    pub entrant_id: EntrantId,
    pub games_played: i32,
    pub wins: i32,
    pub score: Score,
    pub secondary_score: Option<Score>,
    pub draws: Option<i32>,
    pub losses: Option<i32>,
    pub goals_for: Option<i32>,
    pub goals_against: Option<i32>,
    pub goal_difference: Option<i32>,
    pub five_k_count: Option<i32>,
    pub score_difference_from_above: String,
    pub secondary_score_difference_from_above: Option<String>,
    pub win_percentage: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeriesPoint {
    pub period: Period,
    pub entrant_id: EntrantId,
    pub value: Option<Score>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PieSlice {
    pub entrant_id: EntrantId,
    pub wins: i32,
    pub color: String,
}

/// Entrant → display color lookup, injected by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    colors: HashMap<EntrantId, String>,
}

pub const FALLBACK_COLOR: &str = "transparent";

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, entrant_id: &str, color: &str) -> Self {
        self.colors.insert(entrant_id.to_string(), color.to_string());
        self
    }

    pub fn color_of(&self, entrant_id: &str) -> &str {
        self.colors
            .get(entrant_id)
            .map(String::as_str)
            .unwrap_or(FALLBACK_COLOR)
    }
}

impl FromIterator<(EntrantId, String)> for Palette {
    fn from_iter<I: IntoIterator<Item = (EntrantId, String)>>(iter: I) -> Self {
        Self {
            colors: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_league_points_count_draws_once() {
        let mut entry = Entry::new("Liverpool", 1, 10, 6, 0);
        entry.draws = Some(2);
        assert_eq!(entry.league_points(), 20);
        assert_eq!(RankingKey::LeagueTable.score(&entry), 20);
        assert_eq!(RankingKey::Simple.score(&entry), 0);
    }

    #[test]
    fn test_trailing_window_counts_back_from_latest() {
        let window = ChartWindow::Trailing(3);
        assert!(!window.contains(7, 10));
        assert!(window.contains(8, 10));
        assert!(window.contains(10, 10));
    }

    #[test]
    fn test_palette_falls_back_to_transparent() {
        let palette = Palette::new().with("Vanilla", "#ea7878");
        assert_eq!(palette.color_of("Vanilla"), "#ea7878");
        assert_eq!(palette.color_of("Stranger"), FALLBACK_COLOR);
    }
}

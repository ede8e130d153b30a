use crate::standings::{
    Accumulation, ChartWindow, DifferenceMode, FeedKind, RankingKey, StandingsConfig, WinPercentageMode,
};

use super::palette::PaletteKind;

/// Optional per-row metrics a competition records besides games, wins and score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrackedMetrics {
    pub secondary_score: bool,
    pub league_table: bool,
    pub five_k: bool,
}

#[derive(Debug, Clone)]
pub struct CompetitionConfig {
    pub slug: &'static str,
    pub name: &'static str,
    pub entrant_label: &'static str,
    pub standings: StandingsConfig,
    pub metrics: TrackedMetrics,
    pub palette: PaletteKind,
}

impl CompetitionConfig {
    fn new(slug: &'static str, name: &'static str, entrant_label: &'static str, standings: StandingsConfig) -> Self {
        Self {
            slug,
            name,
            entrant_label,
            standings,
            metrics: TrackedMetrics::default(),
            palette: PaletteKind::Players,
        }
    }

    fn with_metrics(mut self, metrics: TrackedMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    fn with_palette(mut self, palette: PaletteKind) -> Self {
        self.palette = palette;
        self
    }
}

fn standings(
    ranking_key: RankingKey,
    difference_mode: DifferenceMode,
    win_percentage_mode: WinPercentageMode,
    accumulation: Accumulation,
    chart_window: ChartWindow,
) -> StandingsConfig {
    StandingsConfig {
        ranking_key,
        difference_mode,
        win_percentage_mode,
        accumulation,
        chart_window,
        tracks_secondary_score: false,
    }
}

/// Every competition tracked on the site, in navigation order.
pub fn get_competitions() -> Vec<CompetitionConfig> {
    use Accumulation::*;
    use DifferenceMode::*;
    use WinPercentageMode::*;

    vec![
        CompetitionConfig::new(
            "fifa",
            "FIFA Cup",
            "Team",
            standings(RankingKey::LeagueTable, Adjacent, PerGame, PerPeriodDelta, ChartWindow::Leading(38)),
        )
        .with_metrics(TrackedMetrics { league_table: true, ..TrackedMetrics::default() })
        .with_palette(PaletteKind::FifaTeams),
        // The provider reports `total_points`, a running total; the
        // gameweek's own points ride along as the secondary score.
        CompetitionConfig::new(
            "fpl",
            "FPL Cup",
            "Bearo",
            StandingsConfig {
                tracks_secondary_score: true,
                ..standings(
                    RankingKey::Simple,
                    Adjacent,
                    PerGame,
                    Cumulative(FeedKind::RunningTotal),
                    ChartWindow::Leading(38),
                )
            },
        )
        .with_metrics(TrackedMetrics { secondary_score: true, ..TrackedMetrics::default() }),
        CompetitionConfig::new(
            "bets",
            "Bets Cup",
            "Bearo",
            standings(RankingKey::Simple, Adjacent, ShareOfTotalWins, PerPeriodDelta, ChartWindow::Trailing(30)),
        ),
        CompetitionConfig::new(
            "holdem",
            "Poker Cup",
            "Bearo",
            standings(RankingKey::Simple, FromLeader, PerGame, PerPeriodDelta, ChartWindow::Leading(50)),
        ),
        CompetitionConfig::new(
            "7oker",
            "7oker Cup",
            "Bearo",
            StandingsConfig {
                tracks_secondary_score: true,
                ..standings(RankingKey::Simple, Adjacent, PerGame, PerPeriodDelta, ChartWindow::Leading(75))
            },
        )
        .with_metrics(TrackedMetrics { secondary_score: true, ..TrackedMetrics::default() }),
        CompetitionConfig::new(
            "gg",
            "GeoGuessr Cup",
            "Bearo",
            standings(RankingKey::Simple, Adjacent, ShareOfTotalWins, PerPeriodDelta, ChartWindow::Leading(40)),
        )
        .with_metrics(TrackedMetrics { five_k: true, ..TrackedMetrics::default() }),
    ]
}

pub fn find_competition(slug: &str) -> Option<CompetitionConfig> {
    get_competitions().into_iter().find(|c| c.slug == slug)
}

/// A fantasy-league manager followed through the provider's history feed.
#[derive(Debug, Clone)]
pub struct FplManager {
    pub name: &'static str,
    pub team_id: &'static str,
}

impl FplManager {
    pub fn new(name: &'static str, team_id: &'static str) -> Self {
        Self { name, team_id }
    }
}

pub fn get_fpl_managers() -> Vec<FplManager> {
    vec![
        FplManager::new("Vanilla", "1546526"),
        FplManager::new("Choco", "3214199"),
        FplManager::new("Panda", "5663"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_slugs_are_unique() {
        let slugs: HashSet<&str> = get_competitions().iter().map(|c| c.slug).collect();
        assert_eq!(slugs.len(), get_competitions().len());
    }

    #[test]
    fn test_fpl_feed_is_a_running_total() {
        // Summing this feed again double-counts every gameweek.
        let fpl = find_competition("fpl").unwrap();
        assert_eq!(fpl.standings.accumulation, Accumulation::Cumulative(FeedKind::RunningTotal));
        assert!(fpl.standings.tracks_secondary_score);
        assert!(fpl.metrics.secondary_score);
    }

    #[test]
    fn test_only_fifa_uses_league_table() {
        for competition in get_competitions() {
            let is_fifa = competition.slug == "fifa";
            assert_eq!(competition.standings.ranking_key == RankingKey::LeagueTable, is_fifa);
            assert_eq!(competition.metrics.league_table, is_fifa);
        }
    }

    #[test]
    fn test_poker_measures_gap_to_leader() {
        let holdem = find_competition("holdem").unwrap();
        assert_eq!(holdem.standings.difference_mode, DifferenceMode::FromLeader);
        assert!(find_competition("chess").is_none());
    }
}

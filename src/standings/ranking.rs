use super::format::{format_difference, format_percentage, NO_DIFFERENCE};
use super::types::{DifferenceMode, Entry, Score, StandingsConfig, StandingsRow, WinPercentageMode};

/// Ranks the entries of a single period.
///
/// The sort is stable, so entrants that compare equal keep the order they
/// were given in.
pub fn rank_standings(entries: &[Entry], config: &StandingsConfig) -> Vec<StandingsRow> {
    let mut sorted: Vec<&Entry> = entries.iter().collect();
    sorted.sort_by(|a, b| config.ranking_key.compare(a, b));

    let scores: Vec<Score> = sorted
        .iter()
        .map(|entry| config.ranking_key.score(entry))
        .collect();
    let total_wins: i64 = sorted.iter().map(|entry| i64::from(entry.wins)).sum();

    sorted
        .iter()
        .enumerate()
        .map(|(index, entry)| StandingsRow {
            rank: index + 1,
            entrant_id: entry.entrant_id.clone(),
            games_played: entry.games_played,
            wins: entry.wins,
            score: scores[index],
            secondary_score: entry.secondary_score,
            draws: entry.draws,
            losses: entry.losses,
            goals_for: entry.goals_for,
            goals_against: entry.goals_against,
            goal_difference: entry.goal_difference(),
            five_k_count: entry.five_k_count,
            score_difference_from_above: score_difference(&scores, index, config.difference_mode),
            secondary_score_difference_from_above: config
                .tracks_secondary_score
                .then(|| secondary_difference(&sorted, index)),
            win_percentage: win_percentage(entry, total_wins, config.win_percentage_mode),
        })
        .collect()
}

fn score_difference(scores: &[Score], index: usize, mode: DifferenceMode) -> String {
    if index == 0 {
        return NO_DIFFERENCE.to_string();
    }
    let reference = match mode {
        DifferenceMode::Adjacent => scores[index - 1],
        DifferenceMode::FromLeader => scores[0],
    };
    format_difference(reference, scores[index])
}

fn secondary_difference(sorted: &[&Entry], index: usize) -> String {
    if index == 0 {
        return NO_DIFFERENCE.to_string();
    }
    let above = sorted[index - 1].secondary_score.unwrap_or(0);
    format_difference(above, sorted[index].secondary_score.unwrap_or(0))
}

fn win_percentage(entry: &Entry, total_wins: i64, mode: WinPercentageMode) -> String {
    let denominator = match mode {
        WinPercentageMode::PerGame => i64::from(entry.games_played),
        WinPercentageMode::ShareOfTotalWins => total_wins,
    };
    format_percentage(i64::from(entry.wins), denominator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standings::period::{compute_latest_period, entries_for_period};
    use crate::standings::types::{Accumulation, ChartWindow, RankingKey};

    fn simple_config(difference_mode: DifferenceMode, win_percentage_mode: WinPercentageMode) -> StandingsConfig {
        StandingsConfig {
            ranking_key: RankingKey::Simple,
            difference_mode,
            win_percentage_mode,
            accumulation: Accumulation::PerPeriodDelta,
            chart_window: ChartWindow::Leading(50),
            tracks_secondary_score: false,
        }
    }

    fn league_entry(team: &str, wins: i32, draws: i32, scored: i32, conceded: i32) -> Entry {
        Entry {
            draws: Some(draws),
            losses: Some(0),
            goals_for: Some(scored),
            goals_against: Some(conceded),
            ..Entry::new(team, 1, wins + draws, wins, 0)
        }
    }

    #[test]
    fn test_two_period_history_ranks_latest_period() {
        let entries = vec![
            Entry::new("A", 1, 5, 2, 10),
            Entry::new("B", 1, 5, 1, 5),
            Entry::new("A", 2, 10, 4, 20),
            Entry::new("B", 2, 10, 3, 15),
        ];
        let latest = compute_latest_period(&entries).unwrap();
        assert_eq!(latest, 2);

        let config = simple_config(DifferenceMode::Adjacent, WinPercentageMode::PerGame);
        let rows = rank_standings(&entries_for_period(&entries, latest), &config);

        assert_eq!(rows.len(), 2);
        assert_eq!((rows[0].rank, rows[0].entrant_id.as_str(), rows[0].score), (1, "A", 20));
        assert_eq!(rows[0].score_difference_from_above, "-");
        assert_eq!(rows[0].win_percentage, "40.0%");
        assert_eq!((rows[1].rank, rows[1].entrant_id.as_str(), rows[1].score), (2, "B", 15));
        assert_eq!(rows[1].score_difference_from_above, "5");
        assert_eq!(rows[1].win_percentage, "30.0%");
    }

    #[test]
    fn test_empty_period_ranks_nothing() {
        let config = simple_config(DifferenceMode::Adjacent, WinPercentageMode::PerGame);
        assert!(rank_standings(&[], &config).is_empty());
    }

    #[test]
    fn test_league_table_breaks_ties_on_goal_difference() {
        let entries = vec![
            league_entry("Arsenal", 3, 1, 8, 6),
            league_entry("Chelsea", 3, 1, 12, 4),
            league_entry("Napoli", 2, 0, 5, 5),
        ];
        let config = StandingsConfig {
            ranking_key: RankingKey::LeagueTable,
            ..simple_config(DifferenceMode::Adjacent, WinPercentageMode::PerGame)
        };

        let rows = rank_standings(&entries, &config);
        let order: Vec<&str> = rows.iter().map(|r| r.entrant_id.as_str()).collect();
        assert_eq!(order, vec!["Chelsea", "Arsenal", "Napoli"]);
        assert_eq!(rows[0].score, 10);
        assert_eq!(rows[0].goal_difference, Some(8));
        assert_eq!(rows[1].score_difference_from_above, "0");
        assert_eq!(rows[2].score_difference_from_above, "4");
    }

    #[test]
    fn test_share_of_total_wins() {
        let entries = vec![
            Entry::new("Vanilla", 4, 6, 2, 30),
            Entry::new("Choco", 4, 6, 1, 20),
            Entry::new("Panda", 4, 6, 2, 10),
        ];
        let config = simple_config(DifferenceMode::Adjacent, WinPercentageMode::ShareOfTotalWins);

        let percentages: Vec<String> = rank_standings(&entries, &config)
            .into_iter()
            .map(|row| row.win_percentage)
            .collect();
        assert_eq!(percentages, vec!["40.0%", "20.0%", "40.0%"]);
    }

    #[test]
    fn test_share_of_total_wins_without_any_win() {
        let entries = vec![Entry::new("Vanilla", 1, 3, 0, 0), Entry::new("Choco", 1, 3, 0, 0)];
        let config = simple_config(DifferenceMode::Adjacent, WinPercentageMode::ShareOfTotalWins);
        assert!(rank_standings(&entries, &config).iter().all(|r| r.win_percentage == "0%"));
    }

    #[test]
    fn test_per_game_without_games() {
        let entries = vec![Entry::new("Panda", 1, 0, 0, 0)];
        let config = simple_config(DifferenceMode::Adjacent, WinPercentageMode::PerGame);
        assert_eq!(rank_standings(&entries, &config)[0].win_percentage, "0%");
    }

    #[test]
    fn test_difference_modes_diverge_below_second_place() {
        let entries = vec![
            Entry::new("Vanilla", 1, 9, 3, 50),
            Entry::new("Choco", 1, 9, 2, 42),
            Entry::new("Panda", 1, 9, 1, 30),
        ];

        let adjacent = rank_standings(&entries, &simple_config(DifferenceMode::Adjacent, WinPercentageMode::PerGame));
        let from_leader = rank_standings(&entries, &simple_config(DifferenceMode::FromLeader, WinPercentageMode::PerGame));

        let adjacent: Vec<&str> = adjacent.iter().map(|r| r.score_difference_from_above.as_str()).collect();
        let from_leader: Vec<&str> = from_leader.iter().map(|r| r.score_difference_from_above.as_str()).collect();
        assert_eq!(adjacent, vec!["-", "8", "12"]);
        assert_eq!(from_leader, vec!["-", "8", "20"]);
    }

    #[test]
    fn test_equal_scores_keep_input_order() {
        let entries = vec![
            Entry::new("Panda", 1, 4, 1, 12),
            Entry::new("Vanilla", 1, 4, 2, 12),
            Entry::new("Choco", 1, 4, 3, 12),
        ];
        let config = simple_config(DifferenceMode::Adjacent, WinPercentageMode::PerGame);
        let order: Vec<String> = rank_standings(&entries, &config)
            .into_iter()
            .map(|r| r.entrant_id)
            .collect();
        assert_eq!(order, vec!["Panda", "Vanilla", "Choco"]);
    }

    #[test]
    fn test_secondary_difference_follows_primary_order() {
        let entries = vec![
            Entry { secondary_score: Some(45), ..Entry::new("Vanilla", 2, 10, 4, 20) },
            Entry { secondary_score: Some(40), ..Entry::new("Panda", 2, 10, 3, 18) },
            Entry { secondary_score: None, ..Entry::new("Choco", 2, 10, 3, 15) },
        ];
        let config = StandingsConfig {
            tracks_secondary_score: true,
            ..simple_config(DifferenceMode::Adjacent, WinPercentageMode::PerGame)
        };

        let rows = rank_standings(&entries, &config);
        let diffs: Vec<Option<&str>> = rows
            .iter()
            .map(|r| r.secondary_score_difference_from_above.as_deref())
            .collect();
        assert_eq!(diffs, vec![Some("-"), Some("5"), Some("40")]);
    }

    #[test]
    fn test_adjacent_differences_are_never_negative() {
        let entries = vec![
            Entry::new("A", 1, 1, 0, 3),
            Entry::new("B", 1, 1, 0, 17),
            Entry::new("C", 1, 1, 0, -4),
            Entry::new("D", 1, 1, 0, 9),
        ];
        let config = simple_config(DifferenceMode::Adjacent, WinPercentageMode::PerGame);
        let rows = rank_standings(&entries, &config);

        assert_eq!(rows.len(), entries.len());
        for pair in rows.windows(2) {
            let difference: i64 = pair[1].score_difference_from_above.parse().unwrap();
            assert_eq!(difference, pair[0].score - pair[1].score);
            assert!(difference >= 0);
        }
    }

    #[test]
    fn test_ranking_is_repeatable() {
        let entries = vec![Entry::new("A", 1, 2, 1, 7), Entry::new("B", 1, 2, 1, 7)];
        let config = simple_config(DifferenceMode::FromLeader, WinPercentageMode::ShareOfTotalWins);
        assert_eq!(rank_standings(&entries, &config), rank_standings(&entries, &config));
    }
}

use std::collections::BTreeMap;

use log::{error, warn};
use serde::Serialize;

use crate::config::CompetitionConfig;
use crate::database::{archive, entries, ArchivedSeason, DbPool};
use crate::standings::{
    build_chart_series, build_pie_slices, compute_standings, ChartMetric, ChartSeriesPoint, Entry, PieSlice,
    Standings, StandingsRow,
};

/// Winner per competition slug for one archived season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonChampions {
    pub season: String,
    pub champions: BTreeMap<String, String>,
}

/// Read side of a competition page.
///
/// Storage failures are logged and read as "no data yet", so a page always
/// renders.
pub struct StandingsService<'a> {
    pool: &'a DbPool,
    competition: &'a CompetitionConfig,
}

impl<'a> StandingsService<'a> {
    pub fn new(pool: &'a DbPool, competition: &'a CompetitionConfig) -> Self {
        Self { pool, competition }
    }

    pub fn entries(&self) -> Vec<Entry> {
        let result = self
            .pool
            .get()
            .map_err(anyhow::Error::from)
            .and_then(|mut conn| entries::list_by_competition(&mut conn, self.competition.slug));

        match result {
            Ok(rows) => rows.into_iter().map(|row| row.entry).collect(),
            Err(e) => {
                error!("Failed to load entries for {}: {:?}", self.competition.slug, e);
                Vec::new()
            }
        }
    }

    pub fn standings(&self) -> Standings {
        compute_standings(&self.entries(), &self.competition.standings)
    }

    /// Rank 1 of the current standings, `None` before the first period.
    pub fn leader(&self) -> Option<StandingsRow> {
        self.standings().rows.into_iter().next()
    }

    pub fn chart(&self, metric: ChartMetric) -> Vec<ChartSeriesPoint> {
        let metric = if metric == ChartMetric::Secondary && !self.competition.metrics.secondary_score {
            warn!("{} has no secondary score, charting points", self.competition.slug);
            ChartMetric::Primary
        } else {
            metric
        };

        let config = &self.competition.standings;
        build_chart_series(&self.entries(), config.accumulation, config.chart_window, metric)
    }

    pub fn pie(&self) -> Vec<PieSlice> {
        build_pie_slices(&self.entries(), &self.competition.palette.build())
    }

    pub fn seasons(&self) -> Vec<String> {
        let result = self
            .pool
            .get()
            .map_err(anyhow::Error::from)
            .and_then(|mut conn| archive::list_seasons(&mut conn, self.competition.slug));

        result.unwrap_or_else(|e| {
            error!("Failed to list seasons for {}: {:?}", self.competition.slug, e);
            Vec::new()
        })
    }

    pub fn season(&self, season: &str) -> Option<ArchivedSeason> {
        let result = self
            .pool
            .get()
            .map_err(anyhow::Error::from)
            .and_then(|mut conn| archive::get_season(&mut conn, self.competition.slug, season));

        result.unwrap_or_else(|e| {
            error!("Failed to load season {} of {}: {:?}", season, self.competition.slug, e);
            None
        })
    }
}

/// Champions of every archived season, newest first.
pub fn season_champions(pool: &DbPool) -> Vec<SeasonChampions> {
    let result = pool
        .get()
        .map_err(anyhow::Error::from)
        .and_then(|mut conn| archive::list_champions(&mut conn));

    let champions = match result {
        Ok(champions) => champions,
        Err(e) => {
            error!("Failed to list champions: {:?}", e);
            return Vec::new();
        }
    };

    let mut seasons: Vec<SeasonChampions> = Vec::new();
    for champion in champions {
        match seasons.last_mut() {
            Some(last) if last.season == champion.season => {
                last.champions.insert(champion.competition, champion.entrant_id);
            }
            _ => seasons.push(SeasonChampions {
                season: champion.season,
                champions: BTreeMap::from([(champion.competition, champion.entrant_id)]),
            }),
        }
    }
    seasons
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::find_competition;
    use crate::database::{create_memory_pool, get_connection, setup::ensure_schema};

    fn seeded_pool(competition: &str, rows: &[Entry]) -> DbPool {
        let pool = create_memory_pool().unwrap();
        {
            let mut conn = get_connection(&pool).unwrap();
            ensure_schema(&mut conn).unwrap();
            entries::upsert_entries(&mut conn, competition, rows).unwrap();
        }
        pool
    }

    #[test]
    fn test_bets_page_uses_share_of_wins() {
        let pool = seeded_pool(
            "bets",
            &[
                Entry::new("Vanilla", 1, 6, 2, 30),
                Entry::new("Choco", 1, 6, 1, 20),
                Entry::new("Panda", 1, 6, 2, 10),
            ],
        );
        let bets = find_competition("bets").unwrap();
        let service = StandingsService::new(&pool, &bets);

        let standings = service.standings();
        let percentages: Vec<&str> = standings.rows.iter().map(|r| r.win_percentage.as_str()).collect();
        assert_eq!(percentages, vec!["40.0%", "20.0%", "40.0%"]);

        let pie = service.pie();
        assert_eq!(pie.len(), 3);
        assert_eq!(pie.iter().map(|s| s.wins).sum::<i32>(), 5);
    }

    #[test]
    fn test_leader_is_rank_one_of_latest_period() {
        let pool = seeded_pool(
            "holdem",
            &[
                Entry::new("Vanilla", 1, 4, 3, 12),
                Entry::new("Vanilla", 2, 8, 3, 14),
                Entry::new("Choco", 2, 8, 5, 21),
            ],
        );
        let holdem = find_competition("holdem").unwrap();
        let leader = StandingsService::new(&pool, &holdem).leader().unwrap();

        assert_eq!((leader.entrant_id.as_str(), leader.score), ("Choco", 21));
        assert!(StandingsService::new(&pool, &find_competition("gg").unwrap()).leader().is_none());
    }

    #[test]
    fn test_champions_are_grouped_by_season() {
        use crate::database::ArchivedStanding;

        let pool = seeded_pool("bets", &[]);
        let winner = |competition: &str, season: &str, entrant: &str| ArchivedSeason {
            competition: competition.to_string(),
            season: season.to_string(),
            standings: vec![ArchivedStanding {
                position: 1,
                entrant_id: entrant.to_string(),
                games_played: None,
                wins: None,
                score: 1,
                score_difference: "-".to_string(),
                win_percentage: None,
            }],
            highlights: Vec::new(),
        };
        {
            let mut conn = get_connection(&pool).unwrap();
            for season in [winner("fifa", "2022/23", "Choco"), winner("fpl", "2022/23", "Panda"), winner("bets", "2023/24", "Choco")] {
                archive::replace_season(&mut conn, &season).unwrap();
            }
        }

        let seasons = season_champions(&pool);
        assert_eq!(seasons.len(), 2);
        assert_eq!(seasons[0].season, "2023/24");
        assert_eq!(seasons[1].champions.get("fifa").map(String::as_str), Some("Choco"));
        assert_eq!(seasons[1].champions.get("fpl").map(String::as_str), Some("Panda"));
    }

    #[test]
    fn test_missing_schema_degrades_to_empty() {
        let pool = create_memory_pool().unwrap();
        let gg = find_competition("gg").unwrap();
        let service = StandingsService::new(&pool, &gg);

        assert_eq!(service.standings(), Standings::default());
        assert!(service.chart(ChartMetric::Primary).is_empty());
        assert!(service.pie().is_empty());
        assert!(service.seasons().is_empty());
        assert!(service.season("2024").is_none());
        assert!(service.leader().is_none());
        assert!(season_champions(&pool).is_empty());
    }

    #[test]
    fn test_secondary_chart_falls_back_for_single_score_competitions() {
        let pool = seeded_pool("holdem", &[Entry { secondary_score: Some(99), ..Entry::new("Panda", 1, 4, 2, 8) }]);
        let holdem = find_competition("holdem").unwrap();
        let points = StandingsService::new(&pool, &holdem).chart(ChartMetric::Secondary);
        assert_eq!(points[0].value, Some(8));
    }
}

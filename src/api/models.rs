use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::CompetitionConfig;
use crate::standings::{ChartMetric, ChartSeriesPoint, ChartWindow, Period, StandingsConfig, StandingsRow};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionSummary {
    pub slug: String,
    pub name: String,
    pub entrant_label: String,
    pub standings: StandingsConfig,
    pub tracks_secondary_score: bool,
    pub tracks_league_table: bool,
    pub tracks_five_k: bool,
}

impl From<&CompetitionConfig> for CompetitionSummary {
    fn from(competition: &CompetitionConfig) -> Self {
        Self {
            slug: competition.slug.to_string(),
            name: competition.name.to_string(),
            entrant_label: competition.entrant_label.to_string(),
            standings: competition.standings,
            tracks_secondary_score: competition.metrics.secondary_score,
            tracks_league_table: competition.metrics.league_table,
            tracks_five_k: competition.metrics.five_k,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsResponse {
    pub competition: String,
    pub latest_period: Option<Period>,
    pub rows: Vec<StandingsRow>,
    /// Display color per entrant in `rows`.
    pub colors: BTreeMap<String, String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartResponse {
    pub competition: String,
    pub metric: ChartMetric,
    pub window: ChartWindow,
    pub points: Vec<ChartSeriesPoint>,
    pub colors: BTreeMap<String, String>,
}

/// Home-page card: who currently leads a competition.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderSummary {
    pub competition: String,
    pub name: String,
    pub entrant_label: String,
    pub leader: Option<StandingsRow>,
    pub color: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonListResponse {
    pub competition: String,
    pub seasons: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChartParams {
    pub metric: Option<ChartMetric>,
}

#[derive(Debug, Deserialize)]
pub struct SubmissionParams {
    pub period: Option<Period>,
}

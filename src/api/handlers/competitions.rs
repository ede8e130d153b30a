use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::Json,
};

use super::{competition_or_404, AppState};
use crate::api::models::{
    ChartParams, ChartResponse, CompetitionSummary, LeaderSummary, SeasonListResponse, StandingsResponse,
};
use crate::config::{get_competitions, CompetitionConfig};
use crate::database::ArchivedSeason;
use crate::errors::AppError;
use crate::services::standings::{season_champions, SeasonChampions, StandingsService};
use crate::standings::{Palette, PieSlice};

fn colors_for<'a>(competition: &CompetitionConfig, entrants: impl Iterator<Item = &'a String>) -> BTreeMap<String, String> {
    let palette: Palette = competition.palette.build();
    entrants
        .map(|id| (id.clone(), palette.color_of(id).to_string()))
        .collect()
}

pub async fn list_competitions() -> Json<Vec<CompetitionSummary>> {
    Json(get_competitions().iter().map(CompetitionSummary::from).collect())
}

pub async fn list_leaders(State(state): State<Arc<AppState>>) -> Json<Vec<LeaderSummary>> {
    let leaders = get_competitions()
        .iter()
        .map(|competition| {
            let leader = StandingsService::new(&state.pool, competition).leader();
            let color = leader
                .as_ref()
                .map(|row| competition.palette.build().color_of(&row.entrant_id).to_string());
            LeaderSummary {
                competition: competition.slug.to_string(),
                name: competition.name.to_string(),
                entrant_label: competition.entrant_label.to_string(),
                leader,
                color,
            }
        })
        .collect();

    Json(leaders)
}

pub async fn list_champions(State(state): State<Arc<AppState>>) -> Json<Vec<SeasonChampions>> {
    Json(season_champions(&state.pool))
}

pub async fn get_standings(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<StandingsResponse>, AppError> {
    let competition = competition_or_404(&slug)?;
    let standings = StandingsService::new(&state.pool, &competition).standings();
    let colors = colors_for(&competition, standings.rows.iter().map(|row| &row.entrant_id));

    Ok(Json(StandingsResponse {
        competition: competition.slug.to_string(),
        latest_period: standings.latest_period,
        rows: standings.rows,
        colors,
    }))
}

pub async fn get_chart(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    Query(params): Query<ChartParams>,
) -> Result<Json<ChartResponse>, AppError> {
    let competition = competition_or_404(&slug)?;
    let metric = params.metric.unwrap_or_default();
    let points = StandingsService::new(&state.pool, &competition).chart(metric);
    let colors = colors_for(&competition, points.iter().map(|point| &point.entrant_id));

    Ok(Json(ChartResponse {
        competition: competition.slug.to_string(),
        metric,
        window: competition.standings.chart_window,
        points,
        colors,
    }))
}

pub async fn get_pie(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<Vec<PieSlice>>, AppError> {
    let competition = competition_or_404(&slug)?;
    Ok(Json(StandingsService::new(&state.pool, &competition).pie()))
}

pub async fn list_seasons(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<SeasonListResponse>, AppError> {
    let competition = competition_or_404(&slug)?;
    let seasons = StandingsService::new(&state.pool, &competition).seasons();

    Ok(Json(SeasonListResponse {
        competition: competition.slug.to_string(),
        seasons,
    }))
}

pub async fn get_season(
    State(state): State<Arc<AppState>>,
    Path((slug, season)): Path<(String, String)>,
) -> Result<Json<ArchivedSeason>, AppError> {
    let competition = competition_or_404(&slug)?;
    StandingsService::new(&state.pool, &competition)
        .season(&season)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("season {} of {}", season, slug)))
}

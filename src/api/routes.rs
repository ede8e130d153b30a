use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api::handlers::{
    admin::{submit_entries, trigger_fpl_sync},
    competitions::{
        get_chart, get_pie, get_season, get_standings, list_champions, list_competitions, list_leaders, list_seasons,
    },
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/competitions", get(list_competitions))
        .route("/api/leaders", get(list_leaders))
        .route("/api/champions", get(list_champions))
        .route("/api/competitions/:slug/standings", get(get_standings))
        .route("/api/competitions/:slug/chart", get(get_chart))
        .route("/api/competitions/:slug/pie", get(get_pie))
        .route("/api/competitions/:slug/seasons", get(list_seasons))
        .route("/api/competitions/:slug/seasons/:season", get(get_season))
        .route("/api/admin/competitions/:slug/entries", post(submit_entries))
        .route("/api/admin/fpl/sync", post(trigger_fpl_sync))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

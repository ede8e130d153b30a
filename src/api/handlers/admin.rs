use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json},
};

use super::{competition_or_404, AppState};
use crate::api::models::SubmissionParams;
use crate::database;
use crate::errors::AppError;
use crate::services::ingestion::FplSyncService;
use crate::services::submission::{submit_period, EntrySubmission, SubmissionReceipt};

pub async fn submit_entries(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    Query(params): Query<SubmissionParams>,
    headers: HeaderMap,
    Json(submissions): Json<Vec<EntrySubmission>>,
) -> Result<(StatusCode, Json<SubmissionReceipt>), AppError> {
    state.require_admin(&headers)?;
    let competition = competition_or_404(&slug)?;

    let mut conn = database::get_connection(&state.pool)?;
    let receipt = submit_period(&mut conn, &competition, &submissions, params.period)?;

    Ok((StatusCode::CREATED, Json(receipt)))
}

pub async fn trigger_fpl_sync(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    state.require_admin(&headers)?;

    tokio::spawn(async move {
        log::info!("Admin triggered FPL sync started");
        let result = async {
            let mut service = FplSyncService::new(&state.config)?;
            service.run(&state.pool).await
        }
        .await;

        match result {
            Ok(report) => log::info!(
                "FPL sync completed: {} updated, {} unchanged, {} managers failed",
                report.updated,
                report.unchanged,
                report.failed_managers.len()
            ),
            Err(e) => log::error!("FPL sync failed: {:?}", e),
        }
    });

    Ok((StatusCode::ACCEPTED, "FPL sync triggered"))
}

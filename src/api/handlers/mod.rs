use axum::http::HeaderMap;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;

use crate::config::settings::AppConfig;
use crate::config::{find_competition, CompetitionConfig};
use crate::errors::AppError;

pub mod admin;
pub mod competitions;

pub struct AppState {
    pub pool: Pool<SqliteConnectionManager>,
    pub config: AppConfig,
}

impl AppState {
    pub fn require_admin(&self, headers: &HeaderMap) -> Result<(), AppError> {
        let auth_header = headers.get("Authorization").and_then(|h| h.to_str().ok());
        if self.config.is_authorized(auth_header) {
            Ok(())
        } else {
            Err(AppError::Unauthorized)
        }
    }
}

pub(crate) fn competition_or_404(slug: &str) -> Result<CompetitionConfig, AppError> {
    find_competition(slug).ok_or_else(|| AppError::NotFound(format!("competition {}", slug)))
}

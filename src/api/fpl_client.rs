use crate::config::settings::ProviderSettings;
use crate::config::FplManager;
use crate::http::RateLimitedClient;
use crate::standings::{Entry, Score};
use anyhow::Result;
use log::info;
use serde::Deserialize;

/// One gameweek of a manager's history feed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FplEvent {
    pub event: i32,
    pub points: Score,
    pub total_points: Score,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FplHistory {
    #[serde(default)]
    pub current: Vec<FplEvent>,
}

impl FplHistory {
    /// Most recent gameweek of the running season.
    pub fn latest_event(&self) -> Option<&FplEvent> {
        self.current.iter().max_by_key(|event| event.event)
    }

    /// The feed as stored entries: `total_points` is already a running total
    /// and becomes the primary score, the gameweek's `points` the secondary.
    pub fn to_entries(&self, manager: &FplManager) -> Vec<Entry> {
        self.current
            .iter()
            .map(|event| event_to_entry(manager, event))
            .collect()
    }
}

pub fn event_to_entry(manager: &FplManager, event: &FplEvent) -> Entry {
    Entry {
        secondary_score: Some(event.points),
        ..Entry::new(manager.name, event.event, event.event, 0, event.total_points)
    }
}

/// Fantasy Premier League API client
pub struct FplClient {
    client: RateLimitedClient,
    api_base_url: String,
}

impl FplClient {
    pub fn new(settings: &ProviderSettings) -> Result<Self> {
        let client = RateLimitedClient::new(settings.user_agent, settings.timeout_secs, settings.rate_limit_ms)?;
        Ok(Self {
            client,
            api_base_url: settings.api_base_url.clone(),
        })
    }

    /// Fetch a manager's gameweek history
    pub async fn fetch_history(&mut self, team_id: &str) -> Result<FplHistory> {
        let url = self.build_history_url(team_id);
        info!("Fetching FPL history for team {}", team_id);
        self.client.get_json(&url).await
    }

    fn build_history_url(&self, team_id: &str) -> String {
        format!("{}/entry/{}/history/", self.api_base_url, team_id)
    }
}

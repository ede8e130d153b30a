const DEFAULT_DATABASE_PATH: &str = "bearos_leaderboard.db";

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub path: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: DEFAULT_DATABASE_PATH.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub rate_limit_ms: u64,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
    pub api_base_url: String,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            rate_limit_ms: 250,
            user_agent: "BearosLeaderboard/1.0",
            timeout_secs: 30,
            api_base_url: "https://fantasy.premierleague.com/api".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AdminSettings {
    /// Bearer token expected on admin routes; admin routes are closed when unset.
    pub token: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub database: DatabaseSettings,
    pub provider: ProviderSettings,
    pub admin: AdminSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `DATABASE_PATH`, `ADMIN_TOKEN` and `FPL_API_URL`.
    pub fn from_env() -> Self {
        let mut config = Self::new();

        if let Ok(path) = std::env::var("DATABASE_PATH") {
            config.database.path = path;
        }
        if let Ok(token) = std::env::var("ADMIN_TOKEN") {
            config.admin.token = Some(token).filter(|t| !t.is_empty());
        }
        if let Ok(url) = std::env::var("FPL_API_URL") {
            config.provider.api_base_url = url.trim_end_matches('/').to_string();
        }

        config
    }

    pub fn is_authorized(&self, bearer: Option<&str>) -> bool {
        match (&self.admin.token, bearer) {
            (Some(expected), Some(given)) => given == format!("Bearer {}", expected),
            _ => false,
        }
    }
}

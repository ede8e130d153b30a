pub mod chart;
pub mod format;
pub mod period;
pub mod pie;
pub mod ranking;
pub mod types;

pub use chart::build_chart_series;
pub use period::{compute_latest_period, latest_entries};
pub use pie::build_pie_slices;
pub use ranking::rank_standings;
pub use types::{
    Accumulation, ChartMetric, ChartSeriesPoint, ChartWindow, DifferenceMode, EntrantId, Entry, FeedKind, Palette,
    Period, PieSlice, RankingKey, Score, StandingsConfig, StandingsRow, WinPercentageMode,
};

use serde::Serialize;

/// Current standings of a competition.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Standings {
    /// `None` until the first period has been recorded.
    pub latest_period: Option<Period>,
    pub rows: Vec<StandingsRow>,
}

/// Ranks the latest period of a full history.
///
/// An empty history is the normal state of a season that has not started
/// and yields empty standings rather than an error.
pub fn compute_standings(entries: &[Entry], config: &StandingsConfig) -> Standings {
    if entries.is_empty() {
        return Standings::default();
    }

    let latest = compute_latest_period(entries).ok();
    let rows = rank_standings(&latest_entries(entries), config);
    Standings {
        latest_period: latest,
        rows,
    }
}

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::standings::Entry;

/// A stored entry row.
#[derive(Debug, Clone)]
pub struct DbEntry {
    pub id: i64,
    pub competition: String,
    pub entry: Entry,
    pub external_id: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

/// One row of a finished season's frozen table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivedStanding {
    pub position: i32,
    pub entrant_id: String,
    pub games_played: Option<i32>,
    pub wins: Option<i32>,
    pub score: i64,
    pub score_difference: String,
    pub win_percentage: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivedSeason {
    pub competition: String,
    pub season: String,
    pub standings: Vec<ArchivedStanding>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

/// Position 1 of an archived season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Champion {
    pub competition: String,
    pub season: String,
    pub entrant_id: String,
}

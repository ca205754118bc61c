use crate::leaderboard::models::{CountryStats, LeaderboardEntry};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopPlayersResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<LeaderboardErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub players: Option<Vec<LeaderboardEntry>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryStandingsResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<LeaderboardErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_total: Option<Vec<CountryStats>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_average: Option<Vec<CountryStats>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LeaderboardErrorCode {
    StorageUnavailable,
}

use crate::players::models::{GameSession, Player};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<PlayerErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player: Option<Player>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSessionsResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<PlayerErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sessions: Option<Vec<GameSession>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PlayerErrorCode {
    PlayerNotFound,
    StorageUnavailable,
}

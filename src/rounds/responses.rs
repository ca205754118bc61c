use crate::players::models::Player;
use crate::rounds::models::{RoundError, RoundView};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartRoundResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<RoundErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round: Option<RoundView>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentRoundResponse {
    pub error: bool,
    pub round: RoundView,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceGuessResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<RoundErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round: Option<RoundView>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitGuessResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<RoundErrorCode>,
    /// `true` when the round had been scored by an earlier submission.
    pub already_resolved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round: Option<RoundView>,
    /// Updated totals, only present when this submission scored the round.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player: Option<Player>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RoundErrorCode {
    NoActiveRound,
    NoGuessPlaced,
    RoundAlreadyResolved,
    ScoreNotSaved,
    NoLocationAvailable,
}

impl From<RoundError> for RoundErrorCode {
    fn from(error: RoundError) -> Self {
        match error {
            RoundError::NoActiveRound => RoundErrorCode::NoActiveRound,
            RoundError::NoGuessPlaced => RoundErrorCode::NoGuessPlaced,
            RoundError::AlreadyResolved => RoundErrorCode::RoundAlreadyResolved,
        }
    }
}

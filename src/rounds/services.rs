use crate::app_context::{AppContext, RequestContext};
use crate::geo::catalog::GameMode;
use crate::geo::error::GeoError;
use crate::geo::models::LatLng;
use crate::players::models::NewGameSession;
use crate::rounds::models::{RoundView, Submission};
use crate::rounds::requests::SubmitGuessRequestBody;
use crate::rounds::responses::{
    CurrentRoundResponse, PlaceGuessResponse, RoundErrorCode, StartRoundResponse,
    SubmitGuessResponse,
};
use crate::storage::interface::IPlayerStorage;
use chrono::Utc;

/// Draws a target from the catalog of `mode` and makes it the player's
/// current round.
pub async fn start_round<PS: IPlayerStorage>(
    app_context: &AppContext<PS>,
    player_id: &str,
    mode: GameMode,
) -> Result<RoundView, GeoError> {
    let target = app_context.catalogs.for_mode(mode).random()?.clone();
    tracing::info!(
        task = "round_started",
        player_id = %player_id,
        mode = ?mode,
        target = %target.name,
    );
    Ok(app_context.rounds.start(player_id, mode, target).await)
}

pub struct RoundsHttpHandler<'a, PS: IPlayerStorage> {
    app_context: AppContext<PS>,
    request_context: &'a RequestContext,
}

impl<'a, PS> RoundsHttpHandler<'a, PS>
where
    PS: IPlayerStorage,
{
    pub fn new(app_context: AppContext<PS>, request_context: &'a RequestContext) -> Self {
        Self {
            app_context,
            request_context,
        }
    }

    pub async fn start(&self, mode: GameMode) -> StartRoundResponse {
        match start_round(&self.app_context, &self.request_context.player_id, mode).await {
            Ok(round) => StartRoundResponse {
                error: false,
                error_code: None,
                round: Some(round),
            },
            Err(err) => {
                tracing::error!("Failed to start a round: {err}");
                StartRoundResponse {
                    error: true,
                    error_code: Some(RoundErrorCode::NoLocationAvailable),
                    round: None,
                }
            }
        }
    }

    pub async fn current(&self) -> CurrentRoundResponse {
        CurrentRoundResponse {
            error: false,
            round: self
                .app_context
                .rounds
                .view(&self.request_context.player_id)
                .await,
        }
    }

    pub async fn place_guess(&self, guess: LatLng) -> PlaceGuessResponse {
        match self
            .app_context
            .rounds
            .place_guess(&self.request_context.player_id, guess)
            .await
        {
            Ok(round) => PlaceGuessResponse {
                error: false,
                error_code: None,
                round: Some(round),
            },
            Err(err) => PlaceGuessResponse {
                error: true,
                error_code: Some(err.into()),
                round: None,
            },
        }
    }

    pub async fn submit(&self, body: SubmitGuessRequestBody) -> SubmitGuessResponse {
        let player_id = &self.request_context.player_id;
        let (submission, round) = match self.app_context.rounds.submit(player_id, body.guess).await
        {
            Ok(submitted) => submitted,
            Err(err) => {
                return SubmitGuessResponse {
                    error: true,
                    error_code: Some(err.into()),
                    already_resolved: false,
                    round: None,
                    player: None,
                }
            }
        };
        if let Submission::AlreadyResolved(_) = submission {
            return SubmitGuessResponse {
                error: false,
                error_code: None,
                already_resolved: true,
                round: Some(round),
                player: None,
            };
        }
        let resolved = submission.resolved();
        tracing::info!(
            task = "round_resolved",
            player_id = %player_id,
            target = %resolved.target.name,
            distance_km = resolved.result.distance_km,
            points = resolved.result.points,
        );

        let player = match self
            .app_context
            .players
            .record_round(player_id, resolved.result.points)
            .await
        {
            Ok(player) => player,
            Err(err) => {
                tracing::error!(player_id = %player_id, "Failed to update the score: {err}");
                return SubmitGuessResponse {
                    error: true,
                    error_code: Some(RoundErrorCode::ScoreNotSaved),
                    already_resolved: false,
                    round: Some(round),
                    player: None,
                };
            }
        };

        // The session log is secondary to the score, so a failure here is
        // only logged.
        let session = NewGameSession::of_round(player_id, resolved, Utc::now());
        if let Err(err) = self.app_context.players.save_session(session).await {
            tracing::warn!(
                task = "session_save_failed",
                player_id = %player_id,
                "Failed to save the game session: {err}",
            );
        }

        SubmitGuessResponse {
            error: false,
            error_code: None,
            already_resolved: false,
            round: Some(round),
            player: Some(player),
        }
    }
}

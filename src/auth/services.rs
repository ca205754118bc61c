use crate::app_context::AppContext;
use crate::auth::identity::AssertionRequest;
use crate::auth::requests::VerifyIdentityRequestBody;
use crate::auth::responses::{VerificationErrorCode, VerifyIdentityResponse};
use crate::geo::catalog::GameMode;
use crate::players::models::NewPlayer;
use crate::rounds::services::start_round;
use crate::storage::interface::IPlayerStorage;

pub struct AuthHttpHandler<PS: IPlayerStorage> {
    app_context: AppContext<PS>,
}

impl<PS> AuthHttpHandler<PS>
where
    PS: IPlayerStorage,
{
    pub fn new(app_context: AppContext<PS>) -> Self {
        Self { app_context }
    }

    /// Runs the identity proof, then registers the player, hands out their
    /// passcode and starts their first round.
    pub async fn verify(&self, body: VerifyIdentityRequestBody) -> VerifyIdentityResponse {
        let assertion_request = AssertionRequest::game_login(body.country);
        let verification = self
            .app_context
            .verifier
            .verify(&assertion_request)
            .await
            .and_then(|bundle| bundle.into_identity(&assertion_request));
        let identity = match verification {
            Ok(identity) => identity,
            Err(err) => {
                tracing::info!(
                    task = "player_verification_failed",
                    scope = %assertion_request.scope,
                    reason = %err,
                );
                return VerifyIdentityResponse::failure((&err).into());
            }
        };

        let new_player = NewPlayer {
            id: identity.player_id,
            username: identity.username,
            nationality: identity.nationality,
            year: None,
        };
        let player = match self.app_context.players.upsert(new_player).await {
            Ok(player) => player,
            Err(err) => {
                tracing::error!("Failed to save a verified player: {err}");
                return VerifyIdentityResponse::failure(VerificationErrorCode::StorageUnavailable);
            }
        };
        let passcode = match self.app_context.passcode_key.issue(&player.id) {
            Ok(passcode) => passcode,
            Err(err) => {
                tracing::error!("Failed to issue a passcode: {err}");
                return VerifyIdentityResponse::failure(VerificationErrorCode::PasscodeNotIssued);
            }
        };
        tracing::info!(
            task = "player_verified",
            player_id = %player.id,
            nationality = player.nationality.as_deref().unwrap_or("unknown"),
        );

        // The player is verified either way; a missing round can be started
        // again from `/rounds`.
        let round = start_round(&self.app_context, &player.id, GameMode::Classic)
            .await
            .map_err(|err| tracing::error!("Failed to start the first round: {err}"))
            .ok();
        VerifyIdentityResponse::success(passcode, player, round)
    }
}

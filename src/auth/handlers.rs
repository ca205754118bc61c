use crate::app_context::AppContext;
use crate::auth::extractors::VerifiedPlayer;
use crate::auth::requests::VerifyIdentityRequestBody;
use crate::auth::responses::{DecodePasscodeResponse, VerifyIdentityResponse};
use crate::auth::services::AuthHttpHandler;
use crate::storage::interface::IPlayerStorage;
use axum::extract::State;
use axum::response::Json;

pub async fn verify_identity<PS>(
    State(app_context): State<AppContext<PS>>,
    Json(body): Json<VerifyIdentityRequestBody>,
) -> Json<VerifyIdentityResponse>
where
    PS: IPlayerStorage,
{
    let response = AuthHttpHandler::new(app_context).verify(body).await;
    Json(response)
}

pub async fn decode_passcode(player: VerifiedPlayer) -> Json<DecodePasscodeResponse> {
    Json(DecodePasscodeResponse {
        error: false,
        player_id: player.player_id,
    })
}

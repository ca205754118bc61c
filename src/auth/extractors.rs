use crate::app_context::RequestContext;
use crate::auth::consts::PASSCODE_HEADER;
use crate::auth::passcode::PasscodeKey;
use crate::auth::responses::{PasscodeExtractionError, PasscodeExtractionReason};
use async_trait::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::Json;

/// A player who presented a valid passcode.
pub struct VerifiedPlayer {
    pub player_id: String,
}

impl From<VerifiedPlayer> for RequestContext {
    fn from(player: VerifiedPlayer) -> Self {
        RequestContext {
            player_id: player.player_id,
        }
    }
}

fn reject(reason: PasscodeExtractionReason) -> (StatusCode, Json<PasscodeExtractionError>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(PasscodeExtractionError {
            error: true,
            reason,
        }),
    )
}

#[async_trait]
impl<S> FromRequestParts<S> for VerifiedPlayer
where
    PasscodeKey: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<PasscodeExtractionError>);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Some(passcode) = parts.headers.get(PASSCODE_HEADER) else {
            return Err(reject(PasscodeExtractionReason::NoPasscodeHeaderProvided));
        };
        let passcode = passcode
            .to_str()
            .map_err(|_| reject(PasscodeExtractionReason::InvalidPasscode))?;
        match PasscodeKey::from_ref(state).decode(passcode) {
            Ok(payload) => Ok(VerifiedPlayer {
                player_id: payload.player_id,
            }),
            Err(_) => Err(reject(PasscodeExtractionReason::InvalidPasscode)),
        }
    }
}

use crate::app_context::{AppContext, RequestContext};
use crate::players::responses::{PlayerErrorCode, PlayerResponse, PlayerSessionsResponse};
use crate::storage::interface::IPlayerStorage;

pub struct PlayersHttpHandler<'a, PS: IPlayerStorage> {
    app_context: AppContext<PS>,
    request_context: &'a RequestContext,
}

impl<'a, PS> PlayersHttpHandler<'a, PS>
where
    PS: IPlayerStorage,
{
    pub fn new(app_context: AppContext<PS>, request_context: &'a RequestContext) -> Self {
        Self {
            app_context,
            request_context,
        }
    }

    pub async fn me(&self) -> PlayerResponse {
        match self
            .app_context
            .players
            .get(&self.request_context.player_id)
            .await
        {
            Ok(Some(player)) => PlayerResponse {
                error: false,
                error_code: None,
                player: Some(player),
            },
            Ok(None) => PlayerResponse {
                error: true,
                error_code: Some(PlayerErrorCode::PlayerNotFound),
                player: None,
            },
            Err(err) => {
                tracing::error!("Failed to load a player: {err}");
                PlayerResponse {
                    error: true,
                    error_code: Some(PlayerErrorCode::StorageUnavailable),
                    player: None,
                }
            }
        }
    }

    pub async fn sessions(&self, limit: usize) -> PlayerSessionsResponse {
        match self
            .app_context
            .players
            .sessions_of(&self.request_context.player_id, limit)
            .await
        {
            Ok(sessions) => PlayerSessionsResponse {
                error: false,
                error_code: None,
                sessions: Some(sessions),
            },
            Err(err) => {
                tracing::error!("Failed to load game sessions: {err}");
                PlayerSessionsResponse {
                    error: true,
                    error_code: Some(PlayerErrorCode::StorageUnavailable),
                    sessions: None,
                }
            }
        }
    }
}

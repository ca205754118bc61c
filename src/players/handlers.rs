use crate::app_context::{AppContext, RequestContext};
use crate::auth::extractors::VerifiedPlayer;
use crate::http::query_params::LimitQueryParam;
use crate::players::consts::{DEFAULT_SESSIONS_PAGE, MAX_SESSIONS_PAGE};
use crate::players::responses::{PlayerResponse, PlayerSessionsResponse};
use crate::players::services::PlayersHttpHandler;
use crate::storage::interface::IPlayerStorage;
use axum::extract::{Query, State};
use axum::response::Json;

pub async fn me<PS>(
    player: VerifiedPlayer,
    State(app_context): State<AppContext<PS>>,
) -> Json<PlayerResponse>
where
    PS: IPlayerStorage,
{
    let request_context = RequestContext::from(player);
    let response = PlayersHttpHandler::new(app_context, &request_context)
        .me()
        .await;
    Json(response)
}

pub async fn sessions<PS>(
    player: VerifiedPlayer,
    Query(query_params): Query<LimitQueryParam>,
    State(app_context): State<AppContext<PS>>,
) -> Json<PlayerSessionsResponse>
where
    PS: IPlayerStorage,
{
    let request_context = RequestContext::from(player);
    let response = PlayersHttpHandler::new(app_context, &request_context)
        .sessions(query_params.or(DEFAULT_SESSIONS_PAGE, MAX_SESSIONS_PAGE))
        .await;
    Json(response)
}

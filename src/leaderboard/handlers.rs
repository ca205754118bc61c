use crate::app_context::AppContext;
use crate::http::query_params::LimitQueryParam;
use crate::leaderboard::consts::{DEFAULT_TOP_PLAYERS, MAX_TOP_PLAYERS};
use crate::leaderboard::responses::{CountryStandingsResponse, TopPlayersResponse};
use crate::leaderboard::services::LeaderboardHttpHandler;
use crate::storage::interface::IPlayerStorage;
use axum::extract::{Query, State};
use axum::response::Json;

pub async fn top_players<PS>(
    Query(query_params): Query<LimitQueryParam>,
    State(app_context): State<AppContext<PS>>,
) -> Json<TopPlayersResponse>
where
    PS: IPlayerStorage,
{
    let response = LeaderboardHttpHandler::new(app_context)
        .top_players(query_params.or(DEFAULT_TOP_PLAYERS, MAX_TOP_PLAYERS))
        .await;
    Json(response)
}

pub async fn countries<PS>(
    State(app_context): State<AppContext<PS>>,
) -> Json<CountryStandingsResponse>
where
    PS: IPlayerStorage,
{
    let response = LeaderboardHttpHandler::new(app_context).countries().await;
    Json(response)
}

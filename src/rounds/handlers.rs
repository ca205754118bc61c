use crate::app_context::{AppContext, RequestContext};
use crate::auth::extractors::VerifiedPlayer;
use crate::geo::models::LatLng;
use crate::rounds::requests::{StartRoundQueryParams, SubmitGuessRequestBody};
use crate::rounds::responses::{
    CurrentRoundResponse, PlaceGuessResponse, StartRoundResponse, SubmitGuessResponse,
};
use crate::rounds::services::RoundsHttpHandler;
use crate::storage::interface::IPlayerStorage;
use axum::extract::{Query, State};
use axum::response::Json;

pub async fn start<PS>(
    player: VerifiedPlayer,
    Query(query_params): Query<StartRoundQueryParams>,
    State(app_context): State<AppContext<PS>>,
) -> Json<StartRoundResponse>
where
    PS: IPlayerStorage,
{
    let request_context = RequestContext::from(player);
    let response = RoundsHttpHandler::new(app_context, &request_context)
        .start(query_params.mode)
        .await;
    Json(response)
}

pub async fn current<PS>(
    player: VerifiedPlayer,
    State(app_context): State<AppContext<PS>>,
) -> Json<CurrentRoundResponse>
where
    PS: IPlayerStorage,
{
    let request_context = RequestContext::from(player);
    let response = RoundsHttpHandler::new(app_context, &request_context)
        .current()
        .await;
    Json(response)
}

pub async fn place_guess<PS>(
    player: VerifiedPlayer,
    State(app_context): State<AppContext<PS>>,
    Json(guess): Json<LatLng>,
) -> Json<PlaceGuessResponse>
where
    PS: IPlayerStorage,
{
    let request_context = RequestContext::from(player);
    let response = RoundsHttpHandler::new(app_context, &request_context)
        .place_guess(guess)
        .await;
    Json(response)
}

pub async fn submit_guess<PS>(
    player: VerifiedPlayer,
    State(app_context): State<AppContext<PS>>,
    Json(body): Json<SubmitGuessRequestBody>,
) -> Json<SubmitGuessResponse>
where
    PS: IPlayerStorage,
{
    let request_context = RequestContext::from(player);
    let response = RoundsHttpHandler::new(app_context, &request_context)
        .submit(body)
        .await;
    Json(response)
}

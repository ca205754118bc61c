use crate::app_context::AppContext;
use crate::health::responses::HealthCheckResponse;
use crate::storage::interface::IPlayerStorage;
use axum::extract::State;
use axum::response::Json;

pub async fn healthcheck<PS>(State(app_context): State<AppContext<PS>>) -> Json<HealthCheckResponse>
where
    PS: IPlayerStorage,
{
    Json(HealthCheckResponse {
        error: false,
        classic_locations: app_context.catalogs.classic.locations().len(),
        trivia_locations: app_context.catalogs.trivia.locations().len(),
    })
}

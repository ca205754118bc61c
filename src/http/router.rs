use crate::app_context::AppContext;
use crate::cli::Args;
use crate::http::{cors, middleware};
use crate::storage::interface::IPlayerStorage;
use crate::{auth, health, leaderboard, players, rounds};
use axum::{
    routing::{get, post},
    Router,
};

pub fn new<PS>(args: &Args, app_context: AppContext<PS>) -> Router
where
    PS: IPlayerStorage,
{
    let cors_policy = cors::layer(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck::<PS>));
    let auth_routes = Router::new()
        .route("/verify", post(auth::handlers::verify_identity::<PS>))
        .route("/passcode/decode", get(auth::handlers::decode_passcode));
    let players_routes = Router::new()
        .route("/me", get(players::handlers::me::<PS>))
        .route("/me/sessions", get(players::handlers::sessions::<PS>));
    let rounds_routes = Router::new()
        .route("/", post(rounds::handlers::start::<PS>))
        .route("/current", get(rounds::handlers::current::<PS>))
        .route("/current/guess", post(rounds::handlers::place_guess::<PS>))
        .route("/current/submit", post(rounds::handlers::submit_guess::<PS>));
    let leaderboard_routes = Router::new()
        .route("/players", get(leaderboard::handlers::top_players::<PS>))
        .route("/countries", get(leaderboard::handlers::countries::<PS>));

    Router::new()
        .nest("/health", health_routes)
        .nest("/auth", auth_routes)
        .nest("/players", players_routes)
        .nest("/rounds", rounds_routes)
        .nest("/leaderboard", leaderboard_routes)
        .with_state(app_context)
        .layer(cors_policy)
        .layer(axum::middleware::from_fn(middleware::tracing))
}

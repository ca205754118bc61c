use crate::app_context::AppContext;
use crate::auth::identity::MockIdentityVerifier;
use crate::auth::passcode::PasscodeKey;
use crate::cli::Args;
use crate::geo::catalog::Catalogs;
use crate::http::router;
use crate::storage::interface::IPlayerStorage;
use crate::storage::memory::HashMapPlayerStorage;
use clap::Parser;
use std::process;
use std::sync::Arc;

mod app_context;
mod auth;
mod cli;
mod geo;
mod health;
mod http;
mod leaderboard;
mod logging;
mod players;
mod rounds;
mod storage;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    logging::init();

    let catalogs = match Catalogs::load(args.locations.as_deref(), args.trivia_locations.as_deref())
    {
        Ok(catalogs) => catalogs,
        Err(err) => {
            tracing::error!("Failed to load the location catalogs: {err}");
            process::exit(1);
        }
    };
    tracing::info!(
        classic = catalogs.classic.locations().len(),
        trivia = catalogs.trivia.locations().len(),
        "Loaded the location catalogs.",
    );
    let passcode_key = match PasscodeKey::new(&args.jwt_signing_key) {
        Ok(passcode_key) => passcode_key,
        Err(err) => {
            tracing::error!("Failed to set up passcode signing: {err}");
            process::exit(1);
        }
    };

    match storage::init(&args) {
        Ok(Some(postgrest)) => {
            serve(&args, AppContext::new(postgrest, catalogs, passcode_key)).await
        }
        Ok(None) => {
            let players = HashMapPlayerStorage::default();
            serve(&args, AppContext::new(players, catalogs, passcode_key)).await
        }
        Err(err) => {
            tracing::error!("Failed to set up the player storage: {err}");
            process::exit(1);
        }
    }
}

async fn serve<PS: IPlayerStorage>(args: &Args, app_context: AppContext<PS>) {
    let verifier = MockIdentityVerifier::new(args.mock_identity_outcome);
    let app = router::new(args, app_context.with_verifier(Arc::new(verifier)));
    let listener = match tokio::net::TcpListener::bind(args.listen_address).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("Failed to bind {}: {err}", args.listen_address);
            process::exit(1);
        }
    };
    tracing::info!("Listening on {}.", args.listen_address);
    if let Err(err) = axum::serve(listener, app).await {
        tracing::error!("Server stopped: {err}");
        process::exit(1);
    }
}

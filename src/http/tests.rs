use crate::app_context::AppContext;
use crate::auth::identity::IdentityVerifier;
use crate::auth::passcode::PasscodeKey;
use crate::cli::tests::fake_args;
use crate::geo::catalog::Catalogs;
use crate::http::router;
use crate::storage::memory::HashMapPlayerStorage;
use axum_test::TestServer;
use std::sync::Arc;

pub fn test_app_context() -> AppContext<HashMapPlayerStorage> {
    let args = fake_args();
    let catalogs = Catalogs::builtin().expect("Failed to load the built-in catalogs.");
    let passcode_key =
        PasscodeKey::new(&args.jwt_signing_key).expect("Failed to create the passcode key.");
    AppContext::new(HashMapPlayerStorage::default(), catalogs, passcode_key)
}

pub fn server_for(app_context: AppContext<HashMapPlayerStorage>) -> TestServer {
    let router = router::new(&fake_args(), app_context);
    TestServer::new(router).expect("Failed to run test server.")
}

pub fn test_server() -> TestServer {
    server_for(test_app_context())
}

pub fn test_server_with_verifier(verifier: Arc<dyn IdentityVerifier>) -> TestServer {
    server_for(test_app_context().with_verifier(verifier))
}

/// Logs a new player in through the mock identity proof. Returns the passcode
/// and the player ID.
pub async fn verified_player(server: &TestServer, country: &str) -> (String, String) {
    let response = server
        .post("/auth/verify")
        .json(&serde_json::json!({ "country": country }))
        .await;
    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    let passcode = body["passcode"]
        .as_str()
        .expect("Verification should return a passcode.")
        .to_string();
    let player_id = body["player"]["id"]
        .as_str()
        .expect("Verification should return the player.")
        .to_string();
    (passcode, player_id)
}

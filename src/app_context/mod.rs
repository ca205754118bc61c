use crate::auth::identity::{IdentityVerifier, MockIdentityVerifier};
use crate::auth::passcode::PasscodeKey;
use crate::geo::catalog::Catalogs;
use crate::storage::interface::IPlayerStorage;
use crate::storage::rounds::HashMapRoundsStorage;
use axum::extract::FromRef;
use std::sync::Arc;

/// Handles shared by all requests. Built once in `main` (or per test) and
/// passed to the router as state.
#[derive(Clone)]
pub struct AppContext<PS: IPlayerStorage> {
    pub players: PS,
    pub rounds: HashMapRoundsStorage,
    pub catalogs: Arc<Catalogs>,
    pub verifier: Arc<dyn IdentityVerifier>,
    pub passcode_key: PasscodeKey,
}

impl<PS: IPlayerStorage> AppContext<PS> {
    pub fn new(players: PS, catalogs: Catalogs, passcode_key: PasscodeKey) -> Self {
        Self {
            players,
            rounds: HashMapRoundsStorage::default(),
            catalogs: Arc::new(catalogs),
            verifier: Arc::new(MockIdentityVerifier::default()),
            passcode_key,
        }
    }

    pub fn with_verifier(mut self, verifier: Arc<dyn IdentityVerifier>) -> Self {
        self.verifier = verifier;
        self
    }
}

impl<PS: IPlayerStorage> FromRef<AppContext<PS>> for PasscodeKey {
    fn from_ref(app_context: &AppContext<PS>) -> Self {
        app_context.passcode_key.clone()
    }
}

pub struct RequestContext {
    pub player_id: String,
}

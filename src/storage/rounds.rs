use crate::geo::catalog::GameMode;
use crate::geo::models::{LatLng, Location};
use crate::rounds::models::{Round, RoundError, RoundView, Submission};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Current round of every player, keyed by player ID. Each transition runs
/// under a single write lock, so two submissions of one player can't both
/// score the round.
#[derive(Clone, Default)]
pub struct HashMapRoundsStorage {
    storage: Arc<RwLock<HashMap<String, Round>>>,
}

impl HashMapRoundsStorage {
    pub async fn start(&self, player_id: &str, mode: GameMode, target: Location) -> RoundView {
        let mut storage_guard = self.storage.write().await;
        let round = storage_guard.entry(player_id.to_string()).or_default();
        round.start(mode, target);
        round.view()
    }

    /// A player without a round is still awaiting authentication.
    pub async fn view(&self, player_id: &str) -> RoundView {
        self.storage
            .read()
            .await
            .get(player_id)
            .map(Round::view)
            .unwrap_or_else(|| Round::default().view())
    }

    pub async fn place_guess(
        &self,
        player_id: &str,
        guess: LatLng,
    ) -> Result<RoundView, RoundError> {
        let mut storage_guard = self.storage.write().await;
        let round = storage_guard
            .get_mut(player_id)
            .ok_or(RoundError::NoActiveRound)?;
        round.place_guess(guess)?;
        Ok(round.view())
    }

    pub async fn submit(
        &self,
        player_id: &str,
        guess: Option<LatLng>,
    ) -> Result<(Submission, RoundView), RoundError> {
        let mut storage_guard = self.storage.write().await;
        let round = storage_guard
            .get_mut(player_id)
            .ok_or(RoundError::NoActiveRound)?;
        let submission = round.submit(guess)?;
        Ok((submission, round.view()))
    }
}

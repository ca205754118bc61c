use crate::leaderboard::models::{LeaderboardEntry, NationalityScore};
use crate::players::models::{GameSession, NewGameSession, NewPlayer, Player};
use crate::storage::error::StorageError;
use async_trait::async_trait;

/// Everything the game needs to persist. Implemented by the in-memory storage
/// and by the PostgREST-backed one.
pub trait IPlayerStorage:
    PlayerRepo + GameSessionRepo + LeaderboardRepo + Clone + Send + Sync + 'static
{
}

#[async_trait]
pub trait PlayerRepo: Send + Sync {
    /// Inserts the player, or refreshes the disclosed fields of a returning one
    /// while keeping their score.
    async fn upsert(&self, player: NewPlayer) -> Result<Player, StorageError>;

    async fn get(&self, player_id: &str) -> Result<Option<Player>, StorageError>;

    /// Adds `points` to the player's score and counts one more game.
    async fn record_round(&self, player_id: &str, points: u64) -> Result<Player, StorageError>;
}

#[async_trait]
pub trait GameSessionRepo: Send + Sync {
    async fn save_session(&self, session: NewGameSession) -> Result<GameSession, StorageError>;

    /// Most recent first.
    async fn sessions_of(
        &self,
        player_id: &str,
        limit: usize,
    ) -> Result<Vec<GameSession>, StorageError>;
}

#[async_trait]
pub trait LeaderboardRepo: Send + Sync {
    async fn top_players(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, StorageError>;

    /// Scores of all players who declared a nationality.
    async fn nationality_scores(&self) -> Result<Vec<NationalityScore>, StorageError>;
}

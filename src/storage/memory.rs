use crate::leaderboard::models::{LeaderboardEntry, NationalityScore};
use crate::players::models::{GameSession, NewGameSession, NewPlayer, Player};
use crate::storage::error::StorageError;
use crate::storage::interface::{GameSessionRepo, IPlayerStorage, LeaderboardRepo, PlayerRepo};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Process-local storage. Used when no database is configured and in tests.
#[derive(Clone, Default)]
pub struct HashMapPlayerStorage {
    players: Arc<RwLock<HashMap<String, Player>>>,
    sessions: Arc<RwLock<Vec<GameSession>>>,
}

impl IPlayerStorage for HashMapPlayerStorage {}

#[async_trait]
impl PlayerRepo for HashMapPlayerStorage {
    async fn upsert(&self, player: NewPlayer) -> Result<Player, StorageError> {
        let now = Utc::now();
        let mut players = self.players.write().await;
        let stored = players
            .entry(player.id.clone())
            .and_modify(|existing| {
                existing.username = player.username.clone();
                existing.nationality = player.nationality.clone();
                existing.year = player.year;
                existing.updated_at = now;
            })
            .or_insert_with(|| Player {
                id: player.id.clone(),
                username: player.username.clone(),
                nationality: player.nationality.clone(),
                year: player.year,
                score: 0,
                games_played: 0,
                created_at: now,
                updated_at: now,
            });
        Ok(stored.clone())
    }

    async fn get(&self, player_id: &str) -> Result<Option<Player>, StorageError> {
        Ok(self.players.read().await.get(player_id).cloned())
    }

    async fn record_round(&self, player_id: &str, points: u64) -> Result<Player, StorageError> {
        let mut players = self.players.write().await;
        let player = players
            .get_mut(player_id)
            .ok_or_else(|| StorageError::PlayerNotFound(player_id.to_string()))?;
        player.score += points;
        player.games_played += 1;
        player.updated_at = Utc::now();
        Ok(player.clone())
    }
}

#[async_trait]
impl GameSessionRepo for HashMapPlayerStorage {
    async fn save_session(&self, session: NewGameSession) -> Result<GameSession, StorageError> {
        let stored = GameSession {
            id: Uuid::new_v4(),
            user_id: Some(session.user_id),
            target_country: session.target_country,
            target_lat: session.target_lat,
            target_lng: session.target_lng,
            guess_lat: Some(session.guess_lat),
            guess_lng: Some(session.guess_lng),
            distance_km: Some(session.distance_km),
            points_earned: session.points_earned,
            completed_at: Some(session.completed_at),
            created_at: Utc::now(),
        };
        self.sessions.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn sessions_of(
        &self,
        player_id: &str,
        limit: usize,
    ) -> Result<Vec<GameSession>, StorageError> {
        // Sessions are appended in creation order.
        Ok(self
            .sessions
            .read()
            .await
            .iter()
            .rev()
            .filter(|session| session.user_id.as_deref() == Some(player_id))
            .take(limit)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl LeaderboardRepo for HashMapPlayerStorage {
    async fn top_players(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, StorageError> {
        let mut players = self
            .players
            .read()
            .await
            .values()
            .cloned()
            .collect::<Vec<_>>();
        players.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.created_at.cmp(&b.created_at)));
        Ok(players
            .into_iter()
            .take(limit)
            .map(|player| LeaderboardEntry {
                username: player.username,
                nationality: player.nationality,
                score: player.score,
                games_played: player.games_played,
            })
            .collect())
    }

    async fn nationality_scores(&self) -> Result<Vec<NationalityScore>, StorageError> {
        Ok(self
            .players
            .read()
            .await
            .values()
            .filter_map(|player| {
                player.nationality.clone().map(|nationality| NationalityScore {
                    nationality,
                    score: player.score,
                })
            })
            .collect())
    }
}

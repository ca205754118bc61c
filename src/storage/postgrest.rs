use crate::leaderboard::models::{LeaderboardEntry, NationalityScore};
use crate::players::models::{GameSession, NewGameSession, NewPlayer, Player};
use crate::storage::consts::{GAME_SESSIONS_TABLE, PLAYERS_TABLE};
use crate::storage::error::StorageError;
use crate::storage::interface::{GameSessionRepo, IPlayerStorage, LeaderboardRepo, PlayerRepo};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

const RETURN_REPRESENTATION: &str = "return=representation";
const UPSERT_PREFERENCE: &str = "resolution=merge-duplicates,return=representation";

/// Storage backed by a relational database exposed through PostgREST.
///
/// The handle owns its HTTP connection pool and is cloned into every request
/// handler, so there is no global client.
#[derive(Clone, Debug)]
pub struct PostgrestPlayerStorage {
    client: Client,
    rest_url: Url,
    api_key: Option<String>,
}

#[derive(Serialize)]
struct ScoreUpdate {
    score: u64,
    games_played: u64,
    updated_at: DateTime<Utc>,
}

impl PostgrestPlayerStorage {
    /// `base_url` is the project URL; tables are reached under `rest/v1/`.
    pub fn new(base_url: &Url, api_key: Option<String>) -> Result<Self, StorageError> {
        let mut base_url = base_url.clone();
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }
        Ok(Self {
            client: Client::new(),
            rest_url: base_url.join("rest/v1/")?,
            api_key,
        })
    }

    pub fn table_url(&self, table: &str) -> Result<Url, StorageError> {
        Ok(self.rest_url.join(table)?)
    }

    fn request(&self, method: Method, table: &str) -> Result<RequestBuilder, StorageError> {
        let mut request = self.client.request(method, self.table_url(table)?);
        if let Some(api_key) = &self.api_key {
            request = request.header("apikey", api_key).bearer_auth(api_key);
        }
        Ok(request)
    }

    async fn single<T: DeserializeOwned>(
        request: RequestBuilder,
        what: &'static str,
    ) -> Result<T, StorageError> {
        rows::<T>(request.send().await?)
            .await?
            .into_iter()
            .next()
            .ok_or(StorageError::EmptyResponse(what))
    }
}

/// PostgREST filter matching a column exactly.
pub fn eq(value: &str) -> String {
    format!("eq.{value}")
}

async fn rows<T: DeserializeOwned>(response: Response) -> Result<Vec<T>, StorageError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(StorageError::Rejected { status, body });
    }
    Ok(response.json::<Vec<T>>().await?)
}

impl IPlayerStorage for PostgrestPlayerStorage {}

#[async_trait]
impl PlayerRepo for PostgrestPlayerStorage {
    async fn upsert(&self, player: NewPlayer) -> Result<Player, StorageError> {
        let request = self
            .request(Method::POST, PLAYERS_TABLE)?
            .query(&[("on_conflict", "id")])
            .header("Prefer", UPSERT_PREFERENCE)
            .json(&player);
        Self::single(request, "player upsert").await
    }

    async fn get(&self, player_id: &str) -> Result<Option<Player>, StorageError> {
        let response = self
            .request(Method::GET, PLAYERS_TABLE)?
            .query(&[("select", "*".to_string()), ("id", eq(player_id))])
            .send()
            .await?;
        Ok(rows::<Player>(response).await?.into_iter().next())
    }

    async fn record_round(&self, player_id: &str, points: u64) -> Result<Player, StorageError> {
        // PostgREST can't increment in place, so this reads then writes. Two
        // concurrent submissions of one player may lose an update.
        let player = self
            .get(player_id)
            .await?
            .ok_or_else(|| StorageError::PlayerNotFound(player_id.to_string()))?;
        let update = ScoreUpdate {
            score: player.score + points,
            games_played: player.games_played + 1,
            updated_at: Utc::now(),
        };
        let request = self
            .request(Method::PATCH, PLAYERS_TABLE)?
            .query(&[("id", eq(player_id))])
            .header("Prefer", RETURN_REPRESENTATION)
            .json(&update);
        Self::single(request, "score update").await
    }
}

#[async_trait]
impl GameSessionRepo for PostgrestPlayerStorage {
    async fn save_session(&self, session: NewGameSession) -> Result<GameSession, StorageError> {
        let request = self
            .request(Method::POST, GAME_SESSIONS_TABLE)?
            .header("Prefer", RETURN_REPRESENTATION)
            .json(&session);
        Self::single(request, "session insert").await
    }

    async fn sessions_of(
        &self,
        player_id: &str,
        limit: usize,
    ) -> Result<Vec<GameSession>, StorageError> {
        let response = self
            .request(Method::GET, GAME_SESSIONS_TABLE)?
            .query(&[
                ("user_id", eq(player_id)),
                ("order", "created_at.desc".to_string()),
                ("limit", limit.to_string()),
            ])
            .send()
            .await?;
        rows(response).await
    }
}

#[async_trait]
impl LeaderboardRepo for PostgrestPlayerStorage {
    async fn top_players(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, StorageError> {
        let response = self
            .request(Method::GET, PLAYERS_TABLE)?
            .query(&[
                ("select", "username,nationality,score,games_played".to_string()),
                ("order", "score.desc,created_at.asc".to_string()),
                ("limit", limit.to_string()),
            ])
            .send()
            .await?;
        rows(response).await
    }

    async fn nationality_scores(&self) -> Result<Vec<NationalityScore>, StorageError> {
        let response = self
            .request(Method::GET, PLAYERS_TABLE)?
            .query(&[("select", "nationality,score"), ("nationality", "not.is.null")])
            .send()
            .await?;
        rows(response).await
    }
}

use crate::rounds::models::ResolvedRound;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A verified player. Read from the database in its column naming, sent to
/// clients in camelCase.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Player {
    pub id: String,
    pub username: String,
    pub nationality: Option<String>,
    /// Birth year, when the identity proof disclosed one.
    pub year: Option<i32>,
    pub score: u64,
    pub games_played: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Columns written on verification. Score and game count are left out so an
/// upsert of a returning player keeps them.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewPlayer {
    pub id: String,
    pub username: String,
    pub nationality: Option<String>,
    pub year: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct GameSession {
    pub id: Uuid,
    pub user_id: Option<String>,
    pub target_country: String,
    pub target_lat: f64,
    pub target_lng: f64,
    pub guess_lat: Option<f64>,
    pub guess_lng: Option<f64>,
    pub distance_km: Option<u64>,
    pub points_earned: u64,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewGameSession {
    pub user_id: String,
    pub target_country: String,
    pub target_lat: f64,
    pub target_lng: f64,
    pub guess_lat: f64,
    pub guess_lng: f64,
    pub distance_km: u64,
    pub points_earned: u64,
    pub completed_at: DateTime<Utc>,
}

impl NewGameSession {
    pub fn of_round(player_id: &str, round: &ResolvedRound, completed_at: DateTime<Utc>) -> Self {
        NewGameSession {
            user_id: player_id.to_string(),
            target_country: round.target.country.clone(),
            target_lat: round.target.position.lat(),
            target_lng: round.target.position.lng(),
            guess_lat: round.guess.lat(),
            guess_lng: round.guess.lng(),
            distance_km: round.result.distance_km,
            points_earned: round.result.points,
            completed_at,
        }
    }
}

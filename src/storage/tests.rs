use crate::geo::catalog::GameMode;
use crate::geo::models::{LatLng, Location};
use crate::players::models::{NewGameSession, NewPlayer};
use crate::rounds::models::{RoundError, RoundStatus, Submission};
use crate::storage::error::StorageError;
use crate::storage::interface::{GameSessionRepo, LeaderboardRepo, PlayerRepo};
use crate::storage::memory::HashMapPlayerStorage;
use crate::storage::postgrest::{eq, PostgrestPlayerStorage};
use crate::storage::rounds::HashMapRoundsStorage;
use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use chrono::Utc;
use std::collections::HashMap;
use url::Url;

fn new_player(id: &str, nationality: Option<&str>) -> NewPlayer {
    NewPlayer {
        id: id.to_string(),
        username: format!("name of {id}"),
        nationality: nationality.map(str::to_string),
        year: None,
    }
}

fn tokyo() -> Location {
    Location {
        name: String::from("Tokyo, Japan"),
        position: LatLng::new(35.6762, 139.6503).unwrap(),
        country: String::from("Japan"),
        hint: None,
    }
}

#[tokio::test]
async fn test_upsert_keeps_score_of_returning_player() {
    let storage = HashMapPlayerStorage::default();
    storage.upsert(new_player("p1", Some("Japan"))).await.unwrap();
    storage.record_round("p1", 600).await.unwrap();

    let returning = storage.upsert(new_player("p1", Some("France"))).await.unwrap();

    assert_eq!(returning.score, 600);
    assert_eq!(returning.games_played, 1);
    assert_eq!(returning.nationality.as_deref(), Some("France"));
}

#[tokio::test]
async fn test_record_round_of_unknown_player() {
    let storage = HashMapPlayerStorage::default();

    let result = storage.record_round("ghost", 100).await;

    assert!(matches!(result, Err(StorageError::PlayerNotFound(id)) if id == "ghost"));
}

#[tokio::test]
async fn test_sessions_are_newest_first_and_per_player() {
    let storage = HashMapPlayerStorage::default();
    for (player_id, points) in [("p1", 50), ("p2", 800), ("p1", 1000), ("p1", 200)] {
        storage
            .save_session(NewGameSession {
                user_id: player_id.to_string(),
                target_country: String::from("Japan"),
                target_lat: 35.6762,
                target_lng: 139.6503,
                guess_lat: 35.0,
                guess_lng: 139.0,
                distance_km: 90,
                points_earned: points,
                completed_at: Utc::now(),
            })
            .await
            .unwrap();
    }

    let sessions = storage.sessions_of("p1", 2).await.unwrap();

    let points = sessions.iter().map(|s| s.points_earned).collect::<Vec<_>>();
    assert_eq!(points, vec![200, 1000]);
}

#[tokio::test]
async fn test_top_players_and_nationality_scores() {
    let storage = HashMapPlayerStorage::default();
    storage.upsert(new_player("a", Some("Japan"))).await.unwrap();
    storage.upsert(new_player("b", None)).await.unwrap();
    storage.upsert(new_player("c", Some("Peru"))).await.unwrap();
    storage.record_round("a", 400).await.unwrap();
    storage.record_round("b", 1000).await.unwrap();
    storage.record_round("c", 50).await.unwrap();

    let top = storage.top_players(2).await.unwrap();
    let mut scores = storage.nationality_scores().await.unwrap();
    scores.sort_by(|x, y| x.nationality.cmp(&y.nationality));

    assert_eq!(
        top.iter().map(|entry| entry.score).collect::<Vec<_>>(),
        vec![1000, 400]
    );
    assert_eq!(scores.len(), 2);
    assert_eq!(scores[0].nationality, "Japan");
    assert_eq!(scores[0].score, 400);
}

#[tokio::test]
async fn test_rounds_storage_freezes_first_submission() {
    let rounds = HashMapRoundsStorage::default();
    rounds.start("p1", GameMode::Classic, tokyo()).await;
    let near = LatLng::new(35.6, 139.6).unwrap();
    let far = LatLng::new(-33.8688, 151.2093).unwrap();

    let (first, _) = rounds.submit("p1", Some(near)).await.unwrap();
    let (second, view) = rounds.submit("p1", Some(far)).await.unwrap();

    assert!(matches!(first, Submission::Scored(_)));
    assert!(matches!(second, Submission::AlreadyResolved(_)));
    assert_eq!(first.resolved(), second.resolved());
    assert_eq!(view.status, RoundStatus::Resolved);
    assert_eq!(view.result, Some(first.resolved().result));
}

#[tokio::test]
async fn test_rounds_storage_without_round() {
    let rounds = HashMapRoundsStorage::default();
    let guess = LatLng::new(0.0, 0.0).unwrap();

    assert_eq!(rounds.view("nobody").await.status, RoundStatus::AwaitingAuth);
    assert_eq!(
        rounds.place_guess("nobody", guess).await.unwrap_err(),
        RoundError::NoActiveRound
    );
    assert_eq!(
        rounds.submit("nobody", Some(guess)).await.unwrap_err(),
        RoundError::NoActiveRound
    );
}

#[test]
fn test_postgrest_table_urls() {
    let with_path = Url::parse("http://db.local:3000/project").unwrap();
    let storage = PostgrestPlayerStorage::new(&with_path, None).unwrap();
    assert_eq!(
        storage.table_url("users").unwrap().as_str(),
        "http://db.local:3000/project/rest/v1/users"
    );

    let bare = Url::parse("https://abc.supabase.co").unwrap();
    let storage = PostgrestPlayerStorage::new(&bare, None).unwrap();
    assert_eq!(
        storage.table_url("game_sessions").unwrap().as_str(),
        "https://abc.supabase.co/rest/v1/game_sessions"
    );
    assert_eq!(eq("user_1"), "eq.user_1");
}

type Params = Query<HashMap<String, String>>;
type Reply = (StatusCode, Json<Value>);

fn param<'a>(params: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    params.get(key).map(String::as_str)
}

fn prefer(headers: &HeaderMap) -> Option<&str> {
    headers.get("prefer").and_then(|value| value.to_str().ok())
}

/// Answers 400 with `message` unless `condition` holds, so a malformed
/// request surfaces as `StorageError::Rejected` in the test.
fn check(condition: bool, message: &str) -> Result<(), Reply> {
    if condition {
        Ok(())
    } else {
        Err((StatusCode::BAD_REQUEST, Json(json!({ "message": message }))))
    }
}

fn ada(score: u64, games_played: u64) -> Value {
    json!({
        "id": "p1",
        "username": "Ada",
        "nationality": "United Kingdom",
        "year": null,
        "score": score,
        "games_played": games_played,
        "created_at": "2025-05-01T10:00:00.123456+00:00",
        "updated_at": "2025-05-02T10:00:00+00:00"
    })
}

fn session_row(points: u64, created_at: &str) -> Value {
    json!({
        "id": "7f1c2a8e-2f4e-4c39-9a57-1f4a0d6c2b11",
        "user_id": "p1",
        "target_country": "Japan",
        "target_lat": 35.6762,
        "target_lng": 139.6503,
        "guess_lat": 35.0,
        "guess_lng": 139.0,
        "distance_km": 90,
        "points_earned": points,
        "completed_at": created_at,
        "created_at": created_at
    })
}

async fn read_users(Query(params): Params) -> Reply {
    match param(&params, "id") {
        Some("eq.broken") => {
            return (StatusCode::BAD_REQUEST, Json(json!({"message": "bad filter"})));
        }
        Some("eq.p1") => return (StatusCode::OK, Json(json!([ada(1800, 3)]))),
        Some(_) => return (StatusCode::OK, Json(json!([]))),
        None => {}
    }
    if param(&params, "nationality") == Some("not.is.null") {
        return match check(
            param(&params, "select") == Some("nationality,score"),
            "nationality scores must select only two columns",
        ) {
            Ok(()) => (
                StatusCode::OK,
                Json(json!([
                    {"nationality": "United Kingdom", "score": 1800},
                    {"nationality": "Japan", "score": 400}
                ])),
            ),
            Err(reply) => reply,
        };
    }
    if let Err(reply) = check(
        param(&params, "order") == Some("score.desc,created_at.asc"),
        "top players must be ordered by score then age",
    ) {
        return reply;
    }
    (
        StatusCode::OK,
        Json(json!([
            {"username": "Ada", "nationality": "United Kingdom", "score": 1800, "games_played": 3},
            {"username": "Bo", "nationality": null, "score": 50, "games_played": 1}
        ])),
    )
}

async fn upsert_user(Query(params): Params, headers: HeaderMap, Json(body): Json<Value>) -> Reply {
    let checks = check(param(&params, "on_conflict") == Some("id"), "missing on_conflict")
        .and(check(
            prefer(&headers) == Some("resolution=merge-duplicates,return=representation"),
            "upsert must merge duplicates",
        ))
        .and(check(
            body.get("score").is_none() && body.get("games_played").is_none(),
            "upsert must not overwrite the score",
        ))
        .and(check(body["id"] == "p1", "unexpected player"));
    match checks {
        // The stored row keeps its score; only disclosed fields change.
        Ok(()) => {
            let mut row = ada(1800, 3);
            row["username"] = body["username"].clone();
            row["nationality"] = body["nationality"].clone();
            (StatusCode::CREATED, Json(json!([row])))
        }
        Err(reply) => reply,
    }
}

async fn update_user(Query(params): Params, headers: HeaderMap, Json(body): Json<Value>) -> Reply {
    let checks = check(param(&params, "id") == Some("eq.p1"), "missing id filter")
        .and(check(
            prefer(&headers) == Some("return=representation"),
            "update must return the row",
        ))
        .and(check(body["updated_at"].is_string(), "missing updated_at"));
    match checks {
        Ok(()) => {
            let mut row = ada(0, 0);
            row["score"] = body["score"].clone();
            row["games_played"] = body["games_played"].clone();
            (StatusCode::OK, Json(json!([row])))
        }
        Err(reply) => reply,
    }
}

async fn insert_session(headers: HeaderMap, Json(body): Json<Value>) -> Reply {
    let checks = check(
        prefer(&headers) == Some("return=representation"),
        "insert must return the row",
    )
    .and(check(body["user_id"] == "p1", "unexpected player"))
    .and(check(body["points_earned"] == 800, "unexpected points"))
    .and(check(body.get("id").is_none(), "the database assigns the ID"));
    match checks {
        Ok(()) => (
            StatusCode::CREATED,
            Json(json!([session_row(800, "2025-05-03T09:00:00+00:00")])),
        ),
        Err(reply) => reply,
    }
}

async fn read_sessions(Query(params): Params) -> Reply {
    let checks = check(param(&params, "user_id") == Some("eq.p1"), "missing player filter")
        .and(check(
            param(&params, "order") == Some("created_at.desc"),
            "sessions must be newest first",
        ))
        .and(check(param(&params, "limit") == Some("2"), "missing limit"));
    match checks {
        Ok(()) => (
            StatusCode::OK,
            Json(json!([
                session_row(800, "2025-05-03T09:00:00+00:00"),
                session_row(50, "2025-05-02T09:00:00+00:00")
            ])),
        ),
        Err(reply) => reply,
    }
}

/// Serves `users` and `game_sessions` the way PostgREST would, and refuses
/// requests whose filters, headers or bodies don't match what it expects.
async fn fake_postgrest() -> Url {
    let router = Router::new()
        .route("/rest/v1/users", get(read_users).post(upsert_user).patch(update_user))
        .route("/rest/v1/game_sessions", get(read_sessions).post(insert_session));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind the fake PostgREST server.");
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, router).await });
    Url::parse(&format!("http://{address}")).unwrap()
}

fn postgrest_storage(url: &Url) -> PostgrestPlayerStorage {
    PostgrestPlayerStorage::new(url, Some("key".into())).unwrap()
}

#[tokio::test]
async fn test_postgrest_reads() {
    let storage = postgrest_storage(&fake_postgrest().await);

    let player = storage.get("p1").await.unwrap().expect("p1 should exist");
    let missing = storage.get("p2").await.unwrap();
    let top = storage.top_players(10).await.unwrap();
    let scores = storage.nationality_scores().await.unwrap();

    assert_eq!(player.username, "Ada");
    assert_eq!(player.score, 1800);
    assert_eq!(player.games_played, 3);
    assert!(missing.is_none());
    assert_eq!(top.len(), 2);
    assert_eq!(top[1].nationality, None);
    assert_eq!(scores.len(), 2);
    assert_eq!(scores[1].nationality, "Japan");
}

#[tokio::test]
async fn test_postgrest_upsert_keeps_score() {
    let storage = postgrest_storage(&fake_postgrest().await);

    let player = storage.upsert(new_player("p1", Some("Japan"))).await.unwrap();

    assert_eq!(player.username, "name of p1");
    assert_eq!(player.nationality.as_deref(), Some("Japan"));
    assert_eq!(player.score, 1800);
    assert_eq!(player.games_played, 3);
}

#[tokio::test]
async fn test_postgrest_record_round() {
    let storage = postgrest_storage(&fake_postgrest().await);

    let player = storage.record_round("p1", 600).await.unwrap();
    let missing = storage.record_round("p2", 600).await;

    assert_eq!(player.score, 2400);
    assert_eq!(player.games_played, 4);
    assert!(matches!(missing, Err(StorageError::PlayerNotFound(id)) if id == "p2"));
}

#[tokio::test]
async fn test_postgrest_sessions() {
    let storage = postgrest_storage(&fake_postgrest().await);

    let saved = storage
        .save_session(NewGameSession {
            user_id: String::from("p1"),
            target_country: String::from("Japan"),
            target_lat: 35.6762,
            target_lng: 139.6503,
            guess_lat: 35.0,
            guess_lng: 139.0,
            distance_km: 90,
            points_earned: 800,
            completed_at: Utc::now(),
        })
        .await
        .unwrap();
    let sessions = storage.sessions_of("p1", 2).await.unwrap();

    assert_eq!(saved.user_id.as_deref(), Some("p1"));
    assert_eq!(saved.distance_km, Some(90));
    assert_eq!(
        sessions.iter().map(|s| s.points_earned).collect::<Vec<_>>(),
        vec![800, 50]
    );
}

#[tokio::test]
async fn test_postgrest_error_status() {
    let storage = PostgrestPlayerStorage::new(&fake_postgrest().await, None).unwrap();

    let result = storage.get("broken").await;

    assert!(matches!(
        result,
        Err(StorageError::Rejected { status, .. }) if status == StatusCode::BAD_REQUEST
    ));
}

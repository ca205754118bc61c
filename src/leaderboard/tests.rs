use crate::auth::consts::PASSCODE_HEADER;
use crate::http::tests::{test_server, verified_player};
use crate::leaderboard::models::{country_averages, country_totals, CountryStats, NationalityScore};
use serde_json::{json, Value};

fn score(nationality: &str, score: u64) -> NationalityScore {
    NationalityScore {
        nationality: nationality.to_string(),
        score,
    }
}

fn stats(nationality: &str, total_score: u64, total_players: u64, avg_score: u64) -> CountryStats {
    CountryStats {
        nationality: nationality.to_string(),
        total_score,
        total_players,
        avg_score,
    }
}

#[test]
fn test_country_totals() {
    let scores = [
        score("Japan", 400),
        score("France", 1000),
        score("Japan", 800),
        score("France", 50),
        score("Peru", 600),
    ];

    let totals = country_totals(&scores);

    assert_eq!(
        totals,
        vec![
            stats("Japan", 1200, 2, 600),
            stats("France", 1050, 2, 525),
            stats("Peru", 600, 1, 600),
        ]
    );
}

#[test]
fn test_country_averages_break_ties_by_name() {
    let totals = country_totals(&[
        score("Peru", 600),
        score("Japan", 400),
        score("Japan", 800),
        score("Chile", 1),
        score("Chile", 2),
    ]);

    let averages = country_averages(&totals);

    let order = averages
        .iter()
        .map(|stats| (stats.nationality.as_str(), stats.avg_score))
        .collect::<Vec<_>>();
    assert_eq!(order, vec![("Japan", 600), ("Peru", 600), ("Chile", 2)]);
}

#[test]
fn test_no_scores() {
    assert!(country_totals(&[]).is_empty());
}

#[tokio::test]
async fn test_leaderboards_are_public() {
    let server = test_server();

    let players = server.get("/leaderboard/players").await;
    let countries = server.get("/leaderboard/countries").await;

    players.assert_status_ok();
    players.assert_json(&json!({ "error": false, "players": [] }));
    countries.assert_status_ok();
    countries.assert_json(&json!({ "error": false, "byTotal": [], "byAverage": [] }));
}

#[tokio::test]
async fn test_leaderboards_after_a_round() {
    let server = test_server();
    let (passcode, _) = verified_player(&server, "FRA").await;
    verified_player(&server, "FRA").await;
    let submitted = server
        .post("/rounds/current/submit")
        .add_header(PASSCODE_HEADER, passcode.as_str())
        .json(&json!({ "guess": { "lat": 0.0, "lng": 0.0 } }))
        .await
        .json::<Value>();
    let points = submitted["player"]["score"].as_u64().unwrap();

    let players = server
        .get("/leaderboard/players")
        .add_query_param("limit", 1)
        .await
        .json::<Value>();
    let countries = server.get("/leaderboard/countries").await.json::<Value>();

    assert_eq!(players["players"].as_array().unwrap().len(), 1);
    assert_eq!(players["players"][0]["score"].as_u64(), Some(points));
    assert_eq!(countries["byTotal"][0]["nationality"], "France");
    assert_eq!(countries["byTotal"][0]["totalPlayers"], 2);
    assert_eq!(countries["byTotal"][0]["totalScore"].as_u64(), Some(points));
    assert_eq!(
        countries["byAverage"][0]["avgScore"].as_u64(),
        Some((points + 1) / 2)
    );
}

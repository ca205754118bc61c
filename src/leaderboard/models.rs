use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct LeaderboardEntry {
    pub username: String,
    pub nationality: Option<String>,
    pub score: u64,
    pub games_played: u64,
}

/// Score of one player who declared a nationality.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NationalityScore {
    pub nationality: String,
    pub score: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryStats {
    pub nationality: String,
    pub total_score: u64,
    pub total_players: u64,
    pub avg_score: u64,
}

/// Sums the scores per nationality. Sorted by total score, highest first.
pub fn country_totals(scores: &[NationalityScore]) -> Vec<CountryStats> {
    let mut totals: HashMap<&str, (u64, u64)> = HashMap::new();
    for NationalityScore { nationality, score } in scores {
        let (total, players) = totals.entry(nationality.as_str()).or_default();
        *total += score;
        *players += 1;
    }
    let mut stats = totals
        .into_iter()
        .map(|(nationality, (total_score, total_players))| CountryStats {
            nationality: nationality.to_string(),
            total_score,
            total_players,
            avg_score: rounded_mean(total_score, total_players),
        })
        .collect::<Vec<_>>();
    stats.sort_by(|a, b| by_descending(a.total_score, b.total_score, a, b));
    stats
}

/// Same standings as [`country_totals`], highest average first.
pub fn country_averages(totals: &[CountryStats]) -> Vec<CountryStats> {
    let mut stats = totals.to_vec();
    stats.sort_by(|a, b| by_descending(a.avg_score, b.avg_score, a, b));
    stats
}

fn by_descending(left: u64, right: u64, a: &CountryStats, b: &CountryStats) -> Ordering {
    right
        .cmp(&left)
        .then_with(|| a.nationality.cmp(&b.nationality))
}

fn rounded_mean(total: u64, count: u64) -> u64 {
    // Half rounds up, same as `Math.round` on positive numbers.
    (total + count / 2) / count
}

use crate::geo::consts::SCORE_TIERS;
use crate::geo::models::LatLng;
use serde::{Deserialize, Serialize};

/// Points for a guess `distance_km` away from the target. Non-increasing in
/// the distance and total over every `u64`.
pub fn score_for_distance(distance_km: u64) -> u64 {
    SCORE_TIERS
        .iter()
        .rev()
        .find(|(lower_bound, _)| distance_km >= *lower_bound)
        .map_or(SCORE_TIERS[0].1, |(_, points)| *points)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundResult {
    pub distance_km: u64,
    pub points: u64,
}

impl RoundResult {
    pub fn of_guess(guess: LatLng, target: LatLng) -> Self {
        let distance_km = guess.distance_km(&target);
        RoundResult {
            distance_km,
            points: score_for_distance(distance_km),
        }
    }
}

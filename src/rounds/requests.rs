use crate::geo::catalog::GameMode;
use crate::geo::models::LatLng;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct StartRoundQueryParams {
    #[serde(default)]
    pub mode: GameMode,
}

#[derive(Debug, Default, Deserialize)]
pub struct SubmitGuessRequestBody {
    /// Replaces the staged guess when present.
    #[serde(default)]
    pub guess: Option<LatLng>,
}

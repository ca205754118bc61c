use crate::app_context::AppContext;
use crate::leaderboard::consts::TOP_COUNTRIES;
use crate::leaderboard::models::{country_averages, country_totals};
use crate::leaderboard::responses::{
    CountryStandingsResponse, LeaderboardErrorCode, TopPlayersResponse,
};
use crate::storage::interface::IPlayerStorage;

pub struct LeaderboardHttpHandler<PS: IPlayerStorage> {
    app_context: AppContext<PS>,
}

impl<PS> LeaderboardHttpHandler<PS>
where
    PS: IPlayerStorage,
{
    pub fn new(app_context: AppContext<PS>) -> Self {
        Self { app_context }
    }

    pub async fn top_players(&self, limit: usize) -> TopPlayersResponse {
        match self.app_context.players.top_players(limit).await {
            Ok(players) => TopPlayersResponse {
                error: false,
                error_code: None,
                players: Some(players),
            },
            Err(err) => {
                tracing::error!("Failed to load the top players: {err}");
                TopPlayersResponse {
                    error: true,
                    error_code: Some(LeaderboardErrorCode::StorageUnavailable),
                    players: None,
                }
            }
        }
    }

    pub async fn countries(&self) -> CountryStandingsResponse {
        let scores = match self.app_context.players.nationality_scores().await {
            Ok(scores) => scores,
            Err(err) => {
                tracing::error!("Failed to load scores by nationality: {err}");
                return CountryStandingsResponse {
                    error: true,
                    error_code: Some(LeaderboardErrorCode::StorageUnavailable),
                    by_total: None,
                    by_average: None,
                };
            }
        };
        let mut by_total = country_totals(&scores);
        let mut by_average = country_averages(&by_total);
        by_total.truncate(TOP_COUNTRIES);
        by_average.truncate(TOP_COUNTRIES);
        CountryStandingsResponse {
            error: false,
            error_code: None,
            by_total: Some(by_total),
            by_average: Some(by_average),
        }
    }
}

pub const POSTGREST_API_KEY: &str = "POSTGREST_API_KEY";

pub const PLAYERS_TABLE: &str = "users";
pub const GAME_SESSIONS_TABLE: &str = "game_sessions";

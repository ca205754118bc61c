pub const DEFAULT_TOP_PLAYERS: usize = 10;
pub const MAX_TOP_PLAYERS: usize = 100;
pub const TOP_COUNTRIES: usize = 10;

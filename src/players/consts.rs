pub const DEFAULT_SESSIONS_PAGE: usize = 20;
pub const MAX_SESSIONS_PAGE: usize = 100;

pub mod consts;
pub mod env;
pub mod error;
pub mod interface;
pub mod memory;
pub mod postgrest;
pub mod rounds;
#[cfg(test)]
mod tests;

use crate::cli::Args;
use crate::storage::consts::POSTGREST_API_KEY;
use crate::storage::error::StorageError;
use crate::storage::postgrest::PostgrestPlayerStorage;
use crate::warn_if_env_var_is_missing;

/// The PostgREST backend, when a database URL was given.
pub fn init(args: &Args) -> Result<Option<PostgrestPlayerStorage>, StorageError> {
    let Some(postgrest_url) = &args.postgrest_url else {
        tracing::warn!("No PostgREST URL given. Players will be kept in memory.");
        return Ok(None);
    };
    warn_if_env_var_is_missing!(POSTGREST_API_KEY, "Requests to PostgREST will be anonymous.");
    let api_key = std::env::var(POSTGREST_API_KEY).ok();
    PostgrestPlayerStorage::new(postgrest_url, api_key).map(Some)
}

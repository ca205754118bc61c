use crate::auth::identity::MockOutcome;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    #[arg(long)]
    pub jwt_signing_key: String,
    /// NDJSON file replacing the built-in catalog of classic rounds.
    #[arg(long)]
    pub locations: Option<PathBuf>,
    /// NDJSON file replacing the built-in catalog of trivia rounds.
    #[arg(long)]
    pub trivia_locations: Option<PathBuf>,
    #[arg(long, value_delimiter = ',')]
    #[arg(default_value = "http://127.0.0.1:3000,http://localhost:3000")]
    pub allowed_origins: Vec<String>,
    /// Project URL of the PostgREST database. Players are kept in memory when
    /// it's not set.
    #[arg(long)]
    pub postgrest_url: Option<Url>,
    /// Answer of the mock identity wallet, for trying out failed logins.
    #[arg(long, value_enum)]
    #[arg(default_value_t = MockOutcome::Approve)]
    pub mock_identity_outcome: MockOutcome,
}

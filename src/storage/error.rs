use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("player `{0}` does not exist")]
    PlayerNotFound(String),

    #[error("request to the database failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("the database answered {status}: {body}")]
    Rejected { status: StatusCode, body: String },

    #[error("the database returned no rows for `{0}`")]
    EmptyResponse(&'static str),

    #[error("invalid database URL: {0}")]
    Url(#[from] url::ParseError),
}

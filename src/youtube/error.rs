use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("failed to build playlist request: {0}")]
    Request(#[source] reqwest::Error),
    #[error("{0}")]
    Transport(#[source] reqwest::Error),
    #[error("playlist request returned {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("malformed playlist response: {0}")]
    Malformed(#[from] serde_json::Error),
}

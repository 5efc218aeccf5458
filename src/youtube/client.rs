use crate::{config::Config, youtube::FeedError};
use reqwest::{Client, Request, StatusCode};

/// Status and body of a completed playlist request, before any parsing.
#[derive(Debug)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

pub struct YouTube<'a> {
    config: &'a Config,
    client: Client,
}

impl<'a> YouTube<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub fn config(&self) -> &'a Config {
        self.config
    }

    /// Prepares, but does not send, the playlistItems GET request.
    pub fn playlist_items_request(&self) -> Result<Request, FeedError> {
        let count = self.config.video_count.to_string();
        self.client
            .get(format!(
                "{}/playlistItems",
                self.config.api_base.trim_end_matches('/')
            ))
            .query(&[
                ("part", "snippet"),
                ("maxResults", count.as_str()),
                ("playlistId", self.config.playlist_id.as_str()),
                ("key", self.config.api_key.as_str()),
            ])
            .build()
            .map_err(FeedError::Request)
    }

    /// Sends the request and waits for it to complete. Any status is a
    /// completed request; only network failures are errors here.
    pub async fn fetch_playlist_items(&self) -> Result<RawResponse, FeedError> {
        let request = self.playlist_items_request()?;
        log::debug!("GET {}", request.url().path());

        let response = self
            .client
            .execute(request)
            .await
            .map_err(FeedError::Transport)?;
        let status = response.status();
        let body = response.text().await.map_err(FeedError::Transport)?;

        Ok(RawResponse { status, body })
    }
}

//! HTTP client for the published post feed.

use chrono::Utc;
use issueboard_core::post::{sort_newest_first, Post};

use crate::error::{ClientError, Result};

/// Path of the published feed, relative to the board's base URL.
const FEED_PATH: &str = "/data/posts.json";

/// HTTP client for the issueboard feed.
#[derive(Debug, Clone)]
pub struct BoardClient {
    client: reqwest::Client,
    base_url: String,
}

impl BoardClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch the published posts, newest first.
    ///
    /// The feed is a static file behind whatever caches the host puts in
    /// front of it, so every request carries a wall-clock cache-buster.
    /// A 404 means the feed has not been generated yet and yields an empty
    /// list rather than an error.
    pub async fn fetch_posts(&self) -> Result<Vec<Post>> {
        let cache_buster = Utc::now().timestamp_millis();
        let response = self
            .client
            .get(self.url(FEED_PATH))
            .query(&[("t", cache_buster.to_string())])
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            tracing::debug!("feed not found, treating as empty");
            return Ok(Vec::new());
        }
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::Feed {
                status: status.as_u16(),
                message,
            });
        }

        let text = response.text().await?;
        let mut posts: Vec<Post> = serde_json::from_str(&text)?;
        sort_newest_first(&mut posts);
        Ok(posts)
    }
}

//! Direct submission: create the tracker issue with an authenticated call.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use issueboard_core::PostPayload;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};

use super::{Outcome, SubmissionStrategy, ISSUE_TITLE};
use crate::error::{ClientError, Result};

const API_URL: &str = "https://api.github.com";
const ACCEPT_MEDIA_TYPE: &str = "application/vnd.github.v3+json";
const USER_AGENT_VALUE: &str = concat!("issueboard/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Creates the issue itself with a single authenticated POST.
///
/// Requires an access token configured out of band. Shipping that token in
/// a publicly served artifact would expose it; this strategy is only
/// suitable for private deployments, which is why the indirect strategy is
/// the default.
#[derive(Debug, Clone)]
pub struct DirectStrategy {
    client: reqwest::Client,
    api_url: String,
    owner: String,
    repo: String,
    token: String,
}

impl DirectStrategy {
    /// Create a strategy for `{owner}/{repo}`.
    ///
    /// Fails with [`ClientError::MissingToken`] when no token is
    /// configured, before any network attempt.
    pub fn new(
        owner: impl Into<String>,
        repo: impl Into<String>,
        token: Option<String>,
    ) -> Result<Self> {
        let token = token.filter(|t| !t.trim().is_empty()).ok_or_else(|| {
            tracing::error!("direct strategy selected but no access token is configured");
            ClientError::MissingToken
        })?;
        Ok(Self {
            client: reqwest::Client::new(),
            api_url: API_URL.to_string(),
            owner: owner.into(),
            repo: repo.into(),
            token,
        })
    }

    /// Override the API base URL.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    fn issues_url(&self) -> String {
        format!("{}/repos/{}/{}/issues", self.api_url, self.owner, self.repo)
    }
}

#[async_trait]
impl SubmissionStrategy for DirectStrategy {
    async fn dispatch(&self, payload: &PostPayload) -> Result<Outcome> {
        let title = format!(
            "{} {}",
            ISSUE_TITLE,
            Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
        );
        let body = payload.to_json()?;

        // Single attempt: no retry, no backoff.
        let response = self
            .client
            .post(self.issues_url())
            .header(AUTHORIZATION, format!("token {}", self.token))
            .header(ACCEPT, ACCEPT_MEDIA_TYPE)
            .header(USER_AGENT, USER_AGENT_VALUE)
            .timeout(REQUEST_TIMEOUT)
            .json(&serde_json::json!({ "title": title, "body": body }))
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::CREATED {
            tracing::info!("issue created");
            return Ok(Outcome {
                message: "Post submitted.".to_string(),
            });
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        tracing::error!(status = status.as_u16(), body = %message, "issue creation failed");
        Err(ClientError::Submission {
            status: status.as_u16(),
            message,
        })
    }
}

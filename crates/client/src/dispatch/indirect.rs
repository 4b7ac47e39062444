//! Indirect submission: open a pre-filled compose-new-issue page.

use async_trait::async_trait;
use issueboard_core::PostPayload;

use super::{Outcome, SubmissionStrategy, ISSUE_TITLE};
use crate::error::{ClientError, Result};

/// Opens the tracker's compose form in the user's browser with the title
/// and JSON payload pre-filled. No network request is made here; the post
/// only lands if the user completes the hosted form, which this client
/// cannot observe, so dispatch always reports optimistic success.
#[derive(Debug, Clone)]
pub struct IndirectStrategy {
    tracker_url: String,
    owner: String,
    repo: String,
}

impl IndirectStrategy {
    /// Create a strategy targeting `https://github.com/{owner}/{repo}`.
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            tracker_url: "https://github.com".to_string(),
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Override the tracker base URL.
    pub fn with_tracker_url(mut self, tracker_url: impl Into<String>) -> Self {
        self.tracker_url = tracker_url.into();
        self
    }

    /// Build the compose-new-issue URL for a payload.
    ///
    /// The title and JSON body go into query parameters, so they are
    /// percent-encoded here; markup escaping does not apply to URLs.
    fn compose_url(&self, payload: &PostPayload) -> Result<String> {
        let json = payload.to_json()?;
        Ok(format!(
            "{}/{}/{}/issues/new?title={}&body={}",
            self.tracker_url,
            self.owner,
            self.repo,
            urlencoding::encode(ISSUE_TITLE),
            urlencoding::encode(&json),
        ))
    }
}

#[async_trait]
impl SubmissionStrategy for IndirectStrategy {
    async fn dispatch(&self, payload: &PostPayload) -> Result<Outcome> {
        let url = self.compose_url(payload)?;
        tracing::info!(url = %url, "opening tracker compose page");
        open::that(&url).map_err(|err| ClientError::Browser(err.to_string()))?;
        Ok(Outcome {
            message: "Opened the tracker's new-issue page. Click \"Submit new issue\" to finish."
                .to_string(),
        })
    }
}

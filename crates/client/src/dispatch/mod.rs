//! Submission dispatch: how a new post reaches the issue tracker.
//!
//! Two interchangeable strategies share the surrounding flow: the indirect
//! one opens a pre-filled compose page in the browser, the direct one
//! creates the issue itself with an authenticated API call. Which one runs
//! is a deployment choice, so the flow works against the
//! [`SubmissionStrategy`] trait.

pub mod direct;
pub mod indirect;

use async_trait::async_trait;
use issueboard_core::{CredentialStore, Credentials, PostPayload};

use crate::error::{ClientError, Result};
use crate::notify::{Kind, Notifier};

pub use direct::DirectStrategy;
pub use indirect::IndirectStrategy;

/// Fixed title for indirect submissions, recognized by the ingestion job.
pub const ISSUE_TITLE: &str = "BBS Post Request";

/// What a strategy reports back after dispatching.
#[derive(Debug, Clone)]
pub struct Outcome {
    /// User-facing confirmation message.
    pub message: String,
}

/// A way of getting a post payload into the issue tracker.
#[async_trait]
pub trait SubmissionStrategy: Send + Sync {
    async fn dispatch(&self, payload: &PostPayload) -> Result<Outcome>;
}

/// Validate and trim the three submission fields.
///
/// Every field must be non-empty after trimming; the first empty one is
/// reported and no strategy runs.
pub fn validate(user_id: &str, trip_key: &str, body: &str) -> Result<PostPayload> {
    let user_id = user_id.trim();
    let trip_key = trip_key.trim();
    let body = body.trim();

    if user_id.is_empty() {
        return Err(ClientError::Validation { field: "user id" });
    }
    if trip_key.is_empty() {
        return Err(ClientError::Validation { field: "trip key" });
    }
    if body.is_empty() {
        return Err(ClientError::Validation { field: "body" });
    }

    Ok(PostPayload {
        user_id: user_id.to_string(),
        trip_key: trip_key.to_string(),
        body: body.to_string(),
    })
}

/// Run a full submission: validate, dispatch, notify, persist credentials.
///
/// Credentials are saved only after the strategy reports success, so a
/// failed attempt leaves the stored pair untouched. Every failure path
/// emits both a tracing diagnostic and a user-visible notification.
pub async fn submit(
    strategy: &dyn SubmissionStrategy,
    store: &dyn CredentialStore,
    notifier: &Notifier,
    user_id: &str,
    trip_key: &str,
    body: &str,
) -> Result<()> {
    let payload = match validate(user_id, trip_key, body) {
        Ok(payload) => payload,
        Err(err) => {
            tracing::warn!(error = %err, "submission rejected");
            notifier.notify(Kind::Error, &err.to_string());
            return Err(err);
        }
    };

    match strategy.dispatch(&payload).await {
        Ok(outcome) => {
            notifier.notify(Kind::Success, &outcome.message);
            // The post is already out; a store failure must not undo that,
            // only lose the pre-fill for next time.
            if let Err(err) = store.save(&Credentials {
                user_id: payload.user_id.clone(),
                trip_key: payload.trip_key.clone(),
            }) {
                tracing::warn!(error = %err, "failed to persist credentials");
                notifier.notify(Kind::Error, "Could not save credentials for next time.");
            }
            Ok(())
        }
        Err(err) => {
            tracing::error!(error = %err, "submission failed");
            notifier.notify(Kind::Error, &err.to_string());
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubStrategy {
        calls: AtomicUsize,
        fail: bool,
    }

    impl StubStrategy {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail,
            }
        }
    }

    #[async_trait]
    impl SubmissionStrategy for StubStrategy {
        async fn dispatch(&self, _payload: &PostPayload) -> Result<Outcome> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(ClientError::Submission {
                    status: 422,
                    message: "Validation Failed".to_string(),
                })
            } else {
                Ok(Outcome {
                    message: "ok".to_string(),
                })
            }
        }
    }

    #[test]
    fn test_validate_trims_fields() {
        let payload = validate("  alice ", " key1 ", " hello ").unwrap();
        assert_eq!(payload.user_id, "alice");
        assert_eq!(payload.trip_key, "key1");
        assert_eq!(payload.body, "hello");
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        for (user_id, trip_key, body, field) in [
            ("", "k", "b", "user id"),
            ("   ", "k", "b", "user id"),
            ("u", "\t", "b", "trip key"),
            ("u", "k", " \n ", "body"),
        ] {
            match validate(user_id, trip_key, body) {
                Err(ClientError::Validation { field: got }) => assert_eq!(got, field),
                other => panic!("expected validation error, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_submit_blank_field_never_dispatches() {
        let strategy = StubStrategy::new(false);
        let store = MemoryStore::new();
        let notifier = Notifier::new(true);

        let result = submit(&strategy, &store, &notifier, "alice", "  ", "hi").await;
        assert!(matches!(result, Err(ClientError::Validation { .. })));
        assert_eq!(strategy.calls.load(Ordering::SeqCst), 0);
        assert!(store.load().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_submit_success_persists_credentials() {
        let strategy = StubStrategy::new(false);
        let store = MemoryStore::new();
        let notifier = Notifier::new(true);

        submit(&strategy, &store, &notifier, "alice", "key1", "hi")
            .await
            .unwrap();
        let saved = store.load().unwrap().unwrap();
        assert_eq!(saved.user_id, "alice");
        assert_eq!(saved.trip_key, "key1");
    }

    #[tokio::test]
    async fn test_submit_failure_persists_nothing() {
        let strategy = StubStrategy::new(true);
        let store = MemoryStore::new();
        let notifier = Notifier::new(true);

        let result = submit(&strategy, &store, &notifier, "alice", "key1", "hi").await;
        assert!(matches!(result, Err(ClientError::Submission { .. })));
        assert!(store.load().unwrap().is_none());
    }
}

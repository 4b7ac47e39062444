//! Credential persistence contract.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed storage key for the user id, shared with the browser original.
pub const USER_ID_KEY: &str = "bbs_user_id";
/// Fixed storage key for the trip key.
pub const TRIP_KEY_KEY: &str = "bbs_trip_key";

/// The identity pair a poster supplies with every submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub user_id: String,
    pub trip_key: String,
}

/// Errors that can occur while persisting or loading credentials.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No usable storage location: {0}")]
    NoStorageLocation(String),
}

/// Result type for credential store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Process-wide keyed store for the credential pair.
///
/// Exactly two values live under the fixed keys [`USER_ID_KEY`] and
/// [`TRIP_KEY_KEY`]: absent until the first save, unconditionally
/// overwritten on every save, no expiry. Injected rather than ambient so
/// tests can substitute an in-memory stand-in.
pub trait CredentialStore: Send + Sync {
    /// Persist the pair, replacing whatever was stored before.
    fn save(&self, credentials: &Credentials) -> Result<()>;

    /// Load the previously saved pair, or `None` if nothing was ever saved.
    fn load(&self) -> Result<Option<Credentials>>;

    /// Remove the persisted pair, if any.
    fn clear(&self) -> Result<()>;
}

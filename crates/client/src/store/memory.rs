//! In-memory credential storage for tests and embedding.

use std::sync::{Arc, Mutex};

use issueboard_core::credentials::{CredentialStore, Credentials, Result};

/// In-memory credential store.
///
/// Holds the pair in an `Arc<Mutex<_>>`; nothing is persisted and the pair
/// is lost when the store is dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Option<Credentials>>>,
}

impl MemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryStore {
    fn save(&self, credentials: &Credentials) -> Result<()> {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        *inner = Some(credentials.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<Credentials>> {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        Ok(inner.clone())
    }

    fn clear(&self) -> Result<()> {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        *inner = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_none());

        let credentials = Credentials {
            user_id: "alice".to_string(),
            trip_key: "key1".to_string(),
        };
        store.save(&credentials).unwrap();
        assert_eq!(store.load().unwrap(), Some(credentials));

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }
}

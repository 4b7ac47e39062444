//! File-backed credential storage.

use std::fs;
use std::path::PathBuf;

use issueboard_core::credentials::{
    CredentialStore, Credentials, Result, StoreError, TRIP_KEY_KEY, USER_ID_KEY,
};
use serde_json::Value;

/// Credential store backed by a JSON file.
///
/// The file holds exactly the two fixed keys under
/// `<config_dir>/issueboard/credentials.json`. There is no further
/// namespacing: two deployments sharing a config directory share the same
/// pair, mirroring the single-origin store of the browser original.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store at an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create the store at the platform config directory.
    pub fn from_config_dir() -> Result<Self> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            StoreError::NoStorageLocation("no config directory on this platform".to_string())
        })?;
        Ok(Self::new(config_dir.join("issueboard").join("credentials.json")))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl CredentialStore for FileStore {
    fn save(&self, credentials: &Credentials) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut map = serde_json::Map::new();
        map.insert(
            USER_ID_KEY.to_string(),
            Value::String(credentials.user_id.clone()),
        );
        map.insert(
            TRIP_KEY_KEY.to_string(),
            Value::String(credentials.trip_key.clone()),
        );
        fs::write(&self.path, serde_json::to_string_pretty(&map)?)?;
        Ok(())
    }

    fn load(&self) -> Result<Option<Credentials>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let value: Value = serde_json::from_str(&contents)?;
        let user_id = value.get(USER_ID_KEY).and_then(Value::as_str);
        let trip_key = value.get(TRIP_KEY_KEY).and_then(Value::as_str);
        match (user_id, trip_key) {
            (Some(user_id), Some(trip_key)) => Ok(Some(Credentials {
                user_id: user_id.to_string(),
                trip_key: trip_key.to_string(),
            })),
            _ => Ok(None),
        }
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

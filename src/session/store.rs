use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};

/// Bearer credential for outgoing requests. Absent means unauthenticated.
pub const ACCESS_TOKEN: &str = "access_token";

/// Display identity of the logged-in user.
pub const USER_EMAIL: &str = "user_email";

/// Identity reference of the logged-in user.
pub const USER_ID: &str = "user_id";

/// Key-value store holding the session identity fields.
///
/// Injected wherever session state is read or cleared so callers never reach
/// for ambient global storage. Values are opaque strings with no schema
/// versioning.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Session store backed by a flat JSON map on disk.
///
/// The whole map is rewritten on every mutation. No cross-process locking;
/// the expected access pattern is a single client process per store file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>> {
        if self.path.exists() {
            let contents = std::fs::read_to_string(&self.path)
                .context("Failed to read session store file")?;
            serde_json::from_str(&contents).context("Failed to parse session store file")
        } else {
            Ok(BTreeMap::new())
        }
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(map)?;
        std::fs::write(&self.path, contents).context("Failed to write session store file")?;
        Ok(())
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_map()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut map = self.read_map()?;
        if map.remove(key).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }
}

/// In-process session store, used in tests and by embedders that manage
/// persistence themselves.
#[derive(Default)]
pub struct MemoryStore {
    map: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let map = self.map.lock().unwrap_or_else(|e| e.into_inner());
        Ok(map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut map = self.map.lock().unwrap_or_else(|e| e.into_inner());
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut map = self.map.lock().unwrap_or_else(|e| e.into_inner());
        map.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get(ACCESS_TOKEN).unwrap(), None);

        store.set(ACCESS_TOKEN, "tok-123").unwrap();
        assert_eq!(store.get(ACCESS_TOKEN).unwrap().as_deref(), Some("tok-123"));

        store.remove(ACCESS_TOKEN).unwrap();
        assert_eq!(store.get(ACCESS_TOKEN).unwrap(), None);
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = FileStore::new(path.clone());
        store.set(USER_EMAIL, "ada@example.com").unwrap();
        store.set(USER_ID, "42").unwrap();

        let reopened = FileStore::new(path);
        assert_eq!(
            reopened.get(USER_EMAIL).unwrap().as_deref(),
            Some("ada@example.com")
        );
        assert_eq!(reopened.get(USER_ID).unwrap().as_deref(), Some("42"));
    }

    #[test]
    fn test_file_store_remove_missing_key_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("session.json"));
        store.remove(ACCESS_TOKEN).unwrap();
        assert_eq!(store.get(ACCESS_TOKEN).unwrap(), None);
    }
}

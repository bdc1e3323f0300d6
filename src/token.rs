//! Pluggable persistence for the OAuth2 bearer token and its expiry.
//!
//! Two backings are provided: [`FileStore`] keeps a small JSON record on disk
//! and checks the expiry at read time; [`CacheStore`] delegates to a key-value
//! cache with native TTL support, so the cache itself enforces expiry.
//!
//! Stores are not coordinated: two callers observing an absent token may both
//! fetch and both write. Last write wins, which is redundant but harmless.

use crate::error::Result;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Persistence contract for an access token.
///
/// After `set(t, ttl)`, `get()` returns `t` until `ttl` seconds elapse or
/// `expire()` is called; afterwards it returns `None`.
pub trait TokenStore {
    fn set(&self, token: &str, ttl_secs: u64) -> Result<()>;
    fn get(&self) -> Result<Option<String>>;
    fn expire(&self) -> Result<()>;
}

/// On-disk record: token plus absolute expiry in unix seconds
#[derive(Debug, Serialize, Deserialize)]
struct TokenRecord {
    token: String,
    expiry: i64,
}

/// File-backed token store.
///
/// A token is usable only while the stored expiry is strictly in the future;
/// a missing, empty, or garbled record reads as absent.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileStore {
    fn default() -> Self {
        FileStore::new(std::env::temp_dir().join("adposting-token"))
    }
}

impl TokenStore for FileStore {
    fn set(&self, token: &str, ttl_secs: u64) -> Result<()> {
        let record = TokenRecord {
            token: token.to_string(),
            expiry: Utc::now().timestamp() + ttl_secs as i64,
        };
        std::fs::write(&self.path, serde_json::to_vec(&record)?)?;
        Ok(())
    }

    fn get(&self) -> Result<Option<String>> {
        let content = match std::fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_slice::<TokenRecord>(&content) {
            Ok(record) if record.expiry > Utc::now().timestamp() => Ok(Some(record.token)),
            _ => Ok(None),
        }
    }

    fn expire(&self) -> Result<()> {
        std::fs::write(&self.path, b"")?;
        Ok(())
    }
}

/// Key-value cache with SETEX/GET/DEL semantics; the cache owns TTL
/// enforcement. Implement this for a Redis-style client to back
/// [`CacheStore`] with a shared cache.
pub trait Cache {
    fn setex(&self, key: &str, ttl_secs: u64, value: &str) -> Result<()>;
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn del(&self, key: &str) -> Result<()>;
}

/// Token store delegating persistence and expiry to a [`Cache`]
pub struct CacheStore<C: Cache> {
    cache: C,
    key: String,
}

impl<C: Cache> CacheStore<C> {
    pub fn new(cache: C) -> Self {
        CacheStore::with_key(cache, "adposting-token")
    }

    pub fn with_key(cache: C, key: impl Into<String>) -> Self {
        CacheStore {
            cache,
            key: key.into(),
        }
    }
}

impl<C: Cache> TokenStore for CacheStore<C> {
    fn set(&self, token: &str, ttl_secs: u64) -> Result<()> {
        self.cache.setex(&self.key, ttl_secs, token)
    }

    fn get(&self) -> Result<Option<String>> {
        self.cache.get(&self.key)
    }

    fn expire(&self) -> Result<()> {
        self.cache.del(&self.key)
    }
}

/// In-process [`Cache`] holding entries with a per-entry deadline
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, (String, i64)>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        MemoryCache::default()
    }
}

impl Cache for MemoryCache {
    fn setex(&self, key: &str, ttl_secs: u64, value: &str) -> Result<()> {
        let deadline = Utc::now().timestamp() + ttl_secs as i64;
        self.entries
            .lock()
            .expect("cache mutex poisoned")
            .insert(key.to_string(), (value.to_string(), deadline));
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().expect("cache mutex poisoned");
        Ok(entries
            .get(key)
            .filter(|(_, deadline)| *deadline > Utc::now().timestamp())
            .map(|(value, _)| value.clone()))
    }

    fn del(&self, key: &str) -> Result<()> {
        self.entries
            .lock()
            .expect("cache mutex poisoned")
            .remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_store() -> (tempfile::TempDir, FileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("token"));
        (dir, store)
    }

    #[test]
    fn test_file_store_set_get() {
        let (_dir, store) = file_store();
        store.set("abc", 3600).unwrap();
        assert_eq!(store.get().unwrap(), Some("abc".to_string()));
    }

    #[test]
    fn test_file_store_expire() {
        let (_dir, store) = file_store();
        store.set("abc", 3600).unwrap();
        store.expire().unwrap();
        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn test_file_store_zero_ttl_already_expired() {
        let (_dir, store) = file_store();
        store.set("abc", 0).unwrap();
        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn test_file_store_missing_file() {
        let (_dir, store) = file_store();
        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn test_file_store_garbled_record() {
        let (_dir, store) = file_store();
        std::fs::write(store.path(), b"not json").unwrap();
        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn test_file_store_overwrite() {
        let (_dir, store) = file_store();
        store.set("abc", 3600).unwrap();
        store.set("def", 3600).unwrap();
        assert_eq!(store.get().unwrap(), Some("def".to_string()));
    }

    #[test]
    fn test_cache_store_set_get_expire() {
        let store = CacheStore::new(MemoryCache::new());
        store.set("abc", 3600).unwrap();
        assert_eq!(store.get().unwrap(), Some("abc".to_string()));
        store.expire().unwrap();
        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn test_cache_store_zero_ttl_already_expired() {
        let store = CacheStore::new(MemoryCache::new());
        store.set("abc", 0).unwrap();
        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn test_cache_store_custom_key_isolated() {
        let cache = MemoryCache::new();
        cache.setex("other", 3600, "zzz").unwrap();
        let store = CacheStore::with_key(cache, "mine");
        assert_eq!(store.get().unwrap(), None);
        store.set("abc", 3600).unwrap();
        assert_eq!(store.get().unwrap(), Some("abc".to_string()));
    }
}

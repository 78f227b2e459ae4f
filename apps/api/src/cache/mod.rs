//! Local Cache — small key/value store for the last quote and display preferences.
//!
//! Default: `MemoryCache` (process lifetime only).
//! `FileCache` keeps the same map on disk so the last quote survives a restart.
//!
//! `AppState` holds an `Arc<dyn LocalCache>`, chosen at startup via `QUOTE_CACHE_PATH`.

pub mod file;

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

pub use file::FileCache;

/// Key holding the most recent quote text.
pub const QUOTE_KEY: &str = "quote";
/// Key holding the dark-mode display preference (`"true"` / `"false"`).
pub const DARK_MODE_KEY: &str = "dark_mode";

/// Single-slot-per-key cache. Writes overwrite; last writer wins.
#[async_trait]
pub trait LocalCache: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: String) -> Result<()>;
}

// ────────────────────────────────────────────────────────────────────────────
// MemoryCache
// ────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LocalCache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }
}

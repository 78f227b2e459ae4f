use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::info;

use crate::cache::LocalCache;

/// JSON-file-backed cache. The whole map is held in memory and rewritten on every `set`.
pub struct FileCache {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileCache {
    /// Opens the cache file, starting empty if it does not exist yet.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let entries: HashMap<String, String> = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => serde_json::from_str(&raw)
                .with_context(|| format!("Cache file '{}' is not valid JSON", path.display()))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read cache file '{}'", path.display()));
            }
        };

        info!("File cache opened at {} ({} keys)", path.display(), entries.len());
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }
}

#[async_trait]
impl LocalCache for FileCache {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        // Hold the lock across the write so concurrent sets land on disk in order.
        let mut entries = self.entries.lock().await;
        entries.insert(key.to_string(), value);

        let raw = serde_json::to_string_pretty(&*entries)?;
        tokio::fs::write(&self.path, raw)
            .await
            .with_context(|| format!("Failed to write cache file '{}'", self.path.display()))
    }
}

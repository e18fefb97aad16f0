pub mod blob;
pub mod kv;
pub mod memory;

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::config::AppConfig;
use crate::db;
use crate::models::StorageDocument;

pub use blob::BlobStore;
pub use kv::KvStore;
pub use memory::MemoryStore;

/// Whole-document persistence. Writes always replace the full document.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    fn name(&self) -> &'static str;
    async fn read(&self) -> anyhow::Result<StorageDocument>;
    async fn write(&self, doc: &StorageDocument) -> anyhow::Result<()>;
}

/// Picks a backend from config, falling back to memory when the chosen
/// backend has no credentials.
pub fn from_config(config: &AppConfig) -> anyhow::Result<Arc<dyn StorageBackend>> {
    let requested = config.storage_backend.as_deref().unwrap_or_else(|| {
        if config.kv_database_url.is_some() {
            "kv"
        } else if config.blob_url.is_some() && config.blob_token.is_some() {
            "blob"
        } else {
            "memory"
        }
    });

    let store: Arc<dyn StorageBackend> = match requested {
        "kv" => match &config.kv_database_url {
            Some(path) => {
                let conn = db::init_db(path)?;
                Arc::new(KvStore::new(Arc::new(Mutex::new(conn))))
            }
            None => {
                tracing::warn!("KV_DATABASE_URL not set, falling back to in-memory storage");
                Arc::new(MemoryStore::new())
            }
        },
        "blob" => match (&config.blob_url, &config.blob_token) {
            (Some(url), Some(token)) => Arc::new(BlobStore::new(url.clone(), token.clone())),
            _ => {
                tracing::warn!(
                    "BLOB_URL or BLOB_READ_WRITE_TOKEN not set, falling back to in-memory storage"
                );
                Arc::new(MemoryStore::new())
            }
        },
        "memory" => Arc::new(MemoryStore::new()),
        other => anyhow::bail!("unknown STORAGE_BACKEND: {other}"),
    };

    Ok(store)
}

use std::sync::Mutex;

use anyhow::anyhow;
use async_trait::async_trait;

use super::StorageBackend;
use crate::models::StorageDocument;

/// Process-lifetime document, used when no external store is configured.
#[derive(Default)]
pub struct MemoryStore {
    doc: Mutex<StorageDocument>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageBackend for MemoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn read(&self) -> anyhow::Result<StorageDocument> {
        let doc = self
            .doc
            .lock()
            .map_err(|_| anyhow!("memory store lock poisoned"))?;
        Ok(doc.clone())
    }

    async fn write(&self, doc: &StorageDocument) -> anyhow::Result<()> {
        let mut current = self
            .doc
            .lock()
            .map_err(|_| anyhow!("memory store lock poisoned"))?;
        *current = doc.clone();
        Ok(())
    }
}

use anyhow::Context;
use async_trait::async_trait;
use reqwest::StatusCode;

use super::StorageBackend;
use crate::models::StorageDocument;

/// Single JSON document kept in an HTTP object store.
///
/// Reads never fail: an unreachable store or an unreadable document yields
/// the empty default so the scheduler stays usable. Writes do surface errors.
pub struct BlobStore {
    url: String,
    token: String,
    client: reqwest::Client,
}

impl BlobStore {
    pub fn new(url: String, token: String) -> Self {
        Self {
            url,
            token,
            client: reqwest::Client::new(),
        }
    }

    async fn fetch(&self) -> anyhow::Result<StorageDocument> {
        let res = self
            .client
            .get(&self.url)
            .bearer_auth(&self.token)
            .send()
            .await
            .context("failed to reach blob store")?;

        if res.status() == StatusCode::NOT_FOUND {
            tracing::debug!("blob not found, starting from an empty document");
            return Ok(StorageDocument::default());
        }

        let doc = res
            .error_for_status()
            .context("blob store returned error")?
            .json::<StorageDocument>()
            .await
            .context("failed to parse blob document")?;

        Ok(doc)
    }
}

#[async_trait]
impl StorageBackend for BlobStore {
    fn name(&self) -> &'static str {
        "blob"
    }

    async fn read(&self) -> anyhow::Result<StorageDocument> {
        match self.fetch().await {
            Ok(doc) => Ok(doc),
            Err(e) => {
                tracing::warn!(error = %format!("{e:#}"), "blob read failed, using empty document");
                Ok(StorageDocument::default())
            }
        }
    }

    async fn write(&self, doc: &StorageDocument) -> anyhow::Result<()> {
        self.client
            .put(&self.url)
            .bearer_auth(&self.token)
            .json(doc)
            .send()
            .await
            .context("failed to reach blob store")?
            .error_for_status()
            .context("blob store rejected write")?;

        Ok(())
    }
}

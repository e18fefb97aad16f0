use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Context};
use async_trait::async_trait;
use rusqlite::Connection;

use super::StorageBackend;
use crate::db::queries;
use crate::models::{Friend, MeetupInfo, StorageDocument};

const MEETUP_KEY: &str = "meetup";

fn availability_key(friend: Friend) -> String {
    format!("availability:{friend}")
}

/// Key/value layout: one JSON array per friend plus one meetup entry.
pub struct KvStore {
    db: Arc<Mutex<Connection>>,
}

impl KvStore {
    pub fn new(db: Arc<Mutex<Connection>>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StorageBackend for KvStore {
    fn name(&self) -> &'static str {
        "kv"
    }

    async fn read(&self) -> anyhow::Result<StorageDocument> {
        let db = self.db.lock().map_err(|_| anyhow!("kv store lock poisoned"))?;
        let mut doc = StorageDocument::default();

        for friend in Friend::ALL {
            let key = availability_key(friend);
            if let Some(raw) = queries::get_value(&db, &key)? {
                let dates: Vec<String> = serde_json::from_str(&raw)
                    .with_context(|| format!("corrupt entry for {key}"))?;
                doc.availability.set_dates(friend, dates);
            }
        }

        if let Some(raw) = queries::get_value(&db, MEETUP_KEY)? {
            doc.meetup = serde_json::from_str::<Option<MeetupInfo>>(&raw)
                .context("corrupt meetup entry")?;
        }

        Ok(doc)
    }

    async fn write(&self, doc: &StorageDocument) -> anyhow::Result<()> {
        let mut entries = Vec::with_capacity(Friend::COUNT + 1);
        for (friend, dates) in doc.availability.iter() {
            entries.push((availability_key(friend), serde_json::to_string(dates)?));
        }
        entries.push((MEETUP_KEY.to_string(), serde_json::to_string(&doc.meetup)?));

        let db = self.db.lock().map_err(|_| anyhow!("kv store lock poisoned"))?;
        queries::put_values(&db, &entries)
    }
}

use crate::models::MeetupInfo;
use crate::storage::StorageBackend;

pub async fn get(store: &dyn StorageBackend) -> anyhow::Result<Option<MeetupInfo>> {
    Ok(store.read().await?.meetup)
}

/// Replaces the meetup; `None` clears it.
pub async fn set(store: &dyn StorageBackend, meetup: Option<MeetupInfo>) -> anyhow::Result<()> {
    let mut doc = store.read().await?;
    match &meetup {
        Some(m) => tracing::info!(date = %m.date, time = %m.time, location = %m.location, "meetup updated"),
        None => tracing::info!("meetup cleared"),
    }
    doc.meetup = meetup;
    store.write(&doc).await
}

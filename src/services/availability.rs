use crate::models::{AvailabilityRecord, Friend};
use crate::storage::StorageBackend;

pub async fn get_all(store: &dyn StorageBackend) -> anyhow::Result<AvailabilityRecord> {
    Ok(store.read().await?.availability)
}

/// Flips `date` for `friend` and persists the whole document.
/// Returns the friend's updated, sorted list.
pub async fn toggle(
    store: &dyn StorageBackend,
    friend: Friend,
    date: &str,
) -> anyhow::Result<Vec<String>> {
    let mut doc = store.read().await?;
    let updated = doc.availability.toggle(friend, date).to_vec();
    store.write(&doc).await?;

    tracing::info!(friend = %friend, date = %date, selected = updated.iter().any(|d| d == date), "toggled availability");
    Ok(updated)
}

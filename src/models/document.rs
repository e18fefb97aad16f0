use serde::{Deserialize, Serialize};

use super::{AvailabilityRecord, MeetupInfo};

/// Root persisted object. Every mutation replaces the whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageDocument {
    #[serde(default)]
    pub availability: AvailabilityRecord,
    #[serde(default)]
    pub meetup: Option<MeetupInfo>,
}

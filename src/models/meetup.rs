use serde::{Deserialize, Serialize};

/// The group's next meetup. Fields are free text and are not validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetupInfo {
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub location: String,
}

pub mod availability;
pub mod document;
pub mod friend;
pub mod meetup;

pub use availability::{parse_iso_date, AvailabilityRecord};
pub use document::StorageDocument;
pub use friend::Friend;
pub use meetup::MeetupInfo;

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Friend;

/// Per-friend sorted date lists. Every friend always has an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, Vec<String>>",
    into = "BTreeMap<Friend, Vec<String>>"
)]
pub struct AvailabilityRecord {
    dates: [Vec<String>; Friend::COUNT],
}

impl AvailabilityRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dates(&self, friend: Friend) -> &[String] {
        &self.dates[friend.index()]
    }

    /// Replaces a friend's list, restoring the sorted/deduplicated invariant.
    pub fn set_dates(&mut self, friend: Friend, mut dates: Vec<String>) {
        dates.sort();
        dates.dedup();
        self.dates[friend.index()] = dates;
    }

    pub fn contains(&self, friend: Friend, date: &str) -> bool {
        self.dates(friend).iter().any(|d| d == date)
    }

    /// Removes `date` if the friend already has it, inserts it otherwise.
    pub fn toggle(&mut self, friend: Friend, date: &str) -> &[String] {
        let list = &mut self.dates[friend.index()];
        match list.iter().position(|d| d == date) {
            Some(idx) => {
                list.remove(idx);
            }
            None => {
                list.push(date.to_string());
                list.sort();
            }
        }
        list
    }

    /// Number of friends available on `date`.
    pub fn count_on(&self, date: &str) -> usize {
        Friend::ALL
            .iter()
            .filter(|f| self.contains(**f, date))
            .count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Friend, &[String])> {
        Friend::ALL.iter().map(|f| (*f, self.dates(*f)))
    }
}

impl From<BTreeMap<String, Vec<String>>> for AvailabilityRecord {
    fn from(raw: BTreeMap<String, Vec<String>>) -> Self {
        let mut record = AvailabilityRecord::new();
        for (key, dates) in raw {
            match Friend::parse(&key) {
                Some(friend) => record.set_dates(friend, dates),
                None => tracing::warn!(key = %key, "ignoring unknown friend in stored availability"),
            }
        }
        record
    }
}

impl From<AvailabilityRecord> for BTreeMap<Friend, Vec<String>> {
    fn from(record: AvailabilityRecord) -> Self {
        Friend::ALL.into_iter().zip(record.dates).collect()
    }
}

/// Parses a strict `YYYY-MM-DD` calendar date.
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    if s.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

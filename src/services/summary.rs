use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{parse_iso_date, AvailabilityRecord, Friend};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateSummary {
    pub date: String,
    pub friends: Vec<Friend>,
}

impl DateSummary {
    pub fn count(&self) -> usize {
        self.friends.len()
    }

    /// Short label such as `Thu, Oct 16`; unparseable dates are shown as-is.
    pub fn label(&self) -> String {
        parse_iso_date(&self.date)
            .map(|d| d.format("%a, %b %-d").to_string())
            .unwrap_or_else(|| self.date.clone())
    }
}

/// Groups friends by date, best-attended dates first, ties broken by date.
pub fn summarize(record: &AvailabilityRecord) -> Vec<DateSummary> {
    let mut by_date: BTreeMap<&str, Vec<Friend>> = BTreeMap::new();
    for (friend, dates) in record.iter() {
        for date in dates {
            by_date.entry(date.as_str()).or_default().push(friend);
        }
    }

    let mut summaries: Vec<DateSummary> = by_date
        .into_iter()
        .map(|(date, friends)| DateSummary {
            date: date.to_string(),
            friends,
        })
        .collect();

    summaries.sort_by(|a, b| {
        b.count()
            .cmp(&a.count())
            .then_with(|| a.date.cmp(&b.date))
    });
    summaries
}

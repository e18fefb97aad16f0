use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::Serialize;

use crate::models::{AvailabilityRecord, Friend};

#[derive(Debug, Clone, Serialize)]
pub struct DayCell {
    pub date: String,
    pub day: u32,
    pub is_today: bool,
    pub is_past: bool,
    pub is_selected: bool,
    pub count: usize,
    pub interactive: bool,
}

/// Seven-column month layout. `None` cells pad the first week so day 1
/// lands under its weekday (Sunday first).
#[derive(Debug, Clone, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub title: String,
    pub cells: Vec<Option<DayCell>>,
}

impl MonthGrid {
    pub fn leading_blanks(&self) -> usize {
        self.cells.iter().take_while(|c| c.is_none()).count()
    }

    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().flatten()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CalendarView {
    pub current_user: Option<Friend>,
    pub today: String,
    pub prev_month: String,
    pub next_month: String,
    pub months: Vec<MonthGrid>,
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.day0() as i64)
}

/// Parses `YYYY-MM` into the first day of that month.
pub fn parse_month(s: &str) -> Option<NaiveDate> {
    let (year, month) = s.trim().split_once('-')?;
    if year.len() != 4 || month.len() != 2 {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
}

pub fn format_month(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

pub fn build_month(
    month: NaiveDate,
    today: NaiveDate,
    current_user: Option<Friend>,
    record: &AvailabilityRecord,
) -> MonthGrid {
    let first = first_of_month(month);
    let today_str = today.format("%Y-%m-%d").to_string();
    let blanks = first.weekday().num_days_from_sunday() as usize;

    let mut cells: Vec<Option<DayCell>> = Vec::with_capacity(blanks + 31);
    cells.resize(blanks, None);

    for day in first.iter_days().take_while(|d| d.month() == first.month()) {
        let date = day.format("%Y-%m-%d").to_string();
        // ISO dates compare chronologically as strings
        let is_past = date < today_str;
        let is_selected = current_user
            .map(|f| record.contains(f, &date))
            .unwrap_or(false);

        cells.push(Some(DayCell {
            day: day.day(),
            is_today: date == today_str,
            is_past,
            is_selected,
            count: record.count_on(&date),
            interactive: !is_past && current_user.is_some(),
            date,
        }));
    }

    MonthGrid {
        year: first.year(),
        month: first.month(),
        title: first.format("%B %Y").to_string(),
        cells,
    }
}

/// The base month and the one after it, plus navigation targets.
pub fn build_view(
    base: NaiveDate,
    today: NaiveDate,
    current_user: Option<Friend>,
    record: &AvailabilityRecord,
) -> CalendarView {
    let first = first_of_month(base);
    let prev = first.checked_sub_months(Months::new(1)).unwrap_or(first);
    let next = first.checked_add_months(Months::new(1)).unwrap_or(first);

    CalendarView {
        current_user,
        today: today.format("%Y-%m-%d").to_string(),
        prev_month: format_month(prev),
        next_month: format_month(next),
        months: vec![
            build_month(first, today, current_user, record),
            build_month(next, today, current_user, record),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_thirty_day_month_starting_wednesday() {
        // April 2026 starts on a Wednesday
        let grid = build_month(date("2026-04-01"), date("2026-01-01"), None, &AvailabilityRecord::new());
        assert_eq!(grid.leading_blanks(), 3);
        assert_eq!(grid.cells.len(), 33);
        assert_eq!(grid.days().count(), 30);
        assert_eq!(grid.days().next().unwrap().date, "2026-04-01");
        assert_eq!(grid.days().last().unwrap().date, "2026-04-30");
        assert_eq!(grid.title, "April 2026");
    }

    #[test]
    fn test_month_starting_sunday_has_no_blanks() {
        let grid = build_month(date("2026-02-14"), date("2026-01-01"), None, &AvailabilityRecord::new());
        assert_eq!(grid.leading_blanks(), 0);
        assert_eq!(grid.days().count(), 28);
    }

    #[test]
    fn test_leap_february() {
        // 2024-02-01 is a Thursday
        let grid = build_month(date("2024-02-01"), date("2024-01-01"), None, &AvailabilityRecord::new());
        assert_eq!(grid.leading_blanks(), 4);
        assert_eq!(grid.days().count(), 29);
    }

    #[test]
    fn test_cell_flags() {
        let mut record = AvailabilityRecord::new();
        record.toggle(Friend::Dave, "2026-10-20");
        record.toggle(Friend::Nick, "2026-10-20");
        record.toggle(Friend::Dave, "2026-10-10");

        let grid = build_month(date("2026-10-01"), date("2026-10-16"), Some(Friend::Dave), &record);
        let cell = |d: &str| grid.days().find(|c| c.date == d).unwrap().clone();

        let past = cell("2026-10-10");
        assert!(past.is_past);
        assert!(past.is_selected);
        assert!(!past.interactive);

        let today = cell("2026-10-16");
        assert!(today.is_today);
        assert!(!today.is_past);
        assert!(today.interactive);

        let busy = cell("2026-10-20");
        assert_eq!(busy.count, 2);
        assert!(busy.is_selected);
        assert!(busy.interactive);
    }

    #[test]
    fn test_no_current_user_is_not_interactive() {
        let grid = build_month(date("2026-11-01"), date("2026-10-16"), None, &AvailabilityRecord::new());
        assert!(grid.days().all(|c| !c.interactive && !c.is_selected));
    }

    #[test]
    fn test_view_spans_year_boundary() {
        let view = build_view(date("2026-12-05"), date("2026-12-05"), None, &AvailabilityRecord::new());
        assert_eq!(view.months.len(), 2);
        assert_eq!((view.months[0].year, view.months[0].month), (2026, 12));
        assert_eq!((view.months[1].year, view.months[1].month), (2027, 1));
        assert_eq!(view.prev_month, "2026-11");
        assert_eq!(view.next_month, "2027-01");
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2026-04"), Some(date("2026-04-01")));
        assert_eq!(parse_month("2026-13"), None);
        assert_eq!(parse_month("2026-4"), None);
        assert_eq!(parse_month("april"), None);
    }
}

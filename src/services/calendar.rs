use chrono::{Duration, NaiveDateTime, NaiveTime, Utc};

use crate::models::{parse_iso_date, MeetupInfo};

const DEFAULT_DURATION_HOURS: i64 = 3;

/// Renders the meetup as a single-event iCalendar document.
///
/// A parseable `HH:MM` time gives a timed event of three hours; otherwise the
/// event is all-day. Returns `None` when the meetup date is not an ISO date.
pub fn generate_ics(meetup: &MeetupInfo) -> Option<String> {
    let date = parse_iso_date(&meetup.date)?;
    let dtstamp = Utc::now().format("%Y%m%dT%H%M%SZ").to_string();
    let uid = format!("meetup-{}@dev-scheduler", date.format("%Y%m%d"));

    let (dtstart, dtend) = match NaiveTime::parse_from_str(meetup.time.trim(), "%H:%M") {
        Ok(time) => {
            let start = NaiveDateTime::new(date, time);
            let end = start + Duration::hours(DEFAULT_DURATION_HOURS);
            (
                format!("DTSTART:{}", start.format("%Y%m%dT%H%M%S")),
                format!("DTEND:{}", end.format("%Y%m%dT%H%M%S")),
            )
        }
        Err(_) => {
            let end = date + Duration::days(1);
            (
                format!("DTSTART;VALUE=DATE:{}", date.format("%Y%m%d")),
                format!("DTEND;VALUE=DATE:{}", end.format("%Y%m%d")),
            )
        }
    };

    let mut ics = String::from(
        "BEGIN:VCALENDAR\r\n\
         VERSION:2.0\r\n\
         PRODID:-//Dev Scheduler//Meetup//EN\r\n\
         BEGIN:VEVENT\r\n",
    );
    ics.push_str(&format!("UID:{uid}\r\n"));
    ics.push_str(&format!("DTSTAMP:{dtstamp}\r\n"));
    ics.push_str(&format!("{dtstart}\r\n{dtend}\r\n"));
    ics.push_str("SUMMARY:Dev meetup\r\n");
    if !meetup.location.trim().is_empty() {
        ics.push_str(&format!("LOCATION:{}\r\n", escape_text(meetup.location.trim())));
    }
    ics.push_str("END:VEVENT\r\nEND:VCALENDAR\r\n");

    Some(ics)
}

fn escape_text(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace('\n', "\\n")
}

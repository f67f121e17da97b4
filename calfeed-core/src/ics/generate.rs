//! ICS file generation.

use chrono::NaiveDate;
use icalendar::{Calendar, Component, EventLike, Property, ValueType};

use crate::calendar::CalendarFeed;
use crate::error::CalFeedResult;
use crate::event::EventRecord;

/// Generate .ics content for a whole calendar feed
pub fn generate_calendar_ics(feed: &CalendarFeed) -> CalFeedResult<String> {
    let mut cal = Calendar::new();
    cal.name(feed.name());
    if let Some(tz) = feed.timezone() {
        cal.timezone(tz);
    }

    let uid_domain = uid_domain(feed.name());
    // DTSTAMP is fixed per feed so the output only changes when events do
    let dtstamp = feed.stamp().format("%Y%m%dT%H%M%SZ").to_string();

    for (seq, record) in feed.events().iter().enumerate() {
        let uid = format!("{}-{}@{}", seq + 1, record.start.format("%Y%m%d"), uid_domain);
        cal.push(build_event(record, &uid, &dtstamp));
    }

    let cal = cal.done();

    Ok(strip_ics_bloat(&cal.to_string(), feed.name()))
}

fn build_event(record: &EventRecord, uid: &str, dtstamp: &str) -> icalendar::Event {
    let mut ics_event = icalendar::Event::new();
    ics_event.uid(uid);
    ics_event.add_property("DTSTAMP", dtstamp);
    ics_event.summary(&record.title);

    add_date_property(&mut ics_event, "DTSTART", record.start);
    add_date_property(&mut ics_event, "DTEND", record.end);

    if let Some(ref desc) = record.description {
        ics_event.description(desc);
    }

    ics_event.done()
}

/// Slugified calendar name used as the right-hand side of every UID.
fn uid_domain(name: &str) -> String {
    let slug = slug::slugify(name);
    if slug.is_empty() {
        "calfeed".to_string()
    } else {
        slug
    }
}

/// Clean up ICS output from the icalendar crate
/// - Replace PRODID with one derived from the calendar name
/// - Remove CALSCALE:GREGORIAN (it's the default)
fn strip_ics_bloat(ics: &str, name: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str(&format!("PRODID:-//{}//\r\n", name));
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}

fn add_date_property(ics_event: &mut icalendar::Event, name: &str, date: NaiveDate) {
    let mut prop = Property::new(name, date.format("%Y%m%d").to_string());
    prop.append_parameter(ValueType::Date);
    ics_event.append_property(prop);
}

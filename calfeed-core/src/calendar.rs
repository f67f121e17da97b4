//! In-memory calendar that collects events before they are written out.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::error::{CalFeedError, CalFeedResult};
use crate::event::{DateInput, EventRecord};
use crate::ics::generate_calendar_ics;

/// Collects [`EventRecord`]s in insertion order and encodes them as one
/// VCALENDAR. No dedup and no sorting: two identical `add_event` calls
/// produce two VEVENTs.
#[derive(Debug, Clone)]
pub struct CalendarFeed {
    name: String,
    timezone: Option<String>,
    /// DTSTAMP shared by every event, fixed at construction so repeated
    /// serialization yields identical bytes.
    stamp: DateTime<Utc>,
    events: Vec<EventRecord>,
}

impl CalendarFeed {
    pub fn new(name: impl Into<String>) -> CalFeedResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CalFeedError::Config("Calendar name must not be empty".into()));
        }

        Ok(CalendarFeed {
            name,
            timezone: None,
            stamp: Utc::now(),
            events: Vec::new(),
        })
    }

    /// Advertise the calendar's timezone (X-WR-TIMEZONE).
    pub fn with_timezone(mut self, tz: impl Into<String>) -> Self {
        self.timezone = Some(tz.into());
        self
    }

    pub fn with_stamp(mut self, stamp: DateTime<Utc>) -> Self {
        self.stamp = stamp;
        self
    }

    /// Append one all-day event.
    ///
    /// Dates may be `NaiveDate`s or `YYYY-MM-DD` strings. Without an end the
    /// event lasts one day (`end == start`); a given end is kept as-is.
    pub fn add_event(
        &mut self,
        title: impl Into<String>,
        start: impl Into<DateInput>,
        end: Option<DateInput>,
        description: &str,
    ) -> CalFeedResult<()> {
        let start = start.into().resolve()?;
        let end = end.map(DateInput::resolve).transpose()?;

        let event = EventRecord::new(title, start, end, description)?;
        self.events.push(event);
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn timezone(&self) -> Option<&str> {
        self.timezone.as_deref()
    }

    pub fn stamp(&self) -> DateTime<Utc> {
        self.stamp
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn to_ics_string(&self) -> CalFeedResult<String> {
        generate_calendar_ics(self)
    }

    /// Encode the calendar as .ics bytes. Does not touch accumulated state.
    pub fn serialize(&self) -> CalFeedResult<Vec<u8>> {
        self.to_ics_string().map(String::into_bytes)
    }
}

impl fmt::Display for CalendarFeed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({} events)", self.name, self.events.len())
    }
}

//! All-day event records.
//!
//! Every event calfeed produces is an all-day entry. `end` follows the
//! exclusive-end convention: generators that span several days pass the day
//! after the last inclusive day, and the record keeps it exactly as given.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CalFeedError, CalFeedResult};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single all-day calendar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub title: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub description: Option<String>,
}

impl EventRecord {
    pub fn new(
        title: impl Into<String>,
        start: NaiveDate,
        end: Option<NaiveDate>,
        description: &str,
    ) -> CalFeedResult<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(CalFeedError::Format("Event title must not be empty".into()));
        }

        let end = end.unwrap_or(start);
        if end < start {
            return Err(CalFeedError::Format(format!(
                "Event '{}' ends ({}) before it starts ({})",
                title, end, start
            )));
        }

        let description = (!description.is_empty()).then(|| description.to_string());

        Ok(EventRecord {
            title,
            start,
            end,
            description,
        })
    }
}

/// A date given either as a parsed value or as an ISO `YYYY-MM-DD` string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    Date(NaiveDate),
    Text(String),
}

impl DateInput {
    pub fn resolve(self) -> CalFeedResult<NaiveDate> {
        match self {
            DateInput::Date(d) => Ok(d),
            DateInput::Text(s) => parse_date(&s),
        }
    }
}

impl From<NaiveDate> for DateInput {
    fn from(d: NaiveDate) -> Self {
        DateInput::Date(d)
    }
}

impl From<&str> for DateInput {
    fn from(s: &str) -> Self {
        DateInput::Text(s.to_string())
    }
}

impl From<String> for DateInput {
    fn from(s: String) -> Self {
        DateInput::Text(s)
    }
}

/// Parse YYYY-MM-DD
pub fn parse_date(s: &str) -> CalFeedResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(|_| {
        CalFeedError::Format(format!("Invalid date format '{}'. Expected YYYY-MM-DD", s))
    })
}

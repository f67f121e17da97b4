//! ICS file generation.
//!
//! This module turns a [`crate::calendar::CalendarFeed`] into RFC 5545 text.

mod generate;

pub use generate::generate_calendar_ics;

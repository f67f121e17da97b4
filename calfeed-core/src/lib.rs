//! Core library for calfeed.
//!
//! This crate provides everything the `calfeed` binary drives:
//! - `CalendarFeed` and `EventRecord`, the event accumulator and its .ics encoding
//! - `generators` for weather, holiday and reminder calendars
//! - `weather` for the forecast feed
//! - `config` and `tables` for settings and the static date tables

pub mod calendar;
pub mod config;
pub mod error;
pub mod event;
pub mod generators;
pub mod ics;
pub mod output;
pub mod tables;
pub mod weather;

pub use calendar::CalendarFeed;
pub use error::{CalFeedError, CalFeedResult};
pub use event::{DateInput, EventRecord};

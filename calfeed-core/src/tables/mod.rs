//! Static date tables.
//!
//! Rows are reproduced verbatim into events; nothing here is computed.
//! Dates stay as `YYYY-MM-DD` text until a generator feeds them to
//! [`crate::calendar::CalendarFeed::add_event`], so a malformed row
//! surfaces as a format error for the generator that owns it.

mod data;

use serde::{Deserialize, Serialize};

/// Statutory holiday: `days` consecutive days off starting at `start`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicHoliday {
    pub name: String,
    pub start: String,
    pub days: u32,
}

/// Single-day entry used for lunar festivals, solar terms, international
/// holidays and shopping festivals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Festival {
    pub name: String,
    pub date: String,
    #[serde(default)]
    pub description: String,
}

/// Countdown target. `end` is passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub name: String,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub description: String,
}

/// One slot of a weekly pattern. `weekday` is 0 = Monday .. 6 = Sunday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyItem {
    pub weekday: u8,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxDeadline {
    pub date: String,
    pub quarter: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialCalendar {
    pub year: i32,
    /// Day of month the salary lands on.
    pub payday: u32,
    pub payday_title: String,
    pub payday_description: String,
    pub tax_deadlines: Vec<TaxDeadline>,
    pub shopping_festivals: Vec<Festival>,
}

/// Every table the holiday and reminder generators read from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tables {
    #[serde(default = "data::public_holidays")]
    pub holidays: Vec<PublicHoliday>,

    #[serde(default = "data::lunar_festivals")]
    pub lunar_festivals: Vec<Festival>,

    #[serde(default = "data::solar_terms")]
    pub solar_terms: Vec<Festival>,

    #[serde(default = "data::international_holidays")]
    pub international_holidays: Vec<Festival>,

    #[serde(default = "data::countdowns")]
    pub countdowns: Vec<Milestone>,

    #[serde(default = "data::weekly_reminders")]
    pub weekly_reminders: Vec<WeeklyItem>,

    #[serde(default = "data::health_tips")]
    pub health_tips: Vec<WeeklyItem>,

    #[serde(default = "data::financial")]
    pub financial: FinancialCalendar,
}

impl Default for Tables {
    fn default() -> Self {
        Tables {
            holidays: data::public_holidays(),
            lunar_festivals: data::lunar_festivals(),
            solar_terms: data::solar_terms(),
            international_holidays: data::international_holidays(),
            countdowns: data::countdowns(),
            weekly_reminders: data::weekly_reminders(),
            health_tips: data::health_tips(),
            financial: data::financial(),
        }
    }
}

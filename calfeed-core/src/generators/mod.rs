//! Calendar generators.
//!
//! Each generator maps rows of a table (or days of a forecast) to events in
//! a fresh [`CalendarFeed`]. Writing the feed is the caller's job.

mod holidays;
mod reminders;
mod weather;

use std::fmt;

use chrono::{Days, NaiveDate};

use crate::calendar::CalendarFeed;
use crate::error::{CalFeedError, CalFeedResult};
use crate::tables::Tables;

pub use holidays::{international_holidays, lunar_festivals, public_holidays, solar_terms};
pub use reminders::{
    countdown, financial_calendar, health_reminders, next_weekday_on_or_after, weekly_pattern,
    weekly_reminder,
};
pub use weather::{CityOutcome, generate_weather_calendars, generate_weather_events};

/// Inputs shared by the table-driven generators.
#[derive(Debug, Clone, Copy)]
pub struct GenerationContext<'a> {
    pub tables: &'a Tables,
    /// "Today" in the configured timezone.
    pub today: NaiveDate,
    pub reminder_weeks: u32,
    pub timezone: &'a str,
}

/// The eight calendars built purely from static tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableCalendar {
    Holidays,
    LunarFestivals,
    SolarTerms,
    InternationalHolidays,
    Countdown,
    WeeklyReminder,
    HealthReminders,
    FinancialCalendar,
}

impl TableCalendar {
    pub const HOLIDAY_FAMILY: [TableCalendar; 4] = [
        TableCalendar::Holidays,
        TableCalendar::LunarFestivals,
        TableCalendar::SolarTerms,
        TableCalendar::InternationalHolidays,
    ];

    pub const REMINDER_FAMILY: [TableCalendar; 4] = [
        TableCalendar::Countdown,
        TableCalendar::WeeklyReminder,
        TableCalendar::HealthReminders,
        TableCalendar::FinancialCalendar,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            TableCalendar::Holidays => "holidays.ics",
            TableCalendar::LunarFestivals => "lunar_festivals.ics",
            TableCalendar::SolarTerms => "solar_terms.ics",
            TableCalendar::InternationalHolidays => "international_holidays.ics",
            TableCalendar::Countdown => "countdown.ics",
            TableCalendar::WeeklyReminder => "weekly_reminder.ics",
            TableCalendar::HealthReminders => "health_reminders.ics",
            TableCalendar::FinancialCalendar => "financial_calendar.ics",
        }
    }

    /// Calendar label (PRODID / X-WR-CALNAME).
    pub fn calendar_name(self) -> &'static str {
        match self {
            TableCalendar::Holidays => "中国法定节假日",
            TableCalendar::LunarFestivals => "中国传统节日",
            TableCalendar::SolarTerms => "二十四节气",
            TableCalendar::InternationalHolidays => "国际节日",
            TableCalendar::Countdown => "重要日期倒计时",
            TableCalendar::WeeklyReminder => "每周提醒",
            TableCalendar::HealthReminders => "健康提醒",
            TableCalendar::FinancialCalendar => "财务日历",
        }
    }

    pub fn build(self, ctx: &GenerationContext) -> CalFeedResult<CalendarFeed> {
        let tables = ctx.tables;
        let feed = match self {
            TableCalendar::Holidays => public_holidays(&tables.holidays)?,
            TableCalendar::LunarFestivals => lunar_festivals(&tables.lunar_festivals)?,
            TableCalendar::SolarTerms => solar_terms(&tables.solar_terms)?,
            TableCalendar::InternationalHolidays => {
                international_holidays(&tables.international_holidays)?
            }
            TableCalendar::Countdown => countdown(&tables.countdowns)?,
            TableCalendar::WeeklyReminder => {
                weekly_reminder(&tables.weekly_reminders, ctx.today, ctx.reminder_weeks)?
            }
            TableCalendar::HealthReminders => {
                health_reminders(&tables.health_tips, ctx.today, ctx.reminder_weeks)?
            }
            TableCalendar::FinancialCalendar => financial_calendar(&tables.financial)?,
        };

        Ok(feed.with_timezone(ctx.timezone))
    }
}

impl fmt::Display for TableCalendar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.calendar_name())
    }
}

/// `date + days`, as a format error instead of a panic at the calendar's edge.
pub(crate) fn shift(date: NaiveDate, days: u64) -> CalFeedResult<NaiveDate> {
    date.checked_add_days(Days::new(days)).ok_or_else(|| {
        CalFeedError::Format(format!("{} + {} days is out of range", date, days))
    })
}

//! Reminder-family generators.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::calendar::CalendarFeed;
use crate::error::{CalFeedError, CalFeedResult};
use crate::tables::{FinancialCalendar, Milestone, WeeklyItem};

use super::{TableCalendar, shift};

/// One event per milestone, dates passed through unchanged.
///
/// Every row is emitted, including milestones already in the past.
pub fn countdown(rows: &[Milestone]) -> CalFeedResult<CalendarFeed> {
    let mut feed = CalendarFeed::new(TableCalendar::Countdown.calendar_name())?;

    for row in rows {
        feed.add_event(
            row.name.as_str(),
            row.start.as_str(),
            Some(row.end.as_str().into()),
            &row.description,
        )?;
    }

    Ok(feed)
}

pub fn weekly_reminder(
    items: &[WeeklyItem],
    today: NaiveDate,
    weeks: u32,
) -> CalFeedResult<CalendarFeed> {
    weekly_pattern(TableCalendar::WeeklyReminder.calendar_name(), items, today, weeks)
}

pub fn health_reminders(
    items: &[WeeklyItem],
    today: NaiveDate,
    weeks: u32,
) -> CalFeedResult<CalendarFeed> {
    weekly_pattern(TableCalendar::HealthReminders.calendar_name(), items, today, weeks)
}

/// Project a weekly pattern `weeks` weeks ahead of `today`.
///
/// Week `w` of an item on weekday `d` lands on the first `d` on or after
/// `today`, plus `7 * w` days. Events are ordered week by week, pattern
/// order within a week.
pub fn weekly_pattern(
    name: &str,
    items: &[WeeklyItem],
    today: NaiveDate,
    weeks: u32,
) -> CalFeedResult<CalendarFeed> {
    let mut feed = CalendarFeed::new(name)?;

    let firsts = items
        .iter()
        .map(|item| next_weekday_on_or_after(today, item.weekday))
        .collect::<CalFeedResult<Vec<_>>>()?;

    for week in 0..u64::from(weeks) {
        for (item, first) in items.iter().zip(&firsts) {
            let date = shift(*first, week * 7)?;
            feed.add_event(item.title.as_str(), date, None, &item.description)?;
        }
    }

    debug!(calendar = name, events = feed.len(), "Projected weekly pattern");
    Ok(feed)
}

/// First date on or after `from` falling on `weekday` (0 = Monday .. 6 = Sunday).
pub fn next_weekday_on_or_after(from: NaiveDate, weekday: u8) -> CalFeedResult<NaiveDate> {
    if weekday > 6 {
        return Err(CalFeedError::Config(format!(
            "Weekday must be 0 (Monday) to 6 (Sunday), got {}",
            weekday
        )));
    }

    let current = from.weekday().num_days_from_monday();
    let offset = (u32::from(weekday) + 7 - current) % 7;
    shift(from, u64::from(offset))
}

/// Paydays for each month of the year, then tax deadlines, then shopping
/// festivals.
pub fn financial_calendar(table: &FinancialCalendar) -> CalFeedResult<CalendarFeed> {
    let mut feed = CalendarFeed::new(TableCalendar::FinancialCalendar.calendar_name())?;

    for month in 1..=12 {
        // Months without this day (e.g. the 31st in April) get no payday
        let Some(date) = NaiveDate::from_ymd_opt(table.year, month, table.payday) else {
            debug!(year = table.year, month, day = table.payday, "Skipping payday");
            continue;
        };
        feed.add_event(
            table.payday_title.as_str(),
            date,
            None,
            &table.payday_description,
        )?;
    }

    for deadline in &table.tax_deadlines {
        feed.add_event(
            format!("📊 {}纳税申报截止", deadline.quarter),
            deadline.date.as_str(),
            None,
            &format!("{}纳税申报截止日期", deadline.quarter),
        )?;
    }

    for festival in &table.shopping_festivals {
        feed.add_event(
            festival.name.as_str(),
            festival.date.as_str(),
            None,
            &festival.description,
        )?;
    }

    Ok(feed)
}

//! Holiday-family generators.

use crate::calendar::CalendarFeed;
use crate::error::CalFeedResult;
use crate::event::parse_date;
use crate::tables::{Festival, PublicHoliday};

use super::{TableCalendar, shift};

/// Statutory holidays as multi-day spans with an exclusive end.
pub fn public_holidays(rows: &[PublicHoliday]) -> CalFeedResult<CalendarFeed> {
    let mut feed = CalendarFeed::new(TableCalendar::Holidays.calendar_name())?;

    for row in rows {
        let start = parse_date(&row.start)?;
        let end = shift(start, u64::from(row.days))?;
        feed.add_event(
            row.name.as_str(),
            start,
            Some(end.into()),
            &format!("{} - 中国法定节假日", row.name),
        )?;
    }

    Ok(feed)
}

pub fn lunar_festivals(rows: &[Festival]) -> CalFeedResult<CalendarFeed> {
    single_days(TableCalendar::LunarFestivals, rows, |name| name.to_string())
}

pub fn solar_terms(rows: &[Festival]) -> CalFeedResult<CalendarFeed> {
    single_days(TableCalendar::SolarTerms, rows, |name| {
        format!("{} - 二十四节气", name)
    })
}

pub fn international_holidays(rows: &[Festival]) -> CalFeedResult<CalendarFeed> {
    single_days(TableCalendar::InternationalHolidays, rows, |name| {
        name.to_string()
    })
}

fn single_days(
    kind: TableCalendar,
    rows: &[Festival],
    title: impl Fn(&str) -> String,
) -> CalFeedResult<CalendarFeed> {
    let mut feed = CalendarFeed::new(kind.calendar_name())?;

    for row in rows {
        feed.add_event(title(&row.name), row.date.as_str(), None, &row.description)?;
    }

    Ok(feed)
}

//! Weather forecast calendars, one per city.

use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::calendar::CalendarFeed;
use crate::config::City;
use crate::error::{CalFeedError, CalFeedResult};
use crate::output::OutputDir;
use crate::weather::{ForecastSource, weather_label};

use super::shift;

/// Build one city's weather calendar from a single forecast request.
///
/// Day `i` becomes a one-day event from `today + i` to `today + i + 1`.
/// Temperatures in the title are truncated toward zero, not rounded.
pub async fn generate_weather_events<S: ForecastSource>(
    city: &City,
    days: u32,
    today: NaiveDate,
    source: &S,
) -> CalFeedResult<CalendarFeed> {
    if days == 0 {
        return Err(CalFeedError::Config("Forecast day count must be positive".into()));
    }

    let forecast = source.fetch_daily(city, days).await?;
    let mut feed = CalendarFeed::new(format!("{}天气日历", city.name))?;

    for i in 0..days {
        let day = forecast.day(i as usize).ok_or_else(|| CalFeedError::DataShape {
            city: city.name.clone(),
            reason: format!("forecast has no entry for day {}", i),
            raw: String::new(),
        })?;

        let label = weather_label(day.weather_code);
        let title = format!(
            "{} {} {}°C ~ {}°C",
            city.name, label, day.temperature_min as i64, day.temperature_max as i64
        );
        let description = format!(
            "最高温度: {}°C\n最低温度: {}°C\n天气: {}",
            day.temperature_max, day.temperature_min, label
        );

        let start = shift(today, u64::from(i))?;
        let end = shift(start, 1)?;
        feed.add_event(title, start, Some(end.into()), &description)?;
    }

    Ok(feed)
}

/// What happened to one city's weather calendar.
#[derive(Debug)]
pub struct CityOutcome {
    pub city: City,
    pub result: CalFeedResult<PathBuf>,
}

impl CityOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Generate and write `weather_<key>.ics` for every city, in order.
///
/// A failing city is logged and recorded; the remaining cities still run.
pub async fn generate_weather_calendars<S: ForecastSource>(
    cities: &[City],
    days: u32,
    today: NaiveDate,
    timezone: &str,
    source: &S,
    output: &OutputDir,
) -> Vec<CityOutcome> {
    let mut outcomes = Vec::with_capacity(cities.len());

    for city in cities {
        let result = match generate_weather_events(city, days, today, source).await {
            Ok(feed) => output.write(&city.file_name(), &feed.with_timezone(timezone)),
            Err(e) => Err(e),
        };

        match &result {
            Ok(path) => info!(city = %city.key, path = %path.display(), "Weather calendar written"),
            Err(CalFeedError::DataShape { raw, .. }) => {
                warn!(city = %city.key, raw = %raw, "Skipping city: forecast response had no usable data")
            }
            Err(e) => warn!(city = %city.key, error = %e, "Skipping city"),
        }

        outcomes.push(CityOutcome {
            city: city.clone(),
            result,
        });
    }

    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::{DailyForecast, UNKNOWN_WEATHER, parse_forecast};
    use std::collections::HashMap;

    /// Serves canned response bodies keyed by city, through the real parser.
    struct CannedForecasts {
        bodies: HashMap<String, String>,
    }

    impl CannedForecasts {
        fn new(entries: &[(&str, &str)]) -> Self {
            CannedForecasts {
                bodies: entries
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            }
        }
    }

    impl ForecastSource for CannedForecasts {
        async fn fetch_daily(&self, city: &City, days: u32) -> CalFeedResult<DailyForecast> {
            match self.bodies.get(&city.key) {
                Some(body) => parse_forecast(&city.name, body, days),
                None => Err(CalFeedError::Transport {
                    city: city.name.clone(),
                    message: "connection refused".into(),
                }),
            }
        }
    }

    const SEVEN_DAYS: &str = r#"{"daily": {
        "temperature_2m_max": [18.3, 17.9, 20.0, 21.5, 19.2, 16.0, -0.4],
        "temperature_2m_min": [12.7, 11.1, 13.9, 14.0, 12.0, 9.5, -5.9],
        "weathercode": [0, 3, 61, 95, 17, 2, 71]
    }}"#;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()
    }

    fn ningbo() -> City {
        City::new("Ningbo", "宁波", 29.8683, 121.544)
    }

    #[tokio::test]
    async fn test_seven_one_day_events_with_truncated_temperatures() {
        let source = CannedForecasts::new(&[("Ningbo", SEVEN_DAYS)]);
        let feed = generate_weather_events(&ningbo(), 7, today(), &source)
            .await
            .unwrap();

        assert_eq!(feed.name(), "宁波天气日历");
        assert_eq!(feed.len(), 7);

        for (i, event) in feed.events().iter().enumerate() {
            assert_eq!((event.start - today()).num_days(), i as i64);
            assert_eq!((event.end - event.start).num_days(), 1);
        }

        let events = feed.events();
        assert_eq!(events[0].title, "宁波 ☀️ 晴天 12°C ~ 18°C");
        assert!(events[1].title.contains("11°C ~ 17°C"), "17.9 must not round up");
        assert!(events[6].title.contains("-5°C ~ 0°C"), "truncation is toward zero");
        assert_eq!(
            events[0].description.as_deref(),
            Some("最高温度: 18.3°C\n最低温度: 12.7°C\n天气: ☀️ 晴天")
        );
    }

    #[tokio::test]
    async fn test_unknown_code_uses_fallback_label() {
        let source = CannedForecasts::new(&[("Ningbo", SEVEN_DAYS)]);
        let feed = generate_weather_events(&ningbo(), 7, today(), &source)
            .await
            .unwrap();

        assert!(feed.events()[4].title.contains(UNKNOWN_WEATHER));
    }

    #[tokio::test]
    async fn test_missing_daily_is_reported_not_panicked() {
        let source = CannedForecasts::new(&[("Ningbo", r#"{"reason": "nope"}"#)]);
        let err = generate_weather_events(&ningbo(), 7, today(), &source)
            .await
            .unwrap_err();

        assert!(matches!(err, CalFeedError::DataShape { .. }));
        assert!(err.is_per_city());
    }

    #[tokio::test]
    async fn test_zero_days_is_rejected() {
        let source = CannedForecasts::new(&[("Ningbo", SEVEN_DAYS)]);
        let err = generate_weather_events(&ningbo(), 0, today(), &source)
            .await
            .unwrap_err();
        assert!(matches!(err, CalFeedError::Config(_)));
    }

    #[tokio::test]
    async fn test_failing_city_does_not_stop_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let output = OutputDir::new(dir.path());
        output.ensure().unwrap();

        let cities = vec![
            City::new("Beijing", "北京", 39.9042, 116.4074),
            City::new("Atlantis", "亚特兰蒂斯", 0.0, 0.0),
            City::new("Shanghai", "上海", 31.2304, 121.4737),
            ningbo(),
        ];
        let source = CannedForecasts::new(&[
            ("Beijing", SEVEN_DAYS),
            ("Shanghai", r#"{"error": true}"#),
            ("Ningbo", SEVEN_DAYS),
        ]);

        let outcomes =
            generate_weather_calendars(&cities, 7, today(), "Asia/Shanghai", &source, &output)
                .await;

        let ok: Vec<_> = outcomes.iter().map(|o| o.is_ok()).collect();
        assert_eq!(ok, vec![true, false, false, true]);

        assert!(dir.path().join("weather_Beijing.ics").exists());
        assert!(dir.path().join("weather_Ningbo.ics").exists());
        assert!(!dir.path().join("weather_Atlantis.ics").exists());
        assert!(!dir.path().join("weather_Shanghai.ics").exists());

        let ics = std::fs::read_to_string(dir.path().join("weather_Ningbo.ics")).unwrap();
        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 7);
        assert!(ics.contains("X-WR-TIMEZONE:Asia/Shanghai"));
    }
}

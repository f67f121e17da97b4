//! Daily weather forecasts.
//!
//! [`ForecastSource`] is the seam between the weather generator and the
//! network. [`OpenMeteo`] is the real implementation; tests plug in stubs.

mod codes;
mod open_meteo;

use std::future::Future;

use serde::Deserialize;

use crate::config::City;
use crate::error::{CalFeedError, CalFeedResult};

pub use codes::{UNKNOWN_WEATHER, weather_label};
pub use open_meteo::OpenMeteo;

/// Three parallel daily series, index 0 = today.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyForecast {
    pub temperature_max: Vec<f64>,
    pub temperature_min: Vec<f64>,
    pub weather_code: Vec<i64>,
}

/// One day pulled out of a [`DailyForecast`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayForecast {
    pub temperature_max: f64,
    pub temperature_min: f64,
    pub weather_code: i64,
}

impl DailyForecast {
    pub fn len(&self) -> usize {
        self.weather_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weather_code.is_empty()
    }

    pub fn day(&self, index: usize) -> Option<DayForecast> {
        Some(DayForecast {
            temperature_max: *self.temperature_max.get(index)?,
            temperature_min: *self.temperature_min.get(index)?,
            weather_code: *self.weather_code.get(index)?,
        })
    }
}

/// Anything that can produce a daily forecast for a city.
pub trait ForecastSource {
    fn fetch_daily(
        &self,
        city: &City,
        days: u32,
    ) -> impl Future<Output = CalFeedResult<DailyForecast>> + Send;
}

#[derive(Deserialize)]
struct DailySeries {
    temperature_2m_max: Vec<f64>,
    temperature_2m_min: Vec<f64>,
    weathercode: Vec<i64>,
}

/// Extract `days` entries from a forecast response body.
///
/// Anything other than a JSON object with a complete `daily` section is a
/// [`CalFeedError::DataShape`] carrying the raw body.
pub fn parse_forecast(city: &str, raw: &str, days: u32) -> CalFeedResult<DailyForecast> {
    let shape_error = |reason: String| CalFeedError::DataShape {
        city: city.to_string(),
        reason,
        raw: raw.to_string(),
    };

    let body: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| shape_error(format!("response is not JSON: {e}")))?;

    let daily = body
        .get("daily")
        .ok_or_else(|| shape_error("daily data not found in response".into()))?;

    let series: DailySeries = serde_json::from_value(daily.clone())
        .map_err(|e| shape_error(format!("malformed daily data: {e}")))?;

    let days = days as usize;
    let shortest = series
        .temperature_2m_max
        .len()
        .min(series.temperature_2m_min.len())
        .min(series.weathercode.len());
    if shortest < days {
        return Err(shape_error(format!(
            "expected {} days of data, got {}",
            days, shortest
        )));
    }

    let mut forecast = DailyForecast {
        temperature_max: series.temperature_2m_max,
        temperature_min: series.temperature_2m_min,
        weather_code: series.weathercode,
    };
    forecast.temperature_max.truncate(days);
    forecast.temperature_min.truncate(days);
    forecast.weather_code.truncate(days);

    Ok(forecast)
}

//! Open-Meteo forecast client.

use tracing::debug;

use super::{DailyForecast, ForecastSource, parse_forecast};
use crate::config::{City, Settings};
use crate::error::{CalFeedError, CalFeedResult};

const DAILY_SERIES: &str = "temperature_2m_max,temperature_2m_min,weathercode";

/// One GET per city. No retries, no caching, transport-default timeouts.
pub struct OpenMeteo {
    http: reqwest::Client,
    base_url: String,
    timezone: String,
}

impl OpenMeteo {
    pub fn new(base_url: impl Into<String>, timezone: impl Into<String>) -> Self {
        OpenMeteo {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            timezone: timezone.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(&settings.weather_api_url, &settings.timezone)
    }
}

impl ForecastSource for OpenMeteo {
    async fn fetch_daily(&self, city: &City, days: u32) -> CalFeedResult<DailyForecast> {
        let transport = |e: reqwest::Error| CalFeedError::Transport {
            city: city.name.clone(),
            message: e.to_string(),
        };

        debug!(city = %city.key, days, "Requesting forecast from {}", self.base_url);

        let resp = self
            .http
            .get(&self.base_url)
            .query(&[
                ("latitude", city.lat.to_string()),
                ("longitude", city.lon.to_string()),
                ("daily", DAILY_SERIES.to_string()),
                ("timezone", self.timezone.clone()),
                ("forecast_days", days.to_string()),
            ])
            .send()
            .await
            .map_err(transport)?;

        let status = resp.status();
        let body = resp.text().await.map_err(transport)?;

        if !status.is_success() {
            return Err(CalFeedError::Transport {
                city: city.name.clone(),
                message: format!("HTTP {}: {}", status, body),
            });
        }

        parse_forecast(&city.name, &body, days)
    }
}

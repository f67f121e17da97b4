//! Global calfeed configuration.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use super::cities::{City, default_cities};
use crate::error::{CalFeedError, CalFeedResult};
use crate::tables::Tables;

static DEFAULT_OUTPUT_DIR: &str = "static/ics";
static DEFAULT_TIMEZONE: &str = "Asia/Shanghai";
static DEFAULT_WEATHER_API_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const DEFAULT_FORECAST_DAYS: u32 = 7;
pub const DEFAULT_REMINDER_WEEKS: u32 = 12;

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

fn default_weather_api_url() -> String {
    DEFAULT_WEATHER_API_URL.to_string()
}

fn default_forecast_days() -> u32 {
    DEFAULT_FORECAST_DAYS
}

fn default_reminder_weeks() -> u32 {
    DEFAULT_REMINDER_WEEKS
}

/// Configuration read from ~/.config/calfeed/config.toml (or `--config`)
/// and `CALFEED_*` environment variables.
///
/// Every field has a default, so an absent file yields the built-in setup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// IANA timezone used for "today" and for the forecast request.
    #[serde(default = "default_timezone")]
    pub timezone: String,

    #[serde(default = "default_weather_api_url")]
    pub weather_api_url: String,

    #[serde(default = "default_forecast_days")]
    pub forecast_days: u32,

    /// How many weeks the weekly and health reminders are projected ahead.
    #[serde(default = "default_reminder_weeks")]
    pub reminder_weeks: u32,

    #[serde(default = "default_cities")]
    pub cities: Vec<City>,

    #[serde(default)]
    pub tables: Tables,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            output_dir: default_output_dir(),
            timezone: default_timezone(),
            weather_api_url: default_weather_api_url(),
            forecast_days: DEFAULT_FORECAST_DAYS,
            reminder_weeks: DEFAULT_REMINDER_WEEKS,
            cities: default_cities(),
            tables: Tables::default(),
        }
    }
}

impl Settings {
    pub fn config_path() -> CalFeedResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalFeedError::Config("Could not determine config directory".into()))?
            .join("calfeed");

        Ok(config_dir.join("config.toml"))
    }

    /// Load settings from `path` (required) or from the default location
    /// (optional), then apply `CALFEED_*` environment overrides.
    pub fn load(path: Option<&Path>) -> CalFeedResult<Self> {
        let file = match path {
            Some(p) => File::from(p.to_path_buf()).required(true),
            None => File::from(Self::config_path()?).required(false),
        };

        let settings: Settings = Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix("CALFEED").try_parsing(true))
            .build()
            .map_err(|e| CalFeedError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CalFeedError::Config(e.to_string()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Parse settings from TOML text, without environment overrides.
    pub fn from_toml_str(contents: &str) -> CalFeedResult<Self> {
        let settings: Settings = Config::builder()
            .add_source(File::from_str(contents, FileFormat::Toml))
            .build()
            .map_err(|e| CalFeedError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CalFeedError::Config(e.to_string()))?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> CalFeedResult<()> {
        if self.forecast_days == 0 {
            return Err(CalFeedError::Config("forecast_days must be at least 1".into()));
        }
        if self.reminder_weeks == 0 {
            return Err(CalFeedError::Config("reminder_weeks must be at least 1".into()));
        }
        self.tz()?;

        if self.cities.is_empty() {
            return Err(CalFeedError::Config("No cities configured".into()));
        }
        let mut seen = HashSet::new();
        for city in &self.cities {
            if !seen.insert(city.key.as_str()) {
                return Err(CalFeedError::Config(format!(
                    "Duplicate city key '{}'",
                    city.key
                )));
            }
        }

        let payday = self.tables.financial.payday;
        if !(1..=31).contains(&payday) {
            return Err(CalFeedError::Config(format!(
                "payday must be a day of month (1-31), got {}",
                payday
            )));
        }

        Ok(())
    }

    pub fn tz(&self) -> CalFeedResult<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| CalFeedError::Config(format!("Unknown timezone '{}'", self.timezone)))
    }

    /// Today's date in the configured timezone.
    pub fn today(&self) -> CalFeedResult<NaiveDate> {
        Ok(Utc::now().with_timezone(&self.tz()?).date_naive())
    }

    /// Output directory with `~` expanded.
    pub fn output_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.output_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn city(&self, key: &str) -> Option<&City> {
        self.cities.iter().find(|c| c.key == key)
    }

    /// Resolve requested city keys against the city table, keeping the
    /// requested order. `None` or an empty list selects every city.
    pub fn select_cities(&self, keys: Option<&[String]>) -> CalFeedResult<Vec<City>> {
        let keys = match keys {
            Some(keys) if !keys.is_empty() => keys,
            _ => return Ok(self.cities.clone()),
        };

        keys.iter()
            .map(|key| {
                self.city(key).cloned().ok_or_else(|| {
                    let available: Vec<_> = self.cities.iter().map(|c| c.key.as_str()).collect();
                    CalFeedError::Config(format!(
                        "City '{}' not found. Available: {}",
                        key,
                        available.join(", ")
                    ))
                })
            })
            .collect()
    }

    /// Create a config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CalFeedResult<()> {
        let contents = format!(
            "\
# calfeed configuration

# Where generated .ics files are written:
# output_dir = \"{}\"

# Timezone for \"today\" and for the weather forecast:
# timezone = \"{}\"

# weather_api_url = \"{}\"
# forecast_days = {}
# reminder_weeks = {}

# Replace the city table (keys are used with --cities):
# [[cities]]
# key = \"Ningbo\"
# name = \"宁波\"
# lat = 29.8683
# lon = 121.5440
",
            DEFAULT_OUTPUT_DIR,
            DEFAULT_TIMEZONE,
            DEFAULT_WEATHER_API_URL,
            DEFAULT_FORECAST_DAYS,
            DEFAULT_REMINDER_WEEKS,
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CalFeedError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CalFeedError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_yields_defaults() {
        let settings = Settings::from_toml_str("").unwrap();

        assert_eq!(settings.output_dir, PathBuf::from("static/ics"));
        assert_eq!(settings.timezone, "Asia/Shanghai");
        assert_eq!(settings.forecast_days, 7);
        assert_eq!(settings.reminder_weeks, 12);
        assert_eq!(settings.cities.len(), 8);
        assert_eq!(settings.cities[0].key, "Beijing");
        assert_eq!(settings.tables, Tables::default());
    }

    #[test]
    fn test_overrides_cities_and_tables() {
        let settings = Settings::from_toml_str(
            r#"
output_dir = "out"
forecast_days = 3

[[cities]]
key = "Xiamen"
name = "厦门"
lat = 24.4798
lon = 118.0894

[tables]
holidays = [{ name = "元旦", start = "2027-01-01", days = 1 }]
"#,
        )
        .unwrap();

        assert_eq!(settings.output_dir, PathBuf::from("out"));
        assert_eq!(settings.forecast_days, 3);
        assert_eq!(settings.cities.len(), 1);
        assert_eq!(settings.cities[0].name, "厦门");
        assert_eq!(settings.tables.holidays.len(), 1);
        // Tables not mentioned keep their defaults
        assert_eq!(settings.tables.solar_terms.len(), 24);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(Settings::from_toml_str("forecast_days = 0").is_err());
        assert!(Settings::from_toml_str("reminder_weeks = 0").is_err());
        assert!(Settings::from_toml_str("timezone = \"Mars/Olympus\"").is_err());
        assert!(Settings::from_toml_str("cities = []").is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_city_keys() {
        let mut settings = Settings::default();
        settings.cities.push(settings.cities[0].clone());
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("Duplicate city key 'Beijing'"));
    }

    #[test]
    fn test_select_cities() {
        let settings = Settings::default();

        assert_eq!(settings.select_cities(None).unwrap().len(), 8);
        assert_eq!(settings.select_cities(Some(&[][..])).unwrap().len(), 8);

        let keys = vec!["Wuhan".to_string(), "Beijing".to_string()];
        let picked = settings.select_cities(Some(keys.as_slice())).unwrap();
        let names: Vec<_> = picked.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["武汉", "北京"]);

        let err = settings
            .select_cities(Some(&["Atlantis".to_string()][..]))
            .unwrap_err();
        assert!(matches!(err, CalFeedError::Config(_)));
        assert!(err.to_string().contains("Atlantis"));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calfeed.toml");
        std::fs::write(&path, "reminder_weeks = 4\n").unwrap();

        let settings = Settings::load(Some(path.as_path())).unwrap();
        assert_eq!(settings.reminder_weeks, 4);
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        assert!(Settings::load(Some(path.as_path())).is_err());
    }

    #[test]
    fn test_default_config_template_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/config.toml");
        Settings::create_default_config(&path).unwrap();

        let settings = Settings::load(Some(path.as_path())).unwrap();
        assert_eq!(settings.forecast_days, DEFAULT_FORECAST_DAYS);
    }
}

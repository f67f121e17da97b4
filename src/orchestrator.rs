//! Runs the selected generators in a fixed order.

use std::path::PathBuf;

use anyhow::{Context, Result};
use calfeed_core::config::Settings;
use calfeed_core::generators::{GenerationContext, TableCalendar, generate_weather_calendars};
use calfeed_core::output::OutputDir;
use calfeed_core::weather::ForecastSource;
use clap::ValueEnum;
use tracing::{error, info};

use crate::render::{self, Render};

/// Which family of calendars to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    All,
    Weather,
    Holidays,
    Reminders,
}

impl Mode {
    fn includes_weather(self) -> bool {
        matches!(self, Mode::All | Mode::Weather)
    }

    fn includes_holidays(self) -> bool {
        matches!(self, Mode::All | Mode::Holidays)
    }

    fn includes_reminders(self) -> bool {
        matches!(self, Mode::All | Mode::Reminders)
    }

    /// `all` stops at the first failing generator; the narrower modes log
    /// it and keep going.
    fn aborts_on_failure(self) -> bool {
        self == Mode::All
    }
}

/// A calendar that could not be produced.
#[derive(Debug)]
pub struct Failure {
    pub calendar: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct RunReport {
    pub written: Vec<PathBuf>,
    pub failures: Vec<Failure>,
}

impl RunReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Generate every calendar `mode` selects.
///
/// Weather failures are per city and never abort. Any other generator
/// failure aborts an `all` run with an error; in the other modes it is
/// recorded in the report.
pub async fn run<S: ForecastSource>(
    settings: &Settings,
    mode: Mode,
    cities: Option<&[String]>,
    source: &S,
) -> Result<RunReport> {
    let output = OutputDir::new(settings.output_path());
    output.ensure().with_context(|| {
        format!("Could not create output directory {}", output.path().display())
    })?;

    let today = settings.today()?;
    let mut report = RunReport::default();

    if mode.includes_weather() {
        let cities = settings.select_cities(cities)?;
        println!("{}", render::section(&format!(
            "📍 Generating weather calendars for {} cities...",
            cities.len()
        )));

        let outcomes = generate_weather_calendars(
            &cities,
            settings.forecast_days,
            today,
            &settings.timezone,
            source,
            &output,
        )
        .await;

        for outcome in outcomes {
            println!("{}", outcome.render());
            match outcome.result {
                Ok(path) => report.written.push(path),
                Err(e) => report.failures.push(Failure {
                    calendar: outcome.city.file_name(),
                    error: e.to_string(),
                }),
            }
        }
    }

    let ctx = GenerationContext {
        tables: &settings.tables,
        today,
        reminder_weeks: settings.reminder_weeks,
        timezone: &settings.timezone,
    };

    if mode.includes_holidays() {
        println!("{}", render::section("🎊 Generating holiday calendars..."));
        run_tables(&TableCalendar::HOLIDAY_FAMILY, &ctx, &output, mode, &mut report)?;
    }

    if mode.includes_reminders() {
        println!("{}", render::section("⏰ Generating reminder calendars..."));
        run_tables(&TableCalendar::REMINDER_FAMILY, &ctx, &output, mode, &mut report)?;
    }

    info!(
        written = report.written.len(),
        failed = report.failures.len(),
        "Generation finished"
    );
    Ok(report)
}

fn run_tables(
    kinds: &[TableCalendar],
    ctx: &GenerationContext,
    output: &OutputDir,
    mode: Mode,
    report: &mut RunReport,
) -> Result<()> {
    for kind in kinds {
        let result = kind
            .build(ctx)
            .and_then(|feed| output.write(kind.file_name(), &feed));

        match result {
            Ok(path) => {
                println!("{}", render::generated(&path));
                report.written.push(path);
            }
            Err(e) if mode.aborts_on_failure() => {
                return Err(e).with_context(|| format!("Failed to generate {}", kind.file_name()));
            }
            Err(e) => {
                error!(calendar = kind.file_name(), error = %e, "Generator failed");
                println!("{}", render::failed(kind.calendar_name(), &e.to_string()));
                report.failures.push(Failure {
                    calendar: kind.file_name().to_string(),
                    error: e.to_string(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use calfeed_core::config::City;
    use calfeed_core::weather::{DailyForecast, parse_forecast};
    use calfeed_core::{CalFeedError, CalFeedResult};

    /// Returns the same body for every city except `broken`.
    struct FixedForecast {
        broken: &'static str,
    }

    impl ForecastSource for FixedForecast {
        async fn fetch_daily(&self, city: &City, days: u32) -> CalFeedResult<DailyForecast> {
            if city.key == self.broken {
                return parse_forecast(&city.name, r#"{"error": true}"#, days);
            }
            let body = format!(
                r#"{{"daily": {{"temperature_2m_max": {max:?}, "temperature_2m_min": {min:?}, "weathercode": {code:?}}}}}"#,
                max = vec![20.5; days as usize],
                min = vec![10.5; days as usize],
                code = vec![1; days as usize],
            );
            parse_forecast(&city.name, &body, days)
        }
    }

    /// Fails the test if a weather request is made.
    struct NoNetwork;

    impl ForecastSource for NoNetwork {
        async fn fetch_daily(&self, city: &City, _days: u32) -> CalFeedResult<DailyForecast> {
            panic!("unexpected forecast request for {}", city.key)
        }
    }

    fn settings_in(dir: &std::path::Path) -> Settings {
        Settings {
            output_dir: dir.join("static/ics"),
            forecast_days: 3,
            reminder_weeks: 2,
            ..Settings::default()
        }
    }

    fn ics_files(dir: &std::path::Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir.join("static/ics"))
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[tokio::test]
    async fn test_all_writes_every_calendar_despite_city_failure() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(dir.path());
        let source = FixedForecast { broken: "Shenzhen" };

        let report = run(&settings, Mode::All, None, &source).await.unwrap();

        // 8 cities minus Shenzhen, plus 8 table calendars
        assert_eq!(report.written.len(), 7 + 8);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].calendar, "weather_Shenzhen.ics");

        let files = ics_files(dir.path());
        assert!(files.contains(&"holidays.ics".to_string()));
        assert!(files.contains(&"financial_calendar.ics".to_string()));
        assert!(files.contains(&"weather_Beijing.ics".to_string()));
        assert!(!files.contains(&"weather_Shenzhen.ics".to_string()));
    }

    #[tokio::test]
    async fn test_weather_mode_respects_city_subset() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(dir.path());
        let cities = vec!["Ningbo".to_string(), "Wuhan".to_string()];

        let report = run(
            &settings,
            Mode::Weather,
            Some(cities.as_slice()),
            &FixedForecast { broken: "" },
        )
        .await
        .unwrap();

        assert!(report.is_clean());
        assert_eq!(ics_files(dir.path()), vec!["weather_Ningbo.ics", "weather_Wuhan.ics"]);
    }

    #[tokio::test]
    async fn test_unknown_city_fails_before_any_request() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(dir.path());
        let cities = vec!["Atlantis".to_string()];

        let err = run(&settings, Mode::Weather, Some(cities.as_slice()), &NoNetwork)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Atlantis"));
        assert!(ics_files(dir.path()).is_empty());
    }

    #[tokio::test]
    async fn test_holidays_mode_keeps_going_after_a_failure() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = settings_in(dir.path());
        settings.tables.lunar_festivals[0].date = "not-a-date".to_string();

        let report = run(&settings, Mode::Holidays, None, &NoNetwork).await.unwrap();

        assert_eq!(report.written.len(), 3);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].calendar, "lunar_festivals.ics");
        assert_eq!(
            ics_files(dir.path()),
            vec!["holidays.ics", "international_holidays.ics", "solar_terms.ics"]
        );
    }

    #[tokio::test]
    async fn test_all_mode_aborts_on_generator_failure() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = settings_in(dir.path());
        settings.tables.solar_terms[0].date = "2026-02-30".to_string();

        let err = run(&settings, Mode::All, None, &FixedForecast { broken: "" })
            .await
            .unwrap_err();

        assert!(err.to_string().contains("solar_terms.ics"));
        assert!(matches!(
            err.downcast_ref::<CalFeedError>(),
            Some(CalFeedError::Format(_))
        ));

        // Nothing after the failing generator ran
        let files = ics_files(dir.path());
        assert!(files.contains(&"lunar_festivals.ics".to_string()));
        assert!(!files.contains(&"international_holidays.ics".to_string()));
        assert!(!files.contains(&"countdown.ics".to_string()));
    }

    #[tokio::test]
    async fn test_reminders_mode_only_writes_reminders() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(dir.path());

        let report = run(&settings, Mode::Reminders, None, &NoNetwork).await.unwrap();

        assert!(report.is_clean());
        assert_eq!(
            ics_files(dir.path()),
            vec![
                "countdown.ics",
                "financial_calendar.ics",
                "health_reminders.ics",
                "weekly_reminder.ics"
            ]
        );
    }
}

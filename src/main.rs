mod orchestrator;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use calfeed_core::config::Settings;
use calfeed_core::weather::OpenMeteo;
use clap::Parser;
use owo_colors::OwoColorize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use orchestrator::Mode;
use render::Render;

#[derive(Parser)]
#[command(name = "calfeed")]
#[command(about = "Generate .ics subscription calendars for weather, holidays and reminders")]
struct Cli {
    /// Which calendars to generate
    #[arg(long = "type", value_enum, default_value_t = Mode::All)]
    mode: Mode,

    /// Only generate weather for these city keys (e.g. Beijing Ningbo)
    #[arg(long, num_args = 1..)]
    cities: Vec<String>,

    /// Settings file (defaults to ~/.config/calfeed/config.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write .ics files here instead of the configured directory
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Number of forecast days per weather calendar
    #[arg(long)]
    days: Option<u32>,

    /// Write a commented default settings file and exit
    #[arg(long)]
    init_config: bool,

    /// Show debug logs
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if cli.init_config {
        return init_config(cli.config);
    }

    let settings = load_settings(&cli)?;
    debug!(
        output_dir = %settings.output_path().display(),
        timezone = %settings.timezone,
        "Loaded settings"
    );

    if cli.mode == Mode::All {
        println!("{}", render::banner());
    }

    let source = OpenMeteo::from_settings(&settings);
    let cities = (!cli.cities.is_empty()).then_some(cli.cities.as_slice());

    match orchestrator::run(&settings, cli.mode, cities, &source).await {
        Ok(report) => {
            println!("\n{}", report.render());
            Ok(())
        }
        Err(e) => {
            println!("\n{} Error during generation: {:#}", "❌".red(), e);
            Err(e)
        }
    }
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;

    if let Some(dir) = &cli.output_dir {
        settings.output_dir = dir.clone();
    }
    if let Some(days) = cli.days {
        settings.forecast_days = days;
    }
    settings.validate()?;

    Ok(settings)
}

fn init_config(path: Option<PathBuf>) -> Result<()> {
    let path = match path {
        Some(p) => p,
        None => Settings::config_path()?,
    };

    if path.exists() {
        anyhow::bail!("Config file already exists: {}", path.display());
    }

    Settings::create_default_config(&path)?;
    println!("{} Wrote {}", "✅".green(), path.display());
    Ok(())
}

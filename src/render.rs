//! Terminal rendering for calfeed runs.
//!
//! User-facing status lines go to stdout with owo_colors; diagnostics go
//! through tracing.

use std::path::Path;

use calfeed_core::generators::CityOutcome;
use owo_colors::OwoColorize;

use crate::orchestrator::RunReport;

const RULE_WIDTH: usize = 60;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for CityOutcome {
    fn render(&self) -> String {
        match &self.result {
            Ok(path) => generated(path),
            Err(e) => format!(
                "{} Error generating weather for {}: {}",
                "❌".red(),
                self.city.name,
                e.to_string().red()
            ),
        }
    }
}

impl Render for RunReport {
    fn render(&self) -> String {
        let written = format!("{} calendars written", self.written.len());
        if self.is_clean() {
            return format!("{} {}", "✅".green(), written.green());
        }

        let mut lines = vec![format!(
            "{} {}, {} failed",
            "⚠️".yellow(),
            written,
            self.failures.len().yellow()
        )];
        for failure in &self.failures {
            lines.push(format!("   {} {}", failure.calendar.red(), failure.error.dimmed()));
        }
        lines.join("\n")
    }
}

pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

pub fn banner() -> String {
    format!("{}\n🗓️  {}\n{}", rule(), "Calendar Subscription Generator".bold(), rule())
}

pub fn section(title: &str) -> String {
    format!("\n{}", title.bold())
}

pub fn generated(path: &Path) -> String {
    format!("{} Generated: {}", "✅".green(), path.display())
}

pub fn failed(calendar: &str, error: &str) -> String {
    format!("{} Error generating {}: {}", "❌".red(), calendar, error.red())
}

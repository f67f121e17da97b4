//! Configuration types for calfeed.

mod cities;
mod settings;

pub use cities::City;
pub use settings::{DEFAULT_FORECAST_DAYS, DEFAULT_REMINDER_WEEKS, Settings};

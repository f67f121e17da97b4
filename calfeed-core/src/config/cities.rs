//! Cities with a weather calendar.

use serde::{Deserialize, Serialize};

/// A city with a weather calendar. Coordinates go into the forecast request
/// exactly as written here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    /// Stable identifier used on the command line and in file names.
    pub key: String,
    /// Display name used in calendar names and event titles.
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl City {
    pub fn new(key: &str, name: &str, lat: f64, lon: f64) -> Self {
        City {
            key: key.to_string(),
            name: name.to_string(),
            lat,
            lon,
        }
    }

    /// File the city's weather calendar is written to.
    pub fn file_name(&self) -> String {
        format!("weather_{}.ics", self.key)
    }
}

pub(crate) fn default_cities() -> Vec<City> {
    vec![
        City::new("Beijing", "北京", 39.9042, 116.4074),
        City::new("Shanghai", "上海", 31.2304, 121.4737),
        City::new("Guangzhou", "广州", 23.1291, 113.2644),
        City::new("Shenzhen", "深圳", 22.5431, 114.0579),
        City::new("Hangzhou", "杭州", 30.2741, 120.1551),
        City::new("Ningbo", "宁波", 29.8683, 121.5440),
        City::new("Chengdu", "成都", 30.5728, 104.0668),
        City::new("Wuhan", "武汉", 30.5928, 114.3055),
    ]
}

//! WMO weather code labels.

/// Label for codes missing from the table.
pub const UNKNOWN_WEATHER: &str = "☁️ 未知";

/// Human-readable label for a weather code. Never fails.
pub fn weather_label(code: i64) -> &'static str {
    match code {
        0 => "☀️ 晴天",
        1 => "🌤️ 晴朗",
        2 => "⛅ 多云",
        3 => "☁️ 阴天",
        45 => "🌫️ 雾",
        48 => "🌫️ 雾凇",
        51 => "🌦️ 小雨",
        53 => "🌧️ 中雨",
        55 => "🌧️ 大雨",
        61 => "🌧️ 小雨",
        63 => "🌧️ 中雨",
        65 => "⛈️ 大雨",
        71 => "🌨️ 小雪",
        73 => "🌨️ 中雪",
        75 => "❄️ 大雪",
        80 => "🌦️ 阵雨",
        81 => "⛈️ 强阵雨",
        82 => "⛈️ 暴雨",
        95 => "⛈️ 雷暴",
        96 => "⛈️ 冰雹",
        99 => "⛈️ 强雷暴",
        _ => UNKNOWN_WEATHER,
    }
}

//! Current-conditions reading and display methods

use serde::{Deserialize, Serialize};

/// Current weather at a coordinate, as reported by the weather provider
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeatherReading {
    /// Temperature in Celsius, `None` when the provider omitted it
    pub temperature_celsius: Option<f64>,
    /// Chance of precipitation in percent (0-100)
    pub precipitation_probability: u8,
    /// WMO weather interpretation code
    pub weather_code: u16,
}

impl WeatherReading {
    #[must_use]
    pub fn new(temperature_celsius: Option<f64>, precipitation_probability: u8, weather_code: u16) -> Self {
        Self {
            temperature_celsius,
            precipitation_probability,
            weather_code,
        }
    }

    /// Temperature as shown in replies: one decimal, or `N/A` when unknown
    #[must_use]
    pub fn format_temperature(&self) -> String {
        match self.temperature_celsius {
            Some(temperature) => format!("{temperature:.1}"),
            None => "N/A".to_string(),
        }
    }

    /// Human-readable description of the weather code
    #[must_use]
    pub fn description(&self) -> &'static str {
        weather_code_to_description(self.weather_code)
    }
}

/// Convert WMO weather code to human-readable description
#[must_use]
pub fn weather_code_to_description(code: u16) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        56 => "Light freezing drizzle",
        57 => "Dense freezing drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        66 => "Light freezing rain",
        67 => "Heavy freezing rain",
        71 => "Slight snow fall",
        73 => "Moderate snow fall",
        75 => "Heavy snow fall",
        77 => "Snow grains",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        85 => "Slight snow showers",
        86 => "Heavy snow showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with slight hail",
        99 => "Thunderstorm with heavy hail",
        _ => "Unknown",
    }
}

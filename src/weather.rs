//! Weather API client for Open-Meteo current conditions

use crate::config::WeatherConfig;
use crate::models::{Coordinate, Outcome, WeatherReading};
use crate::{Result, TourismAiError};
use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

/// Current weather for a resolved coordinate
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn get_weather(&self, coordinate: Coordinate) -> Outcome<WeatherReading>;
}

/// Open-Meteo forecast endpoint client
pub struct OpenMeteoClient {
    client: Client,
    base_url: String,
}

impl OpenMeteoClient {
    pub fn new(config: &WeatherConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(concat!("tourism-ai/", env!("CARGO_PKG_VERSION")))
            .build()
            .with_context(|| "Failed to create weather HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn fetch_current(&self, coordinate: Coordinate) -> Result<WeatherReading> {
        let url = format!(
            "{}/forecast?latitude={}&longitude={}&current=temperature_2m,precipitation_probability,weather_code&timezone=auto",
            self.base_url, coordinate.latitude, coordinate.longitude
        );
        debug!("OpenMeteo API request URL: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TourismAiError::api(format!(
                "OpenMeteo returned status {status}"
            )));
        }

        let forecast: openmeteo::ForecastResponse = response.json().await?;
        forecast
            .current
            .map(WeatherReading::from)
            .ok_or_else(|| TourismAiError::parse("No current weather data available from OpenMeteo"))
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoClient {
    #[instrument(skip(self), fields(lat = coordinate.latitude, lon = coordinate.longitude))]
    async fn get_weather(&self, coordinate: Coordinate) -> Outcome<WeatherReading> {
        let start_time = Instant::now();
        match self.fetch_current(coordinate).await {
            Ok(reading) => {
                info!(
                    "Retrieved current weather ({}) in {:.3}s",
                    reading.description(),
                    start_time.elapsed().as_secs_f64()
                );
                Outcome::Success(reading)
            }
            Err(e) => {
                warn!("Weather lookup failed: {}", e);
                Outcome::Unavailable
            }
        }
    }
}

/// `OpenMeteo` API response structures
mod openmeteo {
    use crate::models::WeatherReading;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub current: Option<CurrentData>,
    }

    #[derive(Debug, Deserialize)]
    pub struct CurrentData {
        #[serde(rename = "temperature_2m")]
        pub temperature: Option<f64>,
        pub precipitation_probability: Option<u8>,
        pub weather_code: Option<u16>,
    }

    impl From<CurrentData> for WeatherReading {
        fn from(current: CurrentData) -> Self {
            WeatherReading::new(
                current.temperature,
                current.precipitation_probability.unwrap_or(0),
                current.weather_code.unwrap_or(0),
            )
        }
    }
}

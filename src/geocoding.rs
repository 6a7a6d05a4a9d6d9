//! Geocoding via Nominatim (OpenStreetMap)
//!
//! Any failure (transport, timeout, bad payload, empty result) resolves to
//! [`Outcome::NotFound`]; callers cannot tell a missing place from an
//! unreachable provider.

use crate::config::GeocodingConfig;
use crate::models::{Coordinate, Outcome};
use crate::{Result, TourismAiError};
use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

/// Resolves a free-text place name to coordinates
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Best match for `place_name`, or `NotFound`
    async fn resolve(&self, place_name: &str) -> Outcome<Coordinate>;

    async fn exists(&self, place_name: &str) -> bool {
        self.resolve(place_name).await.is_success()
    }
}

#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    display_name: Option<String>,
}

impl NominatimPlace {
    fn coordinate(&self) -> Result<Coordinate> {
        let latitude = self
            .lat
            .parse::<f64>()
            .map_err(|e| TourismAiError::parse(format!("Invalid latitude '{}': {e}", self.lat)))?;
        let longitude = self
            .lon
            .parse::<f64>()
            .map_err(|e| TourismAiError::parse(format!("Invalid longitude '{}': {e}", self.lon)))?;

        let coordinate = Coordinate::new(latitude, longitude);
        if !coordinate.is_valid() {
            return Err(TourismAiError::parse(format!(
                "Coordinates out of range: {}",
                coordinate.format_coordinates()
            )));
        }
        Ok(coordinate)
    }
}

/// Nominatim search client
pub struct NominatimGeocoder {
    client: Client,
    base_url: String,
}

impl NominatimGeocoder {
    pub fn new(config: &GeocodingConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(config.user_agent.clone())
            .build()
            .with_context(|| "Failed to create geocoding HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// `Ok(None)` when the search returned no results
    async fn search(&self, place_name: &str) -> Result<Option<Coordinate>> {
        let url = format!(
            "{}/search?q={}&format=json&limit=1&addressdetails=1",
            self.base_url,
            urlencoding::encode(place_name)
        );
        debug!("Nominatim request URL: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TourismAiError::api(format!(
                "Nominatim returned status {status}"
            )));
        }

        let places: Vec<NominatimPlace> = response.json().await?;
        match places.first() {
            Some(place) => {
                debug!(display_name = ?place.display_name, "Nominatim best match");
                place.coordinate().map(Some)
            }
            None => Ok(None),
        }
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    #[instrument(skip(self))]
    async fn resolve(&self, place_name: &str) -> Outcome<Coordinate> {
        if place_name.trim().is_empty() {
            warn!("Refusing to geocode an empty place name");
            return Outcome::NotFound;
        }

        let start_time = Instant::now();
        match self.search(place_name).await {
            Ok(Some(coordinate)) => {
                info!(
                    "Geocoded '{}' to ({}) in {:.3}s",
                    place_name,
                    coordinate.format_coordinates(),
                    start_time.elapsed().as_secs_f64()
                );
                Outcome::Success(coordinate)
            }
            Ok(None) => {
                warn!("No results found for location '{}'", place_name);
                Outcome::NotFound
            }
            Err(e) => {
                warn!("Geocoding '{}' failed: {}", place_name, e);
                Outcome::NotFound
            }
        }
    }
}

//! Points of interest via the Overpass API
//!
//! A tourism/leisure search around the coordinate runs first. When it yields
//! fewer names than requested, a wider search restricted to named tourism
//! features tops the list up, skipping names already collected.

use crate::config::PlacesConfig;
use crate::models::{AttractionList, Coordinate, Outcome};
use crate::{Result, TourismAiError};
use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

/// Named attractions around a resolved coordinate
#[async_trait]
pub trait PlacesProvider: Send + Sync {
    /// At most `limit` distinct names. An empty list is a successful answer.
    async fn get_attractions(&self, coordinate: Coordinate, limit: usize) -> Outcome<AttractionList>;
}

#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<OverpassElement>,
}

#[derive(Debug, Deserialize)]
struct OverpassElement {
    #[serde(default)]
    tags: HashMap<String, String>,
}

impl OverpassElement {
    fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str).filter(|v| !v.trim().is_empty())
    }

    /// Name for the primary search; unnamed features fall back to their category
    fn display_name(&self) -> Option<&str> {
        self.tag("name")
            .or_else(|| self.tag("name:en"))
            .or_else(|| self.tag("tourism"))
            .or_else(|| self.tag("leisure"))
    }

    fn proper_name(&self) -> Option<&str> {
        self.tag("name").or_else(|| self.tag("name:en"))
    }
}

/// Overpass interpreter client
pub struct OverpassClient {
    client: Client,
    base_url: String,
    primary_radius_m: u32,
    fallback_radius_m: u32,
}

impl OverpassClient {
    pub fn new(config: &PlacesConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(concat!("tourism-ai/", env!("CARGO_PKG_VERSION")))
            .build()
            .with_context(|| "Failed to create places HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            primary_radius_m: config.primary_radius_m,
            fallback_radius_m: config.fallback_radius_m,
        })
    }

    async fn run_query(&self, query: &str) -> Result<OverpassResponse> {
        let url = format!("{}/interpreter", self.base_url);
        debug!("Overpass query: {}", query);

        let response = self
            .client
            .post(&url)
            .form(&[("data", query)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TourismAiError::api(format!(
                "Overpass returned status {status}"
            )));
        }

        Ok(response.json().await?)
    }

    async fn collect(&self, coordinate: Coordinate, limit: usize) -> Result<AttractionList> {
        let mut attractions = AttractionList::with_limit(limit);

        let primary = self
            .run_query(&primary_query(coordinate, self.primary_radius_m))
            .await?;
        attractions.extend(primary.elements.iter().filter_map(OverpassElement::display_name));
        debug!("Primary search found {} attractions", attractions.len());

        if attractions.is_full() {
            return Ok(attractions);
        }

        match self
            .run_query(&fallback_query(coordinate, self.fallback_radius_m))
            .await
        {
            Ok(broader) => {
                attractions.extend(broader.elements.iter().filter_map(OverpassElement::proper_name));
                debug!("Broadened search raised total to {}", attractions.len());
                Ok(attractions)
            }
            Err(e) if !attractions.is_empty() => {
                warn!("Broadened attraction search failed, keeping primary results: {}", e);
                Ok(attractions)
            }
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl PlacesProvider for OverpassClient {
    #[instrument(skip(self), fields(lat = coordinate.latitude, lon = coordinate.longitude))]
    async fn get_attractions(&self, coordinate: Coordinate, limit: usize) -> Outcome<AttractionList> {
        let start_time = Instant::now();
        match self.collect(coordinate, limit).await {
            Ok(attractions) => {
                info!(
                    "Found {} attractions in {:.3}s",
                    attractions.len(),
                    start_time.elapsed().as_secs_f64()
                );
                Outcome::Success(attractions)
            }
            Err(e) => {
                warn!("Attraction lookup failed: {}", e);
                Outcome::Unavailable
            }
        }
    }
}

fn primary_query(coordinate: Coordinate, radius_m: u32) -> String {
    let around = format!("around:{},{},{}", radius_m, coordinate.latitude, coordinate.longitude);
    format!(
        "[out:json][timeout:25];\n(\n  node[\"tourism\"]({around});\n  node[\"leisure\"]({around});\n  way[\"tourism\"]({around});\n  way[\"leisure\"]({around});\n);\nout center;"
    )
}

fn fallback_query(coordinate: Coordinate, radius_m: u32) -> String {
    let around = format!("around:{},{},{}", radius_m, coordinate.latitude, coordinate.longitude);
    format!(
        "[out:json][timeout:25];\n(\n  node[\"tourism\"][\"name\"]({around});\n  way[\"tourism\"][\"name\"]({around});\n  relation[\"tourism\"][\"name\"]({around});\n);\nout center;"
    )
}

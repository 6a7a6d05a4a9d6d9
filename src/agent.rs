//! Request orchestration: extract, validate, classify, fetch, compose
//!
//! [`TourismAgent::process`] always returns a reply string. Provider failures
//! arrive as [`Outcome`] values and are rendered together by [`crate::response::merge`].

use crate::config::TourismAiConfig;
use crate::extractor::PlaceNameExtractor;
use crate::geocoding::{Geocoder, NominatimGeocoder};
use crate::intent::IntentClassifier;
use crate::models::{AttractionList, Coordinate, Outcome, WeatherReading};
use crate::places::{OverpassClient, PlacesProvider};
use crate::response;
use crate::weather::{OpenMeteoClient, WeatherProvider};
use anyhow::Result;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Default number of attractions listed in a reply
pub const DEFAULT_ATTRACTION_LIMIT: usize = 5;

/// Turns a free-text travel query into a single natural-language reply
pub struct TourismAgent {
    extractor: PlaceNameExtractor,
    classifier: IntentClassifier,
    geocoder: Arc<dyn Geocoder>,
    weather: Arc<dyn WeatherProvider>,
    places: Arc<dyn PlacesProvider>,
    attraction_limit: usize,
}

impl TourismAgent {
    /// Agent with the English extractor/classifier and the given providers
    pub fn new(
        geocoder: Arc<dyn Geocoder>,
        weather: Arc<dyn WeatherProvider>,
        places: Arc<dyn PlacesProvider>,
    ) -> Result<Self> {
        Ok(Self {
            extractor: PlaceNameExtractor::english()?,
            classifier: IntentClassifier::default(),
            geocoder,
            weather,
            places,
            attraction_limit: DEFAULT_ATTRACTION_LIMIT,
        })
    }

    /// Agent backed by Nominatim, Open-Meteo and Overpass
    pub fn from_config(config: &TourismAiConfig) -> Result<Self> {
        let agent = Self::new(
            Arc::new(NominatimGeocoder::new(&config.geocoding)?),
            Arc::new(OpenMeteoClient::new(&config.weather)?),
            Arc::new(OverpassClient::new(&config.places)?),
        )?;
        Ok(agent.with_attraction_limit(config.places.attraction_limit))
    }

    #[must_use]
    pub fn with_extractor(mut self, extractor: PlaceNameExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    #[must_use]
    pub fn with_classifier(mut self, classifier: IntentClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    #[must_use]
    pub fn with_attraction_limit(mut self, limit: usize) -> Self {
        self.attraction_limit = limit.max(1);
        self
    }

    /// Answer one query. Never fails; every error path has a reply.
    #[instrument(skip(self))]
    pub async fn process(&self, raw_text: &str) -> String {
        let start_time = Instant::now();

        let Some(query) = self.extractor.parse(raw_text) else {
            info!("No place name found in query");
            return response::place_not_identified();
        };
        let place_name = query.place_name.as_str();

        let coordinate = match self.geocoder.resolve(place_name).await {
            Outcome::Success(coordinate) => coordinate,
            Outcome::NotFound | Outcome::Unavailable => {
                info!("Place '{}' could not be resolved", place_name);
                return response::place_unknown(place_name);
            }
        };

        let intent = self.classifier.classify(&query.raw_text);

        let (weather, places) = tokio::join!(
            async {
                if intent.wants_weather {
                    Some(self.weather_facet(coordinate).await)
                } else {
                    None
                }
            },
            async {
                if intent.wants_places {
                    Some(self.places_facet(coordinate).await)
                } else {
                    None
                }
            },
        );

        let reply = response::merge(place_name, weather, places);
        info!(
            "Answered query about '{}' in {:.3}s",
            place_name,
            start_time.elapsed().as_secs_f64()
        );
        reply
    }

    async fn weather_facet(&self, coordinate: Coordinate) -> Outcome<WeatherReading> {
        let outcome = self.weather.get_weather(coordinate).await;
        debug!(success = outcome.is_success(), "Weather facet finished");
        outcome
    }

    async fn places_facet(&self, coordinate: Coordinate) -> Outcome<AttractionList> {
        let outcome = self
            .places
            .get_attractions(coordinate, self.attraction_limit)
            .await;
        debug!(success = outcome.is_success(), "Places facet finished");
        outcome
    }
}

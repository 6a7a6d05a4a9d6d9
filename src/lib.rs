//! `Tourism AI` - Natural-language travel assistant
//!
//! This library turns free-text travel questions into a place name and a set
//! of requested facets, validates the place through geocoding, and answers
//! with current weather and nearby attractions.

pub mod agent;
pub mod api;
pub mod config;
pub mod error;
pub mod extractor;
pub mod geocoding;
pub mod history;
pub mod intent;
pub mod logging;
pub mod models;
pub mod places;
pub mod response;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use agent::TourismAgent;
pub use config::TourismAiConfig;
pub use error::TourismAiError;
pub use extractor::{PlaceMatcher, PlaceNameExtractor, PlaceQuery, StopWords};
pub use geocoding::{Geocoder, NominatimGeocoder};
pub use history::ConversationHistory;
pub use intent::{Intent, IntentClassifier, IntentVocabulary};
pub use models::{AttractionList, Coordinate, Outcome, WeatherReading};
pub use places::{OverpassClient, PlacesProvider};
pub use weather::{OpenMeteoClient, WeatherProvider};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TourismAiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}

//! Intent classification: which facets (weather, places) a query asks for

use serde::Serialize;
use tracing::debug;

/// Facets requested by a query. At least one flag is always set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Intent {
    pub wants_weather: bool,
    pub wants_places: bool,
}

/// Keyword vocabularies used for substring matching against lower-cased text
#[derive(Debug, Clone)]
pub struct IntentVocabulary {
    pub weather_terms: Vec<String>,
    pub places_terms: Vec<String>,
}

impl IntentVocabulary {
    /// Lower-cases every term so matching is case-insensitive
    pub fn new<W, P>(weather_terms: W, places_terms: P) -> Self
    where
        W: IntoIterator,
        W::Item: AsRef<str>,
        P: IntoIterator,
        P::Item: AsRef<str>,
    {
        Self {
            weather_terms: weather_terms
                .into_iter()
                .map(|t| t.as_ref().to_lowercase())
                .collect(),
            places_terms: places_terms
                .into_iter()
                .map(|t| t.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// English vocabulary
    #[must_use]
    pub fn english() -> Self {
        Self::new(
            [
                "weather",
                "temperature",
                "temp",
                "rain",
                "rainfall",
                "forecast",
                "climate",
                "rainy",
                "sunny",
                "cloudy",
            ],
            [
                "places",
                "attractions",
                "tourist",
                "visit",
                "see",
                "sightseeing",
                "where to go",
                "things to do",
                "must see",
                "plan",
                "planning",
                "trip",
            ],
        )
    }
}

impl Default for IntentVocabulary {
    fn default() -> Self {
        Self::english()
    }
}

/// Classifies raw text into an [`Intent`] using an owned vocabulary
#[derive(Debug, Clone, Default)]
pub struct IntentClassifier {
    vocabulary: IntentVocabulary,
}

impl IntentClassifier {
    #[must_use]
    pub fn new(vocabulary: IntentVocabulary) -> Self {
        Self { vocabulary }
    }

    /// Ambiguous text (neither vocabulary matches) is treated as a places query.
    #[must_use]
    pub fn classify(&self, raw_text: &str) -> Intent {
        let lower = raw_text.to_lowercase();

        let wants_weather = contains_any(&lower, &self.vocabulary.weather_terms);
        let mut wants_places = contains_any(&lower, &self.vocabulary.places_terms);

        if !wants_weather && !wants_places {
            wants_places = true;
        }

        let intent = Intent {
            wants_weather,
            wants_places,
        };
        debug!(?intent, "Classified query intent");
        intent
    }
}

fn contains_any(input: &str, needles: &[String]) -> bool {
    needles.iter().any(|needle| input.contains(needle.as_str()))
}

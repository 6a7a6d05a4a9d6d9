//! Reply templates and the facet merge rule
//!
//! Provider outcomes stay structured until [`merge`], which renders every
//! requested facet at once.

use crate::models::{AttractionList, Outcome, WeatherReading};

pub fn place_not_identified() -> String {
    "I couldn't identify the place you want to visit. Could you please specify the place name?"
        .to_string()
}

pub fn place_unknown(place_name: &str) -> String {
    format!("I don't know if the place '{place_name}' exists. Could you check the spelling?")
}

pub fn request_failed(place_name: &str) -> String {
    format!("I couldn't process your request for {place_name}. Please try again.")
}

fn places_header(place_name: &str) -> String {
    format!("In {place_name} these are the places you can go,")
}

const COMBINED_PLACES_HEADER: &str = "And these are the places you can go:";

/// Weather sentence, or the unknown-place message when the provider failed
pub fn weather_reply(place_name: &str, outcome: Outcome<WeatherReading>) -> String {
    match outcome {
        Outcome::Success(reading) => format!(
            "In {place_name} it's currently {}°C with a chance of {}% to rain.",
            reading.format_temperature(),
            reading.precipitation_probability
        ),
        Outcome::NotFound | Outcome::Unavailable => place_unknown(place_name),
    }
}

/// Bulleted attraction list; an empty list is reported as such, not as an unknown place
pub fn places_reply(place_name: &str, outcome: Outcome<AttractionList>) -> String {
    render_places(place_name, outcome, &places_header(place_name))
}

fn render_places(place_name: &str, outcome: Outcome<AttractionList>, header: &str) -> String {
    match outcome {
        Outcome::Success(attractions) if attractions.is_empty() => {
            format!("I couldn't find any tourist attractions for {place_name}.")
        }
        Outcome::Success(attractions) => {
            let mut reply = header.to_string();
            reply.push('\n');
            for name in &attractions {
                reply.push_str("- ");
                reply.push_str(name);
                reply.push('\n');
            }
            reply.trim_end().to_string()
        }
        Outcome::NotFound | Outcome::Unavailable => place_unknown(place_name),
    }
}

/// Render and join the requested facets, weather first. With both present the
/// list gets the short header so the place name is not repeated.
pub fn merge(
    place_name: &str,
    weather: Option<Outcome<WeatherReading>>,
    places: Option<Outcome<AttractionList>>,
) -> String {
    match (weather, places) {
        (Some(weather), Some(places)) => format!(
            "{} {}",
            weather_reply(place_name, weather),
            render_places(place_name, places, COMBINED_PLACES_HEADER)
        ),
        (Some(weather), None) => weather_reply(place_name, weather),
        (None, Some(places)) => places_reply(place_name, places),
        (None, None) => request_failed(place_name),
    }
}

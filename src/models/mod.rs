//! Data models for the Tourism AI application
//!
//! This module contains the request-scoped domain models organized by concern:
//! - Location: Geographic coordinates
//! - Weather: Current weather reading
//! - Attractions: Deduplicated points of interest
//! - Outcome: Success / not found / unavailable provider results

pub mod attractions;
pub mod location;
pub mod outcome;
pub mod weather;

// Re-export all public types for convenient access
pub use attractions::AttractionList;
pub use location::Coordinate;
pub use outcome::Outcome;
pub use weather::{WeatherReading, weather_code_to_description};

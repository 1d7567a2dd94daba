//! Search provider response DTOs.
//!
//! These types map directly to the Google Flights payload served by SerpApi.
//! They use `Option` liberally because the provider omits fields rather than
//! sending null values in many cases.

use serde::Deserialize;

/// Top-level search response.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    /// Error indicator from the provider (e.g. bad key, quota exhausted).
    /// When present, the rest of the payload is not meaningful.
    pub error: Option<String>,

    /// The provider's curated "best" offers.
    pub best_flights: Option<Vec<FlightOffer>>,

    /// Remaining offers.
    pub other_flights: Option<Vec<FlightOffer>>,
}

/// One flight offer: an ordered sequence of legs plus offer-level data.
#[derive(Debug, Clone, Deserialize)]
pub struct FlightOffer {
    /// Flight legs in travel order.
    pub flights: Option<Vec<FlightLeg>>,

    /// Total trip duration in minutes.
    pub total_duration: Option<i64>,

    /// Offer price in the requested currency.
    pub price: Option<f64>,

    /// Opaque booking reference.
    pub booking_token: Option<String>,
}

/// A single flight leg.
#[derive(Debug, Clone, Deserialize)]
pub struct FlightLeg {
    /// Departure endpoint of this leg.
    pub departure_airport: Option<EndpointInfo>,

    /// Arrival endpoint of this leg.
    pub arrival_airport: Option<EndpointInfo>,

    /// Operating airline name.
    pub airline: Option<String>,

    /// Flight number (e.g. "LO 152").
    pub flight_number: Option<String>,

    /// Layover following this leg, when it is not the last leg.
    pub layover: Option<LayoverInfo>,
}

/// Airport endpoint info on a leg.
#[derive(Debug, Clone, Deserialize)]
pub struct EndpointInfo {
    /// IATA airport code.
    pub id: Option<String>,

    /// Human-readable airport name.
    pub name: Option<String>,

    /// Local time-of-day string; format varies ("HH:MM" or "h:mm AM").
    pub time: Option<String>,
}

/// Layover descriptor trailing a leg.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoverInfo {
    /// IATA airport code of the connection airport.
    pub id: Option<String>,

    /// Human-readable airport name.
    pub name: Option<String>,

    /// Layover duration in minutes.
    pub duration: Option<i64>,
}

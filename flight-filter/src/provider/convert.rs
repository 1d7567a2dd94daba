//! Normalization from provider DTOs to the canonical itinerary shape.
//!
//! The provider feed is untrusted and partially missing data is expected:
//! absent fields normalize to explicit empty/zero defaults instead of
//! propagating errors. Each normalized offer records which fields were
//! defaulted so a stricter mode can inspect the data quality later.

use tracing::debug;

use crate::domain::{Itinerary, Layover};

use super::types::{EndpointInfo, FlightLeg, FlightOffer, SearchResponse};

/// An itinerary plus normalization diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedOffer {
    /// The canonical itinerary.
    pub itinerary: Itinerary,

    /// Names of fields that were absent in the payload and defaulted.
    pub defaulted: Vec<&'static str>,
}

/// Normalize a full search response into itineraries.
///
/// Offers are taken from `best_flights` followed by `other_flights`,
/// preserving the provider's ordering within each list.
pub fn normalize_response(response: &SearchResponse, currency: &str) -> Vec<NormalizedOffer> {
    let best = response.best_flights.as_deref().unwrap_or(&[]);
    let other = response.other_flights.as_deref().unwrap_or(&[]);

    let normalized: Vec<NormalizedOffer> = best
        .iter()
        .chain(other.iter())
        .map(|offer| normalize_offer(offer, currency))
        .collect();

    debug!(
        best = best.len(),
        other = other.len(),
        "normalized provider response"
    );

    normalized
}

/// Normalize one provider offer.
///
/// - Departure time/airport come from the first leg's departure endpoint.
/// - Arrival time/airport come from the last leg's arrival endpoint.
/// - Airlines and flight numbers are collected from every leg that carries
///   them, in encounter order, without deduplication.
/// - Every leg except the last that carries a layover descriptor emits a
///   [`Layover`]; codes are upper-cased for set-membership comparison.
pub fn normalize_offer(offer: &FlightOffer, currency: &str) -> NormalizedOffer {
    let mut defaulted = Vec::new();

    let price = match offer.price {
        Some(price) => price,
        None => {
            defaulted.push("price");
            0.0
        }
    };

    let total_duration_mins = match offer.total_duration {
        Some(mins) => mins,
        None => {
            defaulted.push("total_duration");
            0
        }
    };

    let booking_token = match &offer.booking_token {
        Some(token) => token.clone(),
        None => {
            defaulted.push("booking_token");
            String::new()
        }
    };

    let legs = offer.flights.as_deref().unwrap_or(&[]);
    if offer.flights.is_none() {
        defaulted.push("flights");
    }

    let (departure_time, origin) = endpoint_fields(
        legs.first().and_then(|leg| leg.departure_airport.as_ref()),
        "departure_time",
        "origin",
        &mut defaulted,
    );
    let (arrival_time, destination) = endpoint_fields(
        legs.last().and_then(|leg| leg.arrival_airport.as_ref()),
        "arrival_time",
        "destination",
        &mut defaulted,
    );

    let mut airlines = Vec::new();
    let mut flight_numbers = Vec::new();
    for leg in legs {
        if let Some(airline) = &leg.airline {
            airlines.push(airline.clone());
        }
        if let Some(number) = &leg.flight_number {
            flight_numbers.push(number.clone());
        }
    }

    let layovers = collect_layovers(legs, &mut defaulted);

    NormalizedOffer {
        itinerary: Itinerary {
            price,
            currency: currency.to_string(),
            departure_time,
            arrival_time,
            total_duration_mins,
            origin,
            destination,
            layovers,
            airlines,
            flight_numbers,
            booking_token,
        },
        defaulted,
    }
}

/// Pull (time, airport code) out of an optional endpoint, defaulting both
/// under the given diagnostic field names.
fn endpoint_fields(
    endpoint: Option<&EndpointInfo>,
    time_field: &'static str,
    code_field: &'static str,
    defaulted: &mut Vec<&'static str>,
) -> (String, String) {
    let time = endpoint.and_then(|e| e.time.clone()).unwrap_or_else(|| {
        defaulted.push(time_field);
        String::new()
    });

    let code = endpoint.and_then(|e| e.id.clone()).unwrap_or_else(|| {
        defaulted.push(code_field);
        String::new()
    });

    (time, code)
}

/// A layover is emitted for every leg except the last that carries one.
fn collect_layovers(legs: &[FlightLeg], defaulted: &mut Vec<&'static str>) -> Vec<Layover> {
    let mut layovers = Vec::new();

    for leg in legs.iter().take(legs.len().saturating_sub(1)) {
        let Some(info) = &leg.layover else { continue };

        let duration_mins = match info.duration {
            Some(mins) => mins,
            None => {
                defaulted.push("layover_duration");
                0
            }
        };

        layovers.push(Layover {
            airport_code: info.id.clone().unwrap_or_default().to_uppercase(),
            airport_name: info.name.clone().unwrap_or_default(),
            duration_mins,
        });
    }

    layovers
}

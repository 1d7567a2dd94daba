//! Flight search provider integration.
//!
//! This module wraps the SerpApi Google Flights endpoint: an HTTP client
//! that issues one bounded-timeout request per search, the raw response
//! DTOs, and the normalizer that maps provider offers into the canonical
//! [`Itinerary`](crate::domain::Itinerary) shape.
//!
//! Key characteristics of the feed:
//! - Fields are omitted rather than sent as null; every DTO field is an
//!   `Option` and normalization defaults the gaps.
//! - Times are bare time-of-day strings in mixed 24-hour and 12-hour
//!   formats, with no date or timezone attached.
//! - Offers arrive in two lists, `best_flights` and `other_flights`,
//!   which are concatenated in that order.

mod client;
mod convert;
mod error;
mod types;

pub use client::{FlightClient, ProviderConfig, SearchQuery};
pub use convert::{NormalizedOffer, normalize_offer, normalize_response};
pub use error::ProviderError;
pub use types::{EndpointInfo, FlightLeg, FlightOffer, LayoverInfo, SearchResponse};

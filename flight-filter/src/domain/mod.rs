//! Domain types for the itinerary filter.
//!
//! This module contains the core domain model: validated airport codes,
//! tolerant time-of-day values, the canonical itinerary shape, and the
//! verdict attached by evaluation.

mod airport;
mod itinerary;
mod time;
mod verdict;

pub use airport::{Iata, InvalidIata};
pub use itinerary::{Itinerary, Layover};
pub use time::{ClockTime, TimeError, elapsed_minutes};
pub use verdict::Verdict;

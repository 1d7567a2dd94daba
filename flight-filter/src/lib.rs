//! Constraint-based flight itinerary filter.
//!
//! Given candidate flight offers from a search provider, decides which
//! itineraries satisfy a set of traveler-defined rules (time windows,
//! maximum trip duration, border-crossing-aware minimum connection times),
//! then ranks and renders the survivors.

pub mod domain;
pub mod pipeline;
pub mod present;
pub mod provider;
pub mod rules;

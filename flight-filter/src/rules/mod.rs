//! Traveler-defined constraint rules and their evaluation.
//!
//! The rule set is one fixed, composable configuration: departure/arrival
//! time windows, a total-duration cap, and border-crossing-aware minimum
//! connection times. Evaluation produces a structured verdict per itinerary;
//! filtering retains passers in input order.

mod config;
mod evaluate;
mod filter;

pub use config::{ConnectionKind, ConstraintRules};
pub use evaluate::evaluate;
pub use filter::{EvaluatedItinerary, filter_itineraries};

//! Itinerary filtering.

use tracing::debug;

use crate::domain::{Itinerary, Verdict};

use super::config::ConstraintRules;
use super::evaluate::evaluate;

/// An itinerary that survived filtering, with its verdict attached.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluatedItinerary {
    pub itinerary: Itinerary,
    pub verdict: Verdict,
}

/// Run the evaluator over a collection and retain the passers.
///
/// The filter is stable: survivors keep the same relative order they had in
/// the input.
pub fn filter_itineraries(
    rules: &ConstraintRules,
    itineraries: Vec<Itinerary>,
) -> Vec<EvaluatedItinerary> {
    let total = itineraries.len();

    let survivors: Vec<EvaluatedItinerary> = itineraries
        .into_iter()
        .filter_map(|itinerary| {
            let verdict = evaluate(rules, &itinerary);
            verdict.passes.then_some(EvaluatedItinerary { itinerary, verdict })
        })
        .collect();

    debug!(total, passing = survivors.len(), "filtered itineraries");

    survivors
}

//! End-to-end search pipeline.
//!
//! One search produces one response: raw payload in, normalized itineraries
//! through the filter, survivors out. The only fallible step is the provider
//! call; everything downstream degrades gracefully instead of erroring.

use tracing::{debug, info};

use crate::provider::{
    FlightClient, ProviderError, SearchQuery, SearchResponse, normalize_response,
};
use crate::rules::{ConstraintRules, EvaluatedItinerary, filter_itineraries};

/// Result of one search-and-filter cycle.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Itineraries that passed every check, in input order.
    pub survivors: Vec<EvaluatedItinerary>,

    /// Number of offers the provider returned before filtering.
    pub total_found: usize,
}

/// Normalize a provider response and filter it against the rules.
///
/// Synchronous core of the pipeline, separated from the network call so it
/// can be exercised with constructed payloads.
pub fn evaluate_response(
    rules: &ConstraintRules,
    response: &SearchResponse,
    currency: &str,
) -> SearchOutcome {
    let normalized = normalize_response(response, currency);
    let total_found = normalized.len();

    let itineraries = normalized
        .into_iter()
        .map(|offer| {
            if !offer.defaulted.is_empty() {
                debug!(fields = ?offer.defaulted, "offer had missing fields, defaulted");
            }
            offer.itinerary
        })
        .collect();

    SearchOutcome {
        survivors: filter_itineraries(rules, itineraries),
        total_found,
    }
}

/// Run one full search-and-filter cycle.
///
/// A provider failure is fatal to this search and propagates unchanged; the
/// caller surfaces it once with no retry. An empty survivor list is a valid
/// outcome, not an error.
pub async fn run_search(
    client: &FlightClient,
    rules: &ConstraintRules,
    query: &SearchQuery,
) -> Result<SearchOutcome, ProviderError> {
    let response = client.search(query).await?;

    let outcome = evaluate_response(rules, &response, client.currency());
    info!(
        found = outcome.total_found,
        passing = outcome.survivors.len(),
        "search complete"
    );

    Ok(outcome)
}

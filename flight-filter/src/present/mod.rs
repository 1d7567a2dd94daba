//! Rendering of surviving itineraries.
//!
//! Sorts survivors by price (stable, ascending) and renders each as a text
//! block. A display cap truncates long result lists with a remainder count.

use crate::rules::EvaluatedItinerary;

/// Width of the block separator rule.
const RULE_WIDTH: usize = 80;

/// Presenter options.
#[derive(Debug, Clone)]
pub struct PresenterConfig {
    /// Maximum number of itineraries to render in full.
    pub display_cap: usize,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self { display_cap: 10 }
    }
}

/// Render surviving itineraries, cheapest first.
///
/// The sort is stable: two itineraries with equal price keep the relative
/// order they arrived in. Results past the display cap are summarized as
/// a remainder count.
pub fn render(config: &PresenterConfig, results: &[EvaluatedItinerary]) -> String {
    let mut ordered: Vec<&EvaluatedItinerary> = results.iter().collect();
    ordered.sort_by(|a, b| a.itinerary.price.total_cmp(&b.itinerary.price));
    let total = ordered.len();

    let mut out = String::new();
    for (index, result) in ordered.into_iter().take(config.display_cap).enumerate() {
        out.push_str(&format_itinerary(result, index));
        out.push('\n');
    }

    if total > config.display_cap {
        out.push_str(&format!(
            "... and {} more options\n",
            total - config.display_cap
        ));
    }

    out
}

/// Format a single itinerary block with a 1-based ordinal header.
pub fn format_itinerary(result: &EvaluatedItinerary, index: usize) -> String {
    let it = &result.itinerary;
    let rule = "=".repeat(RULE_WIDTH);

    let mut lines = Vec::new();
    lines.push(rule.clone());
    lines.push(format!("Option #{}", index + 1));
    lines.push(rule);
    lines.push(format!("Price: {} {}", it.price, it.currency));
    lines.push(format!("Departure: {} from {}", it.departure_time, it.origin));
    lines.push(format!("Arrival: {} at {}", it.arrival_time, it.destination));
    lines.push(format!(
        "Total Duration: {}h {}m ({} minutes)",
        it.total_duration_mins / 60,
        it.total_duration_mins % 60,
        it.total_duration_mins
    ));

    if !it.airlines.is_empty() {
        lines.push(format!("Airlines: {}", it.airlines.join(", ")));
    }

    if it.is_direct() {
        lines.push(String::new());
        lines.push("Direct flight".to_string());
    } else {
        lines.push(String::new());
        lines.push(format!("Connections ({}):", it.connection_count()));
        for (i, layover) in it.layovers.iter().enumerate() {
            let position = i + 1;
            lines.push(format!(
                "  {position}. {} ({}) - {} minutes",
                layover.airport_name, layover.airport_code, layover.duration_mins
            ));
            for warning in result.verdict.warnings_for_connection(position) {
                lines.push(format!("     ! {warning}"));
            }
        }
    }

    lines.join("\n")
}

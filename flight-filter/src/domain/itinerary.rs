//! Canonical itinerary shape.
//!
//! An [`Itinerary`] is one candidate flight offer after normalization from
//! the provider payload. Fields the provider omitted hold explicit empty or
//! zero defaults rather than `Option`s; the normalization layer records which
//! fields were defaulted.

/// A scheduled connection between two flight legs.
///
/// Position within [`Itinerary::layovers`] matters: connection reasons and
/// warnings reference layovers by their 1-based position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layover {
    /// IATA code of the connection airport, upper-cased at normalization.
    pub airport_code: String,

    /// Human-readable airport name for display.
    pub airport_name: String,

    /// Connection duration in minutes. Missing provider data defaults to 0.
    pub duration_mins: i64,
}

/// One candidate flight offer, normalized to the canonical shape.
///
/// Constructed per search and held only for one filter-and-present cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Itinerary {
    /// Offer price in `currency` units.
    pub price: f64,

    /// Currency the price is quoted in (e.g., "EUR").
    pub currency: String,

    /// Departure time-of-day string as reported by the provider.
    ///
    /// Kept as a string: the provider mixes 24-hour and 12-hour formats and
    /// sometimes sends nothing. Checks parse it tolerantly on demand.
    pub departure_time: String,

    /// Arrival time-of-day string as reported by the provider.
    pub arrival_time: String,

    /// Total trip duration in minutes.
    pub total_duration_mins: i64,

    /// Origin airport code.
    pub origin: String,

    /// Final destination airport code.
    pub destination: String,

    /// Connections in itinerary order.
    pub layovers: Vec<Layover>,

    /// Operating airline names in encounter order, duplicates allowed.
    pub airlines: Vec<String>,

    /// Flight numbers in encounter order.
    pub flight_numbers: Vec<String>,

    /// Opaque booking reference from the provider.
    pub booking_token: String,
}

impl Itinerary {
    /// Whether this itinerary has no connections.
    pub fn is_direct(&self) -> bool {
        self.layovers.is_empty()
    }

    /// Number of connections.
    pub fn connection_count(&self) -> usize {
        self.layovers.len()
    }
}

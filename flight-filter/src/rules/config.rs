//! Traveler constraint configuration.

use std::collections::HashSet;
use std::fmt;

use crate::domain::{ClockTime, Iata};

/// Airports treated as inside the reference border-control area by default.
///
/// These are the common connection hubs reachable from the default origin;
/// the set is configurable for other routes.
const DEFAULT_BORDER_AREA_AIRPORTS: [&str; 14] = [
    "WAW", "FRA", "MUC", "VIE", "AMS", "CDG", "ZRH", "CPH", "ARN", "BRU", "ATH", "FCO", "MAD",
    "BCN",
];

/// Destinations categorically outside the reference area by default.
const DEFAULT_EXTERNAL_DESTINATIONS: [&str; 2] = ["TLV", "HFA"];

/// How a connection is classified for minimum-duration purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionKind {
    /// The transfer stays within the reference border-control area.
    WithinArea,
    /// The transfer leaves the reference area (passport control en route).
    BorderExit,
}

impl fmt::Display for ConnectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionKind::WithinArea => f.write_str("within area"),
            ConnectionKind::BorderExit => f.write_str("border exit"),
        }
    }
}

/// Immutable rule thresholds applied to every itinerary.
///
/// The defaults carry the production rule set; tests and alternate routes
/// override individual fields through the `with_*` builders.
#[derive(Debug, Clone)]
pub struct ConstraintRules {
    /// Earliest acceptable departure time (inclusive).
    pub min_departure: ClockTime,

    /// Latest acceptable departure time (inclusive).
    pub max_departure: ClockTime,

    /// Earliest acceptable arrival time (inclusive).
    pub min_arrival: ClockTime,

    /// Latest acceptable arrival time (inclusive).
    pub max_arrival: ClockTime,

    /// Maximum total trip duration in minutes.
    pub max_trip_mins: i64,

    /// Minimum connection for a transfer staying within the area (minutes).
    pub min_connection_within: i64,

    /// Minimum connection for a transfer crossing out of the area (minutes).
    pub min_connection_exit: i64,

    /// Minimum connection for a self-transfer between separate tickets
    /// (minutes). Not consulted by evaluation; carried for parity with the
    /// rule set it was configured alongside.
    pub min_connection_self_transfer: i64,

    /// Extra minutes above the required minimum below which a passing
    /// connection is still flagged as tight.
    pub warning_slack_mins: i64,

    /// Airport codes considered inside the reference border-control area.
    pub border_area_airports: HashSet<Iata>,

    /// Destination codes categorically outside the reference area.
    pub external_destinations: HashSet<Iata>,
}

impl ConstraintRules {
    /// Override the departure window.
    pub fn with_departure_window(mut self, min: ClockTime, max: ClockTime) -> Self {
        self.min_departure = min;
        self.max_departure = max;
        self
    }

    /// Override the arrival window.
    pub fn with_arrival_window(mut self, min: ClockTime, max: ClockTime) -> Self {
        self.min_arrival = min;
        self.max_arrival = max;
        self
    }

    /// Override the maximum trip duration.
    pub fn with_max_trip_mins(mut self, mins: i64) -> Self {
        self.max_trip_mins = mins;
        self
    }

    /// Override both connection minimums.
    pub fn with_connection_minimums(mut self, within: i64, exit: i64) -> Self {
        self.min_connection_within = within;
        self.min_connection_exit = exit;
        self
    }

    /// Override the warning slack margin.
    pub fn with_warning_slack(mut self, mins: i64) -> Self {
        self.warning_slack_mins = mins;
        self
    }

    /// Override the inside-area airport set.
    pub fn with_border_area_airports(mut self, airports: HashSet<Iata>) -> Self {
        self.border_area_airports = airports;
        self
    }

    /// Override the outside-area destination set.
    pub fn with_external_destinations(mut self, destinations: HashSet<Iata>) -> Self {
        self.external_destinations = destinations;
        self
    }

    /// Classify a connection for minimum-duration selection.
    ///
    /// A connection is a border exit iff the layover airport is inside the
    /// reference area and the itinerary's final destination is categorically
    /// outside it. The classification looks only at this pair; itineraries
    /// that cross and re-cross the boundary get no special handling. That is
    /// a known simplification of the rule set, preserved deliberately.
    ///
    /// Codes that fail IATA validation are treated as not-a-member.
    pub fn classify_connection(&self, layover_airport: &str, destination: &str) -> ConnectionKind {
        let inside = Iata::parse(layover_airport)
            .map(|code| self.border_area_airports.contains(&code))
            .unwrap_or(false);
        let leaving = Iata::parse(destination)
            .map(|code| self.external_destinations.contains(&code))
            .unwrap_or(false);

        if inside && leaving {
            ConnectionKind::BorderExit
        } else {
            ConnectionKind::WithinArea
        }
    }

    /// The minimum connection duration for a classification, in minutes.
    pub fn min_connection(&self, kind: ConnectionKind) -> i64 {
        match kind {
            ConnectionKind::WithinArea => self.min_connection_within,
            ConnectionKind::BorderExit => self.min_connection_exit,
        }
    }
}

impl Default for ConstraintRules {
    fn default() -> Self {
        Self {
            min_departure: ClockTime::from_hm(7, 30).expect("valid constant"),
            max_departure: ClockTime::from_hm(18, 0).expect("valid constant"),
            min_arrival: ClockTime::from_hm(8, 0).expect("valid constant"),
            max_arrival: ClockTime::from_hm(21, 0).expect("valid constant"),
            max_trip_mins: 12 * 60,
            min_connection_within: 60,
            min_connection_exit: 120,
            min_connection_self_transfer: 150,
            warning_slack_mins: 30,
            border_area_airports: iata_set(&DEFAULT_BORDER_AREA_AIRPORTS),
            external_destinations: iata_set(&DEFAULT_EXTERNAL_DESTINATIONS),
        }
    }
}

/// Build an airport set from known-valid literals, skipping any that fail
/// validation.
fn iata_set(codes: &[&str]) -> HashSet<Iata> {
    codes
        .iter()
        .filter_map(|code| Iata::parse(code).ok())
        .collect()
}

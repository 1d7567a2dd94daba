//! Constraint evaluation for a single itinerary.
//!
//! Two independent checks combine into one verdict: the time-window check
//! (departure/arrival bounds plus total duration) and the connection-time
//! check (per-layover minimums with border-crossing awareness). Reasons
//! accumulate in that order, so verdict contents are deterministic.

use tracing::debug;

use crate::domain::{ClockTime, Itinerary, Verdict};

use super::config::ConstraintRules;

/// Evaluate one itinerary against the rules.
pub fn evaluate(rules: &ConstraintRules, itinerary: &Itinerary) -> Verdict {
    let mut verdict = Verdict::passing();

    check_time_window(rules, itinerary, &mut verdict);
    check_connections(rules, itinerary, &mut verdict);

    if !verdict.passes {
        debug!(
            origin = %itinerary.origin,
            destination = %itinerary.destination,
            reasons = ?verdict.reasons,
            "itinerary rejected"
        );
    }

    verdict
}

/// Departure/arrival window and total-duration sub-checks.
///
/// An unparseable time is not a violation; the corresponding bound check is
/// simply skipped. The three sub-checks are independent, so an itinerary can
/// accumulate several reasons at once.
fn check_time_window(rules: &ConstraintRules, itinerary: &Itinerary, verdict: &mut Verdict) {
    if let Some(departure) = ClockTime::parse(&itinerary.departure_time) {
        if departure < rules.min_departure || departure > rules.max_departure {
            verdict.fail(format!(
                "Departure {} outside {}-{} window",
                itinerary.departure_time, rules.min_departure, rules.max_departure
            ));
        }
    }

    if let Some(arrival) = ClockTime::parse(&itinerary.arrival_time) {
        if arrival < rules.min_arrival || arrival > rules.max_arrival {
            verdict.fail(format!(
                "Arrival {} outside {}-{} window",
                itinerary.arrival_time, rules.min_arrival, rules.max_arrival
            ));
        }
    }

    if itinerary.total_duration_mins > rules.max_trip_mins {
        verdict.fail(format!(
            "Duration {}min exceeds {}min limit",
            itinerary.total_duration_mins, rules.max_trip_mins
        ));
    }
}

/// Per-layover connection adequacy. Direct flights pass unconditionally.
fn check_connections(rules: &ConstraintRules, itinerary: &Itinerary, verdict: &mut Verdict) {
    for (index, layover) in itinerary.layovers.iter().enumerate() {
        let position = index + 1;

        // Negative durations are bad provider data: compare as 0, but say so.
        let duration = layover.duration_mins.max(0);
        if layover.duration_mins < 0 {
            verdict.warn(format!(
                "Connection {position} at {}: negative duration ({}min) treated as 0",
                layover.airport_code, layover.duration_mins
            ));
        }

        let kind = rules.classify_connection(&layover.airport_code, &itinerary.destination);
        let required = rules.min_connection(kind);

        if duration < required {
            verdict.fail(format!(
                "Connection {position} at {}: {duration}min < {required}min required for {kind}",
                layover.airport_code
            ));
        } else if duration < required + rules.warning_slack_mins {
            verdict.warn(format!(
                "Connection {position} at {}: {duration}min is tight for {kind}",
                layover.airport_code
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Layover;

    fn rules() -> ConstraintRules {
        ConstraintRules::default()
    }

    /// An itinerary that satisfies every default constraint.
    fn good_itinerary() -> Itinerary {
        Itinerary {
            price: 450.0,
            currency: "EUR".into(),
            departure_time: "09:15".into(),
            arrival_time: "03:40 PM".into(),
            total_duration_mins: 385,
            origin: "WRO".into(),
            destination: "TLV".into(),
            layovers: Vec::new(),
            ..Itinerary::default()
        }
    }

    fn layover(code: &str, mins: i64) -> Layover {
        Layover {
            airport_code: code.into(),
            airport_name: code.into(),
            duration_mins: mins,
        }
    }

    #[test]
    fn clean_itinerary_passes() {
        let verdict = evaluate(&rules(), &good_itinerary());
        assert!(verdict.passes);
        assert!(verdict.reasons.is_empty());
        assert!(verdict.warnings.is_empty());
    }

    #[test]
    fn early_departure_fails_with_bound_reason() {
        let itinerary = Itinerary {
            departure_time: "06:00 AM".into(),
            ..good_itinerary()
        };

        let verdict = evaluate(&rules(), &itinerary);
        assert!(!verdict.passes);
        assert_eq!(verdict.reasons.len(), 1);
        assert_eq!(
            verdict.reasons[0],
            "Departure 06:00 AM outside 07:30-18:00 window"
        );
    }

    #[test]
    fn late_arrival_fails() {
        let itinerary = Itinerary {
            arrival_time: "22:15".into(),
            ..good_itinerary()
        };

        let verdict = evaluate(&rules(), &itinerary);
        assert!(!verdict.passes);
        assert_eq!(verdict.reasons, vec!["Arrival 22:15 outside 08:00-21:00 window"]);
    }

    #[test]
    fn window_bounds_are_inclusive() {
        for (dep, arr) in [("07:30", "08:00"), ("18:00", "21:00")] {
            let itinerary = Itinerary {
                departure_time: dep.into(),
                arrival_time: arr.into(),
                ..good_itinerary()
            };
            let verdict = evaluate(&rules(), &itinerary);
            assert!(verdict.passes, "boundary times {dep}/{arr} must pass");
        }
    }

    #[test]
    fn unparseable_times_skip_the_check() {
        let itinerary = Itinerary {
            departure_time: "".into(),
            arrival_time: "whenever".into(),
            ..good_itinerary()
        };

        let verdict = evaluate(&rules(), &itinerary);
        assert!(verdict.passes);
    }

    #[test]
    fn excessive_duration_fails() {
        let itinerary = Itinerary {
            total_duration_mins: 721,
            ..good_itinerary()
        };

        let verdict = evaluate(&rules(), &itinerary);
        assert!(!verdict.passes);
        assert_eq!(verdict.reasons, vec!["Duration 721min exceeds 720min limit"]);
    }

    #[test]
    fn duration_at_limit_passes() {
        let itinerary = Itinerary {
            total_duration_mins: 720,
            ..good_itinerary()
        };

        assert!(evaluate(&rules(), &itinerary).passes);
    }

    #[test]
    fn multiple_reasons_accumulate_in_declaration_order() {
        let itinerary = Itinerary {
            departure_time: "05:00".into(),
            arrival_time: "23:00".into(),
            total_duration_mins: 800,
            layovers: vec![layover("WAW", 30)],
            ..good_itinerary()
        };

        let verdict = evaluate(&rules(), &itinerary);
        assert!(!verdict.passes);
        assert_eq!(verdict.reasons.len(), 4);
        // Time-window reasons first, then connection reasons
        assert!(verdict.reasons[0].starts_with("Departure"));
        assert!(verdict.reasons[1].starts_with("Arrival"));
        assert!(verdict.reasons[2].starts_with("Duration"));
        assert!(verdict.reasons[3].starts_with("Connection 1"));
    }

    #[test]
    fn direct_flight_passes_connection_check() {
        let itinerary = good_itinerary();
        assert!(itinerary.is_direct());
        assert!(evaluate(&rules(), &itinerary).passes);
    }

    #[test]
    fn border_exit_connection_below_minimum_fails() {
        let itinerary = Itinerary {
            layovers: vec![layover("WAW", 90)],
            ..good_itinerary()
        };

        let verdict = evaluate(&rules(), &itinerary);
        assert!(!verdict.passes);
        assert_eq!(
            verdict.reasons,
            vec!["Connection 1 at WAW: 90min < 120min required for border exit"]
        );
    }

    #[test]
    fn border_exit_connection_in_slack_band_warns() {
        // Required 120, slack boundary 150; 135 is tight but sufficient
        let itinerary = Itinerary {
            layovers: vec![layover("WAW", 135)],
            ..good_itinerary()
        };

        let verdict = evaluate(&rules(), &itinerary);
        assert!(verdict.passes);
        assert_eq!(
            verdict.warnings,
            vec!["Connection 1 at WAW: 135min is tight for border exit"]
        );
    }

    #[test]
    fn connection_band_boundaries() {
        let rules = rules();

        // Exactly the minimum: passes with a warning
        let at_min = Itinerary {
            layovers: vec![layover("WAW", 120)],
            ..good_itinerary()
        };
        let verdict = evaluate(&rules, &at_min);
        assert!(verdict.passes);
        assert_eq!(verdict.warnings.len(), 1);

        // Exactly minimum + slack: passes with no warning
        let at_slack = Itinerary {
            layovers: vec![layover("WAW", 150)],
            ..good_itinerary()
        };
        let verdict = evaluate(&rules, &at_slack);
        assert!(verdict.passes);
        assert!(verdict.warnings.is_empty());

        // One below the minimum: fails
        let below = Itinerary {
            layovers: vec![layover("WAW", 119)],
            ..good_itinerary()
        };
        assert!(!evaluate(&rules, &below).passes);
    }

    #[test]
    fn within_area_minimum_applies_for_internal_destination() {
        // Same WAW layover, but the trip ends inside the area
        let itinerary = Itinerary {
            destination: "BCN".into(),
            layovers: vec![layover("WAW", 90)],
            ..good_itinerary()
        };

        let verdict = evaluate(&rules(), &itinerary);
        assert!(verdict.passes, "90min meets the 60min within-area minimum");
        assert!(verdict.warnings.is_empty());
    }

    #[test]
    fn classification_ignores_other_layovers() {
        // The IST layover (outside the hub set) does not change how the
        // WAW layover is classified.
        let itinerary = Itinerary {
            layovers: vec![layover("IST", 200), layover("WAW", 90)],
            ..good_itinerary()
        };

        let verdict = evaluate(&rules(), &itinerary);
        assert!(!verdict.passes);
        assert_eq!(
            verdict.reasons,
            vec!["Connection 2 at WAW: 90min < 120min required for border exit"]
        );
    }

    #[test]
    fn each_layover_checked_independently() {
        let itinerary = Itinerary {
            destination: "BCN".into(),
            layovers: vec![
                layover("WAW", 45),  // below 60 -> fail
                layover("FRA", 75),  // in [60, 90) -> warning
                layover("MUC", 120), // clear
            ],
            ..good_itinerary()
        };

        let verdict = evaluate(&rules(), &itinerary);
        assert!(!verdict.passes);
        assert_eq!(verdict.reasons.len(), 1);
        assert!(verdict.reasons[0].starts_with("Connection 1 at WAW"));
        assert_eq!(verdict.warnings.len(), 1);
        assert!(verdict.warnings[0].starts_with("Connection 2 at FRA"));
    }

    #[test]
    fn negative_layover_duration_compares_as_zero_and_warns() {
        let itinerary = Itinerary {
            destination: "BCN".into(),
            layovers: vec![layover("WAW", -15)],
            ..good_itinerary()
        };

        let verdict = evaluate(&rules(), &itinerary);
        assert!(!verdict.passes, "0min is below the 60min minimum");
        assert_eq!(
            verdict.reasons,
            vec!["Connection 1 at WAW: 0min < 60min required for within area"]
        );
        assert_eq!(
            verdict.warnings,
            vec!["Connection 1 at WAW: negative duration (-15min) treated as 0"]
        );
    }

    #[test]
    fn alternate_rule_set_is_respected() {
        let rules = ConstraintRules::default().with_connection_minimums(30, 200);

        let itinerary = Itinerary {
            layovers: vec![layover("WAW", 150)],
            ..good_itinerary()
        };

        // 150 < 200 under the override, so the border exit now fails
        let verdict = evaluate(&rules, &itinerary);
        assert!(!verdict.passes);
        assert_eq!(
            verdict.reasons,
            vec!["Connection 1 at WAW: 150min < 200min required for border exit"]
        );
    }
}

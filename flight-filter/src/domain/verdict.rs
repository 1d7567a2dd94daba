//! Evaluation verdicts.

/// The structured outcome of evaluating one itinerary against the rules.
///
/// Reasons and warnings accumulate in check-declaration order: time-window
/// reasons first, then connection reasons. The ordering is deterministic and
/// tests rely on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Whether every check passed.
    pub passes: bool,

    /// Human-readable failure reasons, one per violated sub-check.
    pub reasons: Vec<String>,

    /// Non-blocking warnings (e.g. a connection that is technically
    /// sufficient but tight).
    pub warnings: Vec<String>,
}

impl Verdict {
    /// A fresh verdict with no findings; passes until a check fails it.
    pub fn passing() -> Self {
        Self {
            passes: true,
            reasons: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Record a failure reason and flip the verdict to failing.
    pub fn fail(&mut self, reason: String) {
        self.passes = false;
        self.reasons.push(reason);
    }

    /// Record a non-blocking warning.
    pub fn warn(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    /// Warnings whose text references the given 1-based connection position.
    pub fn warnings_for_connection(&self, position: usize) -> impl Iterator<Item = &str> {
        let needle = format!("Connection {position} ");
        self.warnings
            .iter()
            .filter(move |w| w.contains(&needle))
            .map(String::as_str)
    }
}

impl Default for Verdict {
    fn default() -> Self {
        Self::passing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_verdict_passes() {
        let verdict = Verdict::passing();
        assert!(verdict.passes);
        assert!(verdict.reasons.is_empty());
        assert!(verdict.warnings.is_empty());
    }

    #[test]
    fn fail_flips_and_accumulates() {
        let mut verdict = Verdict::passing();
        verdict.fail("first".into());
        verdict.fail("second".into());

        assert!(!verdict.passes);
        assert_eq!(verdict.reasons, vec!["first", "second"]);
    }

    #[test]
    fn warn_does_not_affect_passes() {
        let mut verdict = Verdict::passing();
        verdict.warn("tight connection".into());

        assert!(verdict.passes);
        assert_eq!(verdict.warnings, vec!["tight connection"]);
    }

    #[test]
    fn warnings_for_connection_matches_position() {
        let mut verdict = Verdict::passing();
        verdict.warn("Connection 1 at WAW: 75min is tight for within area".into());
        verdict.warn("Connection 2 at VIE: 130min is tight for border exit".into());
        // Position 1 must not match "Connection 12"
        verdict.warn("Connection 12 at FRA: 65min is tight for within area".into());

        let for_first: Vec<_> = verdict.warnings_for_connection(1).collect();
        assert_eq!(for_first.len(), 1);
        assert!(for_first[0].contains("WAW"));

        let for_third: Vec<_> = verdict.warnings_for_connection(3).collect();
        assert!(for_third.is_empty());
    }
}

//! IATA airport codes.

use std::fmt;

/// Error returned when a string is not a usable IATA location code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid IATA code {code:?}: {reason}")]
pub struct InvalidIata {
    code: String,
    reason: &'static str,
}

/// A 3-letter IATA location code, stored upper-cased.
///
/// The provider feed is inconsistent about case ("waw" and "WAW" both occur),
/// so parsing accepts any ASCII case and normalizes to upper. Rule-set
/// membership checks compare `Iata` values, never raw strings, which is what
/// makes the airport sets in the constraint configuration reliable.
///
/// # Examples
///
/// ```
/// use flight_filter::domain::Iata;
///
/// let waw = Iata::parse("waw").unwrap();
/// assert_eq!(waw.as_str(), "WAW");
/// assert_eq!(waw, Iata::parse("WAW").unwrap());
///
/// // Not a code: wrong length or non-letters
/// assert!(Iata::parse("WROC").is_err());
/// assert!(Iata::parse("W1W").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Iata([u8; 3]);

impl Iata {
    /// Parse a code, accepting any ASCII case and surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidIata> {
        let bytes = s.trim().as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidIata {
                code: s.to_string(),
                reason: "must be exactly 3 letters",
            });
        }

        let mut code = [0u8; 3];
        for (slot, &b) in code.iter_mut().zip(bytes) {
            if !b.is_ascii_alphabetic() {
                return Err(InvalidIata {
                    code: s.to_string(),
                    reason: "must be ASCII letters only",
                });
            }
            *slot = b.to_ascii_uppercase();
        }

        Ok(Self(code))
    }

    /// Returns the upper-cased code as a string slice.
    pub fn as_str(&self) -> &str {
        // Always 3 ASCII uppercase letters after parse
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for Iata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Iata({})", self.as_str())
    }
}

impl fmt::Display for Iata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

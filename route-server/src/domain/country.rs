//! Country code types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid country code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid country code {input:?}: {reason}")]
pub struct InvalidCountryCode {
    input: String,
    reason: &'static str,
}

/// A valid ISO 3166-1 alpha-2 country code.
///
/// Used both for passports and for destination countries. Codes are always
/// 2 uppercase ASCII letters, so any `CountryCode` value is valid by
/// construction.
///
/// # Examples
///
/// ```
/// use route_server::domain::CountryCode;
///
/// let tr = CountryCode::parse("TR").unwrap();
/// assert_eq!(tr.as_str(), "TR");
///
/// // Strict parsing rejects lowercase
/// assert!(CountryCode::parse("tr").is_err());
///
/// // Normalized parsing trims and uppercases first
/// assert_eq!(CountryCode::parse_normalized(" de ").unwrap().as_str(), "DE");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode([u8; 2]);

impl CountryCode {
    /// Sentinel passport used when a traveler supplies none.
    ///
    /// `XX` is in the ISO user-assigned range and never names a real country.
    pub const UNKNOWN: CountryCode = CountryCode(*b"XX");

    /// Parse a country code from a string.
    ///
    /// The input must be exactly 2 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidCountryCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 2 {
            return Err(InvalidCountryCode {
                input: s.to_string(),
                reason: "must be exactly 2 characters",
            });
        }

        if !bytes.iter().all(u8::is_ascii_uppercase) {
            return Err(InvalidCountryCode {
                input: s.to_string(),
                reason: "must be uppercase ASCII letters A-Z",
            });
        }

        Ok(CountryCode([bytes[0], bytes[1]]))
    }

    /// Parse after trimming whitespace and converting to uppercase.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidCountryCode> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII uppercase letters are ever stored
        std::str::from_utf8(&self.0).unwrap_or("??")
    }

    /// Whether this is the unknown-passport sentinel.
    pub fn is_unknown(&self) -> bool {
        *self == Self::UNKNOWN
    }
}

impl TryFrom<String> for CountryCode {
    type Error = InvalidCountryCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_normalized(&value)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.as_str().to_string()
    }
}

impl fmt::Debug for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CountryCode({})", self.as_str())
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Region preference.
//!
//! Destinations carry a free-text region label. Travelers pick either "any"
//! region or one of a fixed set of preferences, each of which maps to exactly
//! one literal label.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown region preference.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown region preference: {0:?}")]
pub struct InvalidRegion(String);

/// Region the traveler wants to visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegionPreference {
    #[default]
    Any,
    Balkans,
    CentralEurope,
    WesternEurope,
    SouthernEurope,
    Nordics,
    Caucasus,
    MiddleEast,
    NorthAfrica,
    SoutheastAsia,
    EastAsia,
    LatinAmerica,
    NorthAmerica,
}

impl RegionPreference {
    /// Every preference, `Any` first.
    pub const ALL: [RegionPreference; 13] = [
        RegionPreference::Any,
        RegionPreference::Balkans,
        RegionPreference::CentralEurope,
        RegionPreference::WesternEurope,
        RegionPreference::SouthernEurope,
        RegionPreference::Nordics,
        RegionPreference::Caucasus,
        RegionPreference::MiddleEast,
        RegionPreference::NorthAfrica,
        RegionPreference::SoutheastAsia,
        RegionPreference::EastAsia,
        RegionPreference::LatinAmerica,
        RegionPreference::NorthAmerica,
    ];

    /// The destination region label this preference selects.
    ///
    /// Returns `None` for `Any`.
    pub fn region_label(self) -> Option<&'static str> {
        let label = match self {
            RegionPreference::Any => return None,
            RegionPreference::Balkans => "Balkans",
            RegionPreference::CentralEurope => "Central Europe",
            RegionPreference::WesternEurope => "Western Europe",
            RegionPreference::SouthernEurope => "Southern Europe",
            RegionPreference::Nordics => "Nordics",
            RegionPreference::Caucasus => "Caucasus",
            RegionPreference::MiddleEast => "Middle East",
            RegionPreference::NorthAfrica => "North Africa",
            RegionPreference::SoutheastAsia => "Southeast Asia",
            RegionPreference::EastAsia => "East Asia",
            RegionPreference::LatinAmerica => "Latin America",
            RegionPreference::NorthAmerica => "North America",
        };
        Some(label)
    }

    /// Kebab-case identifier, as used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            RegionPreference::Any => "any",
            RegionPreference::Balkans => "balkans",
            RegionPreference::CentralEurope => "central-europe",
            RegionPreference::WesternEurope => "western-europe",
            RegionPreference::SouthernEurope => "southern-europe",
            RegionPreference::Nordics => "nordics",
            RegionPreference::Caucasus => "caucasus",
            RegionPreference::MiddleEast => "middle-east",
            RegionPreference::NorthAfrica => "north-africa",
            RegionPreference::SoutheastAsia => "southeast-asia",
            RegionPreference::EastAsia => "east-asia",
            RegionPreference::LatinAmerica => "latin-america",
            RegionPreference::NorthAmerica => "north-america",
        }
    }

    /// Whether a destination in `region` passes this preference.
    pub fn matches(self, region: &str) -> bool {
        self.region_label().is_none_or(|label| label == region)
    }
}

impl FromStr for RegionPreference {
    type Err = InvalidRegion;

    /// Accepts the kebab-case identifier or the literal region label,
    /// ignoring case. An empty string means `Any`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(RegionPreference::Any);
        }

        RegionPreference::ALL
            .into_iter()
            .find(|pref| {
                pref.as_str().eq_ignore_ascii_case(trimmed)
                    || pref
                        .region_label()
                        .is_some_and(|label| label.eq_ignore_ascii_case(trimmed))
            })
            .ok_or_else(|| InvalidRegion(trimmed.to_string()))
    }
}

impl fmt::Display for RegionPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.region_label().unwrap_or("Any region"))
    }
}

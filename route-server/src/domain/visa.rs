//! Visa requirement levels and passport-to-country rules.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::CountryCode;

/// Entry requirement for a passport holder visiting a country.
///
/// Ordered by favorability: `VisaFree < OnArrival < EVisa < Required < Banned`.
/// The ordering comes from [`VisaRequirement::rank`], never from the order
/// the variants are declared in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisaRequirement {
    VisaFree,
    OnArrival,
    EVisa,
    Required,
    Banned,
}

impl VisaRequirement {
    /// Every level, most favorable first.
    pub const ALL: [VisaRequirement; 5] = [
        VisaRequirement::VisaFree,
        VisaRequirement::OnArrival,
        VisaRequirement::EVisa,
        VisaRequirement::Required,
        VisaRequirement::Banned,
    ];

    /// Favorability score. Lower is better.
    pub fn rank(self) -> u8 {
        match self {
            VisaRequirement::VisaFree => 1,
            VisaRequirement::OnArrival => 2,
            VisaRequirement::EVisa => 3,
            VisaRequirement::Required => 4,
            VisaRequirement::Banned => 5,
        }
    }

    /// Whether a traveler can realistically enter without an embassy visa.
    pub fn is_accessible(self) -> bool {
        !matches!(self, VisaRequirement::Required | VisaRequirement::Banned)
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            VisaRequirement::VisaFree => "Visa-free",
            VisaRequirement::OnArrival => "Visa on arrival",
            VisaRequirement::EVisa => "eVisa",
            VisaRequirement::Required => "Visa required",
            VisaRequirement::Banned => "Entry banned",
        }
    }
}

impl PartialOrd for VisaRequirement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VisaRequirement {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for VisaRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Directed rule: holders of `passport` entering `destination`.
///
/// The reference data records restrictions only. A missing rule for a
/// (passport, destination) pair means no restriction is known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisaRule {
    pub passport: CountryCode,
    pub destination: CountryCode,
    pub requirement: VisaRequirement,
    #[serde(default)]
    pub max_stay_days: Option<u32>,
    #[serde(default)]
    pub avg_processing_days: Option<u32>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl VisaRule {
    /// Create a rule with no stay limit, processing estimate or notes.
    pub fn new(passport: CountryCode, destination: CountryCode, requirement: VisaRequirement) -> Self {
        Self {
            passport,
            destination,
            requirement,
            max_stay_days: None,
            avg_processing_days: None,
            notes: None,
        }
    }

    pub fn with_max_stay(mut self, days: u32) -> Self {
        self.max_stay_days = Some(days);
        self
    }

    pub fn with_processing_days(mut self, days: u32) -> Self {
        self.avg_processing_days = Some(days);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Countries where a held Schengen visa grants entry.
const SCHENGEN_MEMBERS: [&str; 29] = [
    "AT", "BE", "BG", "CH", "CZ", "DE", "DK", "EE", "ES", "FI", "FR", "GR", "HR", "HU", "IS",
    "IT", "LI", "LT", "LU", "LV", "MT", "NL", "NO", "PL", "PT", "RO", "SE", "SI", "SK",
];

/// Whether `country` is part of the Schengen area.
pub fn is_schengen(country: &CountryCode) -> bool {
    SCHENGEN_MEMBERS.contains(&country.as_str())
}

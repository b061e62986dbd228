//! Route generation queries.
//!
//! A `RouteQuery` is the normalized, validated form of a traveler's request.
//! Malformed input is rejected here, so the engine can take any `RouteQuery`
//! at face value.

use serde::Serialize;

use crate::domain::{CountryCode, InvalidCountryCode, RegionPreference};

/// Error from building a route query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// Budget must be a positive USD amount
    #[error("budget must be positive, got {0}")]
    NonPositiveBudget(i64),

    /// Trip must last at least one day
    #[error("duration must be positive, got {0}")]
    NonPositiveDuration(i64),

    /// A passport entry is not a country code
    #[error("invalid passport: {0}")]
    InvalidPassport(#[from] InvalidCountryCode),
}

/// Special visas the traveler already holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct HeldVisas {
    pub schengen: bool,
    pub us: bool,
    pub uk: bool,
}

impl HeldVisas {
    /// Whether a held visa grants entry to `country`.
    pub fn covers(&self, country: &CountryCode) -> bool {
        (self.schengen && crate::domain::is_schengen(country))
            || (self.us && country.as_str() == "US")
            || (self.uk && country.as_str() == "GB")
    }
}

/// Validated request for route options.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RouteQuery {
    passports: Vec<CountryCode>,
    total_budget_usd: u64,
    duration_days: u32,
    region: RegionPreference,
    held_visas: HeldVisas,
}

impl RouteQuery {
    /// Build a query from raw traveler input.
    ///
    /// Passport codes are trimmed, uppercased and deduplicated, keeping the
    /// order they were first given in. Blank entries are ignored, and a
    /// traveler with no passports is evaluated as [`CountryCode::UNKNOWN`].
    pub fn new<I, S>(
        passports: I,
        total_budget_usd: i64,
        duration_days: i64,
        region: RegionPreference,
        held_visas: HeldVisas,
    ) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if total_budget_usd <= 0 {
            return Err(QueryError::NonPositiveBudget(total_budget_usd));
        }
        let duration = u32::try_from(duration_days)
            .ok()
            .filter(|days| *days > 0)
            .ok_or(QueryError::NonPositiveDuration(duration_days))?;

        let mut normalized: Vec<CountryCode> = Vec::new();
        for raw in passports {
            let raw = raw.as_ref();
            if raw.trim().is_empty() {
                continue;
            }
            let code = CountryCode::parse_normalized(raw)?;
            if !normalized.contains(&code) {
                normalized.push(code);
            }
        }
        if normalized.is_empty() {
            normalized.push(CountryCode::UNKNOWN);
        }

        Ok(Self {
            passports: normalized,
            total_budget_usd: total_budget_usd as u64,
            duration_days: duration,
            region,
            held_visas,
        })
    }

    /// Held passports in evaluation order. Never empty.
    pub fn passports(&self) -> &[CountryCode] {
        &self.passports
    }

    pub fn total_budget_usd(&self) -> u64 {
        self.total_budget_usd
    }

    pub fn duration_days(&self) -> u32 {
        self.duration_days
    }

    pub fn region(&self) -> RegionPreference {
        self.region
    }

    pub fn held_visas(&self) -> HeldVisas {
        self.held_visas
    }
}

//! Destination cities.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{CountryCode, DailyCostLevel, DomainError};

/// Stable identifier of a destination in the reference catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DestinationId(pub u32);

impl fmt::Display for DestinationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A city travelers can visit.
///
/// Reference data, seeded outside the planner and never modified by it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub id: DestinationId,
    pub city: String,
    pub country: String,
    pub country_code: CountryCode,
    pub region: String,
    pub daily_cost_level: DailyCostLevel,
    pub min_recommended_days: u32,
    pub max_recommended_days: u32,
    /// Ranking weight only. Higher is more popular.
    pub popularity_weight: f64,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Destination {
    /// Check the recommended stay range.
    ///
    /// The planner tolerates inverted ranges, so this is for the reference
    /// layer to report data-quality problems.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.min_recommended_days > self.max_recommended_days {
            return Err(DomainError::InvertedStayRange {
                city: self.city.clone(),
                min: self.min_recommended_days,
                max: self.max_recommended_days,
            });
        }
        Ok(())
    }

    /// Clamp a day count into the recommended stay range.
    ///
    /// An inverted range is read as `[min, min]` rather than panicking.
    pub fn clamp_days(&self, days: u32) -> u32 {
        let upper = self.max_recommended_days.max(self.min_recommended_days);
        days.clamp(self.min_recommended_days, upper)
    }

    /// Upper end of the stay range, never below the lower end.
    pub fn max_days(&self) -> u32 {
        self.max_recommended_days.max(self.min_recommended_days)
    }
}

/// The identifying subset of a destination that goes into planner output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationSummary {
    pub id: DestinationId,
    pub city: String,
    pub country: String,
    pub country_code: CountryCode,
    pub region: String,
}

impl From<&Destination> for DestinationSummary {
    fn from(destination: &Destination) -> Self {
        Self {
            id: destination.id,
            city: destination.city.clone(),
            country: destination.country.clone(),
            country_code: destination.country_code,
            region: destination.region.clone(),
        }
    }
}

//! Domain error types.
//!
//! These errors describe inconsistent reference data. The planner degrades
//! around them; the reference layer reports them.

use super::DailyCostLevel;

/// Data-quality problems found in reference entities.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Minimum recommended stay is longer than the maximum
    #[error("{city}: min recommended days {min} exceeds max {max}")]
    InvertedStayRange { city: String, min: u32, max: u32 },

    /// Daily budget floor is above the ceiling
    #[error("price tier {region}/{level}: daily min ${min} exceeds max ${max}")]
    InvertedPriceRange {
        region: String,
        level: DailyCostLevel,
        min: u64,
        max: u64,
    },
}

//! Regional price tiers.

use serde::{Deserialize, Serialize};

use super::{DailyCostLevel, DomainError};

/// Daily budget range for destinations sharing a region and cost level.
///
/// Keyed by (region, cost level), which the reference layer keeps unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionPriceTier {
    pub region: String,
    pub cost_level: DailyCostLevel,
    pub daily_budget_usd_min: u64,
    pub daily_budget_usd_max: u64,
}

impl RegionPriceTier {
    pub fn new(region: impl Into<String>, cost_level: DailyCostLevel, min: u64, max: u64) -> Self {
        Self {
            region: region.into(),
            cost_level,
            daily_budget_usd_min: min,
            daily_budget_usd_max: max,
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.daily_budget_usd_min > self.daily_budget_usd_max {
            return Err(DomainError::InvertedPriceRange {
                region: self.region.clone(),
                level: self.cost_level,
                min: self.daily_budget_usd_min,
                max: self.daily_budget_usd_max,
            });
        }
        Ok(())
    }

    /// Cost range for staying `days` days at this tier.
    pub fn estimate(&self, days: u32) -> BudgetRange {
        let days = u64::from(days);
        BudgetRange {
            min_usd: self.daily_budget_usd_min.saturating_mul(days),
            max_usd: self
                .daily_budget_usd_max
                .max(self.daily_budget_usd_min)
                .saturating_mul(days),
        }
    }
}

/// Inclusive USD range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BudgetRange {
    pub min_usd: u64,
    pub max_usd: u64,
}

impl std::ops::Add for BudgetRange {
    type Output = BudgetRange;

    fn add(self, rhs: BudgetRange) -> BudgetRange {
        BudgetRange {
            min_usd: self.min_usd.saturating_add(rhs.min_usd),
            max_usd: self.max_usd.saturating_add(rhs.max_usd),
        }
    }
}

impl std::iter::Sum for BudgetRange {
    fn sum<I: Iterator<Item = BudgetRange>>(iter: I) -> Self {
        iter.fold(BudgetRange::default(), |acc, range| acc + range)
    }
}

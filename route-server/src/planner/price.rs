//! Price tier lookup.

use std::collections::HashMap;

use tracing::warn;

use crate::domain::{BudgetRange, DailyCostLevel, Destination, RegionPriceTier};

/// Price tiers indexed by region, then cost level.
#[derive(Debug, Default)]
pub struct PriceIndex<'a> {
    tiers: HashMap<&'a str, HashMap<DailyCostLevel, &'a RegionPriceTier>>,
}

impl<'a> PriceIndex<'a> {
    /// Index a tier slice. If a key appears twice, the first tier wins.
    pub fn new(tiers: &'a [RegionPriceTier]) -> Self {
        let mut index: HashMap<&'a str, HashMap<DailyCostLevel, &'a RegionPriceTier>> =
            HashMap::new();
        for tier in tiers {
            let levels = index.entry(tier.region.as_str()).or_default();
            if levels.contains_key(&tier.cost_level) {
                warn!(region = %tier.region, level = %tier.cost_level, "duplicate price tier ignored");
                continue;
            }
            levels.insert(tier.cost_level, tier);
        }
        Self { tiers: index }
    }

    /// The tier for a destination's region and cost level.
    pub fn for_destination(&self, destination: &Destination) -> Option<&'a RegionPriceTier> {
        self.tiers
            .get(destination.region.as_str())
            .and_then(|levels| levels.get(&destination.daily_cost_level))
            .copied()
    }

    /// Estimated cost of `days` days at `destination`, if priced.
    pub fn estimate(&self, destination: &Destination, days: u32) -> Option<BudgetRange> {
        self.for_destination(destination).map(|tier| tier.estimate(days))
    }

    /// Number of distinct (region, level) tiers.
    pub fn len(&self) -> usize {
        self.tiers.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

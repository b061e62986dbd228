//! Reference data: destinations, visa rules and price tiers.
//!
//! The planner reads a snapshot of this data per query and never writes it.
//! Data-quality gaps are logged here as warnings, and the planner degrades
//! around them.

mod builder;
mod error;
pub mod seed;
mod store;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::{DailyCostLevel, Destination, DomainError, RegionPriceTier, VisaRule};

pub use builder::ReferenceDataBuilder;
pub use error::ReferenceError;
pub use store::{InMemoryStore, ReferenceStore, load_snapshot};

/// An immutable catalog snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceData {
    #[serde(default)]
    pub destinations: Vec<Destination>,
    #[serde(default)]
    pub visa_rules: Vec<VisaRule>,
    #[serde(default)]
    pub price_tiers: Vec<RegionPriceTier>,
}

impl ReferenceData {
    /// Inverted stay and price ranges in this catalog.
    pub fn findings(&self) -> Vec<DomainError> {
        let stays = self.destinations.iter().filter_map(|d| d.validate().err());
        let prices = self.price_tiers.iter().filter_map(|t| t.validate().err());
        stays.chain(prices).collect()
    }

    /// Active destinations whose (region, cost level) has no price tier.
    pub fn unpriced_destinations(&self) -> Vec<&Destination> {
        let priced: HashSet<(&str, DailyCostLevel)> = self
            .price_tiers
            .iter()
            .map(|t| (t.region.as_str(), t.cost_level))
            .collect();

        self.destinations
            .iter()
            .filter(|d| d.is_active)
            .filter(|d| !priced.contains(&(d.region.as_str(), d.daily_cost_level)))
            .collect()
    }

    /// Log every data-quality gap as a warning.
    pub fn report_findings(&self) {
        for finding in self.findings() {
            warn!(%finding, "reference data inconsistency");
        }
        for destination in self.unpriced_destinations() {
            warn!(
                city = %destination.city,
                region = %destination.region,
                level = %destination.daily_cost_level,
                "no price tier, budget checks will be skipped"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn findings_collect_inverted_ranges() {
        let data = ReferenceDataBuilder::new()
            .destination("Sarajevo", "Bosnia and Herzegovina", "BA", "Balkans")
            .stay(4, 2)
            .destination("Belgrade", "Serbia", "RS", "Balkans")
            .price_tier("Balkans", DailyCostLevel::Mid, 120, 90)
            .build();

        let findings = data.findings();
        assert_eq!(findings.len(), 2);
        assert!(matches!(findings[0], DomainError::InvertedStayRange { .. }));
        assert!(matches!(findings[1], DomainError::InvertedPriceRange { .. }));
    }

    #[test]
    fn unpriced_destinations_ignore_inactive() {
        let data = ReferenceDataBuilder::new()
            .destination("Belgrade", "Serbia", "RS", "Balkans")
            .cost(DailyCostLevel::Low)
            .destination("Tromsø", "Norway", "NO", "Nordics")
            .destination("Mostar", "Bosnia and Herzegovina", "BA", "Balkans")
            .cost(DailyCostLevel::High)
            .inactive()
            .price_tier("Balkans", DailyCostLevel::Low, 35, 70)
            .build();

        let cities: Vec<&str> = data
            .unpriced_destinations()
            .iter()
            .map(|d| d.city.as_str())
            .collect();
        assert_eq!(cities, vec!["Tromsø"]);
    }

    #[test]
    fn seed_catalog_is_clean() {
        let data = seed::default_catalog();
        assert!(data.findings().is_empty());
        assert!(data.unpriced_destinations().is_empty());
    }
}

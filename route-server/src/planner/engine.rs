//! Route generation entry point.

use tracing::debug;

use crate::domain::{Destination, RegionPriceTier, VisaRule};

use super::builder::RouteBuilder;
use super::config::PlannerConfig;
use super::eligibility;
use super::price::PriceIndex;
use super::query::RouteQuery;
use super::rank::rank_destinations;
use super::route::RouteResponse;
use super::visa::VisaIndex;

/// Turns a query and a reference data snapshot into route options.
///
/// The engine holds no state between calls. The same query over the same
/// snapshot always produces the same response.
#[derive(Debug, Clone, Default)]
pub struct RouteEngine {
    config: PlannerConfig,
}

impl RouteEngine {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Generate route options for `query`.
    ///
    /// Destinations are considered in slice order; ties in ranking and the
    /// order of eliminations both follow it.
    pub fn generate(
        &self,
        query: &RouteQuery,
        destinations: &[Destination],
        visa_rules: &[VisaRule],
        price_tiers: &[RegionPriceTier],
    ) -> RouteResponse {
        let rules = VisaIndex::new(visa_rules);
        let prices = PriceIndex::new(price_tiers);

        let filtered = eligibility::filter(destinations, &rules, &prices, query);
        debug!(
            considered = filtered.considered,
            eligible = filtered.eligible.len(),
            eliminated = filtered.eliminations.len(),
            "eligibility filter done"
        );

        let ranked = rank_destinations(filtered.eligible);
        let options = RouteBuilder::new(&self.config, &prices, query).build(&ranked);
        debug!(options = options.len(), "route options built");

        RouteResponse {
            options,
            eliminations: filtered.eliminations,
        }
    }
}

/// Generate route options with the default thresholds.
pub fn generate_routes(
    query: &RouteQuery,
    destinations: &[Destination],
    visa_rules: &[VisaRule],
    price_tiers: &[RegionPriceTier],
) -> RouteResponse {
    RouteEngine::default().generate(query, destinations, visa_rules, price_tiers)
}

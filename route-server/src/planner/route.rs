//! Planner output: route options and eliminations.
//!
//! These are plain values created fresh on every call. Storing or
//! serializing them is up to the caller.

use serde::Serialize;

use crate::domain::{BudgetRange, CountryCode, Destination, DestinationId, DestinationSummary};

use super::explain::{EliminationDetail, EliminationReason};

/// Which slot an option fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteKind {
    Focus,
    MultiCityLoop,
    AlternativeRegion,
    GrandTour,
}

/// One city within a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteStop {
    pub destination: DestinationSummary,
    pub days: u32,
    pub visa_status: String,
    pub best_passport: CountryCode,
    pub cost_band: String,
    /// Estimated cost of this stop, if its price tier is known.
    pub estimated_cost: Option<BudgetRange>,
}

/// A candidate itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteOption {
    pub kind: RouteKind,
    pub name: String,
    pub stops: Vec<RouteStop>,
    pub selection_reason: String,
    pub estimated_budget: BudgetRange,
}

impl RouteOption {
    pub fn total_days(&self) -> u32 {
        self.stops.iter().map(|stop| stop.days).sum()
    }
}

/// A rejected destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EliminationRecord {
    pub destination_id: DestinationId,
    pub city: String,
    pub country_code: CountryCode,
    pub reason: EliminationReason,
    pub explanation: String,
}

impl EliminationRecord {
    pub fn new(destination: &Destination, detail: &EliminationDetail) -> Self {
        Self {
            destination_id: destination.id,
            city: destination.city.clone(),
            country_code: destination.country_code,
            reason: detail.reason(),
            explanation: detail.explain(destination),
        }
    }
}

/// Everything the planner returns for one query.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RouteResponse {
    pub options: Vec<RouteOption>,
    pub eliminations: Vec<EliminationRecord>,
}

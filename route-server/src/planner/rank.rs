//! Destination ranking.
//!
//! Ranks eligible destinations so the most appealing options come first.

use std::cmp::Ordering;

use crate::domain::Destination;

use super::eligibility::EligibleDestination;

/// Canonical comparison between two destinations.
///
/// Destinations are ranked by:
/// 1. Popularity weight (higher is better)
/// 2. Daily cost level (cheaper is better)
pub fn compare_destinations(a: &Destination, b: &Destination) -> Ordering {
    // Primary: popularity, descending
    b.popularity_weight
        .total_cmp(&a.popularity_weight)
        // Secondary: cost level, ascending
        .then_with(|| a.daily_cost_level.cmp(&b.daily_cost_level))
}

/// Rank eligible destinations best-first.
///
/// The sort is stable, so destinations that tie keep their input order.
pub fn rank_destinations(mut eligible: Vec<EligibleDestination<'_>>) -> Vec<EligibleDestination<'_>> {
    eligible.sort_by(|a, b| compare_destinations(a.destination, b.destination));
    eligible
}

//! Eligibility filtering.
//!
//! Each destination passes through a region pre-filter, then the visa,
//! minimum-stay and budget-floor checks in that order. The first failing
//! check produces the destination's single elimination record.

use tracing::trace;

use crate::domain::Destination;

use super::explain::EliminationDetail;
use super::price::PriceIndex;
use super::query::RouteQuery;
use super::route::EliminationRecord;
use super::visa::{self, VisaIndex, VisaOutcome};

/// A destination that passed every check, with its best visa outcome.
#[derive(Debug, Clone)]
pub struct EligibleDestination<'a> {
    pub destination: &'a Destination,
    pub visa: VisaOutcome,
}

/// Result of filtering a candidate set.
#[derive(Debug, Default)]
pub struct Eligibility<'a> {
    /// Survivors, in input order.
    pub eligible: Vec<EligibleDestination<'a>>,
    /// One record per rejected destination, in input order.
    pub eliminations: Vec<EliminationRecord>,
    /// Destinations that reached the eligibility checks.
    pub considered: usize,
}

/// Verdict for a single destination.
#[derive(Debug)]
pub enum Verdict {
    Eligible(VisaOutcome),
    Eliminated(EliminationDetail),
}

/// Run the visa, minimum-stay and budget checks for one destination.
pub fn check_destination(
    destination: &Destination,
    rules: &VisaIndex<'_>,
    prices: &PriceIndex<'_>,
    query: &RouteQuery,
) -> Verdict {
    let outcome = visa::evaluate(destination, rules, query);
    if !outcome.accessible() {
        return Verdict::Eliminated(EliminationDetail::VisaRequired {
            evaluations: outcome.evaluations,
        });
    }

    if query.duration_days() < destination.min_recommended_days {
        return Verdict::Eliminated(EliminationDetail::DaysInsufficient {
            min_days: destination.min_recommended_days,
            duration_days: query.duration_days(),
        });
    }

    // No tier means no floor to check against
    if let Some(tier) = prices.for_destination(destination) {
        let floor_usd = tier
            .daily_budget_usd_min
            .saturating_mul(u64::from(destination.min_recommended_days));
        if floor_usd > query.total_budget_usd() {
            return Verdict::Eliminated(EliminationDetail::BudgetInsufficient {
                daily_min_usd: tier.daily_budget_usd_min,
                min_days: destination.min_recommended_days,
                floor_usd,
                budget_usd: query.total_budget_usd(),
            });
        }
    }

    Verdict::Eligible(outcome)
}

/// Split `destinations` into eligible ones and eliminations.
///
/// Inactive destinations and those outside the region preference are
/// dropped silently. They were never candidates.
pub fn filter<'a>(
    destinations: &'a [Destination],
    rules: &VisaIndex<'_>,
    prices: &PriceIndex<'_>,
    query: &RouteQuery,
) -> Eligibility<'a> {
    let mut result = Eligibility::default();

    for destination in destinations {
        if !destination.is_active || !query.region().matches(&destination.region) {
            continue;
        }
        result.considered += 1;

        match check_destination(destination, rules, prices, query) {
            Verdict::Eligible(visa) => result.eligible.push(EligibleDestination { destination, visa }),
            Verdict::Eliminated(detail) => {
                let record = EliminationRecord::new(destination, &detail);
                trace!(
                    city = %destination.city,
                    reason = ?record.reason,
                    "destination eliminated"
                );
                result.eliminations.push(record);
            }
        }
    }

    result
}

//! Route option construction.
//!
//! Builds up to four options from the ranked eligible destinations:
//!
//! 1. a single-city focus on the top pick (always, when anything is eligible)
//! 2. a multi-city loop, for long trips or generous budgets
//! 3. a single-city alternative from a different region than the top pick
//! 4. a grand tour with a wider stop cap, for generous budgets
//!
//! Options are returned in that order.

use tracing::trace;

use crate::domain::{BudgetRange, Destination, DestinationSummary};

use super::config::PlannerConfig;
use super::eligibility::EligibleDestination;
use super::explain::{self, SelectionReason};
use super::price::PriceIndex;
use super::query::RouteQuery;
use super::route::{RouteKind, RouteOption, RouteStop};

/// Builds route options for one query.
pub struct RouteBuilder<'a> {
    config: &'a PlannerConfig,
    prices: &'a PriceIndex<'a>,
    query: &'a RouteQuery,
}

impl<'a> RouteBuilder<'a> {
    pub fn new(config: &'a PlannerConfig, prices: &'a PriceIndex<'a>, query: &'a RouteQuery) -> Self {
        Self {
            config,
            prices,
            query,
        }
    }

    /// Build options from destinations ranked best-first.
    ///
    /// Returns nothing only when `ranked` is empty.
    pub fn build(&self, ranked: &[EligibleDestination<'_>]) -> Vec<RouteOption> {
        let Some(top) = ranked.first() else {
            return Vec::new();
        };
        let duration = self.query.duration_days();
        let budget = self.query.total_budget_usd();

        let focus = self.single_city(top, None);

        let multi_city_loop = if self.config.allows_loop(duration, budget) {
            self.multi_city(
                ranked,
                self.config.loop_stop_cap(duration),
                RouteKind::MultiCityLoop,
            )
        } else {
            None
        };

        let alternative = ranked
            .iter()
            .find(|candidate| candidate.destination.region != top.destination.region)
            .map(|candidate| self.single_city(candidate, Some(top.destination.region.as_str())));

        let grand_tour = if self.config.allows_grand_tour(budget, ranked.len()) {
            self.multi_city(ranked, self.config.grand_tour_stop_cap, RouteKind::GrandTour)
                .filter(|tour| {
                    let collides = multi_city_loop
                        .as_ref()
                        .is_some_and(|looped| looped.name == tour.name);
                    if collides {
                        trace!(name = %tour.name, "grand tour duplicates the loop, dropped");
                    }
                    !collides
                })
        } else {
            None
        };

        std::iter::once(focus)
            .chain(multi_city_loop)
            .chain(alternative)
            .chain(grand_tour)
            .collect()
    }

    /// A single-city option. `alternative_to` is the top pick's region when
    /// this is the alternative-region slot.
    fn single_city(&self, pick: &EligibleDestination<'_>, alternative_to: Option<&str>) -> RouteOption {
        let destination = pick.destination;
        let days = destination.clamp_days(self.query.duration_days());
        let stop = self.stop(pick, days);
        let estimate = stop.estimated_cost;

        let (kind, name) = match alternative_to {
            Some(_) => (
                RouteKind::AlternativeRegion,
                explain::alternative_name(&destination.city),
            ),
            None => (RouteKind::Focus, explain::focus_name(&destination.city)),
        };

        let reason = SelectionReason::SingleCity {
            visa: pick.visa.best.clone(),
            passports: self.query.passports().to_vec(),
            days,
            min_days: destination.min_recommended_days,
            max_days: destination.max_days(),
            cost_level: destination.daily_cost_level,
            estimate,
            budget_usd: self.query.total_budget_usd(),
            alternative_to: alternative_to.map(str::to_string),
        };

        RouteOption {
            kind,
            name,
            stops: vec![stop],
            selection_reason: reason.narrative(),
            estimated_budget: estimate.unwrap_or_default(),
        }
    }

    /// A multi-stop option drawn from the top of the ranking.
    ///
    /// Returns `None` when fewer than two stops fit the trip or when the
    /// combined minimum daily cost exceeds the budget.
    fn multi_city(
        &self,
        ranked: &[EligibleDestination<'_>],
        stop_cap: usize,
        kind: RouteKind,
    ) -> Option<RouteOption> {
        let duration = self.query.duration_days();
        let min_stops = self.config.min_stops;

        let mut picks: Vec<&EligibleDestination<'_>> = ranked
            .iter()
            .take(stop_cap + self.config.candidate_padding)
            .collect();
        while picks.len() > min_stops && min_days_of(&picks) > duration {
            picks.pop();
        }
        picks.truncate(stop_cap.max(min_stops));

        if picks.len() < min_stops {
            trace!(?kind, candidates = picks.len(), "too few stops for a multi-city route");
            return None;
        }
        if min_days_of(&picks) > duration {
            trace!(?kind, duration, "minimum stays exceed the trip");
            return None;
        }

        let destinations: Vec<&Destination> = picks.iter().map(|p| p.destination).collect();
        let days = allocate_days(&destinations, duration);

        // Floor-only check: the trip must be doable at the cheapest tier
        let floor_usd: u64 = picks
            .iter()
            .zip(&days)
            .filter_map(|(pick, days)| self.prices.estimate(pick.destination, *days))
            .fold(0u64, |acc, range| acc.saturating_add(range.min_usd));
        if floor_usd > self.query.total_budget_usd() {
            trace!(?kind, floor_usd, budget = self.query.total_budget_usd(), "multi-city route over budget");
            return None;
        }

        let stops: Vec<RouteStop> = picks
            .iter()
            .zip(&days)
            .map(|(pick, days)| self.stop(pick, *days))
            .collect();
        let estimated_budget: BudgetRange = stops.iter().filter_map(|s| s.estimated_cost).sum();
        let name = explain::multi_city_name(
            stops.iter().map(|s| s.destination.city.as_str()),
            stop_cap,
            self.config.grand_tour_naming_cap,
        );
        let reason = SelectionReason::MultiCity {
            stop_count: stops.len(),
            passports: self.query.passports().to_vec(),
            days: duration,
            floor_usd,
            budget_usd: self.query.total_budget_usd(),
        };

        Some(RouteOption {
            kind,
            name,
            stops,
            selection_reason: reason.narrative(),
            estimated_budget,
        })
    }

    fn stop(&self, pick: &EligibleDestination<'_>, days: u32) -> RouteStop {
        let destination = pick.destination;
        let tier = self.prices.for_destination(destination);
        RouteStop {
            destination: DestinationSummary::from(destination),
            days,
            visa_status: pick.visa.best.status_label(),
            best_passport: pick.visa.passport(),
            cost_band: explain::cost_band(destination.daily_cost_level, tier),
            estimated_cost: tier.map(|tier| tier.estimate(days)),
        }
    }
}

fn min_days_of(picks: &[&EligibleDestination<'_>]) -> u32 {
    picks
        .iter()
        .fold(0u32, |acc, p| acc.saturating_add(p.destination.min_recommended_days))
}

/// Split `duration_days` across `stops` in proportion to their minimum stays.
///
/// Every stop but the last gets its rounded proportional share, clamped to
/// its recommended range and to what the remaining stops can still absorb.
/// The last stop takes whatever is left, so the result always sums to
/// `duration_days` when the minimum stays fit. Every stop stays inside its
/// range when the maximum stays sum to at least `duration_days`; on longer
/// trips the earlier stops sit at their maximum and the last stop runs over.
pub fn allocate_days(stops: &[&Destination], duration_days: u32) -> Vec<u32> {
    let total_min = stops
        .iter()
        .fold(0u64, |acc, d| acc.saturating_add(u64::from(d.min_recommended_days)));

    let mut remaining = duration_days;
    let mut days = Vec::with_capacity(stops.len());

    for (i, stop) in stops.iter().enumerate() {
        let rest = &stops[i + 1..];
        if rest.is_empty() {
            days.push(remaining);
            break;
        }

        let rest_min = rest
            .iter()
            .fold(0u32, |acc, d| acc.saturating_add(d.min_recommended_days));
        let rest_max = rest
            .iter()
            .fold(0u32, |acc, d| acc.saturating_add(d.max_days()));
        let lower = stop
            .min_recommended_days
            .max(remaining.saturating_sub(rest_max));
        let upper = stop.max_days().min(remaining.saturating_sub(rest_min));

        let share = proportional_share(stop.min_recommended_days, total_min, duration_days);
        // When the rest cannot absorb the excess, stay at the maximum and
        // leave it to the last stop
        let assigned = share.clamp(lower.min(upper), upper);

        days.push(assigned);
        remaining = remaining.saturating_sub(assigned);
    }

    days
}

/// `round(part / total * duration)`, rounding halves up.
fn proportional_share(part: u32, total: u64, duration: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let numerator = (2 * u64::from(part))
        .saturating_mul(u64::from(duration))
        .saturating_add(total);
    u32::try_from(numerator / total.saturating_mul(2)).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        CountryCode, DailyCostLevel, DestinationId, RegionPreference, RegionPriceTier,
        VisaRequirement,
    };
    use crate::planner::query::HeldVisas;
    use crate::planner::visa::{PassportEvaluation, RequirementSource, VisaOutcome};

    fn dest(id: u32, city: &str, region: &str, min: u32, max: u32) -> Destination {
        Destination {
            id: DestinationId(id),
            city: city.to_string(),
            country: city.to_string(),
            country_code: CountryCode::parse("RS").unwrap(),
            region: region.to_string(),
            daily_cost_level: DailyCostLevel::Low,
            min_recommended_days: min,
            max_recommended_days: max,
            popularity_weight: 1.0,
            is_active: true,
        }
    }

    fn eligible(destination: &Destination) -> EligibleDestination<'_> {
        let best = PassportEvaluation {
            passport: CountryCode::parse("TR").unwrap(),
            effective: VisaRequirement::VisaFree,
            source: RequirementSource::NoRule,
        };
        EligibleDestination {
            destination,
            visa: VisaOutcome {
                best: best.clone(),
                evaluations: vec![best],
            },
        }
    }

    fn query(budget: i64, days: i64) -> RouteQuery {
        RouteQuery::new(["TR"], budget, days, RegionPreference::Any, HeldVisas::default()).unwrap()
    }

    fn build(destinations: &[Destination], tiers: &[RegionPriceTier], q: &RouteQuery) -> Vec<RouteOption> {
        let config = PlannerConfig::default();
        let prices = PriceIndex::new(tiers);
        let ranked: Vec<_> = destinations.iter().map(eligible).collect();
        RouteBuilder::new(&config, &prices, q).build(&ranked)
    }

    fn balkans() -> Vec<Destination> {
        vec![
            dest(1, "Belgrade", "Balkans", 2, 4),
            dest(2, "Sarajevo", "Balkans", 2, 3),
            dest(3, "Kotor", "Balkans", 2, 4),
            dest(4, "Tirana", "Balkans", 2, 3),
            dest(5, "Ohrid", "Balkans", 2, 4),
        ]
    }

    #[test]
    fn empty_ranking_builds_nothing() {
        assert!(build(&[], &[], &query(2000, 10)).is_empty());
    }

    #[test]
    fn focus_on_top_pick_with_clamped_days() {
        let destinations = vec![dest(1, "Belgrade", "Balkans", 2, 4)];
        let options = build(&destinations, &[], &query(500, 3));

        assert_eq!(options.len(), 1);
        assert_eq!(options[0].kind, RouteKind::Focus);
        assert_eq!(options[0].name, "Belgrade Focus");
        assert_eq!(options[0].stops[0].days, 3);

        let options = build(&destinations, &[], &query(500, 5));
        assert_eq!(options[0].stops[0].days, 4);
    }

    #[test]
    fn short_cheap_trip_gets_no_loop() {
        let options = build(&balkans(), &[], &query(1000, 5));
        assert!(options.iter().all(|o| o.kind != RouteKind::MultiCityLoop));
    }

    #[test]
    fn loop_for_long_trip() {
        let options = build(&balkans(), &[], &query(2000, 9));

        let looped = options
            .iter()
            .find(|o| o.kind == RouteKind::MultiCityLoop)
            .expect("loop built");
        assert_eq!(looped.stops.len(), 3);
        assert_eq!(looped.total_days(), 9);
        assert_eq!(looped.name, "3-City Loop (Belgrade → Sarajevo → Kotor)");
    }

    #[test]
    fn loop_pares_candidates_to_fit_the_trip() {
        let destinations = vec![
            dest(1, "Belgrade", "Balkans", 3, 5),
            dest(2, "Sarajevo", "Balkans", 3, 5),
            dest(3, "Kotor", "Balkans", 3, 5),
        ];
        // Stop cap is 2, and 3 + 3 = 6 fits a 7-day trip
        let options = build(&destinations, &[], &query(2000, 7));
        let looped = options
            .iter()
            .find(|o| o.kind == RouteKind::MultiCityLoop)
            .expect("loop built");
        assert_eq!(looped.stops.len(), 2);
        assert_eq!(looped.total_days(), 7);
    }

    #[test]
    fn loop_for_trip_longer_than_every_stay() {
        // Maximum stays sum to 18 days
        let options = build(&balkans(), &[], &query(2000, 20));

        let looped = options
            .iter()
            .find(|o| o.kind == RouteKind::MultiCityLoop)
            .expect("loop built");
        let days: Vec<u32> = looped.stops.iter().map(|s| s.days).collect();
        assert_eq!(days, vec![4, 3, 4, 3, 6]);
        assert_eq!(looped.total_days(), 20);
    }

    #[test]
    fn loop_skipped_when_two_stops_cannot_fit() {
        let destinations = vec![
            dest(1, "Belgrade", "Balkans", 4, 6),
            dest(2, "Sarajevo", "Balkans", 4, 6),
        ];
        let options = build(&destinations, &[], &query(2000, 7));
        assert!(options.iter().all(|o| o.kind != RouteKind::MultiCityLoop));
    }

    #[test]
    fn loop_discarded_when_floor_exceeds_budget() {
        let tiers = vec![RegionPriceTier::new("Balkans", DailyCostLevel::Low, 100, 150)];
        // Each eligible on its own (floor 200 per city), but 9 days at $100 is $900
        let options = build(&balkans(), &tiers, &query(800, 9));

        assert!(options.iter().all(|o| o.kind != RouteKind::MultiCityLoop));
        assert_eq!(options[0].kind, RouteKind::Focus);
    }

    #[test]
    fn loop_budget_checks_only_the_floor() {
        let tiers = vec![RegionPriceTier::new("Balkans", DailyCostLevel::Low, 100, 400)];
        // Floor is exactly the budget; the upper estimate is far above it
        let options = build(&balkans(), &tiers, &query(900, 9));

        let looped = options
            .iter()
            .find(|o| o.kind == RouteKind::MultiCityLoop)
            .expect("loop kept despite upper estimate");
        assert_eq!(looped.estimated_budget.min_usd, 900);
        assert_eq!(looped.estimated_budget.max_usd, 3600);
    }

    #[test]
    fn alternative_comes_from_another_region() {
        let destinations = vec![
            dest(1, "Belgrade", "Balkans", 2, 4),
            dest(2, "Sarajevo", "Balkans", 2, 3),
            dest(3, "Tbilisi", "Caucasus", 3, 5),
        ];
        let options = build(&destinations, &[], &query(1000, 4));

        let alternative = options
            .iter()
            .find(|o| o.kind == RouteKind::AlternativeRegion)
            .expect("alternative built");
        assert_eq!(alternative.name, "Alternative: Tbilisi Focus");
        assert!(alternative.selection_reason.starts_with("A change of scene from Balkans."));
    }

    #[test]
    fn no_alternative_when_single_region() {
        let options = build(&balkans(), &[], &query(1000, 4));
        assert!(options.iter().all(|o| o.kind != RouteKind::AlternativeRegion));
    }

    #[test]
    fn grand_tour_for_generous_budget() {
        let options = build(&balkans(), &[], &query(6000, 9));

        let kinds: Vec<RouteKind> = options.iter().map(|o| o.kind).collect();
        assert_eq!(
            kinds,
            vec![RouteKind::Focus, RouteKind::MultiCityLoop, RouteKind::GrandTour]
        );

        let tour = &options[2];
        assert!(tour.name.starts_with("Grand Tour ("));
        assert_eq!(tour.stops.len(), 4);
        assert_eq!(tour.total_days(), 9);
    }

    #[test]
    fn grand_tour_dropped_when_it_duplicates_the_loop() {
        let mut destinations = balkans();
        destinations.push(dest(6, "Skopje", "Balkans", 2, 4));
        destinations.push(dest(7, "Mostar", "Balkans", 1, 2));
        // 18 days: loop cap is 6, same as the grand tour cap
        let options = build(&destinations, &[], &query(6000, 18));

        assert!(options.iter().any(|o| o.kind == RouteKind::MultiCityLoop));
        assert!(options.iter().all(|o| o.kind != RouteKind::GrandTour));
    }

    #[test]
    fn grand_tour_needs_four_eligible() {
        let destinations = &balkans()[..3];
        let options = build(destinations, &[], &query(6000, 9));
        assert!(options.iter().all(|o| o.kind != RouteKind::GrandTour));
    }

    #[test]
    fn never_more_than_four_options() {
        let mut destinations = balkans();
        destinations.push(dest(9, "Tbilisi", "Caucasus", 2, 5));
        let options = build(&destinations, &[], &query(9000, 12));
        assert!(options.len() <= 4);
        assert_eq!(options[0].kind, RouteKind::Focus);
    }

    #[test]
    fn allocation_example() {
        let a = dest(1, "A", "Balkans", 2, 4);
        let b = dest(2, "B", "Balkans", 3, 5);
        let c = dest(3, "C", "Balkans", 1, 3);

        // Shares of 10 days: 2/6 -> 3, 3/6 -> 5, rest -> 2
        assert_eq!(allocate_days(&[&a, &b, &c], 10), vec![3, 5, 2]);
    }

    #[test]
    fn allocation_pushes_drift_forward_within_ranges() {
        let a = dest(1, "A", "Balkans", 1, 2);
        let b = dest(2, "B", "Balkans", 1, 2);
        let c = dest(3, "C", "Balkans", 4, 4);

        // Proportional shares would give A and B 1 day each, leaving 4 for C.
        let days = allocate_days(&[&a, &b, &c], 6);
        assert_eq!(days.iter().sum::<u32>(), 6);
        assert_eq!(days, vec![1, 1, 4]);

        // With 8 days the first two must take their maximum so C stays at 4
        let days = allocate_days(&[&a, &b, &c], 8);
        assert_eq!(days, vec![2, 2, 4]);
    }

    #[test]
    fn allocation_leaves_excess_to_last_stop() {
        let a = dest(1, "A", "Balkans", 1, 2);
        let b = dest(2, "B", "Balkans", 1, 2);
        let c = dest(3, "C", "Balkans", 4, 4);

        assert_eq!(allocate_days(&[&a, &b, &c], 10), vec![2, 2, 6]);
    }

    #[test]
    fn allocation_saturates_on_absurd_stays() {
        let a = dest(1, "A", "Balkans", u32::MAX, u32::MAX);
        let b = dest(2, "B", "Balkans", u32::MAX, u32::MAX);

        let days = allocate_days(&[&a, &b], u32::MAX);
        assert_eq!(days.len(), 2);
        assert_eq!(days.iter().map(|d| u64::from(*d)).sum::<u64>(), u64::from(u32::MAX));
    }

    #[test]
    fn proportional_share_rounds_half_up() {
        assert_eq!(proportional_share(1, 2, 5), 3);
        assert_eq!(proportional_share(1, 3, 10), 3);
        assert_eq!(proportional_share(2, 3, 10), 7);
        assert_eq!(proportional_share(1, 0, 10), 0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{CountryCode, DailyCostLevel, DestinationId};
    use proptest::prelude::*;

    fn stay_ranges() -> impl Strategy<Value = Vec<(u32, u32)>> {
        prop::collection::vec((1u32..6, 0u32..6).prop_map(|(min, extra)| (min, min + extra)), 2..=6)
    }

    fn destinations(ranges: &[(u32, u32)]) -> Vec<Destination> {
        ranges
            .iter()
            .enumerate()
            .map(|(i, (min, max))| Destination {
                id: DestinationId(i as u32),
                city: format!("City {i}"),
                country: "Country".to_string(),
                country_code: CountryCode::parse("RS").unwrap(),
                region: "Balkans".to_string(),
                daily_cost_level: DailyCostLevel::Low,
                min_recommended_days: *min,
                max_recommended_days: *max,
                popularity_weight: 1.0,
                is_active: true,
            })
            .collect()
    }

    proptest! {
        /// Any feasible trip is split exactly, with every stop in range
        #[test]
        fn allocation_is_exact_and_in_range(
            (ranges, offset) in stay_ranges().prop_flat_map(|ranges| {
                let span: u32 = ranges.iter().map(|(min, max)| max - min).sum();
                (Just(ranges), 0..=span)
            })
        ) {
            let dests = destinations(&ranges);
            let refs: Vec<&Destination> = dests.iter().collect();
            let duration: u32 = ranges.iter().map(|(min, _)| min).sum::<u32>() + offset;

            let days = allocate_days(&refs, duration);

            prop_assert_eq!(days.len(), refs.len());
            prop_assert_eq!(days.iter().sum::<u32>(), duration);
            for (d, stop) in days.iter().zip(&refs) {
                prop_assert!(*d >= stop.min_recommended_days);
                prop_assert!(*d <= stop.max_recommended_days);
            }
        }
    }
}

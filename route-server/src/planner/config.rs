//! Thresholds for route option building.

/// Configuration parameters for the route planner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Trips at least this long unlock the multi-city loop.
    pub multi_city_min_days: u32,

    /// Budgets at or above this unlock the multi-city loop and the grand tour (USD).
    pub generous_budget_usd: u64,

    /// Trip days per loop stop when sizing the stop count.
    pub days_per_stop: u32,

    /// Fewest stops a multi-city option may have.
    pub min_stops: usize,

    /// Most stops the loop sizing may ask for.
    pub max_stops: usize,

    /// Extra ranked destinations pulled into the candidate pool
    /// before paring.
    pub candidate_padding: usize,

    /// Stop cap used for the grand tour.
    pub grand_tour_stop_cap: usize,

    /// Eligible destinations needed before a grand tour is attempted.
    pub grand_tour_min_eligible: usize,

    /// Multi-stop options with a stop cap at or above this are named
    /// "Grand Tour" rather than "N-City Loop".
    pub grand_tour_naming_cap: usize,
}

impl PlannerConfig {
    /// Stop count target for a multi-city loop of `duration_days`.
    pub fn loop_stop_cap(&self, duration_days: u32) -> usize {
        let per_stop = self.days_per_stop.max(1);
        let by_duration = (duration_days / per_stop) as usize;
        by_duration.clamp(self.min_stops, self.max_stops.max(self.min_stops))
    }

    /// Whether the trip qualifies for a multi-city loop.
    pub fn allows_loop(&self, duration_days: u32, budget_usd: u64) -> bool {
        duration_days >= self.multi_city_min_days || budget_usd >= self.generous_budget_usd
    }

    /// Whether the trip qualifies for a grand tour.
    pub fn allows_grand_tour(&self, budget_usd: u64, eligible_count: usize) -> bool {
        budget_usd >= self.generous_budget_usd && eligible_count >= self.grand_tour_min_eligible
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            multi_city_min_days: 6,
            generous_budget_usd: 5000,
            days_per_stop: 3,
            min_stops: 2,
            max_stops: 6,
            candidate_padding: 2,
            grand_tour_stop_cap: 6,
            grand_tour_min_eligible: 4,
            grand_tour_naming_cap: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlannerConfig::default();

        assert_eq!(config.multi_city_min_days, 6);
        assert_eq!(config.generous_budget_usd, 5000);
        assert_eq!(config.days_per_stop, 3);
        assert_eq!(config.min_stops, 2);
        assert_eq!(config.max_stops, 6);
        assert_eq!(config.candidate_padding, 2);
        assert_eq!(config.grand_tour_stop_cap, 6);
        assert_eq!(config.grand_tour_min_eligible, 4);
        assert_eq!(config.grand_tour_naming_cap, 5);
    }

    #[test]
    fn loop_stop_cap_is_clamped() {
        let config = PlannerConfig::default();

        assert_eq!(config.loop_stop_cap(1), 2);
        assert_eq!(config.loop_stop_cap(6), 2);
        assert_eq!(config.loop_stop_cap(9), 3);
        assert_eq!(config.loop_stop_cap(14), 4);
        assert_eq!(config.loop_stop_cap(18), 6);
        assert_eq!(config.loop_stop_cap(60), 6);
    }

    #[test]
    fn loop_unlocked_by_duration_or_budget() {
        let config = PlannerConfig::default();

        assert!(!config.allows_loop(5, 4999));
        assert!(config.allows_loop(6, 100));
        assert!(config.allows_loop(3, 5000));
    }

    #[test]
    fn grand_tour_needs_budget_and_choice() {
        let config = PlannerConfig::default();

        assert!(!config.allows_grand_tour(4999, 10));
        assert!(!config.allows_grand_tour(5000, 3));
        assert!(config.allows_grand_tour(5000, 4));
    }
}

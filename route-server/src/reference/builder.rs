//! Fluent construction of reference catalogs.

use tracing::warn;

use crate::domain::{
    CountryCode, DailyCostLevel, Destination, DestinationId, RegionPriceTier, VisaRequirement,
    VisaRule,
};

use super::ReferenceData;

/// Builder for reference catalogs.
///
/// Destinations get sequential ids starting at 1. The stay, cost,
/// popularity and activity setters apply to the most recently added
/// destination. Entries with malformed country codes are skipped.
#[derive(Debug, Default)]
pub struct ReferenceDataBuilder {
    inner: ReferenceData,
    next_id: u32,
}

impl ReferenceDataBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an active destination with a 2–4 day stay, `Mid` cost and
    /// average popularity.
    pub fn destination(mut self, city: &str, country: &str, code: &str, region: &str) -> Self {
        let Ok(country_code) = CountryCode::parse(code) else {
            warn!(city, code, "skipping destination with invalid country code");
            return self;
        };
        self.next_id += 1;
        self.inner.destinations.push(Destination {
            id: DestinationId(self.next_id),
            city: city.to_string(),
            country: country.to_string(),
            country_code,
            region: region.to_string(),
            daily_cost_level: DailyCostLevel::Mid,
            min_recommended_days: 2,
            max_recommended_days: 4,
            popularity_weight: 0.5,
            is_active: true,
        });
        self
    }

    pub fn stay(self, min_days: u32, max_days: u32) -> Self {
        self.with_last(|d| {
            d.min_recommended_days = min_days;
            d.max_recommended_days = max_days;
        })
    }

    pub fn cost(self, level: DailyCostLevel) -> Self {
        self.with_last(|d| d.daily_cost_level = level)
    }

    pub fn popularity(self, weight: f64) -> Self {
        self.with_last(|d| d.popularity_weight = weight)
    }

    pub fn inactive(self) -> Self {
        self.with_last(|d| d.is_active = false)
    }

    /// Add a visa rule.
    pub fn visa(self, passport: &str, destination: &str, requirement: VisaRequirement) -> Self {
        self.visa_with(passport, destination, requirement, |rule| rule)
    }

    /// Add a visa rule, adjusting it before it is stored.
    pub fn visa_with(
        mut self,
        passport: &str,
        destination: &str,
        requirement: VisaRequirement,
        adjust: impl FnOnce(VisaRule) -> VisaRule,
    ) -> Self {
        match (CountryCode::parse(passport), CountryCode::parse(destination)) {
            (Ok(from), Ok(to)) => {
                let rule = adjust(VisaRule::new(from, to, requirement));
                self.inner.visa_rules.push(rule);
            }
            _ => warn!(passport, destination, "skipping visa rule with invalid country code"),
        }
        self
    }

    /// Add the same requirement for one passport into several countries.
    pub fn visas(
        self,
        passport: &str,
        destinations: &[&str],
        requirement: VisaRequirement,
        adjust: impl Fn(VisaRule) -> VisaRule,
    ) -> Self {
        destinations.iter().fold(self, |builder, destination| {
            builder.visa_with(passport, destination, requirement, &adjust)
        })
    }

    pub fn price_tier(mut self, region: &str, level: DailyCostLevel, min_usd: u64, max_usd: u64) -> Self {
        self.inner
            .price_tiers
            .push(RegionPriceTier::new(region, level, min_usd, max_usd));
        self
    }

    /// Build the catalog.
    pub fn build(self) -> ReferenceData {
        self.inner
    }

    fn with_last(mut self, apply: impl FnOnce(&mut Destination)) -> Self {
        if let Some(last) = self.inner.destinations.last_mut() {
            apply(last);
        }
        self
    }
}

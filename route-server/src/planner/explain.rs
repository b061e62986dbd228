//! Human-readable explanations.
//!
//! Every elimination and selection is first captured as a closed variant
//! carrying the numbers behind the decision, then rendered through a fixed
//! template. Decisions can be asserted on directly and the prose can change
//! without touching the planner.

use serde::Serialize;

use crate::domain::{
    BudgetRange, CountryCode, DailyCostLevel, Destination, RegionPriceTier, VisaRequirement,
};

use super::visa::{PassportEvaluation, RequirementSource};

/// Why a destination was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EliminationReason {
    VisaRequired,
    DaysInsufficient,
    BudgetInsufficient,
}

/// The facts behind an elimination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EliminationDetail {
    VisaRequired {
        evaluations: Vec<PassportEvaluation>,
    },
    DaysInsufficient {
        min_days: u32,
        duration_days: u32,
    },
    BudgetInsufficient {
        daily_min_usd: u64,
        min_days: u32,
        floor_usd: u64,
        budget_usd: u64,
    },
}

impl EliminationDetail {
    pub fn reason(&self) -> EliminationReason {
        match self {
            EliminationDetail::VisaRequired { .. } => EliminationReason::VisaRequired,
            EliminationDetail::DaysInsufficient { .. } => EliminationReason::DaysInsufficient,
            EliminationDetail::BudgetInsufficient { .. } => EliminationReason::BudgetInsufficient,
        }
    }

    pub fn explain(&self, destination: &Destination) -> String {
        let place = format!("{} ({})", destination.city, destination.country);
        match self {
            EliminationDetail::VisaRequired { evaluations } => {
                let per_passport: Vec<String> =
                    evaluations.iter().map(describe_passport).collect();
                format!(
                    "{place} is not accessible with any passport held: {}",
                    per_passport.join("; ")
                )
            }
            EliminationDetail::DaysInsufficient {
                min_days,
                duration_days,
            } => format!(
                "{place} needs at least {min_days} days but the trip is {duration_days} days ({} short)",
                day_count(min_days.saturating_sub(*duration_days))
            ),
            EliminationDetail::BudgetInsufficient {
                daily_min_usd,
                min_days,
                floor_usd,
                budget_usd,
            } => format!(
                "{place} costs at least {} ({} at {}/day), above the {} budget",
                usd(*floor_usd),
                day_count(*min_days),
                usd(*daily_min_usd),
                usd(*budget_usd)
            ),
        }
    }
}

/// One passport's line in a visa elimination.
fn describe_passport(evaluation: &PassportEvaluation) -> String {
    let passport = evaluation.passport;
    match &evaluation.source {
        RequirementSource::NoRule => format!(
            "{passport}: no rule found, default applied ({})",
            VisaRequirement::VisaFree.label()
        ),
        RequirementSource::HeldVisa => {
            format!("{passport}: visa required but covered by a held visa")
        }
        RequirementSource::Rule {
            avg_processing_days,
            notes,
        } => {
            let mut line = format!("{passport}: {}", evaluation.effective.label());
            let mut extras = Vec::new();
            if let Some(days) = avg_processing_days {
                extras.push(format!("avg. processing {}", day_count(*days)));
            }
            if let Some(notes) = notes.as_deref().filter(|n| !n.trim().is_empty()) {
                extras.push(notes.trim().to_string());
            }
            if !extras.is_empty() {
                line.push_str(&format!(" ({})", extras.join(", ")));
            }
            line
        }
    }
}

/// The facts behind choosing a route option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionReason {
    SingleCity {
        visa: PassportEvaluation,
        passports: Vec<CountryCode>,
        days: u32,
        min_days: u32,
        max_days: u32,
        cost_level: DailyCostLevel,
        estimate: Option<BudgetRange>,
        budget_usd: u64,
        /// Region of the top pick, when this is the alternative-region option.
        alternative_to: Option<String>,
    },
    MultiCity {
        stop_count: usize,
        passports: Vec<CountryCode>,
        days: u32,
        floor_usd: u64,
        budget_usd: u64,
    },
}

impl SelectionReason {
    pub fn narrative(&self) -> String {
        match self {
            SelectionReason::SingleCity {
                visa,
                passports,
                days,
                min_days,
                max_days,
                cost_level,
                estimate,
                budget_usd,
                alternative_to,
            } => {
                let mut text = String::new();
                if let Some(region) = alternative_to {
                        text.push_str(&format!("A change of scene from {region}. "));
                }
                text.push_str(&format!(
                    "{} with your {} passport",
                    visa.status_label(),
                    visa.passport
                ));
                if passports.len() > 1 {
                    text.push_str(&format!(
                        " (best-case evaluated across [{}])",
                        join_codes(passports)
                    ));
                }
                text.push_str(&format!(
                    ". {} against a recommended stay of {}. ",
                    day_count(*days),
                    stay_range(*min_days, *max_days)
                ));
                text.push_str(&cost_sentence(*cost_level, *estimate, *budget_usd));
                text
            }
            SelectionReason::MultiCity {
                stop_count,
                passports,
                days,
                floor_usd,
                budget_usd,
            } => format!(
                "All {stop_count} stops are visa-accessible with your passports [{}]. \
                 Combined minimum cost of {} over {} fits the {} budget.",
                join_codes(passports),
                usd(*floor_usd),
                day_count(*days),
                usd(*budget_usd)
            ),
        }
    }
}

fn cost_sentence(level: DailyCostLevel, estimate: Option<BudgetRange>, budget_usd: u64) -> String {
    let Some(range) = estimate else {
        return format!(
            "{level} cost tier, no regional price data to compare with the {} budget.",
            usd(budget_usd)
        );
    };

    let verdict = if range.max_usd <= budget_usd {
        "comfortably within"
    } else if range.min_usd <= budget_usd {
        "within reach of"
    } else {
        "above"
    };
    format!(
        "{level} cost tier: about {}–{}, {verdict} the {} budget.",
        usd(range.min_usd),
        usd(range.max_usd),
        usd(budget_usd)
    )
}

/// Cost band label for a stop.
pub fn cost_band(level: DailyCostLevel, tier: Option<&RegionPriceTier>) -> String {
    match tier {
        Some(tier) => format!(
            "{level} ({}–{}/day)",
            usd(tier.daily_budget_usd_min),
            usd(tier.daily_budget_usd_max.max(tier.daily_budget_usd_min))
        ),
        None => format!("{level} (no price data)"),
    }
}

pub fn focus_name(city: &str) -> String {
    format!("{city} Focus")
}

pub fn alternative_name(city: &str) -> String {
    format!("Alternative: {city} Focus")
}

/// Name for a multi-stop route.
pub fn multi_city_name<'a>(
    cities: impl IntoIterator<Item = &'a str>,
    stop_cap: usize,
    grand_tour_naming_cap: usize,
) -> String {
    let cities: Vec<&str> = cities.into_iter().collect();
    let path = cities.join(" → ");
    if stop_cap >= grand_tour_naming_cap {
        format!("Grand Tour ({path})")
    } else {
        format!("{}-City Loop ({path})", cities.len())
    }
}

fn join_codes(codes: &[CountryCode]) -> String {
    codes
        .iter()
        .map(CountryCode::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn day_count(days: u32) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{days} days")
    }
}

fn stay_range(min: u32, max: u32) -> String {
    if min >= max {
        day_count(min)
    } else {
        format!("{min}–{max} days")
    }
}

/// Format whole dollars with thousands separators.
pub fn usd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

//! Best-case visa evaluation across every passport a traveler holds.

use std::collections::HashMap;

use serde::Serialize;
use tracing::warn;

use crate::domain::{CountryCode, Destination, VisaRequirement, VisaRule};

use super::query::{HeldVisas, RouteQuery};

/// Visa rules indexed by (passport, destination country).
#[derive(Debug, Default)]
pub struct VisaIndex<'a> {
    rules: HashMap<(CountryCode, CountryCode), &'a VisaRule>,
}

impl<'a> VisaIndex<'a> {
    /// Index a rule slice. If a pair appears twice, the first rule wins.
    pub fn new(rules: &'a [VisaRule]) -> Self {
        let mut index = HashMap::with_capacity(rules.len());
        for rule in rules {
            let key = (rule.passport, rule.destination);
            if index.contains_key(&key) {
                warn!(
                    passport = %rule.passport,
                    destination = %rule.destination,
                    "duplicate visa rule ignored"
                );
                continue;
            }
            index.insert(key, rule);
        }
        Self { rules: index }
    }

    pub fn lookup(&self, passport: CountryCode, destination: CountryCode) -> Option<&'a VisaRule> {
        self.rules.get(&(passport, destination)).copied()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Where a passport's effective requirement came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RequirementSource {
    /// No rule on record, so no restriction is known.
    NoRule,
    /// Taken from the rule as stated.
    Rule {
        avg_processing_days: Option<u32>,
        notes: Option<String>,
    },
    /// The rule says `Required`, but a held visa covers the country.
    HeldVisa,
}

/// Outcome for a single passport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassportEvaluation {
    pub passport: CountryCode,
    pub effective: VisaRequirement,
    pub source: RequirementSource,
}

impl PassportEvaluation {
    pub fn is_accessible(&self) -> bool {
        self.effective.is_accessible()
    }

    /// Status label for display, noting held-visa coverage.
    pub fn status_label(&self) -> String {
        match self.source {
            RequirementSource::HeldVisa => "Covered by held visa (eVisa-equivalent)".to_string(),
            _ => self.effective.label().to_string(),
        }
    }
}

/// Best achievable outcome for one destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisaOutcome {
    /// The most favorable evaluation; first passport wins ties.
    pub best: PassportEvaluation,
    /// Every passport's evaluation, in query order.
    pub evaluations: Vec<PassportEvaluation>,
}

impl VisaOutcome {
    pub fn accessible(&self) -> bool {
        self.best.is_accessible()
    }

    pub fn requirement(&self) -> VisaRequirement {
        self.best.effective
    }

    pub fn passport(&self) -> CountryCode {
        self.best.passport
    }
}

/// Effective requirement for one passport entering `country`.
pub fn evaluate_passport(
    passport: CountryCode,
    country: CountryCode,
    rule: Option<&VisaRule>,
    held: HeldVisas,
) -> PassportEvaluation {
    let (effective, source) = match rule {
        None => (VisaRequirement::VisaFree, RequirementSource::NoRule),
        Some(rule) if rule.requirement == VisaRequirement::Required && held.covers(&country) => {
            (VisaRequirement::EVisa, RequirementSource::HeldVisa)
        }
        Some(rule) => (
            rule.requirement,
            RequirementSource::Rule {
                avg_processing_days: rule.avg_processing_days,
                notes: rule.notes.clone(),
            },
        ),
    };

    PassportEvaluation {
        passport,
        effective,
        source,
    }
}

/// Evaluate every held passport against `destination` and keep the best.
pub fn evaluate(destination: &Destination, rules: &VisaIndex<'_>, query: &RouteQuery) -> VisaOutcome {
    let country = destination.country_code;
    let held = query.held_visas();
    let assess = |passport: CountryCode| {
        evaluate_passport(passport, country, rules.lookup(passport, country), held)
    };

    let evaluations: Vec<PassportEvaluation> =
        query.passports().iter().map(|p| assess(*p)).collect();

    // min_by_key keeps the first of equal minimums
    let best = evaluations
        .iter()
        .min_by_key(|evaluation| evaluation.effective.rank())
        .cloned()
        .unwrap_or_else(|| assess(CountryCode::UNKNOWN));

    VisaOutcome { best, evaluations }
}

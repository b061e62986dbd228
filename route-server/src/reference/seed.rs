//! Bundled reference catalog.
//!
//! Used when no catalog file is configured. Visa rules are seeded for a
//! handful of passports only; any other pair has no known restriction.

use crate::domain::DailyCostLevel::{High, Low, Mid};
use crate::domain::VisaRequirement::{Banned, EVisa, OnArrival, Required, VisaFree};

use super::{ReferenceData, ReferenceDataBuilder};

/// Schengen members with a seeded destination.
const SCHENGEN_SEEDED: [&str; 12] = [
    "AT", "CZ", "DE", "ES", "FR", "HR", "HU", "IS", "IT", "NL", "PT", "SE",
];

/// Create the default catalog.
pub fn default_catalog() -> ReferenceData {
    ReferenceDataBuilder::new()
        // Balkans
        .destination("Belgrade", "Serbia", "RS", "Balkans")
        .stay(2, 4)
        .cost(Low)
        .popularity(0.78)
        .destination("Kotor", "Montenegro", "ME", "Balkans")
        .stay(2, 4)
        .cost(Mid)
        .popularity(0.74)
        .destination("Sarajevo", "Bosnia and Herzegovina", "BA", "Balkans")
        .stay(2, 3)
        .cost(Low)
        .popularity(0.72)
        .destination("Tirana", "Albania", "AL", "Balkans")
        .stay(2, 3)
        .cost(Low)
        .popularity(0.61)
        .destination("Ohrid", "North Macedonia", "MK", "Balkans")
        .stay(2, 4)
        .cost(Low)
        .popularity(0.58)
        .destination("Skopje", "North Macedonia", "MK", "Balkans")
        .stay(1, 2)
        .cost(Low)
        .popularity(0.45)
        .destination("Mostar", "Bosnia and Herzegovina", "BA", "Balkans")
        .stay(1, 2)
        .cost(Low)
        .popularity(0.52)
        .inactive()
        // Central Europe
        .destination("Prague", "Czechia", "CZ", "Central Europe")
        .stay(3, 5)
        .cost(Mid)
        .popularity(0.90)
        .destination("Budapest", "Hungary", "HU", "Central Europe")
        .stay(2, 4)
        .cost(Mid)
        .popularity(0.88)
        .destination("Vienna", "Austria", "AT", "Central Europe")
        .stay(2, 4)
        .cost(High)
        .popularity(0.86)
        // Western Europe
        .destination("Paris", "France", "FR", "Western Europe")
        .stay(3, 6)
        .cost(High)
        .popularity(0.98)
        .destination("Amsterdam", "Netherlands", "NL", "Western Europe")
        .stay(2, 4)
        .cost(High)
        .popularity(0.89)
        .destination("Berlin", "Germany", "DE", "Western Europe")
        .stay(3, 5)
        .cost(Mid)
        .popularity(0.87)
        // Southern Europe
        .destination("Rome", "Italy", "IT", "Southern Europe")
        .stay(3, 5)
        .cost(High)
        .popularity(0.96)
        .destination("Barcelona", "Spain", "ES", "Southern Europe")
        .stay(3, 5)
        .cost(Mid)
        .popularity(0.93)
        .destination("Lisbon", "Portugal", "PT", "Southern Europe")
        .stay(3, 5)
        .cost(Mid)
        .popularity(0.85)
        .destination("Dubrovnik", "Croatia", "HR", "Southern Europe")
        .stay(2, 3)
        .cost(Mid)
        .popularity(0.80)
        // Nordics
        .destination("Reykjavik", "Iceland", "IS", "Nordics")
        .stay(3, 6)
        .cost(High)
        .popularity(0.76)
        .destination("Stockholm", "Sweden", "SE", "Nordics")
        .stay(2, 4)
        .cost(High)
        .popularity(0.70)
        // Caucasus
        .destination("Tbilisi", "Georgia", "GE", "Caucasus")
        .stay(3, 5)
        .cost(Low)
        .popularity(0.80)
        .destination("Baku", "Azerbaijan", "AZ", "Caucasus")
        .stay(2, 4)
        .cost(Mid)
        .popularity(0.66)
        .destination("Yerevan", "Armenia", "AM", "Caucasus")
        .stay(2, 4)
        .cost(Low)
        .popularity(0.62)
        // Middle East
        .destination("Dubai", "United Arab Emirates", "AE", "Middle East")
        .stay(3, 5)
        .cost(High)
        .popularity(0.84)
        .destination("Amman", "Jordan", "JO", "Middle East")
        .stay(2, 4)
        .cost(Mid)
        .popularity(0.60)
        // North Africa
        .destination("Marrakech", "Morocco", "MA", "North Africa")
        .stay(3, 5)
        .cost(Low)
        .popularity(0.79)
        .destination("Cairo", "Egypt", "EG", "North Africa")
        .stay(3, 5)
        .cost(Low)
        .popularity(0.77)
        // Southeast Asia
        .destination("Bangkok", "Thailand", "TH", "Southeast Asia")
        .stay(3, 6)
        .cost(Low)
        .popularity(0.91)
        .destination("Hanoi", "Vietnam", "VN", "Southeast Asia")
        .stay(3, 5)
        .cost(Low)
        .popularity(0.75)
        // East Asia
        .destination("Tokyo", "Japan", "JP", "East Asia")
        .stay(4, 8)
        .cost(High)
        .popularity(0.95)
        .destination("Seoul", "South Korea", "KR", "East Asia")
        .stay(3, 6)
        .cost(Mid)
        .popularity(0.83)
        // Latin America
        .destination("Mexico City", "Mexico", "MX", "Latin America")
        .stay(3, 6)
        .cost(Mid)
        .popularity(0.81)
        .destination("Buenos Aires", "Argentina", "AR", "Latin America")
        .stay(4, 7)
        .cost(Mid)
        .popularity(0.74)
        // North America
        .destination("New York", "United States", "US", "North America")
        .stay(3, 6)
        .cost(High)
        .popularity(0.97)
        .destination("Toronto", "Canada", "CA", "North America")
        .stay(3, 5)
        .cost(High)
        .popularity(0.73)
        // Turkish passport
        .visas("TR", &["RS", "ME", "BA", "AL", "MK"], VisaFree, |rule| {
            rule.with_max_stay(90)
        })
        .visas("TR", &["GE", "AZ", "MA", "TH", "JP", "KR", "AR"], VisaFree, |rule| rule)
        .visas("TR", &["AM", "JO", "EG"], OnArrival, |rule| rule.with_max_stay(30))
        .visas("TR", &["AE", "VN", "MX"], EVisa, |rule| {
            rule.with_processing_days(3)
        })
        .visas("TR", &SCHENGEN_SEEDED, Required, |rule| {
            rule.with_max_stay(90)
                .with_processing_days(15)
                .with_notes("Schengen short-stay visa (type C)")
        })
        .visa_with("TR", "US", Required, |rule| {
            rule.with_processing_days(60).with_notes("B1/B2 visitor visa")
        })
        .visa_with("TR", "CA", Required, |rule| rule.with_processing_days(30))
        // Indian passport
        .visas("IN", &SCHENGEN_SEEDED, Required, |rule| {
            rule.with_processing_days(15)
                .with_notes("Schengen short-stay visa (type C)")
        })
        .visas("IN", &["TH", "GE"], EVisa, |rule| rule.with_processing_days(4))
        .visas("IN", &["JO", "AE"], OnArrival, |rule| rule)
        .visa_with("IN", "US", Required, |rule| rule.with_processing_days(90))
        .visa_with("IN", "JP", Required, |rule| rule.with_processing_days(7))
        // German passport
        .visa_with("DE", "US", EVisa, |rule| rule.with_notes("ESTA"))
        .visa_with("DE", "CA", EVisa, |rule| rule.with_notes("eTA"))
        .visa("DE", "EG", OnArrival)
        // Iranian passport
        .visa("IR", "US", Banned)
        .visas("IR", &SCHENGEN_SEEDED, Required, |rule| {
            rule.with_processing_days(20)
        })
        // Price tiers, USD per day
        .price_tier("Balkans", Low, 35, 70)
        .price_tier("Balkans", Mid, 60, 120)
        .price_tier("Central Europe", Mid, 80, 150)
        .price_tier("Central Europe", High, 140, 260)
        .price_tier("Western Europe", Mid, 100, 180)
        .price_tier("Western Europe", High, 160, 320)
        .price_tier("Southern Europe", Mid, 90, 170)
        .price_tier("Southern Europe", High, 150, 280)
        .price_tier("Nordics", High, 170, 330)
        .price_tier("Caucasus", Low, 35, 75)
        .price_tier("Caucasus", Mid, 60, 120)
        .price_tier("Middle East", Mid, 80, 160)
        .price_tier("Middle East", High, 180, 400)
        .price_tier("North Africa", Low, 35, 80)
        .price_tier("Southeast Asia", Low, 30, 70)
        .price_tier("East Asia", Mid, 90, 170)
        .price_tier("East Asia", High, 150, 300)
        .price_tier("Latin America", Mid, 60, 130)
        .price_tier("North America", High, 200, 400)
        .build()
}

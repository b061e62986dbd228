//! Domain types for the route planner.
//!
//! This module contains the reference entities (destinations, visa rules,
//! price tiers) and the small value types they are built from. Codes and
//! enumerations enforce their invariants at construction time, so code that
//! receives them can trust their validity.

mod cost;
mod country;
mod destination;
mod error;
mod price;
mod region;
mod visa;

pub use cost::DailyCostLevel;
pub use country::{CountryCode, InvalidCountryCode};
pub use destination::{Destination, DestinationId, DestinationSummary};
pub use error::DomainError;
pub use price::{BudgetRange, RegionPriceTier};
pub use region::{InvalidRegion, RegionPreference};
pub use visa::{VisaRequirement, VisaRule, is_schengen};

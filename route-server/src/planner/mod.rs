//! Travel route planner.
//!
//! Answers: "Given my passports, budget and trip length, where can I go
//! and how should I split the days?"
//!
//! Planning runs in four stages over an immutable reference snapshot:
//! visa evaluation, eligibility filtering, ranking, and option building.
//! Every rejected destination is reported with the first check it failed.

mod builder;
mod config;
mod eligibility;
mod engine;
mod explain;
mod price;
mod query;
mod rank;
mod route;
mod visa;


pub use builder::{RouteBuilder, allocate_days};
pub use config::PlannerConfig;
pub use eligibility::{Eligibility, EligibleDestination, Verdict, check_destination, filter};
pub use engine::{RouteEngine, generate_routes};
pub use explain::{EliminationDetail, EliminationReason, SelectionReason, usd};
pub use price::PriceIndex;
pub use query::{HeldVisas, QueryError, RouteQuery};
pub use rank::{compare_destinations, rank_destinations};
pub use route::{EliminationRecord, RouteKind, RouteOption, RouteResponse, RouteStop};
pub use visa::{PassportEvaluation, RequirementSource, VisaIndex, VisaOutcome, evaluate, evaluate_passport};

//! Web layer for the route planner.
//!
//! Provides HTTP endpoints for planning routes and browsing the catalog.

mod dto;
mod error;
mod routes;
mod state;

pub use dto::*;
pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;

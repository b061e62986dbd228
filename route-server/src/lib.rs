//! Travel route planner server.
//!
//! A web application that answers: "With these passports, this budget and
//! this many days, where can I go?"

pub mod cache;
pub mod config;
pub mod domain;
pub mod planner;
pub mod reference;
pub mod web;

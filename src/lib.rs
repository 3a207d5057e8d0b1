//! Terminal trip planner.
//!
//! The create-trip page state lives in [`controller`], the remote API behind
//! [`api::TripApi`], and the terminal front end in [`tui`].

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod config;
pub mod controller;
pub mod logging;
pub mod model;
pub mod route;
pub mod tui;

//! ReefWatch insight library.
//!
//! Turns a week of aquarium operating logs into deterministic consumable
//! depletion estimates and a short list of recommendations.  The
//! estimation core is pure; everything that talks to the telemetry store
//! or a text generator goes through the port traits in [`app::ports`].

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod error;
pub mod estimation;
pub mod history;
pub mod narrative;
pub mod report;

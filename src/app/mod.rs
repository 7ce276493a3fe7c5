//! Application core: orchestration around the estimation core, zero I/O.
//!
//! This module ties history retrieval, estimation and recommendation
//! phrasing together.  All interaction with the telemetry store and the
//! text generator happens through **port traits** defined in [`ports`],
//! keeping this layer fully testable without real collaborators.

pub mod commands;
pub mod events;
pub mod insights;
pub mod ports;
pub mod service;

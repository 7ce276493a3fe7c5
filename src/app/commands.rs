//! Inbound commands to the application service.
//!
//! These represent actions requested by the outside world (dashboard,
//! CLI, settings sync) that the [`InsightService`](super::service::InsightService)
//! interprets and acts upon.

use crate::config::InsightConfig;

/// Commands that external adapters can send into the application core.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Hot-reload configuration.  Rejected if it fails validation.
    UpdateConfig(InsightConfig),

    /// Drop the cached insights so the next view forces a refresh.
    ClearInsights,
}

//! Insight configuration parameters
//!
//! All tunable parameters for history aggregation and depletion estimates.
//! Values can be overridden from a JSON file or at runtime via
//! [`AppCommand::UpdateConfig`](crate::app::commands::AppCommand).

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Core insight configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightConfig {
    // --- Consumption model ---
    /// Food container capacity used per feeding event (%)
    pub food_cost_per_feeding_pct: f64,
    /// pH solution capacity used per day the balancer triggered (%)
    pub ph_cost_per_trigger_day_pct: f64,

    // --- Confidence ---
    /// Observed days required before an estimate is reported at full confidence
    pub full_confidence_days: usize,

    // --- History ---
    /// Number of most recent days requested from the history source
    pub history_window_days: usize,

    // --- Recommendations ---
    /// Projected days remaining at or below which a refill is recommended
    pub refill_warning_days: u64,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            // Consumption model
            food_cost_per_feeding_pct: 2.5,
            ph_cost_per_trigger_day_pct: 1.5,

            // Confidence
            full_confidence_days: 7,

            // History
            history_window_days: 7,

            // Recommendations
            refill_warning_days: 7,
        }
    }
}

impl InsightConfig {
    /// Range-check every field.  Invalid values are rejected, not clamped.
    pub fn validate(&self) -> Result<()> {
        if !is_cost_pct(self.food_cost_per_feeding_pct) {
            return Err(Error::Config(
                "food_cost_per_feeding_pct must be in (0, 100]",
            ));
        }
        if !is_cost_pct(self.ph_cost_per_trigger_day_pct) {
            return Err(Error::Config(
                "ph_cost_per_trigger_day_pct must be in (0, 100]",
            ));
        }
        if !(1..=90).contains(&self.full_confidence_days) {
            return Err(Error::Config("full_confidence_days must be 1–90"));
        }
        if !(1..=90).contains(&self.history_window_days) {
            return Err(Error::Config("history_window_days must be 1–90"));
        }
        if self.full_confidence_days > self.history_window_days {
            return Err(Error::Config(
                "full_confidence_days must not exceed history_window_days",
            ));
        }
        if self.refill_warning_days > 365 {
            return Err(Error::Config("refill_warning_days must be 0–365"));
        }
        Ok(())
    }
}

/// A per-event cost must consume something and at most the whole container.
fn is_cost_pct(value: f64) -> bool {
    value > 0.0 && value <= 100.0
}

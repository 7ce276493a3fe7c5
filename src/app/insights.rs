//! The result of one refresh, as shown to the user.

use serde::Serialize;

use crate::estimation::{AggregateSignals, DepletionEstimates};
use crate::narrative::Recommendations;

/// Where the recommendations came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NarrativeSource {
    /// Phrased by the external generator.
    Generated,
    /// Built locally because the generator was unavailable or silent.
    Fallback,
}

/// Estimates plus recommendations for one history window.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryInsights {
    pub signals: AggregateSignals,
    pub estimates: DepletionEstimates,
    pub recommendations: Recommendations,
    pub narrative: NarrativeSource,
}

impl HistoryInsights {
    /// `in 15 days`, `on 2024-03-24`, `Estimation unavailable (...)`.
    pub fn food_summary(&self) -> String {
        self.estimates.food.to_string()
    }

    pub fn ph_summary(&self) -> String {
        self.estimates.ph.to_string()
    }
}

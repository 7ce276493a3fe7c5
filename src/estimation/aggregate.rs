//! Historical log aggregator.
//!
//! Collapses a window of daily entries into the counts the estimator
//! needs.  Sparse or empty input is never rejected; the estimator decides
//! how much to trust it.

use chrono::NaiveDate;
use serde::Serialize;

use crate::history::DailyLogEntry;

/// Numeric signals extracted from a history window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateSignals {
    /// Number of entries in the window.
    pub observed_days: usize,
    /// Feeding events summed over every entry.
    pub total_feeding_events: usize,
    /// Entries on which the pH balancer triggered.
    pub balancer_trigger_days: usize,
    /// Date of the newest entry; `None` when the window is empty or the
    /// label does not resolve to a calendar day.
    pub anchor_date: Option<NaiveDate>,
}

/// Aggregate a window ordered oldest to newest.
pub fn aggregate(entries: &[DailyLogEntry]) -> AggregateSignals {
    let total_feeding_events = entries.iter().map(|e| e.feeding_events.len()).sum();
    let balancer_trigger_days = entries.iter().filter(|e| e.ph_balancer_triggered).count();

    AggregateSignals {
        observed_days: entries.len(),
        total_feeding_events,
        balancer_trigger_days,
        anchor_date: entries.last().and_then(DailyLogEntry::day),
    }
}

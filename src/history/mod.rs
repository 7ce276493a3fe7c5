//! Daily log model: the data the history source hands to the core.
//!
//! Every type here is an immutable value object built fresh per request.
//! Optional fields distinguish "not recorded" from a recorded `false` / `0`.

pub mod day;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Averaged water-quality observations for one day.
///
/// Display-only: the estimator never reads these values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterQuality {
    /// Temperature (°C).
    pub temperature: Option<f64>,
    /// Turbidity (NTU).
    pub turbidity: Option<f64>,
    /// pH.
    pub ph: Option<f64>,
}

/// One observed day of operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLogEntry {
    /// Calendar date label, e.g. `2024-03-09` or `Mar 9th, 2024`.
    pub date: String,
    #[serde(default)]
    pub water_quality: WaterQuality,
    /// Time-of-day labels of feedings that happened; empty = no feeding.
    #[serde(default)]
    pub feeding_events: Vec<String>,
    #[serde(default)]
    pub ph_balancer_triggered: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_feeding_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_ph_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_level_start: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_level_end: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ph_level_start: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ph_level_end: Option<f64>,
}

impl DailyLogEntry {
    /// An entry with only a date; everything else "nothing happened / not recorded".
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            water_quality: WaterQuality::default(),
            feeding_events: Vec::new(),
            ph_balancer_triggered: false,
            auto_feeding_enabled: None,
            auto_ph_enabled: None,
            food_level_start: None,
            food_level_end: None,
            ph_level_start: None,
            ph_level_end: None,
        }
    }

    /// Builder-style: set the feeding times.
    pub fn with_feedings<I, S>(mut self, times: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.feeding_events = times.into_iter().map(Into::into).collect();
        self
    }

    /// Builder-style: mark whether the pH balancer triggered.
    pub fn with_balancer(mut self, triggered: bool) -> Self {
        self.ph_balancer_triggered = triggered;
        self
    }

    /// Resolve the date label to a calendar day, if it is in a known format.
    pub fn day(&self) -> Option<NaiveDate> {
        day::resolve(&self.date)
    }

    /// Auto-feeding was recorded as on, yet nothing was fed.
    pub fn missed_feeding(&self) -> bool {
        self.auto_feeding_enabled == Some(true) && self.feeding_events.is_empty()
    }
}

/// Current container levels, supplied apart from the history window.
///
/// Each level is recorded independently; an absent one means that
/// container has no current reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerSnapshot {
    /// Food container level (% of capacity).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_pct: Option<f64>,
    /// pH solution container level (% of capacity).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ph_solution_pct: Option<f64>,
}

impl ContainerSnapshot {
    /// Both levels recorded.
    pub fn new(food_pct: f64, ph_solution_pct: f64) -> Self {
        Self {
            food_pct: Some(food_pct),
            ph_solution_pct: Some(ph_solution_pct),
        }
    }

    /// No reading for either container.
    pub fn is_empty(&self) -> bool {
        self.food_pct.is_none() && self.ph_solution_pct.is_none()
    }
}

/// Clamp a percentage into `[0, 100]`; NaN reads as empty.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

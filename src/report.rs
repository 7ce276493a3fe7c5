//! Text rendering for daily log entries.
//!
//! Shared by the narrative prompt and the host binary's per-day report so
//! both describe a day the same way.

use crate::history::{DailyLogEntry, WaterQuality};

/// `Enabled` / `Disabled`, or `N/A` when the status was not recorded.
pub fn automation_status(status: Option<bool>) -> &'static str {
    match status {
        Some(true) => "Enabled",
        Some(false) => "Disabled",
        None => "N/A",
    }
}

/// `Start: 80%, End: 72%`; either half omitted when absent, `N/A` when both are.
pub fn container_levels(start: Option<f64>, end: Option<f64>) -> String {
    match (start, end) {
        (None, None) => "N/A".to_string(),
        (Some(s), None) => format!("Start: {}%", pct(s)),
        (None, Some(e)) => format!("End: {}%", pct(e)),
        (Some(s), Some(e)) => format!("Start: {}%, End: {}%", pct(s), pct(e)),
    }
}

/// Feeding times joined by `, `, or `None`.
pub fn feeding_times(times: &[String]) -> String {
    if times.is_empty() {
        "None".to_string()
    } else {
        times.join(", ")
    }
}

/// One decimal place, or `N/A`.
pub fn reading(value: Option<f64>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| format!("{v:.1}"))
}

/// `Temp: 24.6°C, Turbidity: 4.2 NTU, pH: 7.1`
pub fn water_quality(wq: &WaterQuality) -> String {
    format!(
        "Temp: {}\u{00b0}C, Turbidity: {} NTU, pH: {}",
        reading(wq.temperature),
        reading(wq.turbidity),
        reading(wq.ph),
    )
}

/// One-line summary of a day.
pub fn day_line(entry: &DailyLogEntry) -> String {
    format!(
        "{} | {} | feedings: {} | balancer: {} | auto-feed: {} | auto-pH: {} | food: {} | pH solution: {}",
        entry.date,
        water_quality(&entry.water_quality),
        feeding_times(&entry.feeding_events),
        if entry.ph_balancer_triggered { "triggered" } else { "idle" },
        automation_status(entry.auto_feeding_enabled),
        automation_status(entry.auto_ph_enabled),
        container_levels(entry.food_level_start, entry.food_level_end),
        container_levels(entry.ph_level_start, entry.ph_level_end),
    )
}

/// Whole percentages print without a trailing `.0`.
fn pct(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

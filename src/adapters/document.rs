//! Document-store export adapter.
//!
//! Implements [`HistorySource`] over a JSON export of the telemetry
//! store.  The export carries one record per day, newest and oldest in
//! any order, plus an optional current-level document in which either
//! level may be missing:
//!
//! ```json
//! {
//!   "history": [
//!     { "recordedAt": "2024-03-09T20:00:00Z", "temperature": 24.6, "turbidity": 4.1,
//!       "ph": 7.1, "feedings": ["2024-03-09T08:00:00Z", "18:00"],
//!       "phBalancerTriggered": true, "autoFeedingEnabled": true }
//!   ],
//!   "containers": { "foodPct": 75, "phSolutionPct": 50 }
//! }
//! ```
//!
//! Records are normalised into [`DailyLogEntry`] values ordered oldest
//! first, each labelled with its UTC calendar day.  Records whose
//! `recordedAt` cannot be parsed cannot be ordered and are skipped.

use std::path::Path;

use chrono::{DateTime, FixedOffset, Utc};
use log::{info, warn};
use serde::Deserialize;

use crate::app::ports::{HistorySource, SourceError};
use crate::history::{ContainerSnapshot, DailyLogEntry, WaterQuality, day};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExportDocument {
    #[serde(default)]
    history: Vec<DayRecord>,
    #[serde(default)]
    containers: Option<ContainerSnapshot>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DayRecord {
    #[serde(default)]
    recorded_at: Option<String>,
    #[serde(default)]
    temperature: Option<f64>,
    #[serde(default)]
    turbidity: Option<f64>,
    #[serde(default)]
    ph: Option<f64>,
    #[serde(default)]
    feedings: Vec<String>,
    #[serde(default)]
    ph_balancer_triggered: Option<bool>,
    #[serde(default)]
    auto_feeding_enabled: Option<bool>,
    #[serde(default)]
    auto_ph_enabled: Option<bool>,
    #[serde(default)]
    food_level_start: Option<f64>,
    #[serde(default)]
    food_level_end: Option<f64>,
    #[serde(default)]
    ph_level_start: Option<f64>,
    #[serde(default)]
    ph_level_end: Option<f64>,
}

/// History source backed by a parsed export document.
#[derive(Debug, Clone)]
pub struct DocumentHistorySource {
    /// Oldest first.
    entries: Vec<DailyLogEntry>,
    containers: Option<ContainerSnapshot>,
}

impl DocumentHistorySource {
    /// Parse an export document.
    pub fn from_json(text: &str) -> Result<Self, SourceError> {
        let doc: ExportDocument = serde_json::from_str(text).map_err(|e| {
            warn!("DocumentHistorySource: {}", e);
            SourceError::Malformed("export is not a valid history document")
        })?;

        let total = doc.history.len();
        let mut dated: Vec<(DateTime<FixedOffset>, DayRecord)> = doc
            .history
            .into_iter()
            .filter_map(|rec| {
                let stamp = rec
                    .recorded_at
                    .as_deref()
                    .and_then(|s| DateTime::parse_from_rfc3339(s).ok());
                if stamp.is_none() {
                    warn!(
                        "DocumentHistorySource: skipping record with bad recordedAt {:?}",
                        rec.recorded_at
                    );
                }
                stamp.map(|t| (t, rec))
            })
            .collect();
        dated.sort_by_key(|(t, _)| *t);

        let entries: Vec<DailyLogEntry> = dated
            .into_iter()
            .map(|(t, rec)| normalise(t, rec))
            .collect();
        info!(
            "DocumentHistorySource: {} of {} record(s) usable, current levels {}",
            entries.len(),
            total,
            if doc.containers.is_some() { "present" } else { "absent" }
        );

        Ok(Self {
            entries,
            containers: doc.containers,
        })
    }

    /// Read and parse an export file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let text = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            warn!("DocumentHistorySource: {}: {}", path.as_ref().display(), e);
            match e.kind() {
                std::io::ErrorKind::NotFound => SourceError::NotFound,
                _ => SourceError::Io,
            }
        })?;
        Self::from_json(&text)
    }

    /// All usable entries, oldest first.
    pub fn entries(&self) -> &[DailyLogEntry] {
        &self.entries
    }
}

impl HistorySource for DocumentHistorySource {
    fn recent_days(&mut self, window: usize) -> Result<Vec<DailyLogEntry>, SourceError> {
        let start = self.entries.len().saturating_sub(window);
        Ok(self.entries[start..].to_vec())
    }

    fn container_levels(&mut self) -> Result<Option<ContainerSnapshot>, SourceError> {
        Ok(self.containers)
    }
}

fn normalise(recorded_at: DateTime<FixedOffset>, rec: DayRecord) -> DailyLogEntry {
    DailyLogEntry {
        date: day::label(recorded_at.with_timezone(&Utc).date_naive()),
        water_quality: WaterQuality {
            temperature: rec.temperature,
            turbidity: rec.turbidity,
            ph: rec.ph,
        },
        feeding_events: rec.feedings.iter().map(|t| time_of_day(t)).collect(),
        ph_balancer_triggered: rec.ph_balancer_triggered.unwrap_or(false),
        auto_feeding_enabled: rec.auto_feeding_enabled,
        auto_ph_enabled: rec.auto_ph_enabled,
        food_level_start: rec.food_level_start,
        food_level_end: rec.food_level_end,
        ph_level_start: rec.ph_level_start,
        ph_level_end: rec.ph_level_end,
    }
}

/// `2024-03-09T08:00:00Z` -> `08:00` (UTC); anything else is already a label.
fn time_of_day(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(t) => t.with_timezone(&Utc).format("%H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

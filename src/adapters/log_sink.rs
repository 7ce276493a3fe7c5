//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the `log` facade.  A dashboard push adapter would implement the same
//! trait.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] as a single line.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::InsightsRefreshed {
                observed_days,
                food,
                ph,
            } => {
                info!(
                    "INSIGHT | days={} | food: {} | pH solution: {}",
                    observed_days, food, ph
                );
            }
            AppEvent::NarrativeUnavailable(e) => {
                warn!("NARRATIVE | {} | using fallback recommendations", e);
            }
            AppEvent::SourceFailed(e) => {
                warn!("SOURCE | {}", e);
            }
            AppEvent::ConfigUpdated => {
                info!("CONFIG | updated");
            }
            AppEvent::InsightsCleared => {
                info!("INSIGHT | cleared");
            }
        }
    }
}

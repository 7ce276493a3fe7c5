//! Application service: the hexagonal core.
//!
//! [`InsightService`] owns the configuration, the estimator, and the most
//! recent [`HistoryInsights`].  All I/O flows through port traits injected
//! at call sites, making the entire service testable with mock adapters.
//!
//! ```text
//!  HistorySource ──▶ ┌──────────────────────────────┐ ──▶ EventSink
//!                    │        InsightService        │
//!  NarrativePort ◀──▶│  aggregate · estimate · recs │
//!                    └──────────────────────────────┘
//! ```

use log::{debug, info, warn};

use crate::config::InsightConfig;
use crate::error::Result;
use crate::estimation::{Estimator, aggregate};
use crate::narrative::{NarrativeRequest, collect_recommendations, fallback};

use super::commands::AppCommand;
use super::events::AppEvent;
use super::insights::{HistoryInsights, NarrativeSource};
use super::ports::{EventSink, HistorySource, NarrativeError, NarrativePort};

// ───────────────────────────────────────────────────────────────
// InsightService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates history, estimates and narrative.
pub struct InsightService {
    config: InsightConfig,
    estimator: Estimator,
    latest: Option<HistoryInsights>,
    refresh_count: u64,
}

impl InsightService {
    /// Construct the service.  Fails if the configuration does not validate.
    pub fn new(config: InsightConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            estimator: Estimator::new(&config),
            config,
            latest: None,
            refresh_count: 0,
        })
    }

    // ── Refresh ───────────────────────────────────────────────

    /// Pull the recent history, estimate both consumables and gather
    /// recommendations.
    ///
    /// Only a history fetch failure is an error.  A missing container
    /// reading or a failed generator degrades the result instead.
    pub async fn refresh<S, N, E>(
        &mut self,
        source: &mut S,
        narrator: &N,
        sink: &mut E,
    ) -> Result<&HistoryInsights>
    where
        S: HistorySource,
        N: NarrativePort,
        E: EventSink,
    {
        self.refresh_count += 1;
        let window = self.config.history_window_days;

        // 1. History
        let mut entries = match source.recent_days(window) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("History fetch failed: {}", e);
                sink.emit(&AppEvent::SourceFailed(e));
                return Err(e.into());
            }
        };
        if entries.len() > window {
            debug!(
                "Source returned {} entries for a {}-day window, keeping newest",
                entries.len(),
                window
            );
            entries = entries.split_off(entries.len() - window);
        }

        // 2. Current levels
        let current = match source.container_levels() {
            Ok(Some(levels)) if !levels.is_empty() => Some(levels),
            Ok(_) => {
                warn!("No current container reading");
                None
            }
            Err(e) => {
                warn!("Container level fetch failed: {}", e);
                None
            }
        };

        // 3. Estimates (pure); a missing level only blocks its own container.
        let signals = aggregate(&entries);
        let estimates = self
            .estimator
            .estimate(&signals, &current.unwrap_or_default());

        // 4. Recommendations (best effort)
        let request = NarrativeRequest {
            entries: &entries,
            current,
            signals: &signals,
            estimates: &estimates,
            full_confidence_days: self.config.full_confidence_days,
        };
        let refill_days = self.config.refill_warning_days;
        let (recommendations, narrative) = if entries.is_empty() {
            (
                fallback::recommendations(&request, refill_days),
                NarrativeSource::Fallback,
            )
        } else {
            match narrator.recommend(&request).await {
                Ok(lines) => {
                    let recs = collect_recommendations(lines);
                    if recs.is_empty() {
                        warn!("Narrative generator returned no recommendations");
                        sink.emit(&AppEvent::NarrativeUnavailable(
                            NarrativeError::MalformedResponse,
                        ));
                        (
                            fallback::recommendations(&request, refill_days),
                            NarrativeSource::Fallback,
                        )
                    } else {
                        (recs, NarrativeSource::Generated)
                    }
                }
                Err(e) => {
                    warn!("Narrative generator failed: {}", e);
                    sink.emit(&AppEvent::NarrativeUnavailable(e));
                    (
                        fallback::recommendations(&request, refill_days),
                        NarrativeSource::Fallback,
                    )
                }
            }
        };

        info!(
            "Insights refreshed: {} day(s), food {}, pH solution {}",
            signals.observed_days, estimates.food, estimates.ph
        );
        sink.emit(&AppEvent::InsightsRefreshed {
            observed_days: signals.observed_days,
            food: estimates.food,
            ph: estimates.ph,
        });

        Ok(&*self.latest.insert(HistoryInsights {
            signals,
            estimates,
            recommendations,
            narrative,
        }))
    }

    // ── Command handling ──────────────────────────────────────

    /// Process an external command.
    pub fn handle_command(&mut self, cmd: AppCommand, sink: &mut impl EventSink) -> Result<()> {
        match cmd {
            AppCommand::UpdateConfig(new_config) => {
                if let Err(e) = new_config.validate() {
                    warn!("Rejected config update: {}", e);
                    return Err(e);
                }
                self.estimator = Estimator::new(&new_config);
                self.config = new_config;
                // Cached estimates were computed under the old model.
                self.latest = None;
                sink.emit(&AppEvent::ConfigUpdated);
                info!("Configuration updated at runtime");
            }
            AppCommand::ClearInsights => {
                self.latest = None;
                sink.emit(&AppEvent::InsightsCleared);
            }
        }
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────

    /// Insights from the last successful refresh, if still valid.
    pub fn latest(&self) -> Option<&HistoryInsights> {
        self.latest.as_ref()
    }

    pub fn config(&self) -> &InsightConfig {
        &self.config
    }

    /// Refresh attempts since construction, failed ones included.
    pub fn refresh_count(&self) -> u64 {
        self.refresh_count
    }
}

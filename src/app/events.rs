//! Outbound application events.
//!
//! The [`InsightService`](super::service::InsightService) emits these
//! through the [`EventSink`](super::ports::EventSink) port.  Adapters on
//! the other side decide what to do with them: log a line, push to a
//! dashboard, and so on.

use crate::estimation::EstimationResult;

use super::ports::{NarrativeError, SourceError};

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// A refresh completed with fresh estimates.
    InsightsRefreshed {
        observed_days: usize,
        food: EstimationResult,
        ph: EstimationResult,
    },

    /// The narrative generator failed; fallback recommendations were used.
    NarrativeUnavailable(NarrativeError),

    /// History could not be fetched; nothing was refreshed.
    SourceFailed(SourceError),

    /// Configuration was replaced at runtime.
    ConfigUpdated,

    /// Cached insights were dropped.
    InsightsCleared,
}

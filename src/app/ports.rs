//! Port traits: the hexagonal boundary between the insight core and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ InsightService (domain)
//! ```
//!
//! Driven adapters (document store, language model, log output) implement
//! these traits.  The [`InsightService`](super::service::InsightService)
//! consumes them via generics, so the estimation core never touches I/O.

use crate::history::{ContainerSnapshot, DailyLogEntry};
use crate::narrative::NarrativeRequest;

// ───────────────────────────────────────────────────────────────
// History source (driven adapter: telemetry store → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port for historical logs and current container levels.
pub trait HistorySource {
    /// The newest `window` days, ordered **oldest first**.
    ///
    /// May return fewer entries than requested, including none.
    fn recent_days(&mut self, window: usize) -> Result<Vec<DailyLogEntry>, SourceError>;

    /// Current container levels.  `Ok(None)` means the source holds no
    /// current reading; callers must not substitute a constant.
    fn container_levels(&mut self) -> Result<Option<ContainerSnapshot>, SourceError>;
}

// ───────────────────────────────────────────────────────────────
// Narrative port (driven adapter: domain → text generator)
// ───────────────────────────────────────────────────────────────

/// Out-of-process text generator that phrases recommendations around
/// already-computed estimates.
///
/// Best effort: a failure here never changes the estimates.
#[allow(async_fn_in_trait)]
pub trait NarrativePort {
    /// Recommendations for the request, most important first.
    async fn recommend(&self, request: &NarrativeRequest<'_>)
    -> Result<Vec<String>, NarrativeError>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / UI)
// ───────────────────────────────────────────────────────────────

/// The service emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (log, UI push, etc.).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`HistorySource`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceError {
    /// The store cannot be reached (offline).
    Unavailable,
    /// The requested collection or document does not exist.
    NotFound,
    /// A stored document could not be interpreted.
    /// The `&'static str` names what was wrong.
    Malformed(&'static str),
    /// Generic I/O error from the backend.
    Io,
}

/// Errors from [`NarrativePort`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NarrativeError {
    /// No generator is configured or it cannot be reached.
    Unavailable,
    /// The generator replied, but not in the expected shape.
    MalformedResponse,
    /// The generator reported a failure.
    Failed,
}

impl core::fmt::Display for SourceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Unavailable => write!(f, "source unavailable"),
            Self::NotFound => write!(f, "not found"),
            Self::Malformed(msg) => write!(f, "malformed document: {}", msg),
            Self::Io => write!(f, "I/O error"),
        }
    }
}

impl core::fmt::Display for NarrativeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Unavailable => write!(f, "generator unavailable"),
            Self::MalformedResponse => write!(f, "malformed response"),
            Self::Failed => write!(f, "generation failed"),
        }
    }
}

impl std::error::Error for SourceError {}

impl std::error::Error for NarrativeError {}

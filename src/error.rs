//! Unified error types for ReefWatch.
//!
//! A single `Error` enum that the application layer funnels every
//! collaborator failure into.  The estimation core never produces one:
//! it answers every input with an `EstimationResult`.

use core::fmt;

use crate::app::ports::{NarrativeError, SourceError};

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The telemetry/log source could not deliver history.
    Source(SourceError),
    /// The narrative generator failed.
    Narrative(NarrativeError),
    /// Configuration is invalid.  The `&'static str` names the field and why.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source(e) => write!(f, "history source: {e}"),
            Self::Narrative(e) => write!(f, "narrative: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<SourceError> for Error {
    fn from(e: SourceError) -> Self {
        Self::Source(e)
    }
}

impl From<NarrativeError> for Error {
    fn from(e: NarrativeError) -> Self {
        Self::Narrative(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;

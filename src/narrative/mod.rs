//! Narrative support: everything the text generator sees, and what the
//! service says when there is no generator.
//!
//! The generator only phrases recommendations.  Estimates are computed by
//! [`crate::estimation`] and handed over as finished facts.

pub mod fallback;
pub mod prompt;

use crate::estimation::{AggregateSignals, DepletionEstimates};
use crate::history::{ContainerSnapshot, DailyLogEntry};

/// Upper bound on recommendations shown to the user.
pub const MAX_RECOMMENDATIONS: usize = 3;

/// Fixed-capacity recommendation list.
pub type Recommendations = heapless::Vec<String, MAX_RECOMMENDATIONS>;

/// Everything a narrative generator gets for one refresh.
#[derive(Debug, Clone, Copy)]
pub struct NarrativeRequest<'a> {
    /// History window, oldest first.
    pub entries: &'a [DailyLogEntry],
    /// Current levels; `None` when the source had no reading.
    pub current: Option<ContainerSnapshot>,
    pub signals: &'a AggregateSignals,
    pub estimates: &'a DepletionEstimates,
    /// Days needed for a full-confidence estimate.
    pub full_confidence_days: usize,
}

impl NarrativeRequest<'_> {
    /// History is shorter than a full-confidence window.
    pub fn is_limited(&self) -> bool {
        self.signals.observed_days < self.full_confidence_days
    }

    /// Render the prompt text for a language-model backed generator.
    pub fn render_prompt(&self) -> String {
        prompt::render(self)
    }
}

/// Trim, drop blanks, keep at most [`MAX_RECOMMENDATIONS`].
pub fn collect_recommendations<I>(lines: I) -> Recommendations
where
    I: IntoIterator<Item = String>,
{
    let mut out = Recommendations::new();
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if out.push(line.to_string()).is_err() {
            break;
        }
    }
    out
}

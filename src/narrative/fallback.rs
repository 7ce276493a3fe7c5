//! Deterministic recommendations used when no generator answers.
//!
//! Priority order: missed feedings, limited history, refill warnings.
//! When none apply a single steady-state statement is returned.

use crate::estimation::{Consumable, DepletionEstimates};
use crate::history::DailyLogEntry;

use super::{NarrativeRequest, Recommendations};

/// Returned verbatim when the history window is empty.
pub const NO_HISTORY: &str = "No historical data provided. Cannot generate insights.";

const STEADY: &str =
    "Water quality and consumption look steady. Keep the current feeding and pH settings.";

/// Build fallback recommendations for a request.
pub fn recommendations(req: &NarrativeRequest<'_>, refill_warning_days: u64) -> Recommendations {
    let mut out = Recommendations::new();

    if req.entries.is_empty() {
        let _ = out.push(NO_HISTORY.to_string());
        return out;
    }

    let candidates = [
        missed_feedings(req.entries),
        limited_history(req),
        refill(req.estimates, Consumable::Food, refill_warning_days),
        refill(req.estimates, Consumable::PhSolution, refill_warning_days),
    ];
    for text in candidates.into_iter().flatten() {
        if out.push(text).is_err() {
            break;
        }
    }

    if out.is_empty() {
        let _ = out.push(STEADY.to_string());
    }
    out
}

fn missed_feedings(entries: &[DailyLogEntry]) -> Option<String> {
    let missed: Vec<&str> = entries
        .iter()
        .filter(|e| e.missed_feeding())
        .map(|e| e.date.as_str())
        .collect();
    match missed.as_slice() {
        [] => None,
        [day] => Some(format!(
            "Auto feeding was enabled on {day} but no feeding was recorded. Check the feeder."
        )),
        days => Some(format!(
            "Auto feeding was enabled but no feeding was recorded on {} days ({}). Check the feeder.",
            days.len(),
            days.join(", ")
        )),
    }
}

fn limited_history(req: &NarrativeRequest<'_>) -> Option<String> {
    if !req.is_limited() {
        return None;
    }
    let n = req.signals.observed_days;
    Some(format!(
        "Only {n} day{} of history recorded. Treat the estimates as provisional until {} days are logged.",
        if n == 1 { "" } else { "s" },
        req.full_confidence_days
    ))
}

fn refill(estimates: &DepletionEstimates, which: Consumable, warn_days: u64) -> Option<String> {
    let result = estimates.get(which);
    let days = result.days_remaining()?;
    if days > warn_days {
        return None;
    }
    Some(format!(
        "Refill the {which} container soon: projected empty {result}."
    ))
}

//! Consumable depletion estimator.
//!
//! Linear extrapolation of container levels from event counts:
//!
//! ```text
//!   daily_rate     = driver_count × cost_per_event / observed_days
//!   days_remaining = floor(clamp(level, 0, 100) / daily_rate)
//!                  = floor(clamp(level, 0, 100) × observed_days
//!                          / (driver_count × cost_per_event))
//!   empty_on       = anchor_date + days_remaining
//! ```
//!
//! | Consumable  | Driver                  | Default cost |
//! |-------------|-------------------------|--------------|
//! | Food        | feeding events          | 2.5 % each   |
//! | pH solution | days balancer triggered | 1.5 % each   |
//!
//! The estimator is total: every input yields one of the
//! [`EstimationResult`] shapes and nothing panics.

use core::fmt;

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::config::InsightConfig;
use crate::history::{ContainerSnapshot, clamp_percent};

use super::aggregate::AggregateSignals;

// ───────────────────────────────────────────────────────────────
// Result types
// ───────────────────────────────────────────────────────────────

/// The two tracked consumables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Consumable {
    Food,
    PhSolution,
}

impl fmt::Display for Consumable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Food => write!(f, "food"),
            Self::PhSolution => write!(f, "pH solution"),
        }
    }
}

/// How far a projection can be trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Confidence {
    Full,
    /// Fewer observed days than a full week; the value is provisional.
    #[serde(rename_all = "camelCase")]
    Low { observed_days: usize },
}

impl Confidence {
    pub fn is_low(self) -> bool {
        matches!(self, Self::Low { .. })
    }
}

/// Why no projection could be made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnavailableReason {
    /// The history window is empty.
    NoData,
    /// Nothing was consumed in the window; extrapolating would be infinite.
    NoConsumptionSignal,
    /// The source has no current container reading.
    NoCurrentReading,
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoData => write!(f, "insufficient data"),
            Self::NoConsumptionSignal => {
                write!(f, "no consumption observed, cannot extrapolate")
            }
            Self::NoCurrentReading => write!(f, "no current container reading"),
        }
    }
}

/// Outcome for one consumable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum EstimationResult {
    /// Projection anchored on the newest history date.
    #[serde(rename_all = "camelCase")]
    Dated {
        days_remaining: u64,
        anchor_date: NaiveDate,
        empty_on: NaiveDate,
        confidence: Confidence,
    },
    /// Projection without a usable anchor date.
    #[serde(rename_all = "camelCase")]
    Undated {
        days_remaining: u64,
        confidence: Confidence,
    },
    Unavailable { reason: UnavailableReason },
}

impl EstimationResult {
    /// Days until empty, when a projection exists.
    pub fn days_remaining(&self) -> Option<u64> {
        match self {
            Self::Dated { days_remaining, .. } | Self::Undated { days_remaining, .. } => {
                Some(*days_remaining)
            }
            Self::Unavailable { .. } => None,
        }
    }

    pub fn empty_on(&self) -> Option<NaiveDate> {
        match self {
            Self::Dated { empty_on, .. } => Some(*empty_on),
            _ => None,
        }
    }

    pub fn confidence(&self) -> Option<Confidence> {
        match self {
            Self::Dated { confidence, .. } | Self::Undated { confidence, .. } => Some(*confidence),
            Self::Unavailable { .. } => None,
        }
    }

    pub fn unavailable_reason(&self) -> Option<UnavailableReason> {
        match self {
            Self::Unavailable { reason } => Some(*reason),
            _ => None,
        }
    }

    pub fn is_low_confidence(&self) -> bool {
        self.confidence().is_some_and(Confidence::is_low)
    }
}

/// Human-readable form: `in 15 days`, `on 2024-03-24`, or
/// `Estimation unavailable (...)`, with a low-confidence suffix when needed.
impl fmt::Display for EstimationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dated { empty_on, .. } => write!(f, "on {}", empty_on.format("%Y-%m-%d"))?,
            Self::Undated { days_remaining, .. } => match days_remaining {
                1 => write!(f, "in 1 day")?,
                n => write!(f, "in {n} days")?,
            },
            Self::Unavailable { reason } => return write!(f, "Estimation unavailable ({reason})"),
        }
        if let Some(Confidence::Low { observed_days }) = self.confidence() {
            let unit = if observed_days == 1 { "day" } else { "days" };
            write!(f, " (low confidence: based on {observed_days} {unit} of data)")?;
        }
        Ok(())
    }
}

/// Food and pH-solution outcomes for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepletionEstimates {
    pub food: EstimationResult,
    pub ph: EstimationResult,
}

impl DepletionEstimates {
    /// Both consumables unavailable for the same reason.
    pub fn unavailable(reason: UnavailableReason) -> Self {
        let r = EstimationResult::Unavailable { reason };
        Self { food: r, ph: r }
    }

    pub fn get(&self, consumable: Consumable) -> &EstimationResult {
        match consumable {
            Consumable::Food => &self.food,
            Consumable::PhSolution => &self.ph,
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Estimator
// ───────────────────────────────────────────────────────────────

/// Depletion estimator parameterised by the consumption model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimator {
    food_cost_pct: f64,
    ph_cost_pct: f64,
    full_confidence_days: usize,
}

impl Default for Estimator {
    fn default() -> Self {
        Self::new(&InsightConfig::default())
    }
}

impl Estimator {
    pub fn new(config: &InsightConfig) -> Self {
        Self {
            food_cost_pct: config.food_cost_per_feeding_pct,
            ph_cost_pct: config.ph_cost_per_trigger_day_pct,
            full_confidence_days: config.full_confidence_days,
        }
    }

    /// Estimate both consumables.
    pub fn estimate(
        &self,
        signals: &AggregateSignals,
        current: &ContainerSnapshot,
    ) -> DepletionEstimates {
        DepletionEstimates {
            food: self.estimate_one(Consumable::Food, signals, current.food_pct),
            ph: self.estimate_one(Consumable::PhSolution, signals, current.ph_solution_pct),
        }
    }

    /// Estimate a single consumable.  `level_pct` is `None` when the
    /// container has no current reading.
    pub fn estimate_one(
        &self,
        consumable: Consumable,
        signals: &AggregateSignals,
        level_pct: Option<f64>,
    ) -> EstimationResult {
        match consumable {
            Consumable::Food => self.project(
                signals,
                signals.total_feeding_events,
                self.food_cost_pct,
                level_pct,
            ),
            Consumable::PhSolution => self.project(
                signals,
                signals.balancer_trigger_days,
                self.ph_cost_pct,
                level_pct,
            ),
        }
    }

    /// Precedence: no data, then no consumption, then no reading.
    fn project(
        &self,
        signals: &AggregateSignals,
        driver_count: usize,
        cost_pct: f64,
        level_pct: Option<f64>,
    ) -> EstimationResult {
        if signals.observed_days == 0 {
            return EstimationResult::Unavailable {
                reason: UnavailableReason::NoData,
            };
        }

        let consumed_pct = driver_count as f64 * cost_pct;
        // NaN only comes from a hand-built, unvalidated cost.
        if consumed_pct.is_nan() || consumed_pct <= 0.0 {
            return EstimationResult::Unavailable {
                reason: UnavailableReason::NoConsumptionSignal,
            };
        }

        let Some(level_pct) = level_pct else {
            return EstimationResult::Unavailable {
                reason: UnavailableReason::NoCurrentReading,
            };
        };

        // Single division keeps an exact whole quotient whole.  `as` saturates.
        let days_remaining = (clamp_percent(level_pct) * signals.observed_days as f64
            / consumed_pct)
            .floor() as u64;

        let confidence = if signals.observed_days < self.full_confidence_days {
            Confidence::Low {
                observed_days: signals.observed_days,
            }
        } else {
            Confidence::Full
        };

        let dated = signals.anchor_date.and_then(|anchor| {
            anchor
                .checked_add_days(Days::new(days_remaining))
                .map(|empty_on| (anchor, empty_on))
        });

        match dated {
            Some((anchor_date, empty_on)) => EstimationResult::Dated {
                days_remaining,
                anchor_date,
                empty_on,
                confidence,
            },
            None => EstimationResult::Undated {
                days_remaining,
                confidence,
            },
        }
    }
}

/// Estimate with the default consumption model.
pub fn estimate(signals: &AggregateSignals, current: &ContainerSnapshot) -> DepletionEstimates {
    Estimator::default().estimate(signals, current)
}

//! Estimation core: pure, synchronous, stateless.
//!
//! ```text
//!   [DailyLogEntry] ──▶ aggregate() ──▶ AggregateSignals ──┐
//!                                                          ├──▶ estimate() ──▶ DepletionEstimates
//!   ContainerSnapshot ─────────────────────────────────────┘
//! ```
//!
//! Nothing here performs I/O or reads a clock; the only notion of "today"
//! is the anchor date taken from the newest history entry.

pub mod aggregate;
pub mod estimate;

pub use aggregate::{AggregateSignals, aggregate};
pub use estimate::{
    Confidence, Consumable, DepletionEstimates, EstimationResult, Estimator, UnavailableReason,
    estimate,
};

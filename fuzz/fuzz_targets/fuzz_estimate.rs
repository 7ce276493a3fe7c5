//! Fuzz target: aggregate + estimate
//!
//! Builds a history window and a current reading from raw bytes and
//! verifies:
//! - No panics for any counts or levels, NaN and infinities included
//! - A dated result always lands `days_remaining` days after its anchor
//! - Empty history is never projected
//!
//! cargo fuzz run fuzz_estimate

#![no_main]

use libfuzzer_sys::fuzz_target;
use reefwatch::estimation::{EstimationResult, UnavailableReason, aggregate, estimate};
use reefwatch::history::{ContainerSnapshot, DailyLogEntry};

fn level(bytes: &[u8]) -> f64 {
    bytes
        .get(..8)
        .and_then(|s| s.try_into().ok())
        .map(f64::from_le_bytes)
        .unwrap_or(0.0)
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 16 {
        return;
    }
    let current = ContainerSnapshot::new(level(&data[..8]), level(&data[8..16]));

    // One entry per remaining byte: low nibble = feedings, bit 4 = balancer.
    let entries: Vec<DailyLogEntry> = data[16..]
        .iter()
        .take(64)
        .enumerate()
        .map(|(i, b)| {
            let label = if b & 0x20 != 0 {
                format!("day {i}")
            } else {
                format!("2024-01-{:02}", (i % 28) + 1)
            };
            DailyLogEntry::new(label)
                .with_feedings((0..(b & 0x0f)).map(|n| format!("{n:02}:00")))
                .with_balancer(b & 0x10 != 0)
        })
        .collect();

    let signals = aggregate(&entries);
    let result = estimate(&signals, &current);

    for r in [&result.food, &result.ph] {
        if let EstimationResult::Dated {
            days_remaining,
            anchor_date,
            empty_on,
            ..
        } = r
        {
            assert_eq!((*empty_on - *anchor_date).num_days() as u64, *days_remaining);
        }
        if entries.is_empty() {
            assert_eq!(r.unavailable_reason(), Some(UnavailableReason::NoData));
        }
    }
});

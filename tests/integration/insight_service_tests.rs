//! Integration tests for the HistorySource → InsightService → EventSink
//! pipeline, driven with the in-memory source and scripted narrators.

use chrono::NaiveDate;
use futures_lite::future::block_on;

use reefwatch::adapters::memory::MemoryHistorySource;
use reefwatch::adapters::offline::OfflineNarrative;
use reefwatch::app::commands::AppCommand;
use reefwatch::app::events::AppEvent;
use reefwatch::app::insights::NarrativeSource;
use reefwatch::app::ports::{HistorySource, NarrativeError, SourceError};
use reefwatch::app::service::InsightService;
use reefwatch::config::InsightConfig;
use reefwatch::error::Error;
use reefwatch::estimation::{EstimationResult, UnavailableReason};
use reefwatch::history::{ContainerSnapshot, DailyLogEntry};
use reefwatch::narrative::fallback::NO_HISTORY;

use crate::mocks::{RecordingSink, ScriptedNarrator, week};

fn make_service() -> InsightService {
    InsightService::new(InsightConfig::default()).unwrap()
}

fn levels() -> Option<ContainerSnapshot> {
    Some(ContainerSnapshot::new(75.0, 50.0))
}

// ── Happy path ────────────────────────────────────────────────

#[test]
fn full_week_with_generated_recommendations() {
    let mut svc = make_service();
    let mut source = MemoryHistorySource::new(week(7, &[3, 5, 8]), levels());
    let narrator = ScriptedNarrator::replying([
        "  Feed once a day for a week.  ",
        "",
        "Top up the pH solution.",
        "Clean the filter.",
        "This line is over the cap.",
    ]);
    let mut sink = RecordingSink::new();

    let insights = block_on(svc.refresh(&mut source, &narrator, &mut sink)).unwrap();

    assert_eq!(insights.signals.observed_days, 7);
    assert_eq!(insights.signals.total_feeding_events, 14);
    assert_eq!(insights.signals.balancer_trigger_days, 3);

    assert_eq!(insights.estimates.food.days_remaining(), Some(15));
    assert_eq!(
        insights.estimates.food.empty_on(),
        NaiveDate::from_ymd_opt(2024, 3, 24)
    );
    assert_eq!(insights.estimates.ph.days_remaining(), Some(77));
    assert!(!insights.estimates.food.is_low_confidence());

    assert_eq!(insights.narrative, NarrativeSource::Generated);
    assert_eq!(insights.recommendations.len(), 3);
    assert_eq!(insights.recommendations[0], "Feed once a day for a week.");
    assert_eq!(insights.recommendations[1], "Top up the pH solution.");

    assert_eq!(narrator.calls.get(), 1);
    assert!(matches!(
        sink.last(),
        Some(AppEvent::InsightsRefreshed { observed_days: 7, .. })
    ));
    assert_eq!(sink.events.len(), 1);
    assert!(svc.latest().is_some());
}

#[test]
fn prompt_carries_computed_estimates() {
    let mut svc = make_service();
    let mut source = MemoryHistorySource::new(week(7, &[]), levels());
    let narrator = ScriptedNarrator::replying(["ok"]);
    let mut sink = RecordingSink::new();

    block_on(svc.refresh(&mut source, &narrator, &mut sink)).unwrap();

    let prompt = narrator.last_prompt().unwrap();
    assert!(prompt.contains("Food container empty: on 2024-03-24"));
    assert!(prompt.contains("- 2024-03-03"));
    assert!(prompt.contains("- Food: 75.0%"));
    assert!(!prompt.contains("needed for a reliable trend"));
}

#[test]
fn short_history_is_flagged_low_confidence_and_in_prompt() {
    let mut svc = make_service();
    let mut source = MemoryHistorySource::new(week(4, &[7]), levels());
    let narrator = ScriptedNarrator::replying(["Keep logging."]);
    let mut sink = RecordingSink::new();

    let insights = block_on(svc.refresh(&mut source, &narrator, &mut sink)).unwrap();
    assert!(insights.estimates.food.is_low_confidence());
    assert!(insights.estimates.ph.is_low_confidence());
    assert!(insights.food_summary().contains("low confidence: based on 4 days"));

    let prompt = narrator.last_prompt().unwrap();
    assert!(prompt.contains("Only 4 of the 7 days"));
}

// ── Degraded narrative ────────────────────────────────────────

#[test]
fn offline_generator_falls_back_without_touching_estimates() {
    let mut svc = make_service();
    let mut source = MemoryHistorySource::new(week(7, &[3, 5, 8]), levels());
    let mut sink = RecordingSink::new();

    let insights = block_on(svc.refresh(&mut source, &OfflineNarrative, &mut sink)).unwrap();

    assert_eq!(insights.narrative, NarrativeSource::Fallback);
    assert_eq!(insights.estimates.food.days_remaining(), Some(15));
    assert_eq!(insights.estimates.ph.days_remaining(), Some(77));
    assert!(!insights.recommendations.is_empty());
    assert_eq!(
        sink.events[0],
        AppEvent::NarrativeUnavailable(NarrativeError::Unavailable)
    );
    assert!(matches!(sink.last(), Some(AppEvent::InsightsRefreshed { .. })));
}

#[test]
fn blank_reply_counts_as_malformed() {
    let mut svc = make_service();
    let mut source = MemoryHistorySource::new(week(7, &[]), levels());
    let narrator = ScriptedNarrator::replying(["", "   "]);
    let mut sink = RecordingSink::new();

    let insights = block_on(svc.refresh(&mut source, &narrator, &mut sink)).unwrap();

    assert_eq!(insights.narrative, NarrativeSource::Fallback);
    assert_eq!(
        sink.count(|e| *e == AppEvent::NarrativeUnavailable(NarrativeError::MalformedResponse)),
        1
    );
}

#[test]
fn fallback_warns_about_missed_feedings_and_low_food() {
    let mut svc = make_service();
    let mut entries = week(7, &[]);
    let mut missed = DailyLogEntry::new("2024-03-10");
    missed.auto_feeding_enabled = Some(true);
    entries.remove(0);
    entries.push(missed);
    let mut source =
        MemoryHistorySource::new(entries, Some(ContainerSnapshot::new(10.0, 50.0)));
    let narrator = ScriptedNarrator::failing(NarrativeError::Failed);
    let mut sink = RecordingSink::new();

    let insights = block_on(svc.refresh(&mut source, &narrator, &mut sink)).unwrap();

    assert_eq!(insights.narrative, NarrativeSource::Fallback);
    assert!(insights.recommendations[0].contains("2024-03-10"));
    assert!(
        insights
            .recommendations
            .iter()
            .any(|r| r.starts_with("Refill the food container"))
    );
}

// ── Degraded inputs ───────────────────────────────────────────

#[test]
fn empty_history_is_no_data_and_skips_generator() {
    let mut svc = make_service();
    let mut source = MemoryHistorySource::new(Vec::new(), levels());
    let narrator = ScriptedNarrator::replying(["should not be used"]);
    let mut sink = RecordingSink::new();

    let insights = block_on(svc.refresh(&mut source, &narrator, &mut sink)).unwrap();

    assert_eq!(
        insights.estimates.food,
        EstimationResult::Unavailable {
            reason: UnavailableReason::NoData
        }
    );
    assert_eq!(insights.estimates.ph.unavailable_reason(), Some(UnavailableReason::NoData));
    assert_eq!(insights.recommendations.len(), 1);
    assert_eq!(insights.recommendations[0], NO_HISTORY);
    assert_eq!(narrator.calls.get(), 0);
}

#[test]
fn missing_levels_yield_no_current_reading() {
    let mut svc = make_service();
    let mut source = MemoryHistorySource::new(week(7, &[3]), None);
    let narrator = ScriptedNarrator::replying(["Log the container levels."]);
    let mut sink = RecordingSink::new();

    let insights = block_on(svc.refresh(&mut source, &narrator, &mut sink)).unwrap();

    assert_eq!(
        insights.estimates.food.unavailable_reason(),
        Some(UnavailableReason::NoCurrentReading)
    );
    assert_eq!(
        insights.estimates.ph.unavailable_reason(),
        Some(UnavailableReason::NoCurrentReading)
    );
    assert_eq!(insights.signals.observed_days, 7);
    assert!(narrator.last_prompt().unwrap().contains("- not available"));
}

#[test]
fn level_fetch_failure_degrades_like_missing_levels() {
    let mut svc = make_service();
    let mut source = MemoryHistorySource::new(week(7, &[]), levels());
    source.fail_levels(Some(SourceError::Io));
    let mut sink = RecordingSink::new();

    let insights = block_on(svc.refresh(&mut source, &OfflineNarrative, &mut sink)).unwrap();
    assert_eq!(
        insights.estimates.food.unavailable_reason(),
        Some(UnavailableReason::NoCurrentReading)
    );
    assert!(
        !sink
            .events
            .iter()
            .any(|e| matches!(e, AppEvent::SourceFailed(_)))
    );
}

#[test]
fn partial_reading_projects_the_recorded_container() {
    let mut svc = make_service();
    let partial = ContainerSnapshot {
        food_pct: Some(75.0),
        ph_solution_pct: None,
    };
    let mut source = MemoryHistorySource::new(week(7, &[3, 5, 8]), Some(partial));
    let narrator = ScriptedNarrator::replying(["Record the pH solution level."]);
    let mut sink = RecordingSink::new();

    let insights = block_on(svc.refresh(&mut source, &narrator, &mut sink)).unwrap();

    assert_eq!(insights.estimates.food.days_remaining(), Some(15));
    assert_eq!(
        insights.estimates.ph.unavailable_reason(),
        Some(UnavailableReason::NoCurrentReading)
    );
    assert!(narrator.last_prompt().unwrap().contains("- pH solution: not recorded"));
}

#[test]
fn no_consumption_outranks_missing_reading() {
    let mut svc = make_service();
    let entries: Vec<_> = (3..=9)
        .map(|d| DailyLogEntry::new(format!("2024-03-{d:02}")).with_balancer(d % 2 == 1))
        .collect();
    let mut source = MemoryHistorySource::new(entries, None);
    let mut sink = RecordingSink::new();

    let insights = block_on(svc.refresh(&mut source, &OfflineNarrative, &mut sink)).unwrap();

    assert_eq!(
        insights.estimates.food.unavailable_reason(),
        Some(UnavailableReason::NoConsumptionSignal)
    );
    assert_eq!(
        insights.estimates.ph.unavailable_reason(),
        Some(UnavailableReason::NoCurrentReading)
    );
}

#[test]
fn reading_arriving_later_enables_projection() {
    let mut svc = make_service();
    let mut source = MemoryHistorySource::new(week(7, &[]), None);
    let mut sink = RecordingSink::new();

    let first = block_on(svc.refresh(&mut source, &OfflineNarrative, &mut sink)).unwrap();
    assert_eq!(
        first.estimates.food.unavailable_reason(),
        Some(UnavailableReason::NoCurrentReading)
    );

    source.set_levels(levels());
    let second = block_on(svc.refresh(&mut source, &OfflineNarrative, &mut sink)).unwrap();
    assert_eq!(second.estimates.food.days_remaining(), Some(15));
}

#[test]
fn history_failure_is_an_error_and_emits_event() {
    let mut svc = make_service();
    let mut source = MemoryHistorySource::new(week(7, &[]), levels());
    source.fail_history(Some(SourceError::Unavailable));
    let mut sink = RecordingSink::new();

    let result = block_on(svc.refresh(&mut source, &OfflineNarrative, &mut sink));

    assert!(matches!(result, Err(Error::Source(SourceError::Unavailable))));
    assert_eq!(sink.events, vec![AppEvent::SourceFailed(SourceError::Unavailable)]);
    assert!(svc.latest().is_none());
    assert_eq!(svc.refresh_count(), 1);
}

// ── Window handling ───────────────────────────────────────────

#[test]
fn configured_window_limits_history() {
    let cfg = InsightConfig {
        history_window_days: 3,
        full_confidence_days: 3,
        ..InsightConfig::default()
    };
    let mut svc = InsightService::new(cfg).unwrap();
    let mut source = MemoryHistorySource::new(week(9, &[]), levels());
    let mut sink = RecordingSink::new();

    let insights = block_on(svc.refresh(&mut source, &OfflineNarrative, &mut sink)).unwrap();
    assert_eq!(insights.signals.observed_days, 3);
    assert_eq!(insights.signals.anchor_date, NaiveDate::from_ymd_opt(2024, 3, 9));
}

/// A source that ignores the requested window.
struct OversizedSource(Vec<DailyLogEntry>);

impl HistorySource for OversizedSource {
    fn recent_days(&mut self, _window: usize) -> Result<Vec<DailyLogEntry>, SourceError> {
        Ok(self.0.clone())
    }

    fn container_levels(&mut self) -> Result<Option<ContainerSnapshot>, SourceError> {
        Ok(levels())
    }
}

#[test]
fn oversized_reply_keeps_newest_days() {
    let mut svc = make_service();
    let mut source = OversizedSource(week(9, &[1, 2]));
    let mut sink = RecordingSink::new();

    let insights = block_on(svc.refresh(&mut source, &OfflineNarrative, &mut sink)).unwrap();

    assert_eq!(insights.signals.observed_days, 7);
    // Days 1 and 2 fell out of the window.
    assert_eq!(insights.signals.balancer_trigger_days, 0);
    assert_eq!(insights.signals.anchor_date, NaiveDate::from_ymd_opt(2024, 3, 9));
}

#[test]
fn newly_pushed_day_moves_the_anchor() {
    let mut svc = make_service();
    let mut source = MemoryHistorySource::new(week(7, &[]), levels());
    let mut sink = RecordingSink::new();

    block_on(svc.refresh(&mut source, &OfflineNarrative, &mut sink)).unwrap();
    source.push_day(DailyLogEntry::new("2024-03-10").with_feedings(["08:00", "18:00"]));
    let insights = block_on(svc.refresh(&mut source, &OfflineNarrative, &mut sink)).unwrap();

    assert_eq!(insights.signals.anchor_date, NaiveDate::from_ymd_opt(2024, 3, 10));
    assert_eq!(source.fetches(), 2);
    assert_eq!(svc.refresh_count(), 2);
}

// ── Commands ──────────────────────────────────────────────────

#[test]
fn update_config_invalidates_cache_and_changes_model() {
    let mut svc = make_service();
    let mut source = MemoryHistorySource::new(week(7, &[]), levels());
    let mut sink = RecordingSink::new();

    block_on(svc.refresh(&mut source, &OfflineNarrative, &mut sink)).unwrap();
    assert!(svc.latest().is_some());

    let cfg = InsightConfig {
        food_cost_per_feeding_pct: 5.0,
        ..InsightConfig::default()
    };
    svc.handle_command(AppCommand::UpdateConfig(cfg), &mut sink).unwrap();
    assert!(svc.latest().is_none());
    assert_eq!(sink.last(), Some(&AppEvent::ConfigUpdated));

    let insights = block_on(svc.refresh(&mut source, &OfflineNarrative, &mut sink)).unwrap();
    // 14 feedings × 5% over 7 days = 10%/day; 75% lasts 7 days.
    assert_eq!(insights.estimates.food.days_remaining(), Some(7));
}

#[test]
fn rejected_config_update_emits_nothing() {
    let mut svc = make_service();
    let mut sink = RecordingSink::new();
    let cfg = InsightConfig {
        history_window_days: 0,
        ..InsightConfig::default()
    };

    let result = svc.handle_command(AppCommand::UpdateConfig(cfg), &mut sink);
    assert!(matches!(result, Err(Error::Config(_))));
    assert!(sink.events.is_empty());
    assert_eq!(svc.config().history_window_days, 7);
}

#[test]
fn config_with_unreachable_full_confidence_is_rejected() {
    let cfg = InsightConfig {
        history_window_days: 5,
        full_confidence_days: 7,
        ..InsightConfig::default()
    };
    assert!(matches!(InsightService::new(cfg), Err(Error::Config(_))));
}

#[test]
fn clear_insights_drops_latest() {
    let mut svc = make_service();
    let mut source = MemoryHistorySource::new(week(7, &[]), levels());
    let mut sink = RecordingSink::new();

    block_on(svc.refresh(&mut source, &OfflineNarrative, &mut sink)).unwrap();
    svc.handle_command(AppCommand::ClearInsights, &mut sink).unwrap();

    assert!(svc.latest().is_none());
    assert_eq!(sink.last(), Some(&AppEvent::InsightsCleared));
}

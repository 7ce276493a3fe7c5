//! ReefWatch: host entry point.
//!
//! Reads a telemetry-store export, runs one insight refresh and prints
//! the result.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                   Adapters (outer ring)                    │
//! │                                                            │
//! │  DocumentHistorySource   OfflineNarrative   LogEventSink   │
//! │  (HistorySource)         (NarrativePort)    (EventSink)    │
//! │                                                            │
//! │  ─────────────── Port Trait Boundary ───────────────       │
//! │                                                            │
//! │  ┌──────────────────────────────────────────────────────┐  │
//! │  │        InsightService (aggregate · estimate)         │  │
//! │  └──────────────────────────────────────────────────────┘  │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Usage: `reefwatch <history.json> [config.json]`

#![deny(unused_must_use)]

use anyhow::{Context, Result, bail};
use log::info;

use reefwatch::adapters::document::DocumentHistorySource;
use reefwatch::adapters::log_sink::LogEventSink;
use reefwatch::adapters::offline::OfflineNarrative;
use reefwatch::app::service::InsightService;
use reefwatch::config::InsightConfig;
use reefwatch::report;

fn main() -> Result<()> {
    // RUST_LOG overrides the default level.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let Some(history_path) = args.next() else {
        bail!("usage: reefwatch <history.json> [config.json]");
    };

    // ── Configuration ─────────────────────────────────────────
    let config = match args.next() {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {path}"))?;
            let cfg: InsightConfig =
                serde_json::from_str(&text).with_context(|| format!("parsing config {path}"))?;
            info!("Loaded config from {}", path);
            cfg
        }
        None => InsightConfig::default(),
    };
    let mut service = InsightService::new(config)?;

    // ── Adapters ──────────────────────────────────────────────
    let mut source = DocumentHistorySource::from_path(&history_path)
        .with_context(|| format!("loading history {history_path}"))?;
    let narrator = OfflineNarrative;
    let mut sink = LogEventSink::new();

    for entry in source.entries() {
        info!("DAY | {}", report::day_line(entry));
    }

    // ── Refresh ───────────────────────────────────────────────
    let insights =
        futures_lite::future::block_on(service.refresh(&mut source, &narrator, &mut sink))?;

    info!("Food container empty: {}", insights.food_summary());
    info!("pH solution container empty: {}", insights.ph_summary());
    for rec in &insights.recommendations {
        info!("RECOMMEND | {}", rec);
    }

    println!("{}", serde_json::to_string_pretty(insights)?);
    Ok(())
}

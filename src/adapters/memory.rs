//! In-memory history source.
//!
//! Simulation backend for demos and tests: holds a fixed set of entries
//! and an optional current reading, and can be told to fail the next
//! fetches to exercise degraded paths.

use log::debug;

use crate::app::ports::{HistorySource, SourceError};
use crate::history::{ContainerSnapshot, DailyLogEntry};

#[derive(Debug, Clone, Default)]
pub struct MemoryHistorySource {
    /// Oldest first.
    entries: Vec<DailyLogEntry>,
    levels: Option<ContainerSnapshot>,
    history_failure: Option<SourceError>,
    levels_failure: Option<SourceError>,
    fetches: u32,
}

impl MemoryHistorySource {
    pub fn new(entries: Vec<DailyLogEntry>, levels: Option<ContainerSnapshot>) -> Self {
        Self {
            entries,
            levels,
            ..Self::default()
        }
    }

    /// Append a newer day.
    pub fn push_day(&mut self, entry: DailyLogEntry) {
        self.entries.push(entry);
    }

    pub fn set_levels(&mut self, levels: Option<ContainerSnapshot>) {
        self.levels = levels;
    }

    /// Make history fetches fail with `err` until cleared with `None`.
    pub fn fail_history(&mut self, err: Option<SourceError>) {
        self.history_failure = err;
    }

    /// Make level fetches fail with `err` until cleared with `None`.
    pub fn fail_levels(&mut self, err: Option<SourceError>) {
        self.levels_failure = err;
    }

    /// History fetches attempted so far.
    pub fn fetches(&self) -> u32 {
        self.fetches
    }
}

impl HistorySource for MemoryHistorySource {
    fn recent_days(&mut self, window: usize) -> Result<Vec<DailyLogEntry>, SourceError> {
        self.fetches += 1;
        if let Some(err) = self.history_failure {
            return Err(err);
        }
        let start = self.entries.len().saturating_sub(window);
        debug!(
            "MemoryHistorySource: serving {} of {} day(s)",
            self.entries.len() - start,
            self.entries.len()
        );
        Ok(self.entries[start..].to_vec())
    }

    fn container_levels(&mut self) -> Result<Option<ContainerSnapshot>, SourceError> {
        match self.levels_failure {
            Some(err) => Err(err),
            None => Ok(self.levels),
        }
    }
}

//! Weight progress tracking
//!
//! A date-ordered log of weigh-ins. The log is plain state owned by the
//! caller: it is built from whatever history the client holds and is never
//! persisted by this crate.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single weigh-in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub date: NaiveDate,
    pub weight_kg: f64,
}

/// Summary of a progress log against a target weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub entries_count: usize,
    pub start_weight_kg: f64,
    pub current_weight_kg: f64,
    /// Negative when weight went down
    pub total_change_kg: f64,
    /// Positive while the current weight is still above the target
    pub remaining_to_goal_kg: f64,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
}

/// Weigh-ins ordered by date, at most one per day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressLog {
    entries: Vec<ProgressEntry>,
}

impl ProgressLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a weigh-in; a second entry for the same date replaces the first
    pub fn add_entry(&mut self, date: NaiveDate, weight_kg: f64) {
        let entry = ProgressEntry { date, weight_kg };
        match self.entries.binary_search_by_key(&date, |e| e.date) {
            Ok(idx) => self.entries[idx] = entry,
            Err(idx) => self.entries.insert(idx, entry),
        }
    }

    pub fn entries(&self) -> &[ProgressEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn latest(&self) -> Option<&ProgressEntry> {
        self.entries.last()
    }

    /// Change between the first and the latest weigh-in
    pub fn total_change_kg(&self) -> Option<f64> {
        let first = self.entries.first()?;
        let last = self.entries.last()?;
        Some(last.weight_kg - first.weight_kg)
    }

    /// Kilograms still to lose to reach `desired_weight_kg`
    pub fn remaining_to_goal_kg(&self, desired_weight_kg: f64) -> Option<f64> {
        self.latest().map(|e| e.weight_kg - desired_weight_kg)
    }

    pub fn summary(&self, desired_weight_kg: f64) -> Option<ProgressSummary> {
        let first = self.entries.first()?;
        let last = self.latest()?;

        Some(ProgressSummary {
            entries_count: self.entries.len(),
            start_weight_kg: first.weight_kg,
            current_weight_kg: last.weight_kg,
            total_change_kg: self.total_change_kg()?,
            remaining_to_goal_kg: self.remaining_to_goal_kg(desired_weight_kg)?,
            first_date: first.date,
            last_date: last.date,
        })
    }
}

impl FromIterator<ProgressEntry> for ProgressLog {
    fn from_iter<I: IntoIterator<Item = ProgressEntry>>(iter: I) -> Self {
        let mut log = ProgressLog::new();
        for entry in iter {
            log.add_entry(entry.date, entry.weight_kg);
        }
        log
    }
}

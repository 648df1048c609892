//! Read-only data access for the validator.
//!
//! The validator has zero persistence-technology dependency: any storage
//! engine (relational, document, in-memory) can back these four reads.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use tempo_shared::types::{EntryId, ProjectId, UserId};

use super::types::TimeEntry;

/// The slice of a project the validator needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRef {
    /// Human-readable project code, used in overlap messages.
    pub code: String,
    /// Whether entries may be recorded against the project.
    pub is_active: bool,
}

/// Read operations the validator performs against the data store.
///
/// Validation is check-then-act: the caller validates against a snapshot
/// and then writes. Two concurrent submissions for the same user and day
/// can each pass the daily-limit and overlap checks against a snapshot
/// that does not reflect the other's in-flight write. Implementations
/// must close this window by running the check and the subsequent write
/// under serialization scoped to `(user_id, date)` - a serializable
/// transaction or a row-level lock on that key.
pub trait TimesheetStore {
    /// All of a user's entries on a calendar day, optionally excluding
    /// one entry (the one being edited).
    fn entries_for_user_on_date(
        &self,
        user_id: UserId,
        date: NaiveDate,
        exclude: Option<EntryId>,
    ) -> Vec<TimeEntry>;

    /// Looks up a project, or `None` if it does not exist.
    fn project_by_id(&self, project_id: ProjectId) -> Option<ProjectRef>;

    /// The user's configured standard daily hours, or `None` if unset
    /// (the validator then applies the policy default).
    fn daily_hour_target(&self, user_id: UserId) -> Option<Decimal>;

    /// Looks up a time entry, or `None` if it does not exist.
    fn entry_by_id(&self, entry_id: EntryId) -> Option<TimeEntry>;
}

/// In-memory [`TimesheetStore`] backed by plain collections.
///
/// Satisfies the same contract as a database-backed store; used in tests
/// and anywhere a snapshot of entries is already at hand.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Vec<TimeEntry>,
    projects: HashMap<ProjectId, ProjectRef>,
    targets: HashMap<UserId, Decimal>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a time entry.
    pub fn add_entry(&mut self, entry: TimeEntry) {
        self.entries.push(entry);
    }

    /// Registers a project.
    pub fn add_project(&mut self, project_id: ProjectId, code: impl Into<String>, is_active: bool) {
        self.projects.insert(
            project_id,
            ProjectRef {
                code: code.into(),
                is_active,
            },
        );
    }

    /// Sets a user's standard daily hours.
    pub fn set_daily_hour_target(&mut self, user_id: UserId, target: Decimal) {
        self.targets.insert(user_id, target);
    }

    /// Replaces a stored entry with the same ID.
    pub fn replace_entry(&mut self, entry: TimeEntry) {
        if let Some(existing) = self.entries.iter_mut().find(|e| e.id == entry.id) {
            *existing = entry;
        }
    }
}

impl TimesheetStore for MemoryStore {
    fn entries_for_user_on_date(
        &self,
        user_id: UserId,
        date: NaiveDate,
        exclude: Option<EntryId>,
    ) -> Vec<TimeEntry> {
        self.entries
            .iter()
            .filter(|e| e.user_id == user_id && e.date == date && Some(e.id) != exclude)
            .cloned()
            .collect()
    }

    fn project_by_id(&self, project_id: ProjectId) -> Option<ProjectRef> {
        self.projects.get(&project_id).cloned()
    }

    fn daily_hour_target(&self, user_id: UserId) -> Option<Decimal> {
        self.targets.get(&user_id).copied()
    }

    fn entry_by_id(&self, entry_id: EntryId) -> Option<TimeEntry> {
        self.entries.iter().find(|e| e.id == entry_id).cloned()
    }
}

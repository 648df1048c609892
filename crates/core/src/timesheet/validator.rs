//! Time-entry validation rules.
//!
//! Gates every mutation of a time entry through a single set of business
//! rules, independent of how the caller obtained the candidate data. All
//! checks run and collect their failures; only the editability gate on
//! update short-circuits.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

use tempo_shared::config::ValidationPolicy;
use tempo_shared::types::{EntryId, UserId};

use crate::arith;

use super::clock::{ClockTime, TimeWindow};
use super::error::{LifecycleError, ValidationError, ValidationWarning};
use super::lifecycle::EntryLifecycle;
use super::provider::TimesheetStore;
use super::types::{EntryAction, EntryCandidate, TimeEntry, UserRole, ValidationReport};

/// Validator over a read-only data store and a validation policy.
///
/// Stateless and synchronous: every method reads a snapshot through the
/// [`TimesheetStore`] and returns a structured outcome. Writes happen in
/// the calling layer after validation succeeds (see the trait docs for
/// the serialization the caller must provide around that).
pub struct TimeEntryValidator<'a, S: TimesheetStore> {
    store: &'a S,
    policy: &'a ValidationPolicy,
}

impl<'a, S: TimesheetStore> TimeEntryValidator<'a, S> {
    /// Creates a validator over the given store and policy.
    #[must_use]
    pub fn new(store: &'a S, policy: &'a ValidationPolicy) -> Self {
        Self { store, policy }
    }

    /// Validates a new entry.
    ///
    /// Runs the date-range, project, daily-limit, and overlap checks,
    /// collecting every failure. The caller is responsible for the
    /// schema-level hour bounds (0.1 ≤ hours ≤ 24) before calling.
    #[must_use]
    pub fn validate_create(
        &self,
        candidate: &EntryCandidate,
        now: DateTime<Utc>,
    ) -> ValidationReport {
        let mut report = ValidationReport::default();
        self.run_checks(candidate, None, now, &mut report);
        report
    }

    /// Validates an edit of an existing entry.
    ///
    /// First evaluates editability; if the entry cannot be edited at all
    /// the report carries that single error and no further checks run.
    /// Otherwise runs the create checks with the edited entry excluded
    /// from the daily-limit and overlap computations.
    #[must_use]
    pub fn validate_update(
        &self,
        entry_id: EntryId,
        actor: UserId,
        role: UserRole,
        candidate: &EntryCandidate,
        now: DateTime<Utc>,
    ) -> ValidationReport {
        let Some(entry) = self.store.entry_by_id(entry_id) else {
            return ValidationReport::from_error(ValidationError::NotEditable(
                LifecycleError::EntryNotFound { entry_id },
            ));
        };
        if let Err(err) = EntryLifecycle::can_edit(&entry, actor, role, now, self.policy) {
            return ValidationReport::from_error(ValidationError::NotEditable(err));
        }

        let mut report = ValidationReport::default();
        self.run_checks(candidate, Some(entry_id), now, &mut report);
        report
    }

    /// Checks whether `actor` may edit the entry.
    pub fn can_edit(
        &self,
        entry_id: EntryId,
        actor: UserId,
        role: UserRole,
        now: DateTime<Utc>,
    ) -> Result<(), LifecycleError> {
        let entry = self.fetch(entry_id)?;
        EntryLifecycle::can_edit(&entry, actor, role, now, self.policy)
    }

    /// Checks whether `actor` may delete the entry.
    pub fn can_delete(
        &self,
        entry_id: EntryId,
        actor: UserId,
        role: UserRole,
        now: DateTime<Utc>,
    ) -> Result<(), LifecycleError> {
        let entry = self.fetch(entry_id)?;
        EntryLifecycle::can_delete(&entry, actor, role, now, self.policy)
    }

    /// Checks whether `actor` may submit the entry.
    pub fn can_submit(&self, entry_id: EntryId, actor: UserId) -> Result<(), LifecycleError> {
        let entry = self.fetch(entry_id)?;
        EntryLifecycle::can_submit(&entry, actor, self.policy)
    }

    /// Checks whether `approver` may approve the entry, returning the
    /// entry for the caller to mutate.
    pub fn can_approve(
        &self,
        entry_id: EntryId,
        approver: UserId,
        role: UserRole,
    ) -> Result<TimeEntry, LifecycleError> {
        if !role.is_elevated() {
            return Err(LifecycleError::InsufficientRole { role });
        }
        let entry = self.fetch(entry_id)?;
        EntryLifecycle::can_approve(&entry, approver, role)?;
        Ok(entry)
    }

    /// Submits the entry, returning the transition to persist.
    pub fn submit(
        &self,
        entry_id: EntryId,
        actor: UserId,
        now: DateTime<Utc>,
    ) -> Result<EntryAction, LifecycleError> {
        let entry = self.fetch(entry_id)?;
        EntryLifecycle::submit(&entry, actor, now, self.policy)
    }

    /// Approves the entry, returning the transition to persist.
    pub fn approve(
        &self,
        entry_id: EntryId,
        approver: UserId,
        role: UserRole,
        now: DateTime<Utc>,
    ) -> Result<EntryAction, LifecycleError> {
        let entry = self.fetch(entry_id)?;
        EntryLifecycle::approve(&entry, approver, role, now)
    }

    /// Rejects the entry with a reason, returning the transition to persist.
    pub fn reject(
        &self,
        entry_id: EntryId,
        approver: UserId,
        role: UserRole,
        rejection_reason: String,
    ) -> Result<EntryAction, LifecycleError> {
        let entry = self.fetch(entry_id)?;
        EntryLifecycle::reject(&entry, approver, role, rejection_reason)
    }

    fn fetch(&self, entry_id: EntryId) -> Result<TimeEntry, LifecycleError> {
        self.store
            .entry_by_id(entry_id)
            .ok_or(LifecycleError::EntryNotFound { entry_id })
    }

    fn run_checks(
        &self,
        candidate: &EntryCandidate,
        exclude: Option<EntryId>,
        now: DateTime<Utc>,
        report: &mut ValidationReport,
    ) {
        self.check_date_range(candidate, now, report);
        self.check_project(candidate, report);

        let same_day =
            self.store
                .entries_for_user_on_date(candidate.user_id, candidate.date, exclude);
        self.check_daily_limit(candidate, &same_day, report);
        self.check_overlap(candidate, &same_day, report);
    }

    fn check_date_range(
        &self,
        candidate: &EntryCandidate,
        now: DateTime<Utc>,
        report: &mut ValidationReport,
    ) {
        let today = now.date_naive();
        let earliest = today - Duration::days(self.policy.backdate_window_days);
        if candidate.date > today || candidate.date < earliest {
            report.errors.push(ValidationError::DateOutOfRange {
                date: candidate.date,
                window_days: self.policy.backdate_window_days,
            });
        }
    }

    fn check_project(&self, candidate: &EntryCandidate, report: &mut ValidationReport) {
        match self.store.project_by_id(candidate.project_id) {
            None => report.errors.push(ValidationError::ProjectNotFound {
                project_id: candidate.project_id,
            }),
            Some(project) if !project.is_active => {
                report.errors.push(ValidationError::ProjectInactive {
                    code: project.code,
                });
            }
            Some(_) => {}
        }
    }

    fn check_daily_limit(
        &self,
        candidate: &EntryCandidate,
        same_day: &[TimeEntry],
        report: &mut ValidationReport,
    ) {
        let existing: Vec<Decimal> = same_day.iter().map(|e| e.hours).collect();
        let total = arith::add(&existing) + candidate.hours;

        if total > self.policy.daily_cap_hours {
            report.errors.push(ValidationError::DailyLimitExceeded {
                total,
                cap: self.policy.daily_cap_hours,
            });
            return;
        }

        let target = self
            .store
            .daily_hour_target(candidate.user_id)
            .unwrap_or(self.policy.default_daily_target_hours);
        if total > target {
            report
                .warnings
                .push(ValidationWarning::DailyTargetExceeded { target, total });
        }
    }

    fn check_overlap(
        &self,
        candidate: &EntryCandidate,
        same_day: &[TimeEntry],
        report: &mut ValidationReport,
    ) {
        let (Some(start), Some(end)) = (candidate.start_time, candidate.end_time) else {
            return;
        };
        let candidate_window = TimeWindow::from_clock(start, end);
        let placeholder = ClockTime::from_minute(self.policy.placeholder_start_minute)
            .unwrap_or(ClockTime::DEFAULT_DAY_START);

        for entry in same_day {
            let window = entry.window(placeholder);
            if candidate_window.overlaps(&window) {
                let project_code = self
                    .store
                    .project_by_id(entry.project_id)
                    .map_or_else(|| entry.project_id.to_string(), |p| p.code);
                report.errors.push(ValidationError::TimeOverlap {
                    project_code,
                    window,
                });
            }
        }
    }
}

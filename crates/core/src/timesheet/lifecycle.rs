//! Entry lifecycle state machine.
//!
//! Stateless checks and transition constructors for the approval
//! workflow. All methods are pure: the caller supplies the entry, the
//! acting user, the clock, and the policy, and receives either a
//! [`LifecycleError`] or an [`EntryAction`] carrying the audit data to
//! persist.
//!
//! Elevated roles (manager and above) bypass the ownership, approved-
//! status, and edit-window restrictions on edit and delete. The 24-hour
//! grace window therefore binds only workers.

use chrono::{DateTime, Duration, Utc};

use tempo_shared::config::ValidationPolicy;
use tempo_shared::types::UserId;

use super::error::LifecycleError;
use super::types::{EntryAction, EntryStatus, TimeEntry, UserRole};

/// Stateless service for entry lifecycle checks and transitions.
pub struct EntryLifecycle;

impl EntryLifecycle {
    /// Checks whether `actor` may edit the entry.
    ///
    /// # Errors
    ///
    /// * [`LifecycleError::OwnershipViolation`] - entry belongs to someone else
    /// * [`LifecycleError::EntryAlreadyApproved`] - approved entries are immutable
    /// * [`LifecycleError::EditWindowExpired`] - the grace window has elapsed
    pub fn can_edit(
        entry: &TimeEntry,
        actor: UserId,
        role: UserRole,
        now: DateTime<Utc>,
        policy: &ValidationPolicy,
    ) -> Result<(), LifecycleError> {
        Self::owner_mutation_check(entry, actor, role, now, policy)
    }

    /// Checks whether `actor` may delete the entry.
    ///
    /// Same rule shape as [`Self::can_edit`], evaluated independently:
    /// a delete is not required to also pass the edit check.
    pub fn can_delete(
        entry: &TimeEntry,
        actor: UserId,
        role: UserRole,
        now: DateTime<Utc>,
        policy: &ValidationPolicy,
    ) -> Result<(), LifecycleError> {
        Self::owner_mutation_check(entry, actor, role, now, policy)
    }

    fn owner_mutation_check(
        entry: &TimeEntry,
        actor: UserId,
        role: UserRole,
        now: DateTime<Utc>,
        policy: &ValidationPolicy,
    ) -> Result<(), LifecycleError> {
        if role.is_elevated() {
            return Ok(());
        }
        if entry.user_id != actor {
            return Err(LifecycleError::OwnershipViolation);
        }
        if entry.status == EntryStatus::Approved {
            return Err(LifecycleError::EntryAlreadyApproved);
        }
        if now - entry.created_at > Duration::hours(policy.edit_window_hours) {
            return Err(LifecycleError::EditWindowExpired {
                window_hours: policy.edit_window_hours,
            });
        }
        Ok(())
    }

    /// Checks whether `actor` may submit the entry for approval.
    ///
    /// # Errors
    ///
    /// * [`LifecycleError::OwnershipViolation`] - only the owner submits
    /// * [`LifecycleError::AlreadySubmitted`] / [`LifecycleError::AlreadyApproved`]
    /// * [`LifecycleError::ResubmitNotAllowed`] - rejected entry, policy forbids
    pub fn can_submit(
        entry: &TimeEntry,
        actor: UserId,
        policy: &ValidationPolicy,
    ) -> Result<(), LifecycleError> {
        if entry.user_id != actor {
            return Err(LifecycleError::OwnershipViolation);
        }
        match entry.status {
            EntryStatus::Submitted => Err(LifecycleError::AlreadySubmitted),
            EntryStatus::Approved => Err(LifecycleError::AlreadyApproved),
            EntryStatus::Rejected if !policy.allow_resubmit_after_rejection => {
                Err(LifecycleError::ResubmitNotAllowed)
            }
            EntryStatus::Draft | EntryStatus::Rejected => Ok(()),
        }
    }

    /// Checks whether `approver` may approve or reject the entry.
    ///
    /// # Errors
    ///
    /// * [`LifecycleError::InsufficientRole`] - approver is not elevated
    /// * [`LifecycleError::NotSubmitted`] - entry is not awaiting approval
    /// * [`LifecycleError::SelfApprovalForbidden`] - approver owns the entry
    pub fn can_approve(
        entry: &TimeEntry,
        approver: UserId,
        role: UserRole,
    ) -> Result<(), LifecycleError> {
        if !role.is_elevated() {
            return Err(LifecycleError::InsufficientRole { role });
        }
        if entry.status != EntryStatus::Submitted {
            return Err(LifecycleError::NotSubmitted {
                status: entry.status,
            });
        }
        if entry.user_id == approver {
            return Err(LifecycleError::SelfApprovalForbidden);
        }
        Ok(())
    }

    /// Submits the entry for approval.
    pub fn submit(
        entry: &TimeEntry,
        actor: UserId,
        now: DateTime<Utc>,
        policy: &ValidationPolicy,
    ) -> Result<EntryAction, LifecycleError> {
        Self::can_submit(entry, actor, policy)?;
        Ok(EntryAction::Submit {
            new_status: EntryStatus::Submitted,
            submitted_at: now,
        })
    }

    /// Approves a submitted entry.
    pub fn approve(
        entry: &TimeEntry,
        approver: UserId,
        role: UserRole,
        now: DateTime<Utc>,
    ) -> Result<EntryAction, LifecycleError> {
        Self::can_approve(entry, approver, role)?;
        Ok(EntryAction::Approve {
            new_status: EntryStatus::Approved,
            approved_by: approver,
            approved_at: now,
        })
    }

    /// Rejects a submitted entry with a reason.
    ///
    /// # Errors
    ///
    /// In addition to the [`Self::can_approve`] checks,
    /// [`LifecycleError::RejectionReasonRequired`] if the reason is empty.
    pub fn reject(
        entry: &TimeEntry,
        approver: UserId,
        role: UserRole,
        rejection_reason: String,
    ) -> Result<EntryAction, LifecycleError> {
        if rejection_reason.trim().is_empty() {
            return Err(LifecycleError::RejectionReasonRequired);
        }
        Self::can_approve(entry, approver, role)?;
        Ok(EntryAction::Reject {
            new_status: EntryStatus::Rejected,
            rejected_by: approver,
            rejection_reason,
        })
    }
}

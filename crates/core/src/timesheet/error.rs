//! Timesheet error types.
//!
//! Validation failures are data, not faults: they are collected into a
//! [`super::types::ValidationReport`] so the caller can surface every
//! violation at once.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use tempo_shared::types::{EntryId, ProjectId};

use super::clock::TimeWindow;
use super::types::{EntryStatus, UserRole};

/// Blocking rule violations collected during entry validation.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum ValidationError {
    /// Entry date is in the future or beyond the backdating window.
    #[error("Date {date} is in the future or more than {window_days} days in the past")]
    DateOutOfRange {
        /// The rejected date.
        date: NaiveDate,
        /// The configured backdating window.
        window_days: i64,
    },

    /// The referenced project does not exist.
    #[error("Project {project_id} not found")]
    ProjectNotFound {
        /// The missing project.
        project_id: ProjectId,
    },

    /// The referenced project is inactive.
    #[error("Project {code} is inactive")]
    ProjectInactive {
        /// The inactive project's code.
        code: String,
    },

    /// Total hours for the day would exceed the hard cap.
    #[error("Daily total {total}h exceeds the {cap}h cap")]
    DailyLimitExceeded {
        /// The would-be total for the day.
        total: Decimal,
        /// The hard cap.
        cap: Decimal,
    },

    /// The candidate window intersects an existing entry's window.
    #[error("Overlaps entry on project {project_code} at {window}")]
    TimeOverlap {
        /// The conflicting entry's project code.
        project_code: String,
        /// The conflicting window.
        window: TimeWindow,
    },

    /// The entry cannot be edited at all; no further checks were run.
    #[error("{0}")]
    NotEditable(#[from] LifecycleError),
}

impl ValidationError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::DateOutOfRange { .. } => "DATE_OUT_OF_RANGE",
            Self::ProjectNotFound { .. } => "PROJECT_NOT_FOUND",
            Self::ProjectInactive { .. } => "PROJECT_INACTIVE",
            Self::DailyLimitExceeded { .. } => "DAILY_LIMIT_EXCEEDED",
            Self::TimeOverlap { .. } => "TIME_OVERLAP",
            Self::NotEditable(inner) => inner.error_code(),
        }
    }
}

/// Non-blocking advisories attached to a successful validation.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum ValidationWarning {
    /// Daily total exceeds the user's standard daily hours.
    #[error("Daily total {total}h exceeds the standard {target}h day")]
    DailyTargetExceeded {
        /// The user's standard daily hours.
        target: Decimal,
        /// The would-be total for the day.
        total: Decimal,
    },
}

/// Errors from single-check lifecycle operations (edit, delete, submit,
/// approve, reject).
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum LifecycleError {
    /// The entry belongs to another user.
    #[error("Entry belongs to another user")]
    OwnershipViolation,

    /// Approved entries are immutable for non-elevated users.
    #[error("Entry has been approved and can no longer be modified")]
    EntryAlreadyApproved,

    /// The edit grace window since creation has elapsed.
    #[error("The {window_hours}h edit window since creation has expired")]
    EditWindowExpired {
        /// The configured window.
        window_hours: i64,
    },

    /// The entry was already submitted.
    #[error("Entry has already been submitted")]
    AlreadySubmitted,

    /// The entry was already approved.
    #[error("Entry has already been approved")]
    AlreadyApproved,

    /// The actor's role may not approve entries.
    #[error("Role {role} may not approve entries")]
    InsufficientRole {
        /// The actor's role.
        role: UserRole,
    },

    /// No entry with the given ID exists.
    #[error("Entry {entry_id} not found")]
    EntryNotFound {
        /// The missing entry.
        entry_id: EntryId,
    },

    /// Only submitted entries can be approved or rejected.
    #[error("Entry is {status}, not submitted")]
    NotSubmitted {
        /// The entry's actual status.
        status: EntryStatus,
    },

    /// An approver may not approve their own entry.
    #[error("Users may not approve their own entries")]
    SelfApprovalForbidden,

    /// A rejection requires a non-empty reason.
    #[error("Rejection reason is required")]
    RejectionReasonRequired,

    /// Policy forbids resubmitting a rejected entry.
    #[error("Rejected entries may not be resubmitted")]
    ResubmitNotAllowed,
}

impl LifecycleError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::AlreadySubmitted
            | Self::AlreadyApproved
            | Self::NotSubmitted { .. }
            | Self::RejectionReasonRequired
            | Self::ResubmitNotAllowed => 400,

            Self::OwnershipViolation
            | Self::EntryAlreadyApproved
            | Self::EditWindowExpired { .. }
            | Self::InsufficientRole { .. }
            | Self::SelfApprovalForbidden => 403,

            Self::EntryNotFound { .. } => 404,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::OwnershipViolation => "OWNERSHIP_VIOLATION",
            Self::EntryAlreadyApproved => "ENTRY_ALREADY_APPROVED",
            Self::EditWindowExpired { .. } => "EDIT_WINDOW_EXPIRED",
            Self::AlreadySubmitted => "ALREADY_SUBMITTED",
            Self::AlreadyApproved => "ALREADY_APPROVED",
            Self::InsufficientRole { .. } => "INSUFFICIENT_ROLE",
            Self::EntryNotFound { .. } => "ENTRY_NOT_FOUND",
            Self::NotSubmitted { .. } => "NOT_SUBMITTED",
            Self::SelfApprovalForbidden => "SELF_APPROVAL_FORBIDDEN",
            Self::RejectionReasonRequired => "REJECTION_REASON_REQUIRED",
            Self::ResubmitNotAllowed => "RESUBMIT_NOT_ALLOWED",
        }
    }
}

//! Timesheet domain types.
//!
//! This module defines the core types for time entries and their
//! approval lifecycle.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use tempo_shared::types::{EntryId, ProjectId, UserId};

use super::clock::{ClockTime, TimeWindow};
use super::error::{ValidationError, ValidationWarning};

/// Time-entry status in the approval workflow.
///
/// Entries progress through these states from creation to approval.
/// The valid transitions are:
/// - Draft → Submitted (submit)
/// - Submitted → Approved (approve)
/// - Submitted → Rejected (reject)
/// - Rejected → Submitted (resubmit, policy-gated)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    /// Entry is being drafted and can be modified by its owner.
    Draft,
    /// Entry has been submitted for approval.
    Submitted,
    /// Entry has been approved (immutable for non-elevated users).
    Approved,
    /// Entry has been rejected and may be fixed and resubmitted.
    Rejected,
}

impl EntryStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Submitted => "submitted",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Parses a status from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "draft" => Some(Self::Draft),
            "submitted" => Some(Self::Submitted),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Returns true if this is the terminal state.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved)
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// User role in the organization hierarchy.
///
/// Roles are ordered from lowest to highest privilege.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Records their own time.
    Worker = 0,
    /// Approves entries and manages projects.
    Manager = 1,
    /// Full tenant administration.
    Admin = 2,
    /// Cross-tenant administration.
    Superadmin = 3,
}

impl UserRole {
    /// Parses a role from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "worker" => Some(Self::Worker),
            "manager" => Some(Self::Manager),
            "admin" => Some(Self::Admin),
            "superadmin" => Some(Self::Superadmin),
            _ => None,
        }
    }

    /// Returns the string representation of the role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Worker => "worker",
            Self::Manager => "manager",
            Self::Admin => "admin",
            Self::Superadmin => "superadmin",
        }
    }

    /// Returns true for roles that may approve entries and bypass the
    /// ownership and edit-window restrictions.
    #[must_use]
    pub fn is_elevated(&self) -> bool {
        *self >= Self::Manager
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A record of work performed: one day, one project, one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeEntry {
    /// Unique identifier.
    pub id: EntryId,
    /// The user who performed the work.
    pub user_id: UserId,
    /// The project the work was performed against.
    pub project_id: ProjectId,
    /// Calendar day of the work.
    pub date: NaiveDate,
    /// Duration in hours (> 0, ≤ 24).
    pub hours: Decimal,
    /// Optional recorded start clock time.
    pub start_time: Option<ClockTime>,
    /// Optional recorded end clock time.
    pub end_time: Option<ClockTime>,
    /// Free-text notes.
    pub notes: Option<String>,
    /// Lifecycle status.
    pub status: EntryStatus,
    /// When the entry was created.
    pub created_at: DateTime<Utc>,
    /// When the entry was submitted, if it has been.
    pub submitted_at: Option<DateTime<Utc>>,
    /// When the entry was approved, if it has been.
    pub approved_at: Option<DateTime<Utc>>,
    /// Who approved the entry, if anyone.
    pub approved_by: Option<UserId>,
    /// Why the entry was rejected, if it was.
    pub rejection_reason: Option<String>,
}

impl TimeEntry {
    /// The minute window this entry occupies on its day.
    ///
    /// Entries without recorded clock times are assumed to occupy a
    /// placeholder window starting at `placeholder_start` for the
    /// entry's duration.
    #[must_use]
    pub fn window(&self, placeholder_start: ClockTime) -> TimeWindow {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => TimeWindow::from_clock(start, end),
            _ => TimeWindow::placeholder(placeholder_start, self.hours),
        }
    }
}

/// A candidate entry being validated for create or update.
///
/// The caller is responsible for schema-level bounds (0.1 ≤ hours ≤ 24)
/// before validation; these fields carry the business-rule inputs. When
/// both clock times are present, `hours` is derived from them via
/// [`ClockTime::span_hours`], never supplied independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryCandidate {
    /// The owning user.
    pub user_id: UserId,
    /// The target project.
    pub project_id: ProjectId,
    /// Calendar day of the work.
    pub date: NaiveDate,
    /// Duration in hours.
    pub hours: Decimal,
    /// Optional start clock time.
    pub start_time: Option<ClockTime>,
    /// Optional end clock time.
    pub end_time: Option<ClockTime>,
}

/// Outcome of validating a candidate entry.
///
/// All failed checks are collected; warnings are informational and never
/// affect validity.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    /// Blocking rule violations.
    pub errors: Vec<ValidationError>,
    /// Non-blocking advisories.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    /// True iff no errors were collected.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// A report carrying a single blocking error.
    #[must_use]
    pub fn from_error(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
            warnings: Vec::new(),
        }
    }
}

/// Lifecycle action representing a state transition with audit data.
#[derive(Debug, Clone)]
pub enum EntryAction {
    /// Submit a draft (or resubmittable rejected) entry for approval.
    Submit {
        /// The new status after submission.
        new_status: EntryStatus,
        /// When the entry was submitted.
        submitted_at: DateTime<Utc>,
    },
    /// Approve a submitted entry.
    Approve {
        /// The new status after approval.
        new_status: EntryStatus,
        /// The user who approved the entry.
        approved_by: UserId,
        /// When the entry was approved.
        approved_at: DateTime<Utc>,
    },
    /// Reject a submitted entry.
    Reject {
        /// The new status after rejection.
        new_status: EntryStatus,
        /// The user who rejected the entry.
        rejected_by: UserId,
        /// The reason for rejection.
        rejection_reason: String,
    },
}

impl EntryAction {
    /// Returns the new status resulting from this action.
    #[must_use]
    pub fn new_status(&self) -> EntryStatus {
        match self {
            Self::Submit { new_status, .. }
            | Self::Approve { new_status, .. }
            | Self::Reject { new_status, .. } => *new_status,
        }
    }
}

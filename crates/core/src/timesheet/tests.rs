//! End-to-end workflow scenarios over an in-memory store.

use chrono::{DateTime, Utc};
use rust_decimal_macros::dec;

use tempo_shared::config::ValidationPolicy;
use tempo_shared::types::{EntryId, ProjectId, UserId};

use super::clock::ClockTime;
use super::error::LifecycleError;
use super::provider::MemoryStore;
use super::types::{EntryAction, EntryCandidate, EntryStatus, TimeEntry, UserRole};
use super::validator::TimeEntryValidator;

fn ct(s: &str) -> ClockTime {
    s.parse().unwrap()
}

fn build_entry(candidate: &EntryCandidate, now: DateTime<Utc>) -> TimeEntry {
    TimeEntry {
        id: EntryId::new(),
        user_id: candidate.user_id,
        project_id: candidate.project_id,
        date: candidate.date,
        hours: candidate.hours,
        start_time: candidate.start_time,
        end_time: candidate.end_time,
        notes: None,
        status: EntryStatus::Draft,
        created_at: now,
        submitted_at: None,
        approved_at: None,
        approved_by: None,
        rejection_reason: None,
    }
}

fn apply(entry: &mut TimeEntry, action: &EntryAction) {
    entry.status = action.new_status();
    match action {
        EntryAction::Submit { submitted_at, .. } => entry.submitted_at = Some(*submitted_at),
        EntryAction::Approve {
            approved_by,
            approved_at,
            ..
        } => {
            entry.approved_by = Some(*approved_by);
            entry.approved_at = Some(*approved_at);
        }
        EntryAction::Reject {
            rejection_reason, ..
        } => entry.rejection_reason = Some(rejection_reason.clone()),
    }
}

/// The full worker-to-manager flow: record, overlap rejection, submit,
/// approve, with self-approval blocked along the way.
#[test]
fn test_full_day_workflow() {
    let worker = UserId::new();
    let manager = UserId::new();
    let project_p = ProjectId::new();
    let project_q = ProjectId::new();
    let now = Utc::now();
    let today = now.date_naive();

    let mut store = MemoryStore::new();
    store.add_project(project_p, "P-001", true);
    store.add_project(project_q, "Q-001", true);
    let policy = ValidationPolicy::default();

    // Worker records a full 09:00-17:00 day on P.
    let hours = ClockTime::span_hours(ct("09:00"), ct("17:00"));
    assert_eq!(hours, dec!(8));

    let first = EntryCandidate {
        user_id: worker,
        project_id: project_p,
        date: today,
        hours,
        start_time: Some(ct("09:00")),
        end_time: Some(ct("17:00")),
    };
    {
        let validator = TimeEntryValidator::new(&store, &policy);
        let report = validator.validate_create(&first, now);
        assert!(report.is_valid());
        assert!(report.warnings.is_empty(), "8h does not exceed the target");
    }
    let mut entry = build_entry(&first, now);
    let entry_id = entry.id;
    store.add_entry(entry.clone());

    // A second entry 16:00-18:00 on Q collides with the first.
    let second = EntryCandidate {
        user_id: worker,
        project_id: project_q,
        date: today,
        hours: ClockTime::span_hours(ct("16:00"), ct("18:00")),
        start_time: Some(ct("16:00")),
        end_time: Some(ct("18:00")),
    };
    {
        let validator = TimeEntryValidator::new(&store, &policy);
        let report = validator.validate_create(&second, now);
        assert!(!report.is_valid());
        assert_eq!(report.errors[0].error_code(), "TIME_OVERLAP");
        assert!(report.errors[0].to_string().contains("P-001"));
    }

    // Worker submits the first entry.
    {
        let validator = TimeEntryValidator::new(&store, &policy);
        let action = validator.submit(entry_id, worker, now).unwrap();
        assert_eq!(action.new_status(), EntryStatus::Submitted);
        apply(&mut entry, &action);
    }
    store.replace_entry(entry.clone());

    // The worker cannot approve their own entry, even if promoted.
    {
        let validator = TimeEntryValidator::new(&store, &policy);
        assert!(matches!(
            validator.can_approve(entry_id, worker, UserRole::Manager),
            Err(LifecycleError::SelfApprovalForbidden)
        ));
    }

    // The manager approves it.
    {
        let validator = TimeEntryValidator::new(&store, &policy);
        let approved = validator.can_approve(entry_id, manager, UserRole::Manager);
        assert!(approved.is_ok());
        let action = validator
            .approve(entry_id, manager, UserRole::Manager, now)
            .unwrap();
        apply(&mut entry, &action);
    }
    store.replace_entry(entry.clone());

    assert_eq!(entry.status, EntryStatus::Approved);
    assert_eq!(entry.approved_by, Some(manager));

    // Approved entries are locked for the worker, even inside the window.
    {
        let validator = TimeEntryValidator::new(&store, &policy);
        assert!(matches!(
            validator.can_edit(entry_id, worker, UserRole::Worker, now),
            Err(LifecycleError::EntryAlreadyApproved)
        ));
        assert!(matches!(
            validator.can_delete(entry_id, worker, UserRole::Worker, now),
            Err(LifecycleError::EntryAlreadyApproved)
        ));
    }
}

/// Rejection carries its reason and, under the default policy, the entry
/// can be fixed and resubmitted.
#[test]
fn test_reject_and_resubmit() {
    let worker = UserId::new();
    let manager = UserId::new();
    let project = ProjectId::new();
    let now = Utc::now();

    let mut store = MemoryStore::new();
    store.add_project(project, "P-001", true);
    let policy = ValidationPolicy::default();

    let candidate = EntryCandidate {
        user_id: worker,
        project_id: project,
        date: now.date_naive(),
        hours: dec!(8),
        start_time: None,
        end_time: None,
    };
    let mut entry = build_entry(&candidate, now);
    let entry_id = entry.id;
    store.add_entry(entry.clone());

    {
        let validator = TimeEntryValidator::new(&store, &policy);
        let action = validator.submit(entry_id, worker, now).unwrap();
        apply(&mut entry, &action);
    }
    store.replace_entry(entry.clone());

    {
        let validator = TimeEntryValidator::new(&store, &policy);
        let action = validator
            .reject(
                entry_id,
                manager,
                UserRole::Manager,
                "Hours belong to Q".to_string(),
            )
            .unwrap();
        apply(&mut entry, &action);
    }
    store.replace_entry(entry.clone());

    assert_eq!(entry.status, EntryStatus::Rejected);
    assert_eq!(entry.rejection_reason.as_deref(), Some("Hours belong to Q"));

    // Resubmission is allowed by default.
    {
        let validator = TimeEntryValidator::new(&store, &policy);
        assert!(validator.can_submit(entry_id, worker).is_ok());
    }

    // But not when the policy forbids it.
    let strict = ValidationPolicy {
        allow_resubmit_after_rejection: false,
        ..ValidationPolicy::default()
    };
    {
        let validator = TimeEntryValidator::new(&store, &strict);
        assert!(matches!(
            validator.can_submit(entry_id, worker),
            Err(LifecycleError::ResubmitNotAllowed)
        ));
    }
}

/// Approving twice fails: the second attempt sees a non-submitted entry.
#[test]
fn test_double_approval_fails() {
    let worker = UserId::new();
    let manager = UserId::new();
    let project = ProjectId::new();
    let now = Utc::now();

    let mut store = MemoryStore::new();
    store.add_project(project, "P-001", true);
    let policy = ValidationPolicy::default();

    let candidate = EntryCandidate {
        user_id: worker,
        project_id: project,
        date: now.date_naive(),
        hours: dec!(8),
        start_time: None,
        end_time: None,
    };
    let mut entry = build_entry(&candidate, now);
    entry.status = EntryStatus::Submitted;
    let entry_id = entry.id;
    store.add_entry(entry.clone());

    {
        let validator = TimeEntryValidator::new(&store, &policy);
        let action = validator
            .approve(entry_id, manager, UserRole::Manager, now)
            .unwrap();
        apply(&mut entry, &action);
    }
    store.replace_entry(entry);

    let validator = TimeEntryValidator::new(&store, &policy);
    assert!(matches!(
        validator.approve(entry_id, manager, UserRole::Manager, now),
        Err(LifecycleError::NotSubmitted {
            status: EntryStatus::Approved
        })
    ));
}

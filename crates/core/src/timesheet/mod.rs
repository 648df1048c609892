//! Time-entry validation and approval workflow.
//!
//! This module gates every mutation of a time entry through one set of
//! business rules: date and project checks, the 24-hour daily cap,
//! clock-time overlap detection, and the draft/submitted/approved/
//! rejected state machine.
//!
//! # Modules
//!
//! - `types` - Domain types (TimeEntry, EntryStatus, UserRole)
//! - `clock` - Clock times, minute windows, and overlap math
//! - `error` - Validation and lifecycle error types
//! - `provider` - Read-only data-access trait and in-memory store
//! - `validator` - Create/update validation rules
//! - `lifecycle` - State-machine checks and transitions

pub mod clock;
pub mod error;
pub mod lifecycle;
pub mod provider;
pub mod types;
pub mod validator;

#[cfg(test)]
mod tests;
#[cfg(test)]
mod window_props;

pub use clock::{ClockTime, TimeWindow};
pub use error::{LifecycleError, ValidationError, ValidationWarning};
pub use lifecycle::EntryLifecycle;
pub use provider::{MemoryStore, ProjectRef, TimesheetStore};
pub use types::{EntryAction, EntryCandidate, EntryStatus, TimeEntry, UserRole, ValidationReport};
pub use validator::TimeEntryValidator;

//! Labor cost and overhead (GG) reporting.
//!
//! Turns approved hours into money: direct labor cost per work line,
//! GG (gastos generales) overhead on top, and margin against billed
//! revenue. All arithmetic goes through [`crate::arith`].
//!
//! # Modules
//!
//! - `types` - Work lines and cost report types
//! - `report` - Cost aggregation

pub mod report;
pub mod types;


pub use report::{cost_report, labor_cost, margin_on_billing, overhead};
pub use types::{CostReport, WorkLine};

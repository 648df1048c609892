//! Cost report data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tempo_shared::types::{ProjectId, UserId};

/// One worker's hours against one project at a billing rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkLine {
    /// The worker.
    pub user_id: UserId,
    /// The project worked.
    pub project_id: ProjectId,
    /// Approved hours.
    pub hours: Decimal,
    /// Cost per hour for this worker.
    pub hourly_rate: Decimal,
}

/// Aggregated cost for a set of work lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostReport {
    /// Sum of per-line labor costs.
    pub direct_cost: Decimal,
    /// GG overhead applied on the direct cost.
    pub overhead: Decimal,
    /// direct + overhead.
    pub total_cost: Decimal,
}

impl CostReport {
    /// All-zero report, the result for an empty line set.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            direct_cost: Decimal::ZERO,
            overhead: Decimal::ZERO,
            total_cost: Decimal::ZERO,
        }
    }
}

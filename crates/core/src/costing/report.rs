//! Cost aggregation over work lines.

use rust_decimal::Decimal;

use crate::arith;
use crate::arith::Margin;

use super::types::{CostReport, WorkLine};

/// Direct labor cost of a line: hours × rate, rounded to 2 digits.
#[must_use]
pub fn labor_cost(hours: Decimal, hourly_rate: Decimal) -> Decimal {
    arith::round(arith::multiply(hours, hourly_rate), 2)
}

/// GG overhead on a direct cost, rounded to 2 digits.
///
/// `gg_percent` is a percentage: 15 means 15% on top of the direct cost.
#[must_use]
pub fn overhead(direct_cost: Decimal, gg_percent: Decimal) -> Decimal {
    arith::round(
        arith::multiply(direct_cost, gg_percent) / Decimal::ONE_HUNDRED,
        2,
    )
}

/// Aggregates work lines into a cost report with GG overhead on top.
///
/// Each line's labor cost is rounded before summation, so the report's
/// direct cost equals the sum of what each line displays. Empty input
/// yields a zero report.
#[must_use]
pub fn cost_report(lines: &[WorkLine], gg_percent: Decimal) -> CostReport {
    if lines.is_empty() {
        return CostReport::zero();
    }
    let costs: Vec<Decimal> = lines
        .iter()
        .map(|l| labor_cost(l.hours, l.hourly_rate))
        .collect();
    let direct_cost = arith::add(&costs);
    let overhead = overhead(direct_cost, gg_percent);
    CostReport {
        direct_cost,
        overhead,
        total_cost: arith::round(direct_cost + overhead, 2),
    }
}

/// Profit and margin of billed revenue against total cost.
#[must_use]
pub fn margin_on_billing(billed: Decimal, total_cost: Decimal) -> Margin {
    arith::margin(billed, total_cost)
}

//! Tax, line/document totals, balance, and margin calculations.
//!
//! Every line and document boundary rounds to 2 fractional digits so
//! that totals printed on a report always equal the sum of their parts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ops::{round, MONEY_SCALE};

/// One line of a priced document: quantity, unit price, and tax rate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LineInput {
    /// Quantity (hours, units).
    pub quantity: Decimal,
    /// Price per unit.
    pub unit_price: Decimal,
    /// Tax rate as a percentage (21 means 21%).
    pub tax_rate_percent: Decimal,
}

/// Computed totals for a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineTotals {
    /// quantity × unit price, rounded.
    pub subtotal: Decimal,
    /// Tax on the subtotal, rounded.
    pub tax_amount: Decimal,
    /// subtotal + tax, rounded.
    pub total: Decimal,
}

/// Computed totals for a whole document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentTotals {
    /// Sum of line subtotals.
    pub subtotal: Decimal,
    /// Sum of line tax amounts.
    pub tax_amount: Decimal,
    /// Sum of line totals.
    pub total: Decimal,
}

impl DocumentTotals {
    /// All-zero totals, the result for an empty document.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            subtotal: Decimal::ZERO,
            tax_amount: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }
}

/// Profit and margin percentage for a sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margin {
    /// sell − cost, rounded.
    pub profit: Decimal,
    /// profit / sell × 100, rounded. Zero when the sell price is zero.
    pub margin_percent: Decimal,
}

/// Tax amount for `amount` at `rate_percent`, rounded to 2 digits.
#[must_use]
pub fn tax(amount: Decimal, rate_percent: Decimal) -> Decimal {
    round(amount * rate_percent / Decimal::ONE_HUNDRED, MONEY_SCALE)
}

/// Computes subtotal, tax, and total for one line.
#[must_use]
pub fn line_total(quantity: Decimal, unit_price: Decimal, tax_rate_percent: Decimal) -> LineTotals {
    let subtotal = round(quantity * unit_price, MONEY_SCALE);
    let tax_amount = tax(subtotal, tax_rate_percent);
    let total = round(subtotal + tax_amount, MONEY_SCALE);
    LineTotals {
        subtotal,
        tax_amount,
        total,
    }
}

/// Sums line totals into document-level totals.
///
/// Each line is computed via [`line_total`], so the document totals are
/// exactly the sum of what each line displays. Empty input yields zeros.
#[must_use]
pub fn document_totals(lines: &[LineInput]) -> DocumentTotals {
    let mut acc = DocumentTotals::zero();
    for line in lines {
        let lt = line_total(line.quantity, line.unit_price, line.tax_rate_percent);
        acc.subtotal += lt.subtotal;
        acc.tax_amount += lt.tax_amount;
        acc.total += lt.total;
    }
    DocumentTotals {
        subtotal: round(acc.subtotal, MONEY_SCALE),
        tax_amount: round(acc.tax_amount, MONEY_SCALE),
        total: round(acc.total, MONEY_SCALE),
    }
}

/// Remaining balance after a payment, rounded to 2 digits.
#[must_use]
pub fn balance(total: Decimal, paid_amount: Decimal) -> Decimal {
    round(total - paid_amount, MONEY_SCALE)
}

/// Profit and margin percentage for a sell/cost pair.
///
/// A zero sell price yields a zero margin percentage rather than a
/// division fault.
#[must_use]
pub fn margin(sell_price: Decimal, cost_price: Decimal) -> Margin {
    let profit = round(sell_price - cost_price, MONEY_SCALE);
    let margin_percent = if sell_price.is_zero() {
        Decimal::ZERO
    } else {
        round(profit / sell_price * Decimal::ONE_HUNDRED, MONEY_SCALE)
    };
    Margin {
        profit,
        margin_percent,
    }
}

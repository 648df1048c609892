//! Property-based tests for the arithmetic operations.
//!
//! - Exactness: decimal sums never exhibit binary floating-point error
//! - Rounding: every public result respects its declared scale
//! - Consistency: document totals equal the sum of their line totals

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::ops::{add, compare, divide, round, subtract};
use super::totals::{document_totals, line_total, margin, LineInput};

/// Strategy to generate amounts with 2 fractional digits (-10,000.00 to 10,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate positive amounts (0.01 to 10,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate tax rates (0.00% to 30.00%).
fn tax_rate() -> impl Strategy<Value = Decimal> {
    (0i64..3000i64).prop_map(|bps| Decimal::new(bps, 2))
}

/// Strategy to generate document lines.
fn lines() -> impl Strategy<Value = Vec<LineInput>> {
    prop::collection::vec(
        (positive_amount(), positive_amount(), tax_rate()).prop_map(
            |(quantity, unit_price, tax_rate_percent)| LineInput {
                quantity,
                unit_price,
                tax_rate_percent,
            },
        ),
        0..10,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* pair of decimals, addition is exact: a + b - b == a.
    #[test]
    fn prop_add_subtract_round_trip(a in amount(), b in amount()) {
        let sum = add(&[a, b]);
        prop_assert_eq!(subtract(sum, &[b]), a);
    }

    /// *For any* slice of decimals, addition is order-independent.
    #[test]
    fn prop_add_commutes(a in amount(), b in amount(), c in amount()) {
        prop_assert_eq!(add(&[a, b, c]), add(&[c, b, a]));
    }

    /// *For any* value and scale, rounding twice equals rounding once.
    #[test]
    fn prop_round_idempotent(v in amount(), scale in 0u32..=4) {
        let once = round(v, scale);
        prop_assert_eq!(round(once, scale), once);
    }

    /// *For any* nonzero divisor, divide() succeeds and respects its scale.
    #[test]
    fn prop_divide_respects_scale(a in amount(), b in positive_amount(), scale in 0u32..=4) {
        let q = divide(a, b, scale).unwrap();
        prop_assert_eq!(round(q, scale), q, "quotient {} exceeds scale {}", q, scale);
    }

    /// *For any* line, total == subtotal + tax exactly.
    #[test]
    fn prop_line_total_is_consistent(
        quantity in positive_amount(),
        unit_price in positive_amount(),
        rate in tax_rate(),
    ) {
        let lt = line_total(quantity, unit_price, rate);
        prop_assert_eq!(lt.total, lt.subtotal + lt.tax_amount);
    }

    /// *For any* document, totals equal the sum of the line totals.
    #[test]
    fn prop_document_totals_sum_lines(lines in lines()) {
        let doc = document_totals(&lines);
        let mut subtotal = Decimal::ZERO;
        let mut tax_amount = Decimal::ZERO;
        let mut total = Decimal::ZERO;
        for line in &lines {
            let lt = line_total(line.quantity, line.unit_price, line.tax_rate_percent);
            subtotal += lt.subtotal;
            tax_amount += lt.tax_amount;
            total += lt.total;
        }
        prop_assert_eq!(doc.subtotal, subtotal);
        prop_assert_eq!(doc.tax_amount, tax_amount);
        prop_assert_eq!(doc.total, total);
    }

    /// *For any* positive sell price, margin_percent has the sign of profit.
    #[test]
    fn prop_margin_sign(sell in positive_amount(), cost in positive_amount()) {
        let m = margin(sell, cost);
        prop_assert_eq!(m.profit.is_sign_negative(), sell < cost);
        if sell > cost {
            prop_assert!(m.margin_percent >= Decimal::ZERO);
        }
    }

    /// *For any* pair, compare() agrees with subtraction.
    #[test]
    fn prop_compare_matches_subtraction(a in amount(), b in amount()) {
        let diff = subtract(a, &[b]);
        prop_assert_eq!(compare(a, b), diff.cmp(&Decimal::ZERO));
    }
}

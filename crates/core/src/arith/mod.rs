//! Exact-decimal arithmetic for hours and money.
//!
//! CRITICAL: Never use floating-point for money or billable-hour
//! calculations. Every value entering this module is a
//! `rust_decimal::Decimal` constructed from a string or integer literal,
//! and every line/document boundary has an explicit rounding point so
//! results are bit-for-bit reproducible across platforms.
//!
//! # Modules
//!
//! - `ops` - Primitive operations (parse, add, subtract, multiply, divide, round)
//! - `totals` - Tax, line/document totals, balance, and margin calculations
//! - `error` - Arithmetic fault types

pub mod error;
pub mod ops;
pub mod totals;

#[cfg(test)]
mod props;

pub use error::ArithError;
pub use ops::{add, compare, divide, is_negative, is_positive, is_zero, multiply, parse_decimal, round, subtract};
pub use totals::{balance, document_totals, line_total, margin, tax, DocumentTotals, LineInput, LineTotals, Margin};

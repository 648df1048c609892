//! Core business logic for Tempo.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `arith` - Exact-decimal arithmetic for hours and money
//! - `timesheet` - Time-entry validation and approval workflow
//! - `costing` - Labor cost and overhead (GG) reporting

pub mod arith;
pub mod costing;
pub mod timesheet;

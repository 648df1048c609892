//! Shared types, errors, and configuration for Tempo.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Application-wide error types
//! - Configuration management, including the validation policy

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, ValidationPolicy};
pub use error::{AppError, AppResult};

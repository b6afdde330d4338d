//! # API Shared
//!
//! Shared utilities and definitions for Shelf front ends.
//!
//! Contains:
//! - Response types (`wire` module)
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and the `shelf-run` binary for common functionality.

pub mod health;
pub mod wire;

pub use health::HealthService;
pub use wire::*;

//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! hill-stay booking test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for policies, dates, guests and sessions
//! - `builders`: Builder patterns for stay requests, forms and listings
//! - `mocks`: In-memory doubles for the booking backend and catalog ports
//! - `assertions`: Custom assertion helpers for quotes and outcomes
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod mocks;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use mocks::*;
pub use assertions::*;
pub use generators::*;

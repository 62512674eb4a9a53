//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! mapping engine test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built scenarios for the situations the synthesizer handles
//! - `builders`: Builder patterns for catalogs and declared rules
//! - `assertions`: Custom assertion helpers for mapper configurations
//! - `generators`: Property-based type graph generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;

//! Mapping errors
//!
//! This module defines the error types raised while building a mapper
//! configuration, validating it, and mapping values with it.

use std::fmt;

use core_kernel::{CoreError, TypePair};
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur in the mapping library
#[derive(Debug, Error)]
pub enum MappingError {
    /// A type referenced by a rule is not in the catalog
    #[error("Type model error: {0}")]
    Core(#[from] CoreError),

    /// Two rules were declared for the same type pair
    #[error("Duplicate type map configuration for {0}")]
    DuplicateTypeMap(TypePair),

    /// A member directive names a property the destination type does not have
    #[error("{pair}: destination type has no member named '{member}'")]
    UnknownDestinationMember { pair: TypePair, member: String },

    /// A `map_from` directive names a property the source type does not have
    #[error("{pair}: source type has no member named '{member}'")]
    UnknownSourceMember { pair: TypePair, member: String },

    /// Configuration validation found unmapped or unconvertible members
    #[error("Mapper configuration is invalid:\n{0}")]
    InvalidConfiguration(ValidationReport),

    /// A value was mapped between types with no rule connecting them
    #[error("Missing type map configuration for {0}")]
    MissingTypeMap(TypePair),

    /// A member relies on a resolver service the dependency resolver does not provide
    #[error("No value resolver registered under '{0}'")]
    UnresolvedService(String),

    /// A value did not have the JSON shape its type requires
    #[error("Expected {expected} while mapping {ty}, found {found}")]
    ValueMismatch {
        ty: String,
        expected: &'static str,
        found: String,
    },

    /// A custom value resolver failed
    #[error("Value resolver for member '{member}' failed: {message}")]
    Resolver { member: String, message: String },
}

impl MappingError {
    /// Creates a value mismatch error
    pub fn mismatch(ty: impl fmt::Display, expected: &'static str, found: &serde_json::Value) -> Self {
        MappingError::ValueMismatch {
            ty: ty.to_string(),
            expected,
            found: json_kind(found).to_string(),
        }
    }

    /// Creates a resolver failure
    pub fn resolver(member: impl Into<String>, message: impl Into<String>) -> Self {
        MappingError::Resolver {
            member: member.into(),
            message: message.into(),
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Why a destination member failed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FailureReason {
    /// No source member and no directive
    Unmapped,
    /// The member's source and destination types cannot be converted
    MissingTypeMap(TypePair),
}

/// A single validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFailure {
    pub type_map: TypePair,
    pub member: String,
    pub reason: FailureReason,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            FailureReason::Unmapped => {
                write!(f, "{}: unmapped member '{}'", self.type_map, self.member)
            }
            FailureReason::MissingTypeMap(pair) => write!(
                f,
                "{}: member '{}' needs a type map for {}",
                self.type_map, self.member, pair
            ),
        }
    }
}

/// All failures found by one validation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport(pub Vec<ValidationFailure>);

impl ValidationReport {
    pub fn failures(&self) -> &[ValidationFailure] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the failures recorded against one type map
    pub fn for_type_map<'a>(&'a self, pair: &'a TypePair) -> impl Iterator<Item = &'a ValidationFailure> {
        self.0.iter().filter(move |failure| &failure.type_map == pair)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for failure in &self.0 {
            writeln!(f, "  - {}", failure)?;
        }
        Ok(())
    }
}

//! Identities used as keys throughout the mapping engine
//!
//! Newtype wrappers keep type names and type pairs from being confused with
//! ordinary strings and tuples.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::TypeRef;

/// The name of a declared type or generic definition
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeName(String);

impl TypeName {
    /// Creates a type name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TypeName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for TypeName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for TypeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// An ordered (source, destination) pair of types
///
/// This is the unit of identity for mapping rules: a configuration holds at
/// most one rule per pair, and equality is exact type identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TypePair {
    pub source: TypeRef,
    pub destination: TypeRef,
}

impl TypePair {
    /// Creates a new type pair
    pub fn new(source: TypeRef, destination: TypeRef) -> Self {
        Self { source, destination }
    }

    /// Returns the pair with source and destination swapped
    pub fn reversed(&self) -> Self {
        Self {
            source: self.destination.clone(),
            destination: self.source.clone(),
        }
    }

    /// Returns true when source and destination are the same type
    pub fn is_identity(&self) -> bool {
        self.source == self.destination
    }
}

impl fmt::Display for TypePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination)
    }
}

impl From<(TypeRef, TypeRef)> for TypePair {
    fn from((source, destination): (TypeRef, TypeRef)) -> Self {
        Self::new(source, destination)
    }
}

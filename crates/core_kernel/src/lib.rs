//! Core Kernel - Foundational type model for the mapping engine
//!
//! This crate provides the building blocks shared by the mapping library and
//! the configuration synthesizer:
//! - Type names and (source, destination) type pairs
//! - Structural type references (primitives, nullables, arrays, generics)
//! - Type descriptors and the catalog that answers introspection queries

pub mod catalog;
pub mod descriptor;
pub mod error;
pub mod identifiers;
pub mod types;

pub use catalog::{TypeCatalog, TypeCatalogBuilder, LIST};
pub use descriptor::{GenericDefinition, PropertyDescriptor, TypeDescriptor, TypeKind};
pub use error::CoreError;
pub use identifiers::{TypeName, TypePair};
pub use types::{Primitive, TypeRef};

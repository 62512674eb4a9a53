//! Structural type expressions
//!
//! A [`TypeRef`] names a type the way a property signature does: a primitive,
//! a string, a declared type, or a composition of those through nullable,
//! array, and generic wrappers. Two `TypeRef`s are the same type exactly when
//! they compare equal.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::identifiers::TypeName;

/// Built-in value types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Primitive {
    Bool,
    Int32,
    Int64,
    Decimal,
    Double,
    DateTime,
    Guid,
}

impl Primitive {
    /// Returns true for the numeric primitives
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Primitive::Int32 | Primitive::Int64 | Primitive::Decimal | Primitive::Double
        )
    }

    /// Returns the display name of the primitive
    pub fn name(&self) -> &'static str {
        match self {
            Primitive::Bool => "Boolean",
            Primitive::Int32 => "Int32",
            Primitive::Int64 => "Int64",
            Primitive::Decimal => "Decimal",
            Primitive::Double => "Double",
            Primitive::DateTime => "DateTime",
            Primitive::Guid => "Guid",
        }
    }
}

/// A reference to a type as it appears in a property signature
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TypeRef {
    /// A built-in value type
    Primitive(Primitive),
    /// The string type
    String,
    /// A type declared in the catalog
    Named(TypeName),
    /// An optional wrapper around a value type
    Nullable(Box<TypeRef>),
    /// A single-dimension array
    Array(Box<TypeRef>),
    /// A constructed generic type such as `List<Address>`
    Generic {
        definition: TypeName,
        args: Vec<TypeRef>,
    },
    /// A type parameter of the enclosing generic definition
    Param(usize),
}

impl TypeRef {
    pub fn bool() -> Self {
        TypeRef::Primitive(Primitive::Bool)
    }

    pub fn int32() -> Self {
        TypeRef::Primitive(Primitive::Int32)
    }

    pub fn int64() -> Self {
        TypeRef::Primitive(Primitive::Int64)
    }

    pub fn decimal() -> Self {
        TypeRef::Primitive(Primitive::Decimal)
    }

    pub fn double() -> Self {
        TypeRef::Primitive(Primitive::Double)
    }

    pub fn date_time() -> Self {
        TypeRef::Primitive(Primitive::DateTime)
    }

    pub fn guid() -> Self {
        TypeRef::Primitive(Primitive::Guid)
    }

    pub fn string() -> Self {
        TypeRef::String
    }

    /// References a declared type by name
    pub fn named(name: impl Into<TypeName>) -> Self {
        TypeRef::Named(name.into())
    }

    /// Wraps a value type in an optional
    pub fn nullable(inner: TypeRef) -> Self {
        TypeRef::Nullable(Box::new(inner))
    }

    /// Builds an array of the given element type
    pub fn array(element: TypeRef) -> Self {
        TypeRef::Array(Box::new(element))
    }

    /// Constructs a generic type from its definition and arguments
    pub fn generic(definition: impl Into<TypeName>, args: Vec<TypeRef>) -> Self {
        TypeRef::Generic {
            definition: definition.into(),
            args,
        }
    }

    /// Shorthand for `List<element>`
    pub fn list(element: TypeRef) -> Self {
        TypeRef::generic(crate::catalog::LIST, vec![element])
    }

    /// Returns the declared name for `Named` references
    pub fn as_named(&self) -> Option<&TypeName> {
        match self {
            TypeRef::Named(name) => Some(name),
            _ => None,
        }
    }

    /// Replaces type parameters with the given arguments
    ///
    /// Parameters without a matching argument are left in place so that the
    /// catalog can report them instead of silently dropping them.
    pub fn substitute(&self, args: &[TypeRef]) -> TypeRef {
        match self {
            TypeRef::Param(index) => args.get(*index).cloned().unwrap_or(TypeRef::Param(*index)),
            TypeRef::Nullable(inner) => TypeRef::nullable(inner.substitute(args)),
            TypeRef::Array(element) => TypeRef::array(element.substitute(args)),
            TypeRef::Generic { definition, args: inner } => TypeRef::Generic {
                definition: definition.clone(),
                args: inner.iter().map(|arg| arg.substitute(args)).collect(),
            },
            other => other.clone(),
        }
    }

    /// Returns true if the reference mentions a type parameter anywhere
    pub fn has_params(&self) -> bool {
        match self {
            TypeRef::Param(_) => true,
            TypeRef::Nullable(inner) | TypeRef::Array(inner) => inner.has_params(),
            TypeRef::Generic { args, .. } => args.iter().any(TypeRef::has_params),
            _ => false,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Primitive(primitive) => write!(f, "{}", primitive.name()),
            TypeRef::String => write!(f, "String"),
            TypeRef::Named(name) => write!(f, "{}", name),
            TypeRef::Nullable(inner) => write!(f, "{}?", inner),
            TypeRef::Array(element) => write!(f, "{}[]", element),
            TypeRef::Generic { definition, args } => {
                write!(f, "{}<", definition)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ">")
            }
            TypeRef::Param(index) => write!(f, "T{}", index),
        }
    }
}

impl From<Primitive> for TypeRef {
    fn from(primitive: Primitive) -> Self {
        TypeRef::Primitive(primitive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_composite_types() {
        let ty = TypeRef::list(TypeRef::nullable(TypeRef::decimal()));
        assert_eq!(ty.to_string(), "List<Decimal?>");

        let ty = TypeRef::array(TypeRef::named("AddressDto"));
        assert_eq!(ty.to_string(), "AddressDto[]");
    }

    #[test]
    fn test_substitute_replaces_params() {
        let open = TypeRef::generic("Box", vec![TypeRef::array(TypeRef::Param(0))]);
        let closed = open.substitute(&[TypeRef::named("Fund")]);

        assert_eq!(
            closed,
            TypeRef::generic("Box", vec![TypeRef::array(TypeRef::named("Fund"))])
        );
        assert!(open.has_params());
        assert!(!closed.has_params());
    }

    #[test]
    fn test_substitute_keeps_unbound_params() {
        let open = TypeRef::Param(1);
        assert_eq!(open.substitute(&[TypeRef::int32()]), TypeRef::Param(1));
    }

    #[test]
    fn test_identity_is_structural() {
        assert_eq!(TypeRef::list(TypeRef::string()), TypeRef::list(TypeRef::String));
        assert_ne!(
            TypeRef::named("PolicyDto"),
            TypeRef::nullable(TypeRef::named("PolicyDto"))
        );
    }
}

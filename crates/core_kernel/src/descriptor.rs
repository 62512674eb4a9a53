//! Type descriptors
//!
//! Descriptors are the introspection data the mapping engine reads in place
//! of runtime reflection: what kind of type a name refers to, whether it can
//! be constructed without arguments, and which public instance properties it
//! exposes.

use serde::{Deserialize, Serialize};

use crate::identifiers::TypeName;
use crate::types::TypeRef;

/// The shape of a declared type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeKind {
    /// A reference type
    Class,
    /// A value type
    Struct,
    /// A value type restricted to named variants
    Enum { variants: Vec<String> },
}

/// A public instance property
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    pub name: String,
    pub ty: TypeRef,
}

impl PropertyDescriptor {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Describes a declared (non-generic) type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    pub name: TypeName,
    pub kind: TypeKind,
    pub parameterless_constructor: bool,
    pub properties: Vec<PropertyDescriptor>,
}

impl TypeDescriptor {
    /// Creates a class with a parameterless constructor and no properties
    pub fn class(name: impl Into<TypeName>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Class,
            parameterless_constructor: true,
            properties: Vec::new(),
        }
    }

    /// Creates a value type
    ///
    /// Value types can always be default-constructed.
    pub fn value_type(name: impl Into<TypeName>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Struct,
            parameterless_constructor: true,
            properties: Vec::new(),
        }
    }

    /// Creates an enumeration with the given variants
    pub fn enumeration<I, S>(name: impl Into<TypeName>, variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            kind: TypeKind::Enum {
                variants: variants.into_iter().map(Into::into).collect(),
            },
            parameterless_constructor: true,
            properties: Vec::new(),
        }
    }

    /// Adds a public instance property
    pub fn property(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.properties.push(PropertyDescriptor::new(name, ty));
        self
    }

    /// Marks the type as only constructible through parameterized constructors
    pub fn without_parameterless_constructor(mut self) -> Self {
        self.parameterless_constructor = false;
        self
    }

    /// Looks up a property by exact name
    pub fn find_property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn is_class(&self) -> bool {
        self.kind == TypeKind::Class
    }

    pub fn is_enum(&self) -> bool {
        matches!(self.kind, TypeKind::Enum { .. })
    }
}

/// Describes an open generic type such as `List<T>`
///
/// Properties refer to the type parameters through [`TypeRef::Param`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericDefinition {
    pub name: TypeName,
    pub arity: usize,
    pub kind: TypeKind,
    pub enumerable: bool,
    pub parameterless_constructor: bool,
    pub properties: Vec<PropertyDescriptor>,
}

impl GenericDefinition {
    /// Creates a generic class with a parameterless constructor
    pub fn class(name: impl Into<TypeName>, arity: usize) -> Self {
        Self {
            name: name.into(),
            arity,
            kind: TypeKind::Class,
            enumerable: false,
            parameterless_constructor: true,
            properties: Vec::new(),
        }
    }

    /// Creates a generic value type
    pub fn value_type(name: impl Into<TypeName>, arity: usize) -> Self {
        Self {
            name: name.into(),
            arity,
            kind: TypeKind::Struct,
            enumerable: false,
            parameterless_constructor: true,
            properties: Vec::new(),
        }
    }

    /// Marks the definition as a sequence of its first type argument
    pub fn enumerable(mut self) -> Self {
        self.enumerable = true;
        self
    }

    pub fn property(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.properties.push(PropertyDescriptor::new(name, ty));
        self
    }

    pub fn without_parameterless_constructor(mut self) -> Self {
        self.parameterless_constructor = false;
        self
    }

    pub fn is_class(&self) -> bool {
        self.kind == TypeKind::Class
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_defaults() {
        let descriptor = TypeDescriptor::class("PolicyDto")
            .property("PolicyNumber", TypeRef::string())
            .property("SumAssured", TypeRef::decimal());

        assert!(descriptor.is_class());
        assert!(descriptor.parameterless_constructor);
        assert_eq!(descriptor.properties.len(), 2);
        assert_eq!(
            descriptor.find_property("SumAssured").map(|p| &p.ty),
            Some(&TypeRef::decimal())
        );
        assert!(descriptor.find_property("sumassured").is_none());
    }

    #[test]
    fn test_without_parameterless_constructor() {
        let descriptor = TypeDescriptor::class("Money").without_parameterless_constructor();
        assert!(!descriptor.parameterless_constructor);
    }

    #[test]
    fn test_enumeration() {
        let descriptor = TypeDescriptor::enumeration("PolicyStatus", ["Quoted", "InForce"]);
        assert!(descriptor.is_enum());
        assert!(!descriptor.is_class());
    }
}

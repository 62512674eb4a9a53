//! Type Catalog
//!
//! The catalog is the type-introspection facility for the mapping engine. The
//! hosting application declares its DTOs and contracts once at start-up, and
//! the mapping library and synthesizer query it for properties, constructors,
//! and wrapper shapes.
//!
//! # Usage
//!
//! ```rust,ignore
//! use core_kernel::{TypeCatalog, TypeDescriptor, TypeRef};
//!
//! let catalog = TypeCatalog::builder()
//!     .add_type(
//!         TypeDescriptor::class("AddressDto")
//!             .property("PostalCode", TypeRef::string()),
//!     )
//!     .build()?;
//!
//! let properties = catalog.properties_of(&TypeRef::named("AddressDto"));
//! ```
//!
//! A freshly built catalog already knows the `List<T>` generic definition.

use std::collections::BTreeMap;

use crate::descriptor::{GenericDefinition, PropertyDescriptor, TypeDescriptor, TypeKind};
use crate::error::CoreError;
use crate::identifiers::TypeName;
use crate::types::TypeRef;

/// Name of the built-in list definition
pub const LIST: &str = "List";

/// Registry of declared types and generic definitions
#[derive(Debug, Clone, Default)]
pub struct TypeCatalog {
    types: BTreeMap<TypeName, TypeDescriptor>,
    generics: BTreeMap<TypeName, GenericDefinition>,
}

impl TypeCatalog {
    /// Starts a new catalog builder
    pub fn builder() -> TypeCatalogBuilder {
        TypeCatalogBuilder::new()
    }

    /// Returns the descriptor of a declared type
    pub fn descriptor(&self, name: &TypeName) -> Option<&TypeDescriptor> {
        self.types.get(name)
    }

    /// Returns a generic definition
    pub fn generic_definition(&self, name: &TypeName) -> Option<&GenericDefinition> {
        self.generics.get(name)
    }

    /// Iterates the declared types in name order
    pub fn types(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.values()
    }

    /// Number of declared (non-generic) types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Checks that every name referenced by `ty` is declared
    ///
    /// Type parameters are rejected: only closed types can be mapped.
    pub fn ensure_known(&self, ty: &TypeRef) -> Result<(), CoreError> {
        match ty {
            TypeRef::Primitive(_) | TypeRef::String => Ok(()),
            TypeRef::Named(name) => {
                if self.types.contains_key(name) {
                    Ok(())
                } else {
                    Err(CoreError::unknown_type(name))
                }
            }
            TypeRef::Nullable(inner) | TypeRef::Array(inner) => self.ensure_known(inner),
            TypeRef::Generic { definition, args } => {
                let generic = self
                    .generics
                    .get(definition)
                    .ok_or_else(|| CoreError::unknown_type(definition))?;
                if generic.arity != args.len() {
                    return Err(CoreError::GenericArity {
                        definition: definition.to_string(),
                        expected: generic.arity,
                        actual: args.len(),
                    });
                }
                args.iter().try_for_each(|arg| self.ensure_known(arg))
            }
            TypeRef::Param(index) => Err(CoreError::validation(format!(
                "open type parameter T{} cannot be used outside a generic definition",
                index
            ))),
        }
    }

    /// Returns true if every name referenced by `ty` is declared
    pub fn contains(&self, ty: &TypeRef) -> bool {
        self.ensure_known(ty).is_ok()
    }

    /// Returns the public instance properties of a type
    ///
    /// Generic arguments are substituted into the definition's properties.
    /// Primitives, strings, nullables, and arrays expose no properties.
    pub fn properties_of(&self, ty: &TypeRef) -> Vec<PropertyDescriptor> {
        match ty {
            TypeRef::Named(name) => self
                .types
                .get(name)
                .map(|descriptor| descriptor.properties.clone())
                .unwrap_or_default(),
            TypeRef::Generic { definition, args } => self
                .generics
                .get(definition)
                .map(|generic| {
                    generic
                        .properties
                        .iter()
                        .map(|p| PropertyDescriptor::new(p.name.clone(), p.ty.substitute(args)))
                        .collect()
                })
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    /// Looks up a single property by exact name
    pub fn property(&self, ty: &TypeRef, name: &str) -> Option<PropertyDescriptor> {
        self.properties_of(ty).into_iter().find(|p| p.name == name)
    }

    /// Returns true for reference types: strings, arrays, classes, and generic classes
    pub fn is_class(&self, ty: &TypeRef) -> bool {
        match ty {
            TypeRef::String | TypeRef::Array(_) => true,
            TypeRef::Named(name) => self.types.get(name).is_some_and(TypeDescriptor::is_class),
            TypeRef::Generic { definition, .. } => self
                .generics
                .get(definition)
                .is_some_and(GenericDefinition::is_class),
            _ => false,
        }
    }

    /// Returns true for constructed generic types, including nullables
    pub fn is_generic(&self, ty: &TypeRef) -> bool {
        matches!(ty, TypeRef::Generic { .. } | TypeRef::Nullable(_))
    }

    /// Returns the generic arguments of a constructed generic type
    pub fn generic_arguments(&self, ty: &TypeRef) -> Vec<TypeRef> {
        match ty {
            TypeRef::Generic { args, .. } => args.clone(),
            TypeRef::Nullable(inner) => vec![inner.as_ref().clone()],
            _ => Vec::new(),
        }
    }

    /// Returns true for sequences; strings are never treated as sequences
    pub fn is_enumerable(&self, ty: &TypeRef) -> bool {
        match ty {
            TypeRef::Array(_) => true,
            TypeRef::Generic { definition, .. } => {
                self.generics.get(definition).is_some_and(|g| g.enumerable)
            }
            _ => false,
        }
    }

    /// Returns the element type of a sequence
    pub fn element_type(&self, ty: &TypeRef) -> Option<TypeRef> {
        match ty {
            TypeRef::Array(element) => Some(element.as_ref().clone()),
            TypeRef::Generic { args, .. } if self.is_enumerable(ty) => args.first().cloned(),
            _ => None,
        }
    }

    /// Returns true for an optional wrapped around a primitive
    pub fn is_nullable_primitive(&self, ty: &TypeRef) -> bool {
        matches!(ty, TypeRef::Nullable(inner) if matches!(inner.as_ref(), TypeRef::Primitive(_)))
    }

    /// Returns true for non-array reference types that need constructor arguments
    ///
    /// Strings count: they have no parameterless constructor.
    pub fn lacks_parameterless_constructor(&self, ty: &TypeRef) -> bool {
        match ty {
            TypeRef::String => true,
            TypeRef::Named(name) => self
                .types
                .get(name)
                .is_some_and(|d| d.is_class() && !d.parameterless_constructor),
            TypeRef::Generic { definition, .. } => self
                .generics
                .get(definition)
                .is_some_and(|g| g.is_class() && !g.parameterless_constructor),
            _ => false,
        }
    }

    /// Returns true for declared enumerations
    pub fn is_enum(&self, ty: &TypeRef) -> bool {
        ty.as_named()
            .and_then(|name| self.types.get(name))
            .is_some_and(TypeDescriptor::is_enum)
    }

    /// Returns the variants of a declared enumeration
    pub fn enum_variants(&self, ty: &TypeRef) -> Option<&[String]> {
        let descriptor = self.types.get(ty.as_named()?)?;
        match &descriptor.kind {
            TypeKind::Enum { variants } => Some(variants),
            _ => None,
        }
    }

    /// Returns true for values converted directly rather than member by member
    pub fn is_scalar(&self, ty: &TypeRef) -> bool {
        match ty {
            TypeRef::Primitive(_) | TypeRef::String => true,
            TypeRef::Nullable(inner) => self.is_scalar(inner),
            TypeRef::Named(_) => self.is_enum(ty),
            _ => false,
        }
    }
}

/// Builder for constructing a validated [`TypeCatalog`]
///
/// # Example
///
/// ```rust,ignore
/// let catalog = TypeCatalogBuilder::new()
///     .add_generic(GenericDefinition::class("Box", 1).property("Value", TypeRef::Param(0)))
///     .add_type(TypeDescriptor::class("FundDto").property("Code", TypeRef::string()))
///     .build()?;
/// ```
#[derive(Debug)]
pub struct TypeCatalogBuilder {
    types: Vec<TypeDescriptor>,
    generics: Vec<GenericDefinition>,
}

impl Default for TypeCatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeCatalogBuilder {
    /// Creates a builder seeded with the built-in `List<T>` definition
    pub fn new() -> Self {
        Self {
            types: Vec::new(),
            generics: vec![GenericDefinition::class(LIST, 1)
                .enumerable()
                .property("Count", TypeRef::int32())],
        }
    }

    /// Declares a type
    pub fn add_type(mut self, descriptor: TypeDescriptor) -> Self {
        self.types.push(descriptor);
        self
    }

    /// Declares several types at once
    pub fn add_types(mut self, descriptors: impl IntoIterator<Item = TypeDescriptor>) -> Self {
        self.types.extend(descriptors);
        self
    }

    /// Declares a generic definition
    pub fn add_generic(mut self, definition: GenericDefinition) -> Self {
        self.generics.push(definition);
        self
    }

    /// Validates the declarations and builds the catalog
    ///
    /// # Errors
    ///
    /// - `DuplicateType` if a name is declared twice, across types and generics
    /// - `UnknownType` / `GenericArity` if a property refers to an undeclared type
    /// - `Validation` if a type parameter is used outside its definition's arity
    pub fn build(self) -> Result<TypeCatalog, CoreError> {
        let mut catalog = TypeCatalog::default();

        for generic in self.generics {
            if catalog.generics.contains_key(&generic.name) {
                return Err(CoreError::DuplicateType(generic.name.to_string()));
            }
            if generic.arity == 0 {
                return Err(CoreError::validation(format!(
                    "generic definition {} must declare at least one type parameter",
                    generic.name
                )));
            }
            catalog.generics.insert(generic.name.clone(), generic);
        }

        for descriptor in self.types {
            if catalog.types.contains_key(&descriptor.name)
                || catalog.generics.contains_key(&descriptor.name)
            {
                return Err(CoreError::DuplicateType(descriptor.name.to_string()));
            }
            catalog.types.insert(descriptor.name.clone(), descriptor);
        }

        for descriptor in catalog.types.values() {
            for property in &descriptor.properties {
                catalog.ensure_known(&property.ty)?;
            }
        }

        for generic in catalog.generics.values() {
            let arguments: Vec<TypeRef> = (0..generic.arity).map(|_| TypeRef::int32()).collect();
            for property in &generic.properties {
                if let Some(index) = max_param(&property.ty) {
                    if index >= generic.arity {
                        return Err(CoreError::validation(format!(
                            "{}.{} refers to T{} but the definition has {} parameter(s)",
                            generic.name, property.name, index, generic.arity
                        )));
                    }
                }
                catalog.ensure_known(&property.ty.substitute(&arguments))?;
            }
        }

        Ok(catalog)
    }
}

fn max_param(ty: &TypeRef) -> Option<usize> {
    match ty {
        TypeRef::Param(index) => Some(*index),
        TypeRef::Nullable(inner) | TypeRef::Array(inner) => max_param(inner),
        TypeRef::Generic { args, .. } => args.iter().filter_map(max_param).max(),
        _ => None,
    }
}

//! Type maps and member maps
//!
//! A [`TypeMap`] is the resolved form of one mapping rule. It holds a
//! [`MemberMap`] for every public instance property of the destination type,
//! whether that member found a source, was given an explicit directive, or
//! was ignored.

use std::fmt;
use std::sync::Arc;

use core_kernel::{TypeCatalog, TypePair, TypeRef};
use serde_json::Value;

/// A closure computing a member value from the whole source object
pub type ResolverFn = Arc<dyn Fn(&Value) -> Value + Send + Sync>;

/// Where a destination member takes its value from
#[derive(Clone)]
pub enum MemberSource {
    /// A property of the source object
    SourceMember { name: String, ty: TypeRef },
    /// A custom closure over the source object
    Function { result_type: TypeRef, resolver: ResolverFn },
    /// A fixed value
    Constant { value: Value, ty: TypeRef },
    /// A value resolver looked up through the mapper's dependency resolver
    Service { name: String, result_type: TypeRef },
}

impl MemberSource {
    /// Returns the type of the value this source produces
    pub fn source_type(&self) -> &TypeRef {
        match self {
            MemberSource::SourceMember { ty, .. } => ty,
            MemberSource::Function { result_type, .. } => result_type,
            MemberSource::Constant { ty, .. } => ty,
            MemberSource::Service { result_type, .. } => result_type,
        }
    }
}

impl fmt::Debug for MemberSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberSource::SourceMember { name, ty } => f
                .debug_struct("SourceMember")
                .field("name", name)
                .field("ty", ty)
                .finish(),
            MemberSource::Function { result_type, .. } => f
                .debug_struct("Function")
                .field("result_type", result_type)
                .finish_non_exhaustive(),
            MemberSource::Constant { value, ty } => f
                .debug_struct("Constant")
                .field("value", value)
                .field("ty", ty)
                .finish(),
            MemberSource::Service { name, result_type } => f
                .debug_struct("Service")
                .field("name", name)
                .field("result_type", result_type)
                .finish(),
        }
    }
}

/// The resolution of one destination member
#[derive(Debug, Clone)]
pub struct MemberMap {
    pub destination_name: String,
    pub destination_type: TypeRef,
    pub source: Option<MemberSource>,
    pub ignored: bool,
}

impl MemberMap {
    /// Returns the source value type, if a source was found
    pub fn source_type(&self) -> Option<&TypeRef> {
        self.source.as_ref().map(MemberSource::source_type)
    }

    /// Returns true if the member has a source and is not ignored
    pub fn is_resolved(&self) -> bool {
        !self.ignored && self.source.is_some()
    }
}

/// A resolved mapping rule between two types
#[derive(Debug, Clone)]
pub struct TypeMap {
    pair: TypePair,
    profile: String,
    member_maps: Vec<MemberMap>,
}

impl TypeMap {
    /// Creates a type map using the default member convention
    ///
    /// Every destination property gets a member map. A member is sourced
    /// from the source property with exactly the same name, if there is one;
    /// otherwise it is left without a source.
    pub fn create(catalog: &TypeCatalog, pair: TypePair, profile: impl Into<String>) -> Self {
        let member_maps = catalog
            .properties_of(&pair.destination)
            .into_iter()
            .map(|destination| MemberMap {
                source: catalog
                    .property(&pair.source, &destination.name)
                    .map(|source| MemberSource::SourceMember {
                        name: source.name,
                        ty: source.ty,
                    }),
                destination_name: destination.name,
                destination_type: destination.ty,
                ignored: false,
            })
            .collect();

        Self {
            pair,
            profile: profile.into(),
            member_maps,
        }
    }

    pub fn pair(&self) -> &TypePair {
        &self.pair
    }

    pub fn source_type(&self) -> &TypeRef {
        &self.pair.source
    }

    pub fn destination_type(&self) -> &TypeRef {
        &self.pair.destination
    }

    /// Name of the profile that declared this map
    pub fn profile(&self) -> &str {
        &self.profile
    }

    pub fn member_maps(&self) -> &[MemberMap] {
        &self.member_maps
    }

    /// Looks up a member map by destination name
    pub fn find_member(&self, destination_name: &str) -> Option<&MemberMap> {
        self.member_maps
            .iter()
            .find(|m| m.destination_name == destination_name)
    }

    pub(crate) fn find_member_mut(&mut self, destination_name: &str) -> Option<&mut MemberMap> {
        self.member_maps
            .iter_mut()
            .find(|m| m.destination_name == destination_name)
    }

    /// Destination names of members with a source that are not ignored
    pub fn resolved_member_names(&self) -> impl Iterator<Item = &str> {
        self.member_maps
            .iter()
            .filter(|m| m.is_resolved())
            .map(|m| m.destination_name.as_str())
    }

    /// Destination names of ignored members
    pub fn ignored_member_names(&self) -> impl Iterator<Item = &str> {
        self.member_maps
            .iter()
            .filter(|m| m.ignored)
            .map(|m| m.destination_name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::TypeDescriptor;

    fn catalog() -> TypeCatalog {
        TypeCatalog::builder()
            .add_type(
                TypeDescriptor::class("CustomerDetailsDto")
                    .property("FullName", TypeRef::string())
                    .property("Age", TypeRef::int32()),
            )
            .add_type(
                TypeDescriptor::class("CustomerDetails")
                    .property("FullName", TypeRef::string())
                    .property("Age", TypeRef::int32())
                    .property("Salutation", TypeRef::string()),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn test_create_matches_members_by_name() {
        let pair = TypePair::new(
            TypeRef::named("CustomerDetailsDto"),
            TypeRef::named("CustomerDetails"),
        );
        let map = TypeMap::create(&catalog(), pair, "Default");

        assert_eq!(map.member_maps().len(), 3);
        assert!(map.find_member("FullName").unwrap().is_resolved());
        assert_eq!(
            map.find_member("Age").unwrap().source_type(),
            Some(&TypeRef::int32())
        );

        let salutation = map.find_member("Salutation").unwrap();
        assert!(!salutation.is_resolved());
        assert!(!salutation.ignored);

        let resolved: Vec<_> = map.resolved_member_names().collect();
        assert_eq!(resolved, vec!["FullName", "Age"]);
    }

    #[test]
    fn test_member_source_debug_hides_closure() {
        let source = MemberSource::Function {
            result_type: TypeRef::decimal(),
            resolver: Arc::new(|_| Value::Null),
        };
        let debug = format!("{:?}", source);
        assert!(debug.contains("Function"));
        assert!(debug.contains("Decimal"));
    }
}

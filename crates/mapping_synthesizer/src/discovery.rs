//! Missing-maps discovery
//!
//! The second pass walks every declared rule's destination type and finds
//! nested (source, destination) pairs that have no rule. Such pairs become
//! synthesized rules. Members whose destination type cannot be constructed
//! without arguments are recorded as forced ignores instead.
//!
//! Source members are looked up in one of two ways, depending on the rule
//! that owns the destination member:
//!
//! - declared rule: the non-ignored member map with the same destination
//!   name, whose source type already reflects `map_from` and friends
//! - synthesized rule: the same-named property of the source type
//!
//! A pair is marked before its members are explored and is expanded at most
//! once, so reference cycles terminate.

use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use core_kernel::{TypeCatalog, TypePair, TypeRef};
use domain_mapping::{MapperConfiguration, MapperConfigurationExpression, MappingError};
use serde::Serialize;
use tracing::{debug, instrument, trace};

use crate::existing::ExistingMaps;

/// A destination member to ignore because its type cannot be constructed
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ForcedIgnore {
    /// The rule that owns the member
    pub type_map: TypePair,
    /// The destination member name
    pub member: String,
}

impl ForcedIgnore {
    pub fn new(type_map: TypePair, member: impl Into<String>) -> Self {
        Self {
            type_map,
            member: member.into(),
        }
    }
}

/// Result of the discovery pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovery {
    missing: Vec<TypePair>,
    forced_ignores: BTreeSet<ForcedIgnore>,
}

impl Discovery {
    /// Synthesized pairs in discovery order
    pub fn missing(&self) -> &[TypePair] {
        &self.missing
    }

    pub fn forced_ignores(&self) -> &BTreeSet<ForcedIgnore> {
        &self.forced_ignores
    }

    /// Members to force-ignore on the given rule
    pub fn forced_ignores_for<'a>(&'a self, pair: &'a TypePair) -> impl Iterator<Item = &'a str> {
        self.forced_ignores
            .iter()
            .filter(move |ignore| &ignore.type_map == pair && !ignore.member.is_empty())
            .map(|ignore| ignore.member.as_str())
    }

    pub fn is_missing(&self, pair: &TypePair) -> bool {
        self.missing.contains(pair)
    }
}

/// Re-evaluates the declared configuration and discovers missing type maps
///
/// # Errors
///
/// Propagates any error from building the declared configuration.
#[instrument(skip_all, fields(existing = existing.len()))]
pub fn discover_missing_maps<F>(
    catalog: &Arc<TypeCatalog>,
    configure: &F,
    existing: &ExistingMaps,
) -> Result<Discovery, MappingError>
where
    F: Fn(&mut MapperConfigurationExpression),
{
    let declared = MapperConfiguration::new(Arc::clone(catalog), |config| configure(config))?;
    let mut walker = Walker::new(catalog, &declared, existing);

    for map in declared.type_maps() {
        walker.walk(map.pair(), map.source_type(), map.destination_type(), None);
    }

    let discovery = walker.finish();
    debug!(
        missing = discovery.missing.len(),
        forced_ignores = discovery.forced_ignores.len(),
        "discovered missing type maps"
    );
    Ok(discovery)
}

struct Walker<'a> {
    catalog: &'a TypeCatalog,
    declared: &'a MapperConfiguration,
    existing: &'a ExistingMaps,
    missing: Vec<TypePair>,
    missing_set: HashSet<TypePair>,
    expanded: HashSet<TypePair>,
    forced_ignores: BTreeSet<ForcedIgnore>,
}

impl<'a> Walker<'a> {
    fn new(catalog: &'a TypeCatalog, declared: &'a MapperConfiguration, existing: &'a ExistingMaps) -> Self {
        Self {
            catalog,
            declared,
            existing,
            missing: Vec::new(),
            missing_set: HashSet::new(),
            expanded: HashSet::new(),
            forced_ignores: BTreeSet::new(),
        }
    }

    fn finish(self) -> Discovery {
        Discovery {
            missing: self.missing,
            forced_ignores: self.forced_ignores,
        }
    }

    fn exists(&self, pair: &TypePair) -> bool {
        self.existing.contains(pair) || self.missing_set.contains(pair)
    }

    /// Walks `source -> destination`, reached through `via_member` of `owner`
    fn walk(&mut self, owner: &TypePair, source: &TypeRef, destination: &TypeRef, via_member: Option<&str>) {
        if source == destination || self.catalog.is_nullable_primitive(destination) {
            return;
        }

        if self.catalog.lacks_parameterless_constructor(destination) {
            if let Some(member) = via_member {
                trace!(type_map = %owner, member, %destination, "destination type has no parameterless constructor");
                self.forced_ignores.insert(ForcedIgnore::new(owner.clone(), member));
            }
            return;
        }

        let pair = TypePair::new(source.clone(), destination.clone());
        if !self.exists(&pair) {
            debug!(%pair, "synthesizing missing type map");
            self.missing_set.insert(pair.clone());
            self.missing.push(pair.clone());
        }
        if !self.expanded.insert(pair.clone()) {
            return;
        }

        for property in self.catalog.properties_of(destination) {
            let Some(mut source_type) = self.corresponding_source_type(&pair, &property.name) else {
                continue;
            };
            let mut destination_type = property.ty;

            if self.catalog.is_enumerable(&source_type) && self.catalog.is_enumerable(&destination_type) {
                match (
                    self.catalog.element_type(&source_type),
                    self.catalog.element_type(&destination_type),
                ) {
                    (Some(source_element), Some(destination_element)) => {
                        source_type = source_element;
                        destination_type = destination_element;
                    }
                    _ => continue,
                }
            }

            if self.catalog.is_generic(&destination_type) && self.catalog.is_generic(&source_type) {
                let source_arguments = self.catalog.generic_arguments(&source_type);
                let destination_arguments = self.catalog.generic_arguments(&destination_type);
                if let (Some(source_argument), Some(destination_argument)) =
                    (source_arguments.first(), destination_arguments.first())
                {
                    self.walk(&pair, source_argument, destination_argument, Some(&property.name));
                }
            } else if self.catalog.is_class(&destination_type) && self.catalog.is_class(&source_type) {
                self.walk(&pair, &source_type, &destination_type, Some(&property.name));
            }
        }
    }

    fn corresponding_source_type(&self, pair: &TypePair, destination_member: &str) -> Option<TypeRef> {
        if self.existing.contains(pair) {
            self.declared
                .find_type_map(pair)?
                .member_maps()
                .iter()
                .find(|m| m.destination_name == destination_member && !m.ignored)?
                .source_type()
                .cloned()
        } else {
            self.catalog
                .property(&pair.source, destination_member)
                .map(|property| property.ty)
        }
    }
}

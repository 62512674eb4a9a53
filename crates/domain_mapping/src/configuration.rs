//! Mapper configuration
//!
//! A [`MapperConfiguration`] is built once from a configuration callback and
//! is immutable afterwards. Building it resolves every declared rule against
//! the type catalog, creates reverse rules, and runs the all-maps hooks.
//! Validation is a separate, explicit step.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use core_kernel::{TypeCatalog, TypePair, TypeRef};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::MappingError;
use crate::expression::{MapperConfigurationExpression, MappingExpression, MemberAction, MemberDirective};
use crate::mapper::{Mapper, ServiceResolver};
use crate::type_map::{MemberSource, TypeMap};
use crate::validation;

/// An immutable set of resolved type maps
#[derive(Debug)]
pub struct MapperConfiguration {
    catalog: Arc<TypeCatalog>,
    type_maps: Vec<TypeMap>,
    index: HashMap<TypePair, usize>,
}

impl MapperConfiguration {
    /// Builds a configuration from a declaration callback
    ///
    /// # Errors
    ///
    /// - `Core` if a rule names a type the catalog does not declare
    /// - `DuplicateTypeMap` if two rules are declared for the same pair
    /// - `UnknownDestinationMember` / `UnknownSourceMember` if a member
    ///   directive names a property that does not exist
    ///
    /// An explicitly declared rule takes precedence over a reverse map for
    /// the same pair.
    #[instrument(skip_all)]
    pub fn new<F>(catalog: Arc<TypeCatalog>, configure: F) -> Result<Self, MappingError>
    where
        F: FnOnce(&mut MapperConfigurationExpression),
    {
        let mut expression = MapperConfigurationExpression::new();
        configure(&mut expression);
        let (declarations, hooks) = expression.into_parts();

        let mut configuration = Self {
            catalog,
            type_maps: Vec::new(),
            index: HashMap::new(),
        };

        let mut reverse_maps = Vec::new();
        for declaration in declarations {
            let pair = declaration.pair().clone();
            let profile = declaration.profile().to_string();
            if declaration.is_reversed() {
                reverse_maps.push((
                    pair.reversed(),
                    profile.clone(),
                    reverse_directives(declaration.directives()),
                ));
            }
            configuration.insert(pair, profile, declaration.into_directives())?;
        }

        for (pair, profile, directives) in reverse_maps {
            if configuration.index.contains_key(&pair) {
                debug!(%pair, "explicit rule takes precedence over reverse map");
                continue;
            }
            configuration.insert(pair, profile, directives)?;
        }

        // Each hook sees the directives of the hooks registered before it.
        for position in 0..configuration.type_maps.len() {
            for hook in &hooks {
                let map = &configuration.type_maps[position];
                let mut expression = MappingExpression::new(map.pair().clone(), map.profile());
                hook(map, &mut expression);
                for directive in expression.into_directives() {
                    apply_directive(
                        &configuration.catalog,
                        &mut configuration.type_maps[position],
                        directive,
                    )?;
                }
            }
        }

        debug!(type_maps = configuration.type_maps.len(), "mapper configuration built");
        Ok(configuration)
    }

    fn insert(
        &mut self,
        pair: TypePair,
        profile: String,
        directives: Vec<MemberDirective>,
    ) -> Result<(), MappingError> {
        self.catalog.ensure_known(&pair.source)?;
        self.catalog.ensure_known(&pair.destination)?;
        if self.index.contains_key(&pair) {
            return Err(MappingError::DuplicateTypeMap(pair));
        }

        let mut map = TypeMap::create(&self.catalog, pair.clone(), profile);
        for directive in directives {
            apply_directive(&self.catalog, &mut map, directive)?;
        }

        self.index.insert(pair, self.type_maps.len());
        self.type_maps.push(map);
        Ok(())
    }

    /// The catalog the configuration was resolved against
    pub fn catalog(&self) -> &Arc<TypeCatalog> {
        &self.catalog
    }

    /// All type maps in declaration order, reverse maps last
    pub fn type_maps(&self) -> &[TypeMap] {
        &self.type_maps
    }

    /// Looks up the type map for a pair
    pub fn find_type_map(&self, pair: &TypePair) -> Option<&TypeMap> {
        self.index.get(pair).map(|&position| &self.type_maps[position])
    }

    /// Looks up the type map for a source and destination type
    pub fn find(&self, source: &TypeRef, destination: &TypeRef) -> Option<&TypeMap> {
        self.find_type_map(&TypePair::new(source.clone(), destination.clone()))
    }

    /// The set of pairs that have a rule
    pub fn type_pairs(&self) -> BTreeSet<TypePair> {
        self.index.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.type_maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.type_maps.is_empty()
    }

    /// Checks every rule and returns all failures at once
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` listing each destination member that
    /// is neither ignored nor mapped from a convertible source.
    pub fn assert_configuration_is_valid(&self) -> Result<(), MappingError> {
        let report = validation::validate(self);
        if report.is_empty() {
            Ok(())
        } else {
            Err(MappingError::InvalidConfiguration(report))
        }
    }

    /// Creates a mapper bound to a dependency resolver
    pub fn create_mapper(self: &Arc<Self>, services: ServiceResolver) -> Mapper {
        Mapper::new(Arc::clone(self), services)
    }

    /// Summarizes the configuration for logs and diagnostics
    pub fn summary(&self) -> ConfigurationSummary {
        ConfigurationSummary {
            type_maps: self
                .type_maps
                .iter()
                .map(|map| TypeMapSummary {
                    pair: map.pair().to_string(),
                    profile: map.profile().to_string(),
                    mapped: map.resolved_member_names().map(str::to_string).collect(),
                    ignored: map.ignored_member_names().map(str::to_string).collect(),
                })
                .collect(),
        }
    }
}

/// Serializable overview of a configuration
#[derive(Debug, Clone, Serialize)]
pub struct ConfigurationSummary {
    pub type_maps: Vec<TypeMapSummary>,
}

/// Serializable overview of one type map
#[derive(Debug, Clone, Serialize)]
pub struct TypeMapSummary {
    pub pair: String,
    pub profile: String,
    pub mapped: Vec<String>,
    pub ignored: Vec<String>,
}

fn apply_directive(
    catalog: &TypeCatalog,
    map: &mut TypeMap,
    directive: MemberDirective,
) -> Result<(), MappingError> {
    let pair = map.pair().clone();
    let member = map
        .find_member_mut(&directive.member)
        .ok_or_else(|| MappingError::UnknownDestinationMember {
            pair: pair.clone(),
            member: directive.member.clone(),
        })?;

    match directive.action {
        MemberAction::Ignore => {
            member.ignored = true;
            return Ok(());
        }
        MemberAction::MapFrom(name) => {
            let source = catalog
                .property(&pair.source, &name)
                .ok_or(MappingError::UnknownSourceMember { pair, member: name })?;
            member.source = Some(MemberSource::SourceMember {
                name: source.name,
                ty: source.ty,
            });
        }
        MemberAction::ResolveUsing { result_type, resolver } => {
            member.source = Some(MemberSource::Function { result_type, resolver });
        }
        MemberAction::UseValue(value) => {
            member.source = Some(MemberSource::Constant {
                value,
                ty: member.destination_type.clone(),
            });
        }
        MemberAction::ResolveWith { service, result_type } => {
            member.source = Some(MemberSource::Service {
                name: service,
                result_type,
            });
        }
    }
    member.ignored = false;
    Ok(())
}

fn reverse_directives(directives: &[MemberDirective]) -> Vec<MemberDirective> {
    directives
        .iter()
        .filter_map(|directive| match &directive.action {
            MemberAction::MapFrom(source) => Some(MemberDirective {
                member: source.clone(),
                action: MemberAction::MapFrom(directive.member.clone()),
            }),
            _ => None,
        })
        .collect()
}

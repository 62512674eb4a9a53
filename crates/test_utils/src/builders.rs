//! Test Data Builders
//!
//! Provides a builder for mapping scenarios: a catalog of types plus the
//! rules a test declares against it. Tests specify only the types and rules
//! they care about.

use std::sync::Arc;

use core_kernel::{GenericDefinition, TypeCatalog, TypeCatalogBuilder, TypeDescriptor, TypePair, TypeRef};
use domain_mapping::MapperConfigurationExpression;

/// A declared rule in a scenario
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredRule {
    pub pair: TypePair,
    pub ignored_members: Vec<String>,
    pub map_from: Vec<(String, String)>,
}

/// A catalog together with the rules declared against it
#[derive(Debug, Clone)]
pub struct Scenario {
    pub catalog: Arc<TypeCatalog>,
    pub rules: Vec<DeclaredRule>,
}

impl Scenario {
    /// Returns a declaration callback for the scenario's rules
    pub fn configure(&self) -> impl Fn(&mut MapperConfigurationExpression) + '_ {
        move |config| {
            for rule in &self.rules {
                let expression = config.create_map(rule.pair.source.clone(), rule.pair.destination.clone());
                for member in &rule.ignored_members {
                    expression.for_member(member.clone(), |opt| opt.ignore());
                }
                for (destination, source) in &rule.map_from {
                    expression.for_member(destination.clone(), |opt| opt.map_from(source.clone()));
                }
            }
        }
    }

    /// The pairs of the declared rules
    pub fn declared_pairs(&self) -> Vec<TypePair> {
        self.rules.iter().map(|rule| rule.pair.clone()).collect()
    }
}

/// Builder for constructing test scenarios
pub struct ScenarioBuilder {
    catalog: TypeCatalogBuilder,
    rules: Vec<DeclaredRule>,
}

impl Default for ScenarioBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ScenarioBuilder {
    /// Creates a new builder with an empty catalog
    pub fn new() -> Self {
        Self {
            catalog: TypeCatalog::builder(),
            rules: Vec::new(),
        }
    }

    /// Adds a type to the catalog
    pub fn with_type(mut self, descriptor: TypeDescriptor) -> Self {
        self.catalog = self.catalog.add_type(descriptor);
        self
    }

    /// Adds a generic definition to the catalog
    pub fn with_generic(mut self, definition: GenericDefinition) -> Self {
        self.catalog = self.catalog.add_generic(definition);
        self
    }

    /// Declares a rule between two named types
    pub fn declare(mut self, source: &str, destination: &str) -> Self {
        self.rules.push(DeclaredRule {
            pair: TypePair::new(TypeRef::named(source), TypeRef::named(destination)),
            ignored_members: Vec::new(),
            map_from: Vec::new(),
        });
        self
    }

    /// Ignores a member on the most recently declared rule
    pub fn ignoring(mut self, member: &str) -> Self {
        if let Some(rule) = self.rules.last_mut() {
            rule.ignored_members.push(member.to_string());
        }
        self
    }

    /// Redirects a member on the most recently declared rule
    pub fn mapping_from(mut self, destination_member: &str, source_member: &str) -> Self {
        if let Some(rule) = self.rules.last_mut() {
            rule.map_from
                .push((destination_member.to_string(), source_member.to_string()));
        }
        self
    }

    /// Builds the scenario
    ///
    /// # Panics
    ///
    /// Panics if the catalog declarations are inconsistent.
    pub fn build(self) -> Scenario {
        Scenario {
            catalog: Arc::new(self.catalog.build().expect("scenario catalog should be valid")),
            rules: self.rules,
        }
    }
}

//! Custom Test Assertions
//!
//! Provides assertion helpers for mapper configurations that give more
//! meaningful error messages than standard assertions.

use std::collections::{BTreeMap, BTreeSet};

use core_kernel::{TypePair, TypeRef};
use domain_mapping::{MapperConfiguration, TypeMap};

/// Mapped and ignored member names of one type map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleFingerprint {
    pub profile: String,
    pub mapped: BTreeSet<String>,
    pub ignored: BTreeSet<String>,
}

/// Reduces a configuration to comparable per-rule member sets
pub fn rule_fingerprints(configuration: &MapperConfiguration) -> BTreeMap<TypePair, RuleFingerprint> {
    configuration
        .type_maps()
        .iter()
        .map(|map| {
            (
                map.pair().clone(),
                RuleFingerprint {
                    profile: map.profile().to_string(),
                    mapped: map.resolved_member_names().map(str::to_string).collect(),
                    ignored: map.ignored_member_names().map(str::to_string).collect(),
                },
            )
        })
        .collect()
}

fn expect_type_map<'a>(configuration: &'a MapperConfiguration, source: &str, destination: &str) -> &'a TypeMap {
    configuration
        .find(&TypeRef::named(source), &TypeRef::named(destination))
        .unwrap_or_else(|| panic!("Expected a type map {source} -> {destination}"))
}

/// Asserts that a configuration holds a rule for the given named pair
pub fn assert_has_type_map(configuration: &MapperConfiguration, source: &str, destination: &str) {
    expect_type_map(configuration, source, destination);
}

/// Asserts that a configuration holds no rule for the given named pair
pub fn assert_no_type_map(configuration: &MapperConfiguration, source: &str, destination: &str) {
    assert!(
        configuration
            .find(&TypeRef::named(source), &TypeRef::named(destination))
            .is_none(),
        "Expected no type map {source} -> {destination}"
    );
}

/// Asserts that a destination member is ignored on the given rule
pub fn assert_member_ignored(configuration: &MapperConfiguration, source: &str, destination: &str, member: &str) {
    let map = expect_type_map(configuration, source, destination);
    let member_map = map
        .find_member(member)
        .unwrap_or_else(|| panic!("Type map {} has no member {member}", map.pair()));
    assert!(
        member_map.ignored,
        "Expected member {member} of {} to be ignored",
        map.pair()
    );
}

/// Asserts that a destination member is mapped from a source on the given rule
pub fn assert_member_mapped(configuration: &MapperConfiguration, source: &str, destination: &str, member: &str) {
    let map = expect_type_map(configuration, source, destination);
    let member_map = map
        .find_member(member)
        .unwrap_or_else(|| panic!("Type map {} has no member {member}", map.pair()));
    assert!(
        member_map.is_resolved(),
        "Expected member {member} of {} to be mapped, ignored={} source={:?}",
        map.pair(),
        member_map.ignored,
        member_map.source
    );
}

/// Asserts that every destination member of every rule is either mapped or ignored
pub fn assert_every_member_addressed(configuration: &MapperConfiguration) {
    for map in configuration.type_maps() {
        for member in map.member_maps() {
            assert!(
                member.ignored || member.is_resolved(),
                "Member {} of {} is neither mapped nor ignored",
                member.destination_name,
                map.pair()
            );
        }
    }
}

/// Asserts that no type pair has more than one rule
pub fn assert_no_duplicate_rules(configuration: &MapperConfiguration) {
    let mut seen = BTreeSet::new();
    for map in configuration.type_maps() {
        assert!(seen.insert(map.pair().clone()), "Duplicate type map {}", map.pair());
    }
}

/// Asserts that a configuration passes validation
pub fn assert_configuration_valid(configuration: &MapperConfiguration) {
    if let Err(error) = configuration.assert_configuration_is_valid() {
        panic!("Expected a valid configuration, got: {error}");
    }
}

//! Configuration expressions
//!
//! The hosting application declares its mapping rules against a
//! [`MapperConfigurationExpression`], usually grouped into [`Profile`]s.
//! Declarations are recorded as-is; they are resolved against the type
//! catalog when a `MapperConfiguration` is built from them.

use std::mem;
use std::sync::Arc;

use core_kernel::{TypePair, TypeRef};
use serde_json::Value;

use crate::type_map::{ResolverFn, TypeMap};

/// Profile name used for rules declared outside any profile
pub const DEFAULT_PROFILE: &str = "Default";

/// A named group of mapping rules
pub trait Profile {
    /// The name recorded on every rule the profile declares
    fn name(&self) -> &str;

    /// Declares the profile's rules
    fn configure(&self, config: &mut MapperConfigurationExpression);
}

/// Callback run against every resolved type map
pub type AllMapsHook = Box<dyn Fn(&TypeMap, &mut MappingExpression)>;

/// What a member directive does
#[derive(Clone)]
pub enum MemberAction {
    /// Leave the member unmapped without failing validation
    Ignore,
    /// Take the value from a differently-named source member
    MapFrom(String),
    /// Compute the value from the source object
    ResolveUsing {
        result_type: TypeRef,
        resolver: ResolverFn,
    },
    /// Always use this value
    UseValue(Value),
    /// Resolve through a named value resolver service
    ResolveWith { service: String, result_type: TypeRef },
}

/// A directive for one destination member
#[derive(Clone)]
pub struct MemberDirective {
    pub member: String,
    pub action: MemberAction,
}

/// Options for a single destination member
///
/// The last option called wins.
#[derive(Default)]
pub struct MemberOptions {
    action: Option<MemberAction>,
}

impl MemberOptions {
    /// Marks the member as intentionally unmapped
    pub fn ignore(&mut self) {
        self.action = Some(MemberAction::Ignore);
    }

    /// Maps the member from the named source member
    pub fn map_from(&mut self, source_member: impl Into<String>) {
        self.action = Some(MemberAction::MapFrom(source_member.into()));
    }

    /// Resolves the member with a custom callback over the source object
    ///
    /// Used instead of `map_from` when the value is not simply a
    /// redirected source member.
    pub fn resolve_using<F>(&mut self, result_type: TypeRef, resolver: F)
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        self.action = Some(MemberAction::ResolveUsing {
            result_type,
            resolver: Arc::new(resolver),
        });
    }

    /// Uses a fixed value for the member
    pub fn use_value(&mut self, value: impl Into<Value>) {
        self.action = Some(MemberAction::UseValue(value.into()));
    }

    /// Resolves the member through a value resolver registered with the
    /// mapper's dependency resolver
    pub fn resolve_with(&mut self, service: impl Into<String>, result_type: TypeRef) {
        self.action = Some(MemberAction::ResolveWith {
            service: service.into(),
            result_type,
        });
    }
}

/// The declaration of one mapping rule
pub struct MappingExpression {
    pair: TypePair,
    profile: String,
    directives: Vec<MemberDirective>,
    reverse: bool,
}

impl MappingExpression {
    pub(crate) fn new(pair: TypePair, profile: impl Into<String>) -> Self {
        Self {
            pair,
            profile: profile.into(),
            directives: Vec::new(),
            reverse: false,
        }
    }

    pub fn pair(&self) -> &TypePair {
        &self.pair
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    /// Configures one destination member
    pub fn for_member<F>(&mut self, member: impl Into<String>, configure: F) -> &mut Self
    where
        F: FnOnce(&mut MemberOptions),
    {
        let mut options = MemberOptions::default();
        configure(&mut options);
        if let Some(action) = options.action {
            self.directives.push(MemberDirective {
                member: member.into(),
                action,
            });
        }
        self
    }

    /// Also declares the rule in the opposite direction
    ///
    /// `map_from` directives are reversed; other directives apply only to
    /// the forward rule.
    pub fn reverse_map(&mut self) -> &mut Self {
        self.reverse = true;
        self
    }

    pub fn directives(&self) -> &[MemberDirective] {
        &self.directives
    }

    pub fn is_reversed(&self) -> bool {
        self.reverse
    }

    pub(crate) fn into_directives(self) -> Vec<MemberDirective> {
        self.directives
    }
}

/// Collects rule declarations and all-maps hooks
pub struct MapperConfigurationExpression {
    current_profile: String,
    maps: Vec<MappingExpression>,
    hooks: Vec<AllMapsHook>,
}

impl Default for MapperConfigurationExpression {
    fn default() -> Self {
        Self::new()
    }
}

impl MapperConfigurationExpression {
    pub fn new() -> Self {
        Self {
            current_profile: DEFAULT_PROFILE.to_string(),
            maps: Vec::new(),
            hooks: Vec::new(),
        }
    }

    /// Declares a rule from `source` to `destination`
    pub fn create_map(&mut self, source: TypeRef, destination: TypeRef) -> &mut MappingExpression {
        let index = self.maps.len();
        self.maps.push(MappingExpression::new(
            TypePair::new(source, destination),
            self.current_profile.clone(),
        ));
        &mut self.maps[index]
    }

    /// Declares every rule of a profile under the profile's name
    pub fn add_profile(&mut self, profile: &dyn Profile) {
        let previous = mem::replace(&mut self.current_profile, profile.name().to_string());
        profile.configure(self);
        self.current_profile = previous;
    }

    /// Declares the rules of several profiles
    pub fn add_profiles<'a, I>(&mut self, profiles: I)
    where
        I: IntoIterator<Item = &'a dyn Profile>,
    {
        for profile in profiles {
            self.add_profile(profile);
        }
    }

    /// Registers a hook run against every type map once all rules exist
    ///
    /// Directives the hook adds to the expression are applied on top of the
    /// rule's own directives.
    pub fn for_all_maps<F>(&mut self, hook: F)
    where
        F: Fn(&TypeMap, &mut MappingExpression) + 'static,
    {
        self.hooks.push(Box::new(hook));
    }

    /// Rules declared so far
    pub fn declared_maps(&self) -> &[MappingExpression] {
        &self.maps
    }

    pub(crate) fn into_parts(self) -> (Vec<MappingExpression>, Vec<AllMapsHook>) {
        (self.maps, self.hooks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct QuoteProfile;

    impl Profile for QuoteProfile {
        fn name(&self) -> &str {
            "QuoteProfile"
        }

        fn configure(&self, config: &mut MapperConfigurationExpression) {
            config
                .create_map(TypeRef::named("QuoteRequest"), TypeRef::named("CreateQuoteCommand"))
                .for_member("Product", |opt| opt.ignore());
        }
    }

    #[test]
    fn test_profile_name_is_recorded_and_restored() {
        let mut config = MapperConfigurationExpression::new();
        config.add_profile(&QuoteProfile);
        config.create_map(TypeRef::named("A"), TypeRef::named("B"));

        let maps = config.declared_maps();
        assert_eq!(maps.len(), 2);
        assert_eq!(maps[0].profile(), "QuoteProfile");
        assert_eq!(maps[1].profile(), DEFAULT_PROFILE);
    }

    #[test]
    fn test_member_options_last_call_wins() {
        let mut config = MapperConfigurationExpression::new();
        config
            .create_map(TypeRef::named("A"), TypeRef::named("B"))
            .for_member("Value", |opt| {
                opt.ignore();
                opt.map_from("Other");
            });

        let directives = config.declared_maps()[0].directives();
        assert_eq!(directives.len(), 1);
        assert!(matches!(&directives[0].action, MemberAction::MapFrom(name) if name == "Other"));
    }

    #[test]
    fn test_empty_options_add_no_directive() {
        let mut config = MapperConfigurationExpression::new();
        config
            .create_map(TypeRef::named("A"), TypeRef::named("B"))
            .for_member("Value", |_| {})
            .reverse_map();

        let map = &config.declared_maps()[0];
        assert!(map.directives().is_empty());
        assert!(map.is_reversed());
    }
}

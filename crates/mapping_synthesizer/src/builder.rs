//! Final configuration builder
//!
//! The third pass re-declares the configuration, adds a default rule for
//! every discovered pair, and ignores each destination member that has no
//! resolved source or was flagged as a forced ignore.

use std::collections::HashSet;
use std::sync::Arc;

use core_kernel::{TypeCatalog, TypePair};
use domain_mapping::{
    MapperConfiguration, MapperConfigurationExpression, MappingError, MappingExpression, Profile, TypeMap,
};
use tracing::{instrument, trace};

use crate::discovery::Discovery;

/// Profile name recorded on synthesized rules
pub const SYNTHESIZED_PROFILE: &str = "SynthesizedMaps";

/// Declares a default rule for each discovered pair
struct SynthesizedMapsProfile<'a> {
    pairs: &'a [TypePair],
}

impl Profile for SynthesizedMapsProfile<'_> {
    fn name(&self) -> &str {
        SYNTHESIZED_PROFILE
    }

    fn configure(&self, config: &mut MapperConfigurationExpression) {
        for pair in self.pairs {
            config.create_map(pair.source.clone(), pair.destination.clone());
        }
    }
}

/// Builds the final configuration from the declared rules and a discovery
///
/// # Errors
///
/// Propagates any error from building the configuration; this pass adds no
/// errors of its own.
#[instrument(skip_all, fields(missing = discovery.missing().len()))]
pub fn build_final_configuration<F>(
    catalog: &Arc<TypeCatalog>,
    configure: &F,
    discovery: &Discovery,
) -> Result<MapperConfiguration, MappingError>
where
    F: Fn(&mut MapperConfigurationExpression),
{
    let hook_catalog = Arc::clone(catalog);
    let hook_discovery = discovery.clone();

    MapperConfiguration::new(Arc::clone(catalog), |config| {
        configure(config);
        config.add_profile(&SynthesizedMapsProfile {
            pairs: discovery.missing(),
        });
        config.for_all_maps(move |map, expression| {
            ignore_mismatched_members(&hook_catalog, &hook_discovery, map, expression);
        });
    })
}

fn ignore_mismatched_members(
    catalog: &TypeCatalog,
    discovery: &Discovery,
    map: &TypeMap,
    expression: &mut MappingExpression,
) {
    let mapped: HashSet<&str> = map.resolved_member_names().collect();

    for property in catalog.properties_of(map.destination_type()) {
        if !mapped.contains(property.name.as_str()) {
            trace!(type_map = %map.pair(), member = %property.name, "ignoring unmapped member");
            expression.for_member(property.name, |opt| opt.ignore());
        }
    }

    for member in discovery.forced_ignores_for(map.pair()) {
        trace!(type_map = %map.pair(), member, "ignoring member with non-constructible type");
        expression.for_member(member, |opt| opt.ignore());
    }
}

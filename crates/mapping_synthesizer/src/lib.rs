//! Mapper Configuration Synthesizer
//!
//! Builds a mapper configuration that behaves like one with automatic
//! creation of missing maps: every nested type pair reachable from a
//! declared rule gets a rule, and every destination member that cannot be
//! resolved is ignored instead of failing validation.
//!
//! # Passes
//!
//! ```text
//! declared rules ──► collect existing maps ──► discover missing maps ──► build final configuration
//!                     (ExistingMaps)            (Discovery)               (MapperConfiguration)
//! ```
//!
//! Each pass evaluates the declaration callback afresh and discards its
//! transient configuration. Calls share no state, so independent calls can
//! run in parallel.
//!
//! # Example
//!
//! ```rust,ignore
//! use mapping_synthesizer::create_v7_compatible_configuration;
//!
//! let configuration = create_v7_compatible_configuration(&catalog, |config| {
//!     config.add_profile(&PolicyMappingsProfile);
//!     config.add_profile(&CustomerMappingsProfile);
//! })?;
//! configuration.assert_configuration_is_valid()?;
//! ```
//!
//! Unresolvable members are ignored silently: an ignored member keeps its
//! default value when mapped.

pub mod builder;
pub mod discovery;
pub mod existing;

use std::sync::Arc;

use core_kernel::TypeCatalog;
use domain_mapping::{MapperConfiguration, MapperConfigurationExpression, MappingError};
use tracing::{info, instrument};

pub use builder::{build_final_configuration, SYNTHESIZED_PROFILE};
pub use discovery::{discover_missing_maps, Discovery, ForcedIgnore};
pub use existing::{collect_existing_maps, ExistingMaps};

/// The outcome of all three passes
#[derive(Debug)]
pub struct Synthesis {
    pub existing: ExistingMaps,
    pub discovery: Discovery,
    pub configuration: MapperConfiguration,
}

/// Runs all three passes and keeps the intermediate results
///
/// # Errors
///
/// Returns the first error raised while building any of the three
/// configurations, typically a rule naming an unknown type or member.
#[instrument(skip_all)]
pub fn synthesize<F>(catalog: &Arc<TypeCatalog>, configure: F) -> Result<Synthesis, MappingError>
where
    F: Fn(&mut MapperConfigurationExpression),
{
    let existing = collect_existing_maps(catalog, &configure)?;
    let discovery = discover_missing_maps(catalog, &configure, &existing)?;
    let configuration = build_final_configuration(catalog, &configure, &discovery)?;

    info!(
        existing = existing.len(),
        synthesized = discovery.missing().len(),
        forced_ignores = discovery.forced_ignores().len(),
        type_maps = configuration.len(),
        "mapper configuration synthesized"
    );

    Ok(Synthesis {
        existing,
        discovery,
        configuration,
    })
}

/// Creates a configuration with missing type maps created automatically
///
/// # Errors
///
/// See [`synthesize`].
pub fn create_v7_compatible_configuration<F>(
    catalog: &Arc<TypeCatalog>,
    configure: F,
) -> Result<MapperConfiguration, MappingError>
where
    F: Fn(&mut MapperConfigurationExpression),
{
    synthesize(catalog, configure).map(|synthesis| synthesis.configuration)
}

//! Mapper start-up
//!
//! Builds the contract catalog, registers every profile with the
//! configuration synthesizer, and binds the resulting configuration to the
//! application's value resolvers.

use std::sync::Arc;

use domain_mapping::{Mapper, MapperConfiguration, ServiceResolver, ValueResolver};
use mapping_synthesizer::create_v7_compatible_configuration;
use tracing::{info, instrument};

use crate::config::{ApplicationSettings, ProductSettings};
use crate::contracts::contract_catalog;
use crate::error::StartupError;
use crate::profiles::all_profiles;
use crate::resolvers::{PolicyProductResolver, POLICY_PRODUCT_SERVICE};

/// Creates the mapper configuration for the application
///
/// Nested pairs missing from the profiles are synthesized and unresolvable
/// members are ignored, so the result validates without per-pair rules.
///
/// # Errors
///
/// Returns an error if the catalog is inconsistent or a profile declares an
/// invalid rule.
#[instrument(skip_all)]
pub fn create_mapper_configuration(settings: &ApplicationSettings) -> Result<MapperConfiguration, StartupError> {
    let catalog = Arc::new(contract_catalog()?);
    let profiles = all_profiles(settings);

    let configuration = create_v7_compatible_configuration(&catalog, |config| {
        for profile in &profiles {
            config.add_profile(profile.as_ref());
        }
    })?;

    info!(
        types = catalog.len(),
        profiles = profiles.len(),
        type_maps = configuration.len(),
        "mapper configuration created"
    );
    Ok(configuration)
}

/// Returns the dependency resolver for resolver-backed members
pub fn service_resolver(products: ProductSettings) -> ServiceResolver {
    Arc::new(move |name: &str| -> Option<Arc<dyn ValueResolver>> {
        match name {
            POLICY_PRODUCT_SERVICE => Some(Arc::new(PolicyProductResolver::new(products.clone()))),
            _ => None,
        }
    })
}

/// Creates a mapper bound to the application's value resolvers
pub fn create_mapper(configuration: &Arc<MapperConfiguration>, settings: &ApplicationSettings) -> Mapper {
    configuration.create_mapper(service_resolver(settings.product.clone()))
}

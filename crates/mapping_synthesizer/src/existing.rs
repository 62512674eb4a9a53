//! Existing-maps collection
//!
//! The first pass: evaluate the declared configuration once and record which
//! type pairs already have a rule, reverse maps included.

use std::collections::BTreeSet;
use std::sync::Arc;

use core_kernel::{TypeCatalog, TypePair};
use domain_mapping::{MapperConfiguration, MapperConfigurationExpression, MappingError};
use tracing::{debug, instrument};

/// The pairs with an explicitly declared rule
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExistingMaps {
    pairs: BTreeSet<TypePair>,
}

impl ExistingMaps {
    pub fn contains(&self, pair: &TypePair) -> bool {
        self.pairs.contains(pair)
    }

    pub fn pairs(&self) -> &BTreeSet<TypePair> {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl From<&MapperConfiguration> for ExistingMaps {
    fn from(configuration: &MapperConfiguration) -> Self {
        Self {
            pairs: configuration.type_pairs(),
        }
    }
}

/// Evaluates the declared configuration and collects its type pairs
///
/// # Errors
///
/// Propagates any error from building the declared configuration.
#[instrument(skip_all)]
pub fn collect_existing_maps<F>(catalog: &Arc<TypeCatalog>, configure: &F) -> Result<ExistingMaps, MappingError>
where
    F: Fn(&mut MapperConfigurationExpression),
{
    let configuration = MapperConfiguration::new(Arc::clone(catalog), |config| configure(config))?;
    let existing = ExistingMaps::from(&configuration);
    debug!(count = existing.len(), "collected existing type maps");
    Ok(existing)
}

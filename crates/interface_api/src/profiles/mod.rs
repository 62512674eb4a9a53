//! Mapping profiles
//!
//! Each profile declares the rules for one area of the API. Nested pairs
//! the profiles leave out are synthesized at start-up.

mod account_values;
mod common;
mod customer;
mod policy;

pub use account_values::AccountValuesMappingProfile;
pub use common::CommonMappingsProfile;
pub use customer::CustomerMappingsProfile;
pub use policy::PolicyMappingsProfile;

use domain_mapping::Profile;

use crate::config::ApplicationSettings;

/// Every profile registered at start-up, in registration order
pub fn all_profiles(settings: &ApplicationSettings) -> Vec<Box<dyn Profile>> {
    vec![
        Box::new(CommonMappingsProfile),
        Box::new(PolicyMappingsProfile),
        Box::new(CustomerMappingsProfile),
        Box::new(AccountValuesMappingProfile::new(&settings.product)),
    ]
}

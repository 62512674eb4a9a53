use core_kernel::TypeRef;
use domain_mapping::{MapperConfigurationExpression, Profile};

use crate::config::ProductSettings;

/// Rules for account value imports
///
/// Imports only exist for variable universal life, so the command's product
/// is fixed to the configured VUL code.
pub struct AccountValuesMappingProfile {
    product: String,
}

impl AccountValuesMappingProfile {
    pub fn new(products: &ProductSettings) -> Self {
        Self {
            product: products.vul.clone(),
        }
    }
}

impl Profile for AccountValuesMappingProfile {
    fn name(&self) -> &str {
        "AccountValuesMapping"
    }

    fn configure(&self, config: &mut MapperConfigurationExpression) {
        config.create_map(
            TypeRef::named("AccountValuesImportFileDto"),
            TypeRef::named("AccountValuesImportFile"),
        );

        config
            .create_map(
                TypeRef::named("ImportAccountValuesRequest"),
                TypeRef::named("ImportAccountValuesCommand"),
            )
            .for_member("Product", |opt| opt.use_value(self.product.clone()));
    }
}

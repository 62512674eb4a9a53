use core_kernel::TypeRef;
use domain_mapping::{MapperConfigurationExpression, Profile};

use crate::resolvers::{scaled, PERCENT_TO_FRACTION, POLICY_PRODUCT_SERVICE};

/// Rules shared by every product: addresses, files, rates, and account
/// value recalculation requests
pub struct CommonMappingsProfile;

impl Profile for CommonMappingsProfile {
    fn name(&self) -> &str {
        "CommonMappings"
    }

    fn configure(&self, config: &mut MapperConfigurationExpression) {
        config
            .create_map(TypeRef::named("AddressDto"), TypeRef::named("Address"))
            .reverse_map();

        config
            .create_map(TypeRef::named("FileDto"), TypeRef::named("File"))
            .reverse_map();

        let factors = config.create_map(
            TypeRef::named("SaveSpecialQuoteFactorsRequest"),
            TypeRef::named("SaveSpecialQuoteFactorsCommand"),
        );
        for member in ["PremiumCharge", "CoiChargeAdjustment", "MarketingAllowance", "OverfundCharge"] {
            factors.for_member(member, |opt| {
                opt.resolve_using(TypeRef::decimal(), scaled(member, PERCENT_TO_FRACTION))
            });
        }

        let rates = config.create_map(
            TypeRef::named("PolicyTransactionRate"),
            TypeRef::named("PolicyTransactionRateDto"),
        );
        for member in ["GAPPRate", "IAOPRate", "GAOPRate"] {
            rates.for_member(member, |opt| {
                opt.resolve_using(TypeRef::decimal(), scaled(member, PERCENT_TO_FRACTION))
            });
        }

        config
            .create_map(
                TypeRef::named("GetAccountValuesRecalculationRecordRequest"),
                TypeRef::named("GetAccountValuesRecalculationRecordsQuery"),
            )
            .for_member("PageIndex", |opt| opt.map_from("CurrentPage"))
            .for_member("Product", |opt| opt.resolve_with(POLICY_PRODUCT_SERVICE, TypeRef::string()));

        config
            .create_map(
                TypeRef::named("RecalculateAccountValuesRequest"),
                TypeRef::named("RecalculateAccountValuesWithSpecificDateCommand"),
            )
            .for_member("Product", |opt| opt.ignore());

        config
            .create_map(TypeRef::named("ProductVersionDto"), TypeRef::named("ProductVersion"))
            .reverse_map();

        config.create_map(
            TypeRef::named("GetAccountValuesRecalculationRecordResult"),
            TypeRef::named("AccountValuesRecalculationRecordResult"),
        );
    }
}

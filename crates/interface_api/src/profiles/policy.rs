use core_kernel::TypeRef;
use domain_mapping::{MapperConfigurationExpression, Profile};

use crate::resolvers::{scaled, FRACTION_TO_PERCENT};

/// Rules for queried policies and their sections
pub struct PolicyMappingsProfile;

impl Profile for PolicyMappingsProfile {
    fn name(&self) -> &str {
        "PolicyMappings"
    }

    fn configure(&self, config: &mut MapperConfigurationExpression) {
        config
            .create_map(TypeRef::named("QueriedPolicyDto"), TypeRef::named("Policy"))
            .for_member("IsJointPolicyOwner", |opt| opt.ignore());

        config
            .create_map(
                TypeRef::named("GeneralInformationDTO"),
                TypeRef::named("GeneralInformation"),
            )
            .reverse_map();
        config
            .create_map(TypeRef::named("PlanDetailsDTO"), TypeRef::named("PlanDetail"))
            .reverse_map();
        config
            .create_map(TypeRef::named("PolicyDespatchDTO"), TypeRef::named("PolicyDespatch"))
            .reverse_map();

        let factors = config.create_map(
            TypeRef::named("SpecialQuoteFactorsDto"),
            TypeRef::named("SpecialQuoteFactors"),
        );
        for member in ["PremiumCharge", "CoiChargeAdjustment", "OverfundCharge", "MarketingAllowance"] {
            factors.for_member(member, |opt| {
                opt.resolve_using(TypeRef::decimal(), scaled(member, FRACTION_TO_PERCENT))
            });
        }
        factors.for_member("TransactionInterestRates", |opt| opt.ignore());

        let rates = config.create_map(
            TypeRef::named("PolicyTransactionRateDto"),
            TypeRef::named("PolicyTransactionRate"),
        );
        for member in ["GAPPRate", "IAOPRate", "GAOPRate"] {
            rates.for_member(member, |opt| {
                opt.resolve_using(TypeRef::decimal(), scaled(member, FRACTION_TO_PERCENT))
            });
        }
    }
}

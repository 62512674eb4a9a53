use core_kernel::TypeRef;
use domain_mapping::{MapperConfigurationExpression, Profile};

use crate::resolvers::when_flag_set;

/// Rules for customer and organisation maintenance
pub struct CustomerMappingsProfile;

impl Profile for CustomerMappingsProfile {
    fn name(&self) -> &str {
        "CustomerMappings"
    }

    fn configure(&self, config: &mut MapperConfigurationExpression) {
        config
            .create_map(
                TypeRef::named("DeleteOtherCustomerRequest"),
                TypeRef::named("DeleteCustomerSnapshotCommand"),
            )
            .for_member("CustomerSnapshotId", |opt| opt.map_from("OtherCustomerId"));

        // Identity fields are only editable together.
        let edit = config.create_map(
            TypeRef::named("EditOtherCustomerRequest"),
            TypeRef::named("EditOtherCustomerCommand"),
        );
        for member in ["RelationshipType", "IdType", "IdNumber"] {
            edit.for_member(member, |opt| {
                opt.resolve_using(TypeRef::string(), when_flag_set("EditAllFields", member))
            });
        }
        edit.for_member("UniqueCorrelationId", |opt| opt.ignore())
            .for_member("AuthenticatedUser", |opt| opt.ignore());

        config
            .create_map(
                TypeRef::named("EditCustomerRequest"),
                TypeRef::named("UpdateCustomerCommand"),
            )
            .for_member("UniqueCorrelationId", |opt| opt.ignore())
            .for_member("AuthenticatedUser", |opt| opt.ignore());

        config
            .create_map(
                TypeRef::named("OrganisationDetailsDto"),
                TypeRef::named("OrganisationDetails"),
            )
            .reverse_map();

        config.create_map(TypeRef::named("SimplifiedCustomer"), TypeRef::named("CustomerSummary"));
        config.create_map(TypeRef::named("CustomerPage"), TypeRef::named("SearchCustomerResult"));
    }
}

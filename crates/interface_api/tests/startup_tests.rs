//! Integration tests for the application's mapper start-up path

use std::sync::Arc;

use serde_json::json;

use core_kernel::TypeRef;
use domain_mapping::MapperConfiguration;
use interface_api::config::{ApplicationSettings, ProductSettings};
use interface_api::startup::{create_mapper, create_mapper_configuration};
use mapping_synthesizer::SYNTHESIZED_PROFILE;
use test_utils::{
    assert_configuration_valid, assert_every_member_addressed, assert_has_type_map, assert_member_ignored,
    assert_member_mapped, assert_no_duplicate_rules, assert_no_type_map,
};

fn configuration() -> MapperConfiguration {
    create_mapper_configuration(&ApplicationSettings::default()).unwrap()
}

// ============= CONFIGURATION TESTS =============
mod configuration_tests {
    use super::*;

    #[test]
    fn test_mapper_configuration_is_valid() {
        let configuration = configuration();

        assert_configuration_valid(&configuration);
        assert_every_member_addressed(&configuration);
        assert_no_duplicate_rules(&configuration);
    }

    #[test]
    fn test_nested_pairs_are_synthesized() {
        let configuration = configuration();

        for (source, destination) in [
            ("AgentDto", "Agent"),
            ("Agent", "AgentDto"),
            ("RiderDto", "Rider"),
            ("Rider", "RiderDto"),
            ("CustomerSnapshotDTO", "PolicyOwner"),
            ("AccountValuesRecalculationRecordDto", "AccountValuesRecalculationRecord"),
            ("UserDto", "User"),
            ("AccountValuesRowDto", "AccountValuesRow"),
        ] {
            assert_has_type_map(&configuration, source, destination);
            let map = configuration
                .find(&TypeRef::named(source), &TypeRef::named(destination))
                .unwrap();
            assert_eq!(map.profile(), SYNTHESIZED_PROFILE, "{source} -> {destination}");
        }
    }

    #[test]
    fn test_non_constructible_premium_is_ignored() {
        let configuration = configuration();

        assert_no_type_map(&configuration, "PremiumAmountDto", "PremiumAmount");
        assert_member_ignored(&configuration, "QueriedPolicyDto", "Policy", "Premium");
    }

    #[test]
    fn test_declared_and_unresolved_members_are_ignored() {
        let configuration = configuration();

        assert_member_ignored(&configuration, "QueriedPolicyDto", "Policy", "IsJointPolicyOwner");
        assert_member_ignored(&configuration, "Address", "AddressDto", "AddressType");
        assert_member_ignored(&configuration, "UserDto", "User", "Roles");
        assert_member_ignored(&configuration, "AgentDto", "Agent", "Channel");
        assert_member_ignored(
            &configuration,
            "RecalculateAccountValuesRequest",
            "RecalculateAccountValuesWithSpecificDateCommand",
            "Product",
        );
    }

    #[test]
    fn test_declared_rules_keep_their_sources() {
        let configuration = configuration();

        assert_member_mapped(
            &configuration,
            "DeleteOtherCustomerRequest",
            "DeleteCustomerSnapshotCommand",
            "CustomerSnapshotId",
        );
        assert_member_mapped(
            &configuration,
            "GetAccountValuesRecalculationRecordRequest",
            "GetAccountValuesRecalculationRecordsQuery",
            "PageIndex",
        );
        assert_member_mapped(&configuration, "QueriedPolicyDto", "Policy", "Owner");
    }

    #[test]
    fn test_configuration_is_reproducible() {
        let first = configuration().summary();
        let second = configuration().summary();

        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }
}

// ============= MAPPING TESTS =============
mod mapping_tests {
    use super::*;

    fn mapper(settings: &ApplicationSettings) -> domain_mapping::Mapper {
        let configuration = Arc::new(create_mapper_configuration(settings).unwrap());
        create_mapper(&configuration, settings)
    }

    #[test]
    fn test_maps_queried_policy() {
        let mapper = mapper(&ApplicationSettings::default());
        let dto = json!({
            "PolicyNumber": "VUL-0001",
            "Status": "InForce",
            "GeneralInformation": {
                "ApplicationDate": "2024-03-01T00:00:00Z",
                "Currency": "SGD",
                "Agent": { "Code": "A1", "Name": "Tan" }
            },
            "PlanDetails": {
                "PlanCode": "VUL10",
                "SumAssured": 250000,
                "Riders": [{ "Code": "CI", "SumAssured": 50000 }]
            },
            "SpecialQuoteFactors": {
                "PremiumCharge": 0.05,
                "CoiChargeAdjustment": 0,
                "OverfundCharge": 0.015,
                "MarketingAllowance": 0.25
            },
            "Premium": { "Amount": 1200, "Currency": "SGD" },
            "Owner": { "CustomerId": "7d1c", "Name": "Lim", "ResidentialAddress": { "Line1": "1 Main St" } }
        });

        let policy = mapper
            .map(&dto, &TypeRef::named("QueriedPolicyDto"), &TypeRef::named("Policy"))
            .unwrap();

        assert_eq!(policy["PolicyNumber"], json!("VUL-0001"));
        assert_eq!(policy["GeneralInformation"]["Agent"], json!({ "Code": "A1", "Name": "Tan" }));
        assert_eq!(policy["PlanDetails"]["Riders"][0]["Code"], json!("CI"));
        assert_eq!(policy["SpecialQuoteFactors"]["PremiumCharge"].as_f64(), Some(5.0));
        assert_eq!(policy["SpecialQuoteFactors"]["OverfundCharge"].as_f64(), Some(1.5));
        assert_eq!(policy["SpecialQuoteFactors"]["MarketingAllowance"], json!(25));
        assert_eq!(policy["Owner"]["ResidentialAddress"]["Line1"], json!("1 Main St"));
        assert!(policy.get("Premium").is_none());
        assert!(policy.get("IsJointPolicyOwner").is_none());
    }

    #[test]
    fn test_percentages_become_fractions() {
        let mapper = mapper(&ApplicationSettings::default());

        let command = mapper
            .map(
                &json!({ "PolicyNumber": "UL-1", "PremiumCharge": 5, "CoiChargeAdjustment": 4.5 }),
                &TypeRef::named("SaveSpecialQuoteFactorsRequest"),
                &TypeRef::named("SaveSpecialQuoteFactorsCommand"),
            )
            .unwrap();

        assert_eq!(command["PremiumCharge"].as_f64(), Some(0.05));
        assert_eq!(command["CoiChargeAdjustment"].as_f64(), Some(0.045));
        assert_eq!(command["MarketingAllowance"], json!(null));
    }

    #[test]
    fn test_product_resolved_from_policy_number() {
        let mapper = mapper(&ApplicationSettings::default());

        let query = mapper
            .map(
                &json!({ "PolicyNumber": "ULPB-0042", "CurrentPage": 3, "PageSize": 20 }),
                &TypeRef::named("GetAccountValuesRecalculationRecordRequest"),
                &TypeRef::named("GetAccountValuesRecalculationRecordsQuery"),
            )
            .unwrap();

        assert_eq!(
            query,
            json!({ "PolicyNumber": "ULPB-0042", "PageIndex": 3, "PageSize": 20, "Product": "ULPB" })
        );
    }

    #[test]
    fn test_import_uses_configured_vul_code() {
        let settings = ApplicationSettings {
            product: ProductSettings {
                vul: "VUL2".to_string(),
                ..ProductSettings::default()
            },
            ..ApplicationSettings::default()
        };
        let mapper = mapper(&settings);

        let command = mapper
            .map(
                &json!({ "File": { "FileName": "av.csv" }, "ValuationDate": "2024-06-30" }),
                &TypeRef::named("ImportAccountValuesRequest"),
                &TypeRef::named("ImportAccountValuesCommand"),
            )
            .unwrap();

        assert_eq!(command["Product"], json!("VUL2"));
        assert_eq!(command["File"]["FileName"], json!("av.csv"));
    }

    #[test]
    fn test_identity_fields_require_edit_all_fields() {
        let mapper = mapper(&ApplicationSettings::default());
        let request = json!({
            "OtherCustomerId": "c-1",
            "EditAllFields": false,
            "Name": "Lim",
            "IdType": "NRIC",
            "IdNumber": "S1234567A"
        });

        let command = mapper
            .map(
                &request,
                &TypeRef::named("EditOtherCustomerRequest"),
                &TypeRef::named("EditOtherCustomerCommand"),
            )
            .unwrap();

        assert_eq!(command["Name"], json!("Lim"));
        assert_eq!(command["IdType"], json!(null));
        assert!(command.get("UniqueCorrelationId").is_none());
    }
}

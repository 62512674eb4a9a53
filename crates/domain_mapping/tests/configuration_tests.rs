//! Integration tests for domain_mapping: profiles, hooks, validation, and mapping

use std::sync::Arc;

use serde_json::{json, Value};

use core_kernel::{TypeCatalog, TypeDescriptor, TypePair, TypeRef};
use domain_mapping::{
    no_services, FailureReason, MapperConfiguration, MapperConfigurationExpression, MappingError, Profile,
    ServiceResolver, ValueResolver,
};

fn catalog() -> Arc<TypeCatalog> {
    Arc::new(
        TypeCatalog::builder()
            .add_type(TypeDescriptor::enumeration("Product", ["UL", "UA", "VUL"]))
            .add_type(
                TypeDescriptor::class("AddressDto")
                    .property("Line1", TypeRef::string())
                    .property("PostalCode", TypeRef::string()),
            )
            .add_type(
                TypeDescriptor::class("Address")
                    .property("Line1", TypeRef::string())
                    .property("PostalCode", TypeRef::string()),
            )
            .add_type(
                TypeDescriptor::class("RecalculateRequest")
                    .property("PolicyNumber", TypeRef::string())
                    .property("InterestRate", TypeRef::decimal())
                    .property("CurrentPage", TypeRef::int32()),
            )
            .add_type(
                TypeDescriptor::class("RecalculateCommand")
                    .property("PolicyNumber", TypeRef::string())
                    .property("InterestRate", TypeRef::decimal())
                    .property("PageIndex", TypeRef::int32())
                    .property("Product", TypeRef::named("Product"))
                    .property("Source", TypeRef::string())
                    .property("Surrender", TypeRef::decimal()),
            )
            .build()
            .unwrap(),
    )
}

fn request() -> TypeRef {
    TypeRef::named("RecalculateRequest")
}

fn command() -> TypeRef {
    TypeRef::named("RecalculateCommand")
}

struct CommonProfile;

impl Profile for CommonProfile {
    fn name(&self) -> &str {
        "Common"
    }

    fn configure(&self, config: &mut MapperConfigurationExpression) {
        config
            .create_map(TypeRef::named("AddressDto"), TypeRef::named("Address"))
            .reverse_map();
    }
}

struct AccountValuesProfile;

impl Profile for AccountValuesProfile {
    fn name(&self) -> &str {
        "AccountValues"
    }

    fn configure(&self, config: &mut MapperConfigurationExpression) {
        config
            .create_map(request(), command())
            .for_member("PageIndex", |opt| opt.map_from("CurrentPage"))
            .for_member("InterestRate", |opt| {
                opt.resolve_using(TypeRef::decimal(), |source| {
                    let rate = source["InterestRate"].as_f64().unwrap_or_default();
                    json!(rate * 0.01)
                })
            })
            .for_member("Product", |opt| opt.use_value("UL"))
            .for_member("Source", |opt| opt.resolve_with("source-system", TypeRef::string()))
            .for_member("Surrender", |opt| opt.ignore());
    }
}

struct SourceSystemResolver;

impl ValueResolver for SourceSystemResolver {
    fn resolve(&self, source: &Value, _member: &str) -> Result<Value, MappingError> {
        let policy_number = source["PolicyNumber"].as_str().unwrap_or_default();
        Ok(json!(format!("admin:{policy_number}")))
    }
}

fn services() -> ServiceResolver {
    Arc::new(|name: &str| -> Option<Arc<dyn ValueResolver>> {
        match name {
            "source-system" => Some(Arc::new(SourceSystemResolver)),
            _ => None,
        }
    })
}

fn configuration() -> MapperConfiguration {
    MapperConfiguration::new(catalog(), |config| {
        config.add_profile(&CommonProfile);
        config.add_profile(&AccountValuesProfile);
    })
    .unwrap()
}

// ============= CONFIGURATION TESTS =============
mod configuration_tests {
    use super::*;

    #[test]
    fn test_profiles_record_their_names() {
        let configuration = configuration();

        assert_eq!(configuration.len(), 3);
        assert_eq!(configuration.find(&request(), &command()).unwrap().profile(), "AccountValues");
        assert_eq!(
            configuration
                .find(&TypeRef::named("Address"), &TypeRef::named("AddressDto"))
                .unwrap()
                .profile(),
            "Common"
        );
    }

    #[test]
    fn test_configuration_with_profiles_is_valid() {
        assert!(configuration().assert_configuration_is_valid().is_ok());
    }

    #[test]
    fn test_unmapped_members_are_reported() {
        let configuration = MapperConfiguration::new(catalog(), |config| {
            config.create_map(request(), command());
        })
        .unwrap();

        let Err(MappingError::InvalidConfiguration(report)) = configuration.assert_configuration_is_valid() else {
            panic!("Expected InvalidConfiguration");
        };
        let mut members: Vec<_> = report.failures().iter().map(|f| f.member.as_str()).collect();
        members.sort_unstable();
        assert_eq!(members, vec!["PageIndex", "Product", "Source", "Surrender"]);
        assert!(report
            .failures()
            .iter()
            .all(|f| f.reason == FailureReason::Unmapped));
    }

    #[test]
    fn test_for_all_maps_ignores_unmapped_members() {
        let configuration = MapperConfiguration::new(catalog(), |config| {
            config.create_map(request(), command());
            config.for_all_maps(|map, expression| {
                let resolved: Vec<String> = map.resolved_member_names().map(str::to_string).collect();
                for member in map.member_maps() {
                    if !resolved.contains(&member.destination_name) {
                        expression.for_member(member.destination_name.clone(), |opt| opt.ignore());
                    }
                }
            });
        })
        .unwrap();

        assert!(configuration.assert_configuration_is_valid().is_ok());
        let map = configuration.find(&request(), &command()).unwrap();
        assert_eq!(map.ignored_member_names().count(), 4);
    }

    #[test]
    fn test_later_hooks_see_earlier_hook_directives() {
        let configuration = MapperConfiguration::new(catalog(), |config| {
            config.create_map(request(), command());
            config.for_all_maps(|map, expression| {
                if map.pair() == &TypePair::new(request(), command()) {
                    expression.for_member("PageIndex", |opt| opt.map_from("CurrentPage"));
                }
            });
            config.for_all_maps(|map, expression| {
                for member in map.member_maps() {
                    if !member.is_resolved() {
                        expression.for_member(member.destination_name.clone(), |opt| opt.ignore());
                    }
                }
            });
        })
        .unwrap();

        let map = configuration.find(&request(), &command()).unwrap();
        assert!(map.find_member("PageIndex").unwrap().is_resolved());
        assert_eq!(map.ignored_member_names().count(), 3);
        assert!(configuration.assert_configuration_is_valid().is_ok());
    }

    #[test]
    fn test_unknown_destination_member_fails() {
        let result = MapperConfiguration::new(catalog(), |config| {
            config
                .create_map(request(), command())
                .for_member("Premium", |opt| opt.ignore());
        });

        assert!(matches!(
            result,
            Err(MappingError::UnknownDestinationMember { member, .. }) if member == "Premium"
        ));
    }

    #[test]
    fn test_summary_serializes() {
        let summary = configuration().summary();
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["type_maps"].as_array().unwrap().len(), 3);
        assert_eq!(
            json["type_maps"][1]["pair"],
            json!(TypePair::new(request(), command()).to_string())
        );
    }
}

// ============= MAPPING TESTS =============
mod mapping_tests {
    use super::*;

    #[test]
    fn test_maps_with_every_member_source() {
        let configuration = Arc::new(configuration());
        let mapper = configuration.create_mapper(services());

        let mapped = mapper
            .map(
                &json!({ "PolicyNumber": "UL-1001", "InterestRate": 4.0, "CurrentPage": 2 }),
                &request(),
                &command(),
            )
            .unwrap();

        assert_eq!(mapped["PolicyNumber"], json!("UL-1001"));
        assert_eq!(mapped["PageIndex"], json!(2));
        assert_eq!(mapped["InterestRate"], json!(0.04));
        assert_eq!(mapped["Product"], json!("UL"));
        assert_eq!(mapped["Source"], json!("admin:UL-1001"));
        assert!(mapped.get("Surrender").is_none());
    }

    #[test]
    fn test_missing_service_fails() {
        let configuration = Arc::new(configuration());
        let mapper = configuration.create_mapper(no_services());

        let result = mapper.map(&json!({ "PolicyNumber": "UL-1001" }), &request(), &command());
        assert!(matches!(result, Err(MappingError::UnresolvedService(name)) if name == "source-system"));
    }

    #[test]
    fn test_reverse_map_round_trips_address() {
        let configuration = Arc::new(configuration());
        let mapper = configuration.create_mapper(no_services());
        let address = json!({ "Line1": "1 Main St", "PostalCode": "10001" });

        let dto = mapper
            .map(&address, &TypeRef::named("Address"), &TypeRef::named("AddressDto"))
            .unwrap();
        assert_eq!(dto, address);
    }
}

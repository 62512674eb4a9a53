//! Tests for core_kernel error types

use core_kernel::error::CoreError;
use core_kernel::{TypeCatalog, TypeDescriptor, TypeRef};

#[test]
fn test_core_error_validation() {
    let error = CoreError::validation("Invalid input");

    match error {
        CoreError::Validation(msg) => assert_eq!(msg, "Invalid input"),
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_core_error_unknown_type() {
    let error = CoreError::unknown_type("PolicyDto");

    match error {
        CoreError::UnknownType(name) => assert_eq!(name, "PolicyDto"),
        _ => panic!("Expected UnknownType error"),
    }
}

#[test]
fn test_core_error_configuration() {
    let error = CoreError::configuration("missing product code");

    match error {
        CoreError::Configuration(msg) => assert!(msg.contains("product code")),
        _ => panic!("Expected Configuration error"),
    }
}

#[test]
fn test_core_error_display() {
    let error = CoreError::validation("Test error");
    let display = format!("{}", error);

    assert!(display.contains("Validation error"));
}

#[test]
fn test_generic_arity_display() {
    let error = CoreError::GenericArity {
        definition: "List".to_string(),
        expected: 1,
        actual: 2,
    };

    assert_eq!(
        error.to_string(),
        "Generic definition List expects 1 type argument(s), got 2"
    );
}

#[test]
fn test_catalog_build_reports_unknown_property_type() {
    let result = TypeCatalog::builder()
        .add_type(TypeDescriptor::class("Policy").property("Owner", TypeRef::named("Customer")))
        .build();

    assert!(matches!(result, Err(CoreError::UnknownType(name)) if name == "Customer"));
}

//! Configuration validation
//!
//! A configuration is valid when every destination member of every type map
//! is either ignored or mapped from a source whose type converts to the
//! member's type.

use core_kernel::{TypePair, TypeRef};

use crate::configuration::MapperConfiguration;
use crate::error::{FailureReason, ValidationFailure, ValidationReport};

pub(crate) fn validate(configuration: &MapperConfiguration) -> ValidationReport {
    let mut failures = Vec::new();

    for map in configuration.type_maps() {
        for member in map.member_maps().iter().filter(|m| !m.ignored) {
            let reason = match member.source_type() {
                None => Some(FailureReason::Unmapped),
                Some(source_type) => {
                    check_conversion(configuration, source_type, &member.destination_type)
                        .err()
                        .map(FailureReason::MissingTypeMap)
                }
            };

            if let Some(reason) = reason {
                failures.push(ValidationFailure {
                    type_map: map.pair().clone(),
                    member: member.destination_name.clone(),
                    reason,
                });
            }
        }
    }

    ValidationReport(failures)
}

/// Checks that values of `source` can be mapped to `destination`
///
/// On failure returns the innermost pair that has no conversion.
pub(crate) fn check_conversion(
    configuration: &MapperConfiguration,
    source: &TypeRef,
    destination: &TypeRef,
) -> Result<(), TypePair> {
    let catalog = configuration.catalog();

    if source == destination || (catalog.is_scalar(source) && catalog.is_scalar(destination)) {
        return Ok(());
    }
    if configuration.find(source, destination).is_some() {
        return Ok(());
    }

    match (source, destination) {
        (TypeRef::Nullable(inner_source), TypeRef::Nullable(inner_destination)) => {
            return check_conversion(configuration, inner_source, inner_destination);
        }
        (_, TypeRef::Nullable(inner_destination)) => {
            return check_conversion(configuration, source, inner_destination);
        }
        (TypeRef::Nullable(inner_source), _) => {
            return check_conversion(configuration, inner_source, destination);
        }
        _ => {}
    }

    if catalog.is_enumerable(source) && catalog.is_enumerable(destination) {
        if let (Some(source_element), Some(destination_element)) =
            (catalog.element_type(source), catalog.element_type(destination))
        {
            return check_conversion(configuration, &source_element, &destination_element);
        }
    }

    if let (
        TypeRef::Generic { definition: source_definition, args: source_args },
        TypeRef::Generic { definition: destination_definition, args: destination_args },
    ) = (source, destination)
    {
        if source_definition == destination_definition && source_args.len() == destination_args.len() {
            return source_args
                .iter()
                .zip(destination_args)
                .try_for_each(|(s, d)| check_conversion(configuration, s, d));
        }
    }

    Err(TypePair::new(source.clone(), destination.clone()))
}

//! Mapper
//!
//! Maps JSON documents between catalog types using a validated
//! configuration. A mapper is bound to a dependency resolver that supplies
//! named [`ValueResolver`] services for members declared with
//! `resolve_with`.

use std::fmt;
use std::sync::Arc;

use core_kernel::{Primitive, TypePair, TypeRef};
use serde_json::{Map, Number, Value};

use crate::configuration::MapperConfiguration;
use crate::error::MappingError;
use crate::type_map::{MemberSource, TypeMap};

/// A service that computes one member value from the source object
pub trait ValueResolver: Send + Sync {
    fn resolve(&self, source: &Value, member: &str) -> Result<Value, MappingError>;
}

/// Dependency-resolution callback handing out value resolvers by name
pub type ServiceResolver = Arc<dyn Fn(&str) -> Option<Arc<dyn ValueResolver>> + Send + Sync>;

/// A resolver that provides no services
pub fn no_services() -> ServiceResolver {
    Arc::new(|_| None)
}

/// Maps values according to a [`MapperConfiguration`]
#[derive(Clone)]
pub struct Mapper {
    configuration: Arc<MapperConfiguration>,
    services: ServiceResolver,
}

impl fmt::Debug for Mapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapper")
            .field("type_maps", &self.configuration.len())
            .finish_non_exhaustive()
    }
}

impl Mapper {
    pub fn new(configuration: Arc<MapperConfiguration>, services: ServiceResolver) -> Self {
        Self {
            configuration,
            services,
        }
    }

    pub fn configuration(&self) -> &MapperConfiguration {
        &self.configuration
    }

    /// Maps `source`, a value of `source_type`, to `destination_type`
    ///
    /// Ignored members are left out of the result. Null maps to null.
    ///
    /// # Errors
    ///
    /// - `MissingTypeMap` if no rule or conversion connects the types
    /// - `ValueMismatch` if the value's shape does not fit its type
    /// - `UnresolvedService` if a member needs a service the resolver lacks
    pub fn map(
        &self,
        source: &Value,
        source_type: &TypeRef,
        destination_type: &TypeRef,
    ) -> Result<Value, MappingError> {
        self.map_value(source, source_type, destination_type)
    }

    fn map_value(&self, value: &Value, source: &TypeRef, destination: &TypeRef) -> Result<Value, MappingError> {
        if value.is_null() {
            return Ok(Value::Null);
        }

        let pair = TypePair::new(source.clone(), destination.clone());
        if let Some(type_map) = self.configuration.find_type_map(&pair) {
            return self.map_object(value, type_map);
        }
        if source == destination {
            return Ok(value.clone());
        }

        let catalog = self.configuration.catalog();
        if catalog.is_scalar(source) && catalog.is_scalar(destination) {
            return self.convert_scalar(value, destination);
        }

        match (source, destination) {
            (TypeRef::Nullable(inner_source), TypeRef::Nullable(inner_destination)) => {
                return self.map_value(value, inner_source, inner_destination);
            }
            (_, TypeRef::Nullable(inner_destination)) => {
                return self.map_value(value, source, inner_destination);
            }
            (TypeRef::Nullable(inner_source), _) => {
                return self.map_value(value, inner_source, destination);
            }
            _ => {}
        }

        if catalog.is_enumerable(source) && catalog.is_enumerable(destination) {
            if let (Some(source_element), Some(destination_element)) =
                (catalog.element_type(source), catalog.element_type(destination))
            {
                let Value::Array(items) = value else {
                    return Err(MappingError::mismatch(source, "array", value));
                };
                return items
                    .iter()
                    .map(|item| self.map_value(item, &source_element, &destination_element))
                    .collect::<Result<Vec<_>, _>>()
                    .map(Value::Array);
            }
        }

        if let (TypeRef::Generic { definition: s, .. }, TypeRef::Generic { definition: d, .. }) =
            (source, destination)
        {
            if s == d {
                return self.map_structural(value, source, destination);
            }
        }

        Err(MappingError::MissingTypeMap(pair))
    }

    fn map_object(&self, value: &Value, type_map: &TypeMap) -> Result<Value, MappingError> {
        let Value::Object(fields) = value else {
            return Err(MappingError::mismatch(type_map.source_type(), "object", value));
        };

        let mut result = Map::new();
        for member in type_map.member_maps().iter().filter(|m| !m.ignored) {
            let Some(member_source) = &member.source else {
                continue;
            };

            let raw = match member_source {
                MemberSource::SourceMember { name, .. } => fields.get(name).cloned().unwrap_or(Value::Null),
                MemberSource::Function { resolver, .. } => resolver(value),
                MemberSource::Constant { value, .. } => value.clone(),
                MemberSource::Service { name, .. } => {
                    let service = (self.services)(name)
                        .ok_or_else(|| MappingError::UnresolvedService(name.clone()))?;
                    service.resolve(value, &member.destination_name)?
                }
            };

            let mapped = self.map_value(&raw, member_source.source_type(), &member.destination_type)?;
            result.insert(member.destination_name.clone(), mapped);
        }

        Ok(Value::Object(result))
    }

    /// Maps a constructed generic type property by property
    fn map_structural(&self, value: &Value, source: &TypeRef, destination: &TypeRef) -> Result<Value, MappingError> {
        let Value::Object(fields) = value else {
            return Err(MappingError::mismatch(source, "object", value));
        };

        let catalog = self.configuration.catalog();
        let mut result = Map::new();
        for property in catalog.properties_of(destination) {
            let Some(source_property) = catalog.property(source, &property.name) else {
                continue;
            };
            let raw = fields.get(&property.name).cloned().unwrap_or(Value::Null);
            let mapped = self.map_value(&raw, &source_property.ty, &property.ty)?;
            result.insert(property.name, mapped);
        }

        Ok(Value::Object(result))
    }

    fn convert_scalar(&self, value: &Value, destination: &TypeRef) -> Result<Value, MappingError> {
        match destination {
            TypeRef::Nullable(inner) => self.convert_scalar(value, inner),
            TypeRef::String => match value {
                Value::String(_) => Ok(value.clone()),
                Value::Number(number) => Ok(Value::String(number.to_string())),
                Value::Bool(flag) => Ok(Value::String(flag.to_string())),
                other => Err(MappingError::mismatch(destination, "scalar", other)),
            },
            TypeRef::Primitive(Primitive::Bool) => match value {
                Value::Bool(_) => Ok(value.clone()),
                Value::String(text) => text
                    .parse::<bool>()
                    .map(Value::Bool)
                    .map_err(|_| MappingError::mismatch(destination, "boolean", value)),
                other => Err(MappingError::mismatch(destination, "boolean", other)),
            },
            TypeRef::Primitive(primitive) if primitive.is_numeric() => match value {
                Value::Number(_) => Ok(value.clone()),
                Value::String(text) => parse_number(text)
                    .map(Value::Number)
                    .ok_or_else(|| MappingError::mismatch(destination, "number", value)),
                other => Err(MappingError::mismatch(destination, "number", other)),
            },
            TypeRef::Named(_) => {
                let variants = self
                    .configuration
                    .catalog()
                    .enum_variants(destination)
                    .unwrap_or_default();
                match value {
                    Value::String(text) if variants.iter().any(|v| v == text) => Ok(value.clone()),
                    Value::Number(number) => number
                        .as_u64()
                        .and_then(|index| usize::try_from(index).ok())
                        .and_then(|index| variants.get(index))
                        .map(|variant| Value::String(variant.clone()))
                        .ok_or_else(|| MappingError::mismatch(destination, "enum variant", value)),
                    other => Err(MappingError::mismatch(destination, "enum variant", other)),
                }
            }
            _ => Ok(value.clone()),
        }
    }
}

fn parse_number(text: &str) -> Option<Number> {
    if let Ok(integer) = text.trim().parse::<i64>() {
        return Some(Number::from(integer));
    }
    text.trim().parse::<f64>().ok().and_then(Number::from_f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{TypeCatalog, TypeDescriptor};
    use serde_json::json;

    fn catalog() -> Arc<TypeCatalog> {
        Arc::new(
            TypeCatalog::builder()
                .add_type(TypeDescriptor::enumeration("Gender", ["Male", "Female"]))
                .add_type(
                    TypeDescriptor::class("CustomerDto")
                        .property("Name", TypeRef::string())
                        .property("Age", TypeRef::int32())
                        .property("Gender", TypeRef::string()),
                )
                .add_type(
                    TypeDescriptor::class("Customer")
                        .property("Name", TypeRef::string())
                        .property("Age", TypeRef::string())
                        .property("Gender", TypeRef::named("Gender"))
                        .property("Channel", TypeRef::string()),
                )
                .build()
                .unwrap(),
        )
    }

    fn mapper() -> Mapper {
        let configuration = Arc::new(
            MapperConfiguration::new(catalog(), |config| {
                config
                    .create_map(TypeRef::named("CustomerDto"), TypeRef::named("Customer"))
                    .for_member("Channel", |opt| opt.use_value("Agency"));
            })
            .unwrap(),
        );
        configuration.create_mapper(no_services())
    }

    #[test]
    fn test_maps_object_with_scalar_conversions() {
        let result = mapper()
            .map(
                &json!({"Name": "Tan Ah Kow", "Age": 42, "Gender": "Male"}),
                &TypeRef::named("CustomerDto"),
                &TypeRef::named("Customer"),
            )
            .unwrap();

        assert_eq!(
            result,
            json!({"Name": "Tan Ah Kow", "Age": "42", "Gender": "Male", "Channel": "Agency"})
        );
    }

    #[test]
    fn test_unknown_enum_variant_fails() {
        let result = mapper().map(
            &json!({"Name": "X", "Age": 1, "Gender": "Other"}),
            &TypeRef::named("CustomerDto"),
            &TypeRef::named("Customer"),
        );

        assert!(matches!(result, Err(MappingError::ValueMismatch { .. })));
    }

    #[test]
    fn test_enum_variant_by_index() {
        let customer = |gender: Value| {
            mapper().map(
                &json!({"Name": "X", "Age": 1, "Gender": gender}),
                &TypeRef::named("CustomerDto"),
                &TypeRef::named("Customer"),
            )
        };

        assert_eq!(customer(json!(1)).unwrap()["Gender"], json!("Female"));
        assert!(matches!(customer(json!(2)), Err(MappingError::ValueMismatch { .. })));
        assert!(matches!(customer(json!(u64::MAX)), Err(MappingError::ValueMismatch { .. })));
    }

    #[test]
    fn test_maps_lists() {
        let result = mapper()
            .map(
                &json!([{"Name": "A", "Age": 1, "Gender": "Female"}]),
                &TypeRef::list(TypeRef::named("CustomerDto")),
                &TypeRef::array(TypeRef::named("Customer")),
            )
            .unwrap();

        assert_eq!(result[0]["Gender"], json!("Female"));
    }

    #[test]
    fn test_missing_type_map() {
        let result = mapper().map(
            &json!({}),
            &TypeRef::named("Customer"),
            &TypeRef::named("CustomerDto"),
        );

        assert!(matches!(result, Err(MappingError::MissingTypeMap(_))));
    }

    #[test]
    fn test_null_maps_to_null() {
        let result = mapper()
            .map(&Value::Null, &TypeRef::named("CustomerDto"), &TypeRef::named("Customer"))
            .unwrap();
        assert!(result.is_null());
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("12"), Some(Number::from(12)));
        assert!(parse_number("12.5").is_some());
        assert!(parse_number("abc").is_none());
    }
}

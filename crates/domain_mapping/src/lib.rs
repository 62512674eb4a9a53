//! Object Mapping Library
//!
//! This crate implements the rule-based object mapper that the API tier uses
//! to translate between request contracts, use-case DTOs, and response
//! contracts.
//!
//! # Architecture
//!
//! - **Expressions**: rules are declared against a
//!   [`MapperConfigurationExpression`], usually grouped into [`Profile`]s
//! - **Type maps**: each rule resolves to a [`TypeMap`] with one
//!   [`MemberMap`] per destination property
//! - **Configuration**: [`MapperConfiguration`] is built once, is immutable,
//!   and can be validated with `assert_configuration_is_valid`
//! - **Mapper**: maps JSON documents between catalog types
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_mapping::{MapperConfiguration, no_services};
//!
//! let configuration = Arc::new(MapperConfiguration::new(catalog, |config| {
//!     config
//!         .create_map(TypeRef::named("AddressDto"), TypeRef::named("Address"))
//!         .reverse_map();
//! })?);
//! configuration.assert_configuration_is_valid()?;
//!
//! let mapper = configuration.create_mapper(no_services());
//! let address = mapper.map(&dto, &TypeRef::named("AddressDto"), &TypeRef::named("Address"))?;
//! ```

pub mod configuration;
pub mod error;
pub mod expression;
pub mod mapper;
pub mod type_map;
mod validation;

pub use configuration::{ConfigurationSummary, MapperConfiguration, TypeMapSummary};
pub use error::{FailureReason, MappingError, ValidationFailure, ValidationReport};
pub use expression::{
    AllMapsHook, MapperConfigurationExpression, MappingExpression, MemberAction, MemberDirective,
    MemberOptions, Profile, DEFAULT_PROFILE,
};
pub use mapper::{no_services, Mapper, ServiceResolver, ValueResolver};
pub use type_map::{MemberMap, MemberSource, ResolverFn, TypeMap};

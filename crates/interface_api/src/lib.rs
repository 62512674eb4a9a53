//! Application Host Wiring
//!
//! This crate wires the mapping engine into the policy administration API.
//!
//! # Architecture
//!
//! - **Contracts**: The catalog of API contracts and use case DTOs
//! - **Profiles**: Declared mapping rules, grouped by area
//! - **Resolvers**: Percentage scaling and other computed members
//! - **Startup**: Settings, configuration synthesis, and mapper creation
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{config::ApplicationSettings, startup};
//!
//! let settings = ApplicationSettings::from_env()?;
//! let configuration = Arc::new(startup::create_mapper_configuration(&settings)?);
//! configuration.assert_configuration_is_valid()?;
//! let mapper = startup::create_mapper(&configuration, &settings);
//! ```

pub mod config;
pub mod contracts;
pub mod error;
pub mod profiles;
pub mod resolvers;
pub mod startup;

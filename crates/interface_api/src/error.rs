//! Start-up error handling

use core_kernel::CoreError;
use domain_mapping::MappingError;
use thiserror::Error;

/// Errors raised while wiring the application
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Settings error: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("Contract catalog error: {0}")]
    Catalog(#[from] CoreError),

    #[error("Mapping configuration error: {0}")]
    Mapping(#[from] MappingError),
}

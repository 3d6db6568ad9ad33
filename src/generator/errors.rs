use thiserror::Error;

use crate::config::ConfigError;
use crate::models::CatalogError;
use crate::types::{Month, Year};

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Generator error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("Generator error: {0}")]
    Config(#[from] ConfigError),
    #[error("Generator error: {year}-{month:02}-{day:02} is not a calendar date")]
    InvalidDate {
        year: Year,
        month: Month,
        day: u32
    }
}

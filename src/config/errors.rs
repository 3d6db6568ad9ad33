use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::CatalogError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read catalog file [{path}]: {source}")]
    CatalogRead {
        path: PathBuf,
        source: std::io::Error
    },
    #[error("Could not parse catalog file [{path}]: {source}")]
    CatalogParse {
        path: PathBuf,
        source: toml::de::Error
    },
    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
    #[error("Sales period ends [{end}] before it starts [{start}]")]
    InvalidPeriod {
        start: NaiveDate,
        end: NaiveDate
    },
    #[error("Invalid setting [{name}]: {reason}")]
    InvalidSetting {
        name: &'static str,
        reason: String
    }
}

impl ConfigError {
    pub fn invalid_setting(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidSetting { name, reason: reason.into() }
    }
}

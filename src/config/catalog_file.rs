use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::errors::ConfigError;
use crate::models::Catalog;

/// Loads reference data from a TOML file.
///
/// Sections missing from the file keep the built-in defaults, so a file holding
/// only `[[stores]]` swaps the stores and nothing else.
pub fn load_catalog(path: &Path) -> Result<Catalog, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::CatalogRead {
        path: path.to_path_buf(),
        source
    })?;

    let catalog = parse_catalog(&content).map_err(|error| match error {
        ConfigError::CatalogParse { source, .. } => ConfigError::CatalogParse { path: path.to_path_buf(), source },
        other => other
    })?;

    debug!(
        "Loaded catalog [{}] with {} products, {} stores, {} channels",
        path.display(), catalog.products.len(), catalog.stores.len(), catalog.channels.len()
    );

    Ok(catalog)
}

pub fn parse_catalog(content: &str) -> Result<Catalog, ConfigError> {
    let catalog: Catalog = toml::from_str(content).map_err(|source| ConfigError::CatalogParse {
        path: Default::default(),
        source
    })?;

    catalog.validate()?;

    Ok(catalog)
}

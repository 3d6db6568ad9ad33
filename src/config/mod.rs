mod catalog_file;
mod errors;
mod settings;

pub use catalog_file::load_catalog;
pub use errors::ConfigError;
pub use settings::*;

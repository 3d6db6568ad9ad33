mod catalog;
mod errors;
mod transaction;

pub use catalog::{Catalog, MonthlyProduct, Product, Store};
pub use errors::CatalogError;
pub use transaction::{MonthlySale, MonthlySheet, SalesTransaction};

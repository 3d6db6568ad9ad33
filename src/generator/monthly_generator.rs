use chrono::NaiveDate;

use crate::config::MonthlyConfig;
use crate::generator::errors::GeneratorError;
use crate::models::{Catalog, MonthlyProduct, MonthlySale, MonthlySheet};
use crate::types::{Month, Quantity, Year};

pub const MONTHS_PER_YEAR: Month = 12;

const QUANTITY_CYCLE: usize = 3;

/// Builds the fixed sales pattern of the monthly workbooks.
///
/// Nothing here is random: row `i` of every month sells the `i`-th product
/// (cycling through the list) on day `i + 1`, with quantities cycling 1, 2, 3.
pub struct MonthlyGenerator {
    products: Vec<MonthlyProduct>,
    year: Year,
    rows_per_month: u32
}

impl MonthlyGenerator {
    pub fn new(catalog: &Catalog, config: &MonthlyConfig) -> Result<Self, GeneratorError> {
        catalog.validate()?;
        config.validate()?;

        Ok(Self {
            products: catalog.monthly_products.clone(),
            year: config.year,
            rows_per_month: config.rows_per_month
        })
    }

    pub fn year(&self) -> Year {
        self.year
    }

    pub fn sheet(&self, month: Month) -> Result<MonthlySheet, GeneratorError> {
        let rows = (0..self.rows_per_month as usize)
            .map(|index| self.sale(month, index))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(MonthlySheet { month, rows })
    }

    /// One sheet per month, January first.
    pub fn sheets(&self) -> impl Iterator<Item = Result<MonthlySheet, GeneratorError>> + '_ {
        (1..=MONTHS_PER_YEAR).map(move |month| self.sheet(month))
    }

    fn sale(&self, month: Month, index: usize) -> Result<MonthlySale, GeneratorError> {
        let day = index as u32 + 1;
        let date = NaiveDate::from_ymd_opt(self.year, month, day)
            .ok_or(GeneratorError::InvalidDate { year: self.year, month, day })?;

        let product = &self.products[index % self.products.len()];

        Ok(MonthlySale {
            date,
            product_code: product.code.clone(),
            quantity: (index % QUANTITY_CYCLE) as Quantity + 1,
            price: product.price
        })
    }
}

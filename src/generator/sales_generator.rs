use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

use crate::config::{SalesConfig, SalesPeriod};
use crate::generator::errors::GeneratorError;
use crate::models::{Catalog, SalesTransaction};
use crate::types::{DiscountPercent, Quantity, TransactionNumber};

/// Number given to the first generated transaction (`TXN1000`).
pub const FIRST_TRANSACTION_NUMBER: TransactionNumber = 1000;

/// Endless, reproducible stream of synthetic sales.
///
/// Every draw comes from one PCG stream seeded from the configured seed, so a
/// given seed, catalog and config always yield the same sequence.
pub struct SalesGenerator {
    catalog: Catalog,
    discounts: Vec<DiscountPercent>,
    period: SalesPeriod,
    max_quantity: Quantity,
    rng: Pcg64Mcg,
    next_number: TransactionNumber
}

impl SalesGenerator {
    /// # Errors
    /// Returns `GeneratorError` if the catalog or the config fails validation.
    pub fn new(catalog: Catalog, config: &SalesConfig) -> Result<Self, GeneratorError> {
        catalog.validate()?;
        config.validate()?;

        let discounts = config.discounts.clone()
            .unwrap_or_else(|| catalog.discounts.clone());

        Ok(Self {
            catalog,
            discounts,
            period: config.period,
            max_quantity: config.max_quantity,
            rng: Pcg64Mcg::seed_from_u64(config.seed),
            next_number: FIRST_TRANSACTION_NUMBER
        })
    }

    pub fn period(&self) -> SalesPeriod {
        self.period
    }
}

impl Iterator for SalesGenerator {
    type Item = SalesTransaction;

    fn next(&mut self) -> Option<Self::Item> {
        let product = self.catalog.products.choose(&mut self.rng)?;
        let store = self.catalog.stores.choose(&mut self.rng)?;
        let channel = self.catalog.channels.choose(&mut self.rng)?;
        let offset = self.rng.gen_range(0..=self.period.span_days());
        let date = self.period.date_at(offset)?;
        let quantity = self.rng.gen_range(1..=self.max_quantity);
        let discount = *self.discounts.choose(&mut self.rng)?;

        let transaction = SalesTransaction::new(self.next_number, date, product, store, channel, quantity, discount);
        self.next_number = self.next_number.checked_add(1)?;

        Some(transaction)
    }
}

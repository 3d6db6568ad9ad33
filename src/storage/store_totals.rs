use rust_decimal::Decimal;

use crate::models::SalesTransaction;

/// Running totals of the sales booked by one store.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreTotals {
    pub store_id: String,
    pub store_name: String,
    pub transactions: usize,
    pub units: u64,
    pub sales: Decimal,
    pub cost: Decimal
}

impl StoreTotals {
    pub fn new(store_id: &str, store_name: &str) -> Self {
        Self {
            store_id: store_id.to_string(),
            store_name: store_name.to_string(),
            transactions: 0,
            units: 0,
            sales: Decimal::ZERO,
            cost: Decimal::ZERO
        }
    }

    pub fn add(&mut self, transaction: &SalesTransaction) {
        self.transactions += 1;
        self.units += u64::from(transaction.quantity);
        self.sales += transaction.sales_amount;
        self.cost += transaction.cost_amount;
    }

    /// Gross margin: discounted sales minus cost.
    pub fn margin(&self) -> Decimal {
        self.sales - self.cost
    }
}

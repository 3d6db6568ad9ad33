mod sales_ledger;
mod store_totals;

use crate::models::SalesTransaction;

pub use sales_ledger::SalesLedger;
pub use store_totals::StoreTotals;

pub trait Ledger: Send + Sync + 'static {
    fn record(&self, transaction: &SalesTransaction);
    fn load(&self, store_id: &str) -> Option<StoreTotals>;
}

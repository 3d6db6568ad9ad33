use crate::models::SalesTransaction;
use crate::storage::{Ledger, StoreTotals};
use dashmap::DashMap;
use std::sync::Arc;

pub struct SalesLedger {
    totals: Arc<DashMap<String, StoreTotals>>
}

impl SalesLedger {
    pub fn new() -> Self {
        Self {
            totals: Arc::new(DashMap::new())
        }
    }

    /// Copies every store's totals, ordered by store id.
    pub fn snapshot(&self) -> Vec<StoreTotals> {
        let mut totals: Vec<StoreTotals> = self.totals.iter().map(|entry| entry.value().clone()).collect();
        totals.sort_by(|left, right| left.store_id.cmp(&right.store_id));
        totals
    }

    pub fn transaction_count(&self) -> usize {
        self.totals.iter().map(|entry| entry.transactions).sum()
    }
}

impl Default for SalesLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger for SalesLedger {
    fn record(&self, transaction: &SalesTransaction) {
        self.totals.entry(transaction.store_id.clone())
            .or_insert_with(|| StoreTotals::new(&transaction.store_id, &transaction.store_name))
            .add(transaction);
    }

    fn load(&self, store_id: &str) -> Option<StoreTotals> {
        self.totals.get(store_id).map(|entry| entry.value().clone())
    }
}

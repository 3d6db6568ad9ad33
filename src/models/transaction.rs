use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Product, Store};
use crate::types::{DiscountPercent, Month, Quantity, TransactionNumber};

const TRANSACTION_ID_PREFIX: &str = "TXN";
const AMOUNT_DECIMAL_PLACES: u32 = 2;

/// Represents a single row of the TechnoRetail sales export.
///
/// Product and store attributes are denormalized into the row so the CSV can be
/// loaded as a flat fact table. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesTransaction {
    /// Display identifier, e.g. `TXN1000`.
    pub transaction_id: String,
    pub date: NaiveDate,
    pub product_sku: String,
    pub product_name: String,
    pub category: String,
    pub brand: String,
    pub store_id: String,
    pub store_name: String,
    pub region: String,
    pub channel: String,
    pub quantity: Quantity,
    pub unit_price: Decimal,
    /// Price after discount for the whole line.
    pub sales_amount: Decimal,
    /// Retailer cost for the whole line, never discounted.
    pub cost_amount: Decimal,
    pub discount_percent: DiscountPercent
}

impl SalesTransaction {
    pub fn new(
        number: TransactionNumber,
        date: NaiveDate,
        product: &Product,
        store: &Store,
        channel: &str,
        quantity: Quantity,
        discount: DiscountPercent
    ) -> Self {
        Self {
            transaction_id: format!("{TRANSACTION_ID_PREFIX}{number}"),
            date,
            product_sku: product.sku.clone(),
            product_name: product.name.clone(),
            category: product.category.clone(),
            brand: product.brand.clone(),
            store_id: store.id.clone(),
            store_name: store.name.clone(),
            region: store.region.clone(),
            channel: channel.to_string(),
            quantity,
            unit_price: product.price,
            sales_amount: sales_amount(product.price, quantity, discount),
            cost_amount: cost_amount(product.cost, quantity),
            discount_percent: discount
        }
    }
}

/// `price × quantity × (1 − discount)`, rounded half-to-even to cents.
pub fn sales_amount(unit_price: Decimal, quantity: Quantity, discount: DiscountPercent) -> Decimal {
    (unit_price * Decimal::from(quantity) * discount.factor()).round_dp(AMOUNT_DECIMAL_PLACES)
}

/// `cost × quantity`, rounded half-to-even to cents.
pub fn cost_amount(unit_cost: Decimal, quantity: Quantity) -> Decimal {
    (unit_cost * Decimal::from(quantity)).round_dp(AMOUNT_DECIMAL_PLACES)
}

/// A single line of a monthly sales workbook.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySale {
    pub date: NaiveDate,
    pub product_code: String,
    pub quantity: Quantity,
    pub price: Decimal
}

impl MonthlySale {
    /// Workbook header row, in column order.
    pub const HEADERS: [&'static str; 4] = ["Date", "ProduitID", "Quantite", "Prix"];
}

/// All sales of one month, destined for one workbook.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySheet {
    pub month: Month,
    pub rows: Vec<MonthlySale>
}

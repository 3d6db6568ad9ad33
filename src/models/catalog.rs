use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::errors::CatalogError;
use crate::types::DiscountPercent;

/// A sellable item in the TechnoRetail product range.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub sku: String,
    pub name: String,
    pub category: String,
    pub subcategory: String,
    pub brand: String,
    /// List price charged to the customer.
    pub price: Decimal,
    /// Unit cost paid by the retailer.
    pub cost: Decimal
}

/// A physical store that books sales, whatever the channel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Store {
    pub id: String,
    pub name: String,
    pub region: String,
    pub city: String
}

/// A product referenced by code in the monthly sales workbooks.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MonthlyProduct {
    pub code: String,
    pub name: String,
    pub price: Decimal
}

/// Reference data every synthetic record is drawn from.
///
/// Each list can be replaced independently from a catalog file; any list
/// left out keeps its built-in default. Duplicated entries in `discounts`
/// are meaningful: they weight the uniform draw.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub stores: Vec<Store>,
    pub channels: Vec<String>,
    pub discounts: Vec<DiscountPercent>,
    pub monthly_products: Vec<MonthlyProduct>
}

impl Catalog {
    /// Checks the invariants generators rely on to always produce a row.
    ///
    /// # Errors
    /// Returns `CatalogError` if:
    /// - Any list is empty.
    /// - A SKU, store id or monthly product code appears twice.
    /// - A price or cost is negative.
    pub fn validate(&self) -> Result<(), CatalogError> {
        check_not_empty("products", &self.products)?;
        check_not_empty("stores", &self.stores)?;
        check_not_empty("channels", &self.channels)?;
        check_not_empty("discounts", &self.discounts)?;
        check_not_empty("monthly_products", &self.monthly_products)?;

        check_unique("products", self.products.iter().map(|product| product.sku.as_str()))?;
        check_unique("stores", self.stores.iter().map(|store| store.id.as_str()))?;
        check_unique("monthly_products", self.monthly_products.iter().map(|product| product.code.as_str()))?;

        for product in &self.products {
            if product.price.is_sign_negative() || product.cost.is_sign_negative() {
                return Err(CatalogError::negative_amount("products", &product.sku));
            }
        }

        for product in &self.monthly_products {
            if product.price.is_sign_negative() {
                return Err(CatalogError::negative_amount("monthly_products", &product.code));
            }
        }

        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            products: vec![
                product("SM-G990", "Smartphone Galaxy", "Électronique", "Téléphonie", "Samsung", 89999, 65000),
                product("IP-14-128", "iPhone 14 128GB", "Électronique", "Téléphonie", "Apple", 98999, 75000),
                product("TV-LG-55", "TV LG 55\" 4K", "Électronique", "TV & Vidéo", "LG", 69999, 52000),
                product("LAP-DEL-XPS", "Laptop Dell XPS", "Informatique", "Ordinateurs", "Dell", 129999, 98000),
                product("TAB-S7", "Tablette S7", "Électronique", "Tablettes", "Samsung", 49999, 38000)
            ],
            stores: vec![
                store("PAR01", "Paris Centre", "Île-de-France", "Paris"),
                store("LYO01", "Lyon Part-Dieu", "Auvergne-Rhône-Alpes", "Lyon"),
                store("MAR01", "Marseille Vieux Port", "Provence-Alpes-Côte d'Azur", "Marseille"),
                store("BOR01", "Bordeaux Centre", "Nouvelle-Aquitaine", "Bordeaux")
            ],
            channels: vec!["Magasin".to_string(), "Web".to_string(), "Mobile".to_string()],
            discounts: vec![
                DiscountPercent::NONE,
                DiscountPercent::NONE,
                DiscountPercent::NONE,
                DiscountPercent::of::<5>(),
                DiscountPercent::of::<10>(),
                DiscountPercent::of::<15>()
            ],
            monthly_products: vec![
                monthly_product("P001", "Smartphone", 299),
                monthly_product("P002", "Tablette", 499),
                monthly_product("P003", "Casque", 79)
            ]
        }
    }
}

fn check_not_empty<T>(list: &'static str, entries: &[T]) -> Result<(), CatalogError> {
    if entries.is_empty() {
        return Err(CatalogError::empty_list(list));
    }

    Ok(())
}

fn check_unique<'a>(list: &'static str, keys: impl Iterator<Item = &'a str>) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();

    for key in keys {
        if !seen.insert(key) {
            return Err(CatalogError::duplicate_key(list, key));
        }
    }

    Ok(())
}

fn product(sku: &str, name: &str, category: &str, subcategory: &str, brand: &str, price_cents: i64, cost_cents: i64) -> Product {
    Product {
        sku: sku.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        subcategory: subcategory.to_string(),
        brand: brand.to_string(),
        price: Decimal::new(price_cents, 2),
        cost: Decimal::new(cost_cents, 2)
    }
}

fn store(id: &str, name: &str, region: &str, city: &str) -> Store {
    Store {
        id: id.to_string(),
        name: name.to_string(),
        region: region.to_string(),
        city: city.to_string()
    }
}

fn monthly_product(code: &str, name: &str, price: i64) -> MonthlyProduct {
    MonthlyProduct {
        code: code.to_string(),
        name: name.to_string(),
        price: Decimal::from(price)
    }
}

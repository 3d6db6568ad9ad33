use super::monthly_generator::MONTHS_PER_YEAR;
use super::sales_generator::FIRST_TRANSACTION_NUMBER;
use super::{GeneratorError, MonthlyGenerator, SalesGenerator};

use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::config::{ConfigError, MonthlyConfig, SalesConfig, SalesPeriod};
use crate::models::{Catalog, Product, SalesTransaction, Store};
use crate::types::DiscountPercent;

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| anyhow!("invalid date {year}-{month}-{day}"))
}

fn find_product<'a>(catalog: &'a Catalog, sku: &str) -> Result<&'a Product> {
    catalog.products.iter()
        .find(|product| product.sku == sku)
        .ok_or_else(|| anyhow!("unknown sku {sku}"))
}

fn find_store<'a>(catalog: &'a Catalog, id: &str) -> Result<&'a Store> {
    catalog.stores.iter()
        .find(|store| store.id == id)
        .ok_or_else(|| anyhow!("unknown store {id}"))
}

fn sales_config(seed: u64) -> Result<SalesConfig> {
    Ok(SalesConfig {
        count: 500,
        seed,
        period: SalesPeriod::new(date(2023, 1, 1)?, date(2024, 6, 30)?)?,
        max_quantity: 3,
        discounts: None,
        output: PathBuf::from("unused.csv")
    })
}

fn generate(seed: u64, count: usize) -> Result<Vec<SalesTransaction>> {
    Ok(SalesGenerator::new(Catalog::default(), &sales_config(seed)?)?.take(count).collect())
}

#[test]
fn test_sales_generator_numbers_transactions_sequentially() -> Result<()> {
    let transactions = generate(42, 5)?;
    let ids: Vec<&str> = transactions.iter().map(|transaction| transaction.transaction_id.as_str()).collect();

    assert_eq!(FIRST_TRANSACTION_NUMBER, 1000);
    assert_eq!(ids, vec!["TXN1000", "TXN1001", "TXN1002", "TXN1003", "TXN1004"]);

    Ok(())
}

#[test]
fn test_sales_generator_is_reproducible_for_a_seed() -> Result<()> {
    assert_eq!(generate(7, 200)?, generate(7, 200)?);
    assert_ne!(generate(7, 200)?, generate(8, 200)?);

    Ok(())
}

#[test]
fn test_sales_generator_draws_only_catalog_values() -> Result<()> {
    let catalog = Catalog::default();
    let config = sales_config(3)?;
    let discounts: HashSet<DiscountPercent> = catalog.discounts.iter().copied().collect();

    for transaction in SalesGenerator::new(catalog.clone(), &config)?.take(500) {
        let product = find_product(&catalog, &transaction.product_sku)?;
        let store = find_store(&catalog, &transaction.store_id)?;

        assert_eq!(transaction.product_name, product.name);
        assert_eq!(transaction.category, product.category);
        assert_eq!(transaction.brand, product.brand);
        assert_eq!(transaction.unit_price, product.price);
        assert_eq!(transaction.store_name, store.name);
        assert_eq!(transaction.region, store.region);
        assert!(catalog.channels.contains(&transaction.channel));
        assert!(discounts.contains(&transaction.discount_percent));
        assert!((1..=3).contains(&transaction.quantity));
        assert!(config.period.contains(transaction.date));
        let expected = (product.price * Decimal::from(transaction.quantity) * transaction.discount_percent.factor()).round_dp(2);
        assert_eq!(transaction.sales_amount, expected);
        assert_eq!(transaction.cost_amount, product.cost * Decimal::from(transaction.quantity));
    }

    Ok(())
}

#[test]
fn test_sales_generator_covers_every_store_and_channel() -> Result<()> {
    let transactions = generate(11, 500)?;

    let stores: HashSet<&str> = transactions.iter().map(|transaction| transaction.store_id.as_str()).collect();
    let channels: HashSet<&str> = transactions.iter().map(|transaction| transaction.channel.as_str()).collect();

    assert_eq!(stores.len(), 4);
    assert_eq!(channels.len(), 3);

    Ok(())
}

#[test]
fn test_sales_generator_honors_overrides() -> Result<()> {
    let mut config = sales_config(5)?;
    config.discounts = Some(vec![DiscountPercent::new(50)?]);
    config.max_quantity = 1;
    config.period = SalesPeriod::new(date(2024, 2, 29)?, date(2024, 2, 29)?)?;

    for transaction in SalesGenerator::new(Catalog::default(), &config)?.take(50) {
        assert_eq!(transaction.discount_percent.percent(), 50);
        assert_eq!(transaction.quantity, 1);
        assert_eq!(transaction.date, date(2024, 2, 29)?);
        assert_eq!(transaction.sales_amount, (transaction.unit_price / Decimal::from(2)).round_dp(2));
    }

    Ok(())
}

#[test]
fn test_sales_generator_rejects_invalid_setup() -> Result<()> {
    let mut catalog = Catalog::default();
    catalog.products.clear();
    assert!(matches!(SalesGenerator::new(catalog, &sales_config(1)?), Err(GeneratorError::Catalog(_))));

    let mut config = sales_config(1)?;
    config.count = 0;
    assert!(matches!(
        SalesGenerator::new(Catalog::default(), &config),
        Err(GeneratorError::Config(ConfigError::InvalidSetting { name: "count", .. }))
    ));

    Ok(())
}

#[test]
fn test_monthly_generator_reproduces_fixed_pattern() -> Result<()> {
    let generator = MonthlyGenerator::new(&Catalog::default(), &MonthlyConfig::default())?;
    let sheet = generator.sheet(3)?;

    assert_eq!(sheet.month, 3);
    assert_eq!(sheet.rows.len(), 10);

    let codes: Vec<&str> = sheet.rows.iter().map(|row| row.product_code.as_str()).collect();
    assert_eq!(codes, vec!["P001", "P002", "P003", "P001", "P002", "P003", "P001", "P002", "P003", "P001"]);

    let quantities: Vec<u32> = sheet.rows.iter().map(|row| row.quantity).collect();
    assert_eq!(quantities, vec![1, 2, 3, 1, 2, 3, 1, 2, 3, 1]);

    assert_eq!(sheet.rows[0].date, date(2024, 3, 1)?);
    assert_eq!(sheet.rows[9].date, date(2024, 3, 10)?);
    assert_eq!(sheet.rows[1].price, Decimal::from(499));
    assert_eq!(sheet.rows[2].price, Decimal::from(79));

    Ok(())
}

#[test]
fn test_monthly_generator_yields_twelve_months_in_order() -> Result<()> {
    let config = MonthlyConfig { year: 2023, rows_per_month: 28, ..MonthlyConfig::default() };
    let generator = MonthlyGenerator::new(&Catalog::default(), &config)?;
    let sheets = generator.sheets().collect::<Result<Vec<_>, _>>()?;

    assert_eq!(generator.year(), 2023);
    assert_eq!(sheets.len(), MONTHS_PER_YEAR as usize);

    for (index, sheet) in sheets.iter().enumerate() {
        assert_eq!(sheet.month, index as u32 + 1);
        assert_eq!(sheet.rows.len(), 28);
        assert!(sheet.rows.iter().all(|row| row.date.month() == sheet.month && row.date.year() == 2023));
    }

    Ok(())
}

#[test]
fn test_monthly_generator_reports_impossible_months() -> Result<()> {
    let generator = MonthlyGenerator::new(&Catalog::default(), &MonthlyConfig::default())?;

    assert!(matches!(generator.sheet(13), Err(GeneratorError::InvalidDate { month: 13, .. })));

    Ok(())
}

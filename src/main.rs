mod config;
mod engine;
mod generator;
mod models;
mod storage;
mod types;

use std::io::{stderr, stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::config::{
    load_catalog, MonthlyConfig, SalesConfig, SalesPeriod, DEFAULT_FILE_PREFIX, DEFAULT_MAX_QUANTITY,
    DEFAULT_MONTHLY_DIR, DEFAULT_PERIOD_END, DEFAULT_PERIOD_START, DEFAULT_ROWS_PER_MONTH, DEFAULT_SALES_COUNT,
    DEFAULT_SALES_OUTPUT, DEFAULT_SEED, DEFAULT_YEAR
};
use crate::engine::ExportEngine;
use crate::generator::{MonthlyGenerator, SalesGenerator};
use crate::models::Catalog;
use crate::storage::{Ledger, SalesLedger, StoreTotals};
use crate::types::{DiscountPercent, Quantity, Year};

/// Synthesizes fake retail transactions for analytics exercises.
#[derive(Parser)]
#[command(name = "retail-demo-data", version, about, long_about = None)]
struct Cli {
    /// Log level written to stderr: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "info", value_parser = parse_log_level)]
    log_level: LevelFilter,

    /// TOML file replacing any of the built-in reference lists
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command
}

#[derive(Subcommand)]
enum Command {
    /// Generate the TechnoRetail sales transactions as one CSV file
    Sales(SalesArgs),
    /// Generate one sales workbook per month of a year
    Monthly(MonthlyArgs),
    /// Generate both data sets
    All {
        #[command(flatten)]
        sales: SalesArgs,
        #[command(flatten)]
        monthly: MonthlyArgs
    }
}

#[derive(Args)]
struct SalesArgs {
    /// Number of transactions to generate
    #[arg(long, default_value_t = DEFAULT_SALES_COUNT)]
    count: usize,

    /// Seed of the random generator; the same seed yields the same file
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// First possible sale date (YYYY-MM-DD)
    #[arg(long, default_value = DEFAULT_PERIOD_START)]
    start: NaiveDate,

    /// Last possible sale date (YYYY-MM-DD)
    #[arg(long, default_value = DEFAULT_PERIOD_END)]
    end: NaiveDate,

    /// Largest quantity on a single transaction
    #[arg(long, default_value_t = DEFAULT_MAX_QUANTITY)]
    max_quantity: Quantity,

    /// Comma separated discount percentages drawn uniformly, repeats add weight
    #[arg(long, value_delimiter = ',')]
    discounts: Option<Vec<DiscountPercent>>,

    /// CSV file to write
    #[arg(long, default_value = DEFAULT_SALES_OUTPUT)]
    output: PathBuf
}

#[derive(Args)]
struct MonthlyArgs {
    /// Calendar year of the workbooks
    #[arg(long, default_value_t = DEFAULT_YEAR)]
    year: Year,

    /// Sales per month, one per day starting on the 1st
    #[arg(long, default_value_t = DEFAULT_ROWS_PER_MONTH)]
    rows_per_month: u32,

    /// Directory receiving the workbooks, created when missing
    #[arg(long, default_value = DEFAULT_MONTHLY_DIR)]
    output_dir: PathBuf,

    /// Workbook file name prefix
    #[arg(long, default_value = DEFAULT_FILE_PREFIX)]
    prefix: String
}

impl SalesArgs {
    fn into_config(self) -> Result<SalesConfig> {
        Ok(SalesConfig {
            count: self.count,
            seed: self.seed,
            period: SalesPeriod::new(self.start, self.end)?,
            max_quantity: self.max_quantity,
            discounts: self.discounts,
            output: self.output
        })
    }
}

impl MonthlyArgs {
    fn into_config(self) -> MonthlyConfig {
        MonthlyConfig {
            year: self.year,
            rows_per_month: self.rows_per_month,
            output_dir: self.output_dir,
            file_prefix: self.prefix
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.log_level);

    let catalog = match &cli.catalog {
        Some(path) => load_catalog(path)?,
        None => Catalog::default()
    };

    let ledger = Arc::new(SalesLedger::new());
    let engine = ExportEngine::new(ledger.clone());

    let timer = Instant::now();

    match cli.command {
        Command::Sales(sales) => {
            run_sales(&engine, &ledger, &catalog, sales.into_config()?).await?;
        }
        Command::Monthly(monthly) => {
            run_monthly(&engine, &catalog, monthly.into_config()).await?;
        }
        Command::All { sales, monthly } => {
            run_sales(&engine, &ledger, &catalog, sales.into_config()?).await?;
            run_monthly(&engine, &catalog, monthly.into_config()).await?;
        }
    }

    let duration = timer.elapsed();
    info!("Generated data sets in: {duration:?}");

    Ok(())
}

fn parse_log_level(level: &str) -> Result<LevelFilter, String> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(LevelFilter::TRACE),
        "debug" => Ok(LevelFilter::DEBUG),
        "info" => Ok(LevelFilter::INFO),
        "warn" => Ok(LevelFilter::WARN),
        "error" => Ok(LevelFilter::ERROR),
        _ => Err(format!("invalid log level '{level}', expected one of: error, warn, info, debug, trace"))
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the summary, logging stays on stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

async fn run_sales(engine: &ExportEngine, ledger: &SalesLedger, catalog: &Catalog, config: SalesConfig) -> Result<()> {
    let generator = SalesGenerator::new(catalog.clone(), &config)?;
    let period = generator.period();

    info!(
        "Generating {} transactions between {} and {} with seed {}",
        config.count, period.start(), period.end(), config.seed
    );

    let report = engine.export_sales(generator, config.count, &config.output).await
        .with_context(|| format!("Could not export sales to [{}]", config.output.display()))?;

    debug!("Ledger holds {} transactions across {} stores", ledger.transaction_count(), ledger.snapshot().len());

    write_summary_to_stdout(&report.path, report.rows, catalog, ledger)?;

    Ok(())
}

async fn run_monthly(engine: &ExportEngine, catalog: &Catalog, config: MonthlyConfig) -> Result<()> {
    let generator = MonthlyGenerator::new(catalog, &config)?;

    let paths = engine.export_monthly(&generator, &config).await
        .with_context(|| format!("Could not export workbooks to [{}]", config.output_dir.display()))?;

    let mut output = BufWriter::new(stdout().lock());

    for path in &paths {
        writeln!(output, "created: {}", path.display())?;
    }

    writeln!(output, "{} workbooks created in: {}", paths.len(), config.output_dir.display())?;
    output.flush()?;

    Ok(())
}

fn write_summary_to_stdout(path: &Path, rows: usize, catalog: &Catalog, ledger: &impl Ledger) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    writeln!(output, "{rows} transactions written to: {}", path.display())?;
    writeln!(output, "store_id,store_name,transactions,units,sales,cost,margin")?;

    //NOTE: Stores follow catalog order, a store without sales still gets a zero line
    for store in &catalog.stores {
        let totals = ledger.load(&store.id)
            .unwrap_or_else(|| StoreTotals::new(&store.id, &store.name));

        writeln!(
            output,
            "{},{},{},{},{},{},{}",
            totals.store_id,
            totals.store_name,
            totals.transactions,
            totals.units,
            totals.sales,
            totals.cost,
            totals.margin()
        )?;
    }

    output.flush()?;

    Ok(())
}

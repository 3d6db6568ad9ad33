use crate::config::MonthlyConfig;
use crate::engine::errors::ExportError;
use crate::generator::{MonthlyGenerator, SalesGenerator};
use crate::models::{MonthlySale, MonthlySheet, SalesTransaction};
use crate::storage::{Ledger, SalesLedger};
use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Format, FormatBorder, Workbook};
use std::fs::create_dir_all;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::spawn;
use tokio::sync::mpsc;
use tokio::task::{spawn_blocking, JoinHandle};
use tracing::{debug, info};

const SHEET_NAME: &str = "Sheet1";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Outcome of a CSV export.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportReport {
    pub path: PathBuf,
    pub rows: usize
}

/// Writes generated data sets to disk.
pub struct ExportEngine {
    ledger: Arc<SalesLedger>,
    backpressure: usize
}

impl ExportEngine {
    /// Creates a new engine recording sales totals into the provided ledger.
    pub fn new(ledger: Arc<SalesLedger>) -> Self {
        Self {
            ledger,
            backpressure: 256
        }
    }

    /// Streams `count` generated transactions into a CSV file at `path`.
    ///
    /// The parent directory is created when missing and an existing file is replaced.
    pub async fn export_sales(&self, generator: SalesGenerator, count: usize, path: &Path) -> Result<ExportReport, ExportError> {
        let (sender, receiver) = mpsc::channel::<SalesTransaction>(self.backpressure);
        let producer = self.spawn_generator(generator, count, sender);
        let sink = self.spawn_csv_writer(path.to_path_buf(), receiver, self.ledger.clone());

        let written = sink.await?;
        producer.await?;
        let rows = written?;

        if rows != count {
            return Err(ExportError::Incomplete { expected: count, written: rows });
        }

        info!("Wrote {rows} transactions to [{}]", path.display());

        Ok(ExportReport { path: path.to_path_buf(), rows })
    }

    /// Writes one workbook per month into the configured directory, January first.
    pub async fn export_monthly(&self, generator: &MonthlyGenerator, config: &MonthlyConfig) -> Result<Vec<PathBuf>, ExportError> {
        let directory = config.output_dir.clone();
        spawn_blocking(move || create_dir_all(directory)).await??;

        info!("Writing {} monthly workbooks to [{}]", generator.year(), config.output_dir.display());

        let mut paths = Vec::new();

        for sheet in generator.sheets() {
            let sheet = sheet?;
            let path = config.workbook_path(sheet.month);
            let target = path.clone();

            //NOTE: Months are written one after another, the workbook writer is synchronous
            spawn_blocking(move || write_workbook(&target, &sheet)).await??;

            info!("Created workbook [{}]", path.display());
            paths.push(path);
        }

        Ok(paths)
    }

    fn spawn_generator(&self, generator: SalesGenerator, count: usize, sender: mpsc::Sender<SalesTransaction>) -> JoinHandle<()> {
        spawn(async move {
            for transaction in generator.take(count) {
                if sender.send(transaction).await.is_err() {
                    debug!("CSV writer closed its channel, stopping generation");
                    break;
                }
            }
        })
    }

    fn spawn_csv_writer<L: Ledger>(&self, path: PathBuf, mut receiver: mpsc::Receiver<SalesTransaction>, ledger: Arc<L>) -> JoinHandle<Result<usize, ExportError>> {
        spawn_blocking(move || {
            if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
                create_dir_all(parent)?;
            }

            let mut writer = csv::Writer::from_path(&path)?;
            let mut rows = 0;

            while let Some(transaction) = receiver.blocking_recv() {
                writer.serialize(&transaction)?;
                ledger.record(&transaction);
                rows += 1;
            }

            writer.flush()?;

            Ok(rows)
        })
    }
}

fn write_workbook(path: &Path, sheet: &MonthlySheet) -> Result<(), ExportError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold().set_border(FormatBorder::Thin);
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (column, title) in MonthlySale::HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, column as u16, *title, &header)?;
    }

    for (index, sale) in sheet.rows.iter().enumerate() {
        let row = index as u32 + 1;
        let price = sale.price.to_f64().ok_or(ExportError::AmountConversion(sale.price))?;

        worksheet.write_string(row, 0, sale.date.format(DATE_FORMAT).to_string())?;
        worksheet.write_string(row, 1, sale.product_code.as_str())?;
        worksheet.write_number(row, 2, sale.quantity)?;
        worksheet.write_number(row, 3, price)?;
    }

    worksheet.autofit();
    workbook.save(path)?;

    debug!("Month {:02} written with {} rows", sheet.month, sheet.rows.len());

    Ok(())
}

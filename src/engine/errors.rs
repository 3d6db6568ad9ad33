use rust_decimal::Decimal;
use rust_xlsxwriter::XlsxError;
use thiserror::Error;
use tokio::task::JoinError;

use crate::generator::GeneratorError;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Export I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Export CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Export workbook error: {0}")]
    Workbook(#[from] XlsxError),
    #[error(transparent)]
    Generator(#[from] GeneratorError),
    #[error("Export task failed: {0}")]
    Task(#[from] JoinError),
    #[error("Amount [{0}] cannot be written as a spreadsheet number")]
    AmountConversion(Decimal),
    #[error("Expected {expected} rows but the generator stopped after {written}")]
    Incomplete {
        expected: usize,
        written: usize
    }
}

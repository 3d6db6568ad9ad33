use std::path::{Path, PathBuf};

use chrono::{Days, NaiveDate};

use crate::config::errors::ConfigError;
use crate::types::{DiscountPercent, Month, Quantity, Year};

pub const DEFAULT_SALES_COUNT: usize = 1000;
pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_PERIOD_START: &str = "2023-01-01";
pub const DEFAULT_PERIOD_END: &str = "2024-06-30";
pub const DEFAULT_MAX_QUANTITY: Quantity = 3;
pub const DEFAULT_SALES_OUTPUT: &str = "data/technoretail_sales.csv";

pub const DEFAULT_YEAR: Year = 2024;
pub const DEFAULT_ROWS_PER_MONTH: u32 = 10;
pub const DEFAULT_MONTHLY_DIR: &str = "Ventes 2024";
pub const DEFAULT_FILE_PREFIX: &str = "Ventes";

//NOTE: Row n of a month is dated on day n, so no month may need more days than February has
const MAX_ROWS_PER_MONTH: u32 = 28;

/// Inclusive range of dates sales may fall on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalesPeriod {
    start: NaiveDate,
    end: NaiveDate
}

impl SalesPeriod {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ConfigError> {
        if end < start {
            return Err(ConfigError::InvalidPeriod { start, end });
        }

        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days between start and end; a single-day period spans 0.
    pub fn span_days(&self) -> u64 {
        (self.end - self.start).num_days().unsigned_abs()
    }

    /// The date `offset` days after the start, if it is still inside the period.
    pub fn date_at(&self, offset: u64) -> Option<NaiveDate> {
        self.start.checked_add_days(Days::new(offset))
            .filter(|date| self.contains(*date))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Options of the TechnoRetail sales export.
#[derive(Debug, Clone)]
pub struct SalesConfig {
    pub count: usize,
    pub seed: u64,
    pub period: SalesPeriod,
    pub max_quantity: Quantity,
    /// Replaces the catalog's discount list when set.
    pub discounts: Option<Vec<DiscountPercent>>,
    pub output: PathBuf
}

impl SalesConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::invalid_setting("count", "at least one transaction is required"));
        }

        if self.max_quantity == 0 {
            return Err(ConfigError::invalid_setting("max_quantity", "must be at least 1"));
        }

        if self.discounts.as_ref().is_some_and(|discounts| discounts.is_empty()) {
            return Err(ConfigError::invalid_setting("discounts", "an override needs at least one value"));
        }

        Ok(())
    }
}

/// Options of the monthly workbook export.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyConfig {
    pub year: Year,
    pub rows_per_month: u32,
    pub output_dir: PathBuf,
    pub file_prefix: String
}

impl MonthlyConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows_per_month == 0 || self.rows_per_month > MAX_ROWS_PER_MONTH {
            return Err(ConfigError::invalid_setting(
                "rows_per_month",
                format!("must be between 1 and {MAX_ROWS_PER_MONTH}, got {}", self.rows_per_month)
            ));
        }

        if self.file_prefix.trim().is_empty() {
            return Err(ConfigError::invalid_setting("file_prefix", "must not be blank"));
        }

        if NaiveDate::from_ymd_opt(self.year, 1, 1).is_none() {
            return Err(ConfigError::invalid_setting("year", format!("{} is outside the supported calendar", self.year)));
        }

        Ok(())
    }

    /// `{dir}/{prefix}_{MM}_{YEAR}.xlsx`
    pub fn workbook_path(&self, month: Month) -> PathBuf {
        self.output_dir.join(format!("{}_{:02}_{}.xlsx", self.file_prefix, month, self.year))
    }
}

impl Default for MonthlyConfig {
    fn default() -> Self {
        Self {
            year: DEFAULT_YEAR,
            rows_per_month: DEFAULT_ROWS_PER_MONTH,
            output_dir: Path::new(DEFAULT_MONTHLY_DIR).to_path_buf(),
            file_prefix: DEFAULT_FILE_PREFIX.to_string()
        }
    }
}

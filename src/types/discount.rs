use crate::types::errors::DiscountError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const MAX_PERCENT: u8 = 100;

/// A whole-number discount applied to the list price of a sale.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DiscountPercent(u8);

impl DiscountPercent {
    pub const NONE: DiscountPercent = DiscountPercent(0);

    pub fn new(percent: u8) -> Result<Self, DiscountError> {
        if percent > MAX_PERCENT {
            return Err(DiscountError::OutOfRange(percent));
        }

        Ok(DiscountPercent(percent))
    }

    /// Builds a discount from a literal, rejecting values above 100% at compile time.
    pub const fn of<const PERCENT: u8>() -> Self {
        const { assert!(PERCENT <= MAX_PERCENT, "discount above 100%") };
        DiscountPercent(PERCENT)
    }

    pub fn percent(self) -> u8 {
        self.0
    }

    /// The multiplier left after the discount, e.g. `0.85` for 15%.
    pub fn factor(self) -> Decimal {
        Decimal::new(i64::from(MAX_PERCENT - self.0), 2)
    }
}

impl TryFrom<u8> for DiscountPercent {
    type Error = DiscountError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        DiscountPercent::new(value)
    }
}

impl From<DiscountPercent> for u8 {
    fn from(value: DiscountPercent) -> Self {
        value.0
    }
}

impl Display for DiscountPercent {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.percent())
    }
}

impl FromStr for DiscountPercent {
    type Err = DiscountError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        let value = value.strip_suffix('%').unwrap_or(value).trim_end();

        if value.is_empty() {
            return Err(DiscountError::InvalidFormat("Value is an empty string".to_string()));
        }

        //NOTE: u8 parsing already rejects signs, fractions and anything above 255
        let percent: u8 = value.parse()?;

        DiscountPercent::new(percent)
    }
}

use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiscountError {
    #[error("Discount error: {0}")]
    InvalidFormat(String),
    #[error("Discount error: {0}")]
    ParseInt(#[from] ParseIntError),
    #[error("Discount error: {0}% is above 100%")]
    OutOfRange(u8)
}

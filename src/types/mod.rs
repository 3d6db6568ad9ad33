mod discount;
mod errors;
#[cfg(test)]
mod tests;

pub use discount::DiscountPercent;

pub type TransactionNumber = u32;
pub type Quantity = u32;
pub type Month = u32;
pub type Year = i32;

mod errors;
mod monthly_generator;
mod sales_generator;
#[cfg(test)]
mod tests;

pub use errors::GeneratorError;
pub use monthly_generator::MonthlyGenerator;
pub use sales_generator::SalesGenerator;

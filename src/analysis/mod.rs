pub mod income;

pub use income::{above_average, average_income, percentage, IncomeSummary};

pub mod household;
pub mod analysis;
pub mod guidelines;
pub mod eligibility;
pub mod report;
pub mod config;
pub mod error;
pub mod utils;

pub use error::{Result, ReportError};
pub use config::Config;

pub mod models;
pub mod loader;

pub use models::Household;
pub use loader::{load_households, parse_line, parse_reader, LoadOutcome, RejectedLine};

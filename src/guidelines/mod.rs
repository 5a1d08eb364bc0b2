pub mod region;
pub mod client;
pub mod cache;

pub use region::Region;
pub use client::{parse_income, GuidelineSource, HttpGuidelineSource};
pub use cache::{GuidelineClient, Lookup};

pub mod poverty;
pub mod formula;

pub use poverty::{assess_poverty, PovertyAssessment, PovertyRow};
pub use formula::{Eligibility, EligibilityAssessment, EligibilityModel, RegionFormula};

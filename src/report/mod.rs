pub mod generator;

use tracing::{info, warn};

use crate::analysis::IncomeSummary;
use crate::error::ReportError;
use crate::eligibility::{assess_poverty, EligibilityAssessment, EligibilityModel, PovertyAssessment};
use crate::guidelines::{GuidelineClient, GuidelineSource};
use crate::household::Household;

pub use generator::ReportGenerator;

/// Everything computed for one run. The aggregate sections are `None` when
/// there are no households.
#[derive(Debug, Clone)]
pub struct Report {
    pub year: u32,
    pub households: Vec<Household>,
    pub income: Option<IncomeSummary>,
    pub poverty: Option<PovertyAssessment>,
    pub eligibility: Option<EligibilityAssessment>,
}

impl Report {
    pub async fn build<S: GuidelineSource>(
        households: Vec<Household>,
        client: &mut GuidelineClient<S>,
        year: u32,
        multiplier: f64,
    ) -> Self {
        let Some(income) = IncomeSummary::from_households(&households) else {
            warn!("{}; skipping aggregate sections", ReportError::EmptyDataset);
            return Self {
                year,
                households,
                income: None,
                poverty: None,
                eligibility: None,
            };
        };

        info!("Average income {:.2}", income.average);
        let poverty = assess_poverty(&households, client).await;
        let model = EligibilityModel::derive(client, multiplier).await;
        let eligibility = model.assess(&households, &poverty.indeterminate);
        info!("Guideline lookups issued: {}", client.remote_calls());

        Self {
            year,
            households,
            income: Some(income),
            poverty: Some(poverty),
            eligibility: Some(eligibility),
        }
    }
}

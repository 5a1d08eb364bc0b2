use tracing::{debug, info, warn};

use crate::analysis::percentage;
use crate::guidelines::{GuidelineClient, GuidelineSource, Region};
use crate::household::Household;

/// Household sizes the linear poverty formula is fitted on
const BASE_SIZE: u32 = 2;
const REFERENCE_SIZE: u32 = 4;

/// Linear poverty line for one region: `base + per_member * (members - 2)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionFormula {
    pub base: f64,
    pub per_member: f64,
}

impl RegionFormula {
    /// Fit the formula through the size-2 and size-4 guidelines
    pub fn from_guidelines(size_two: f64, size_four: f64) -> Self {
        Self {
            base: size_two,
            per_member: (size_four - size_two) / 2.0,
        }
    }

    pub fn poverty_line(&self, members: u32) -> f64 {
        self.base + self.per_member * (members as f64 - 2.0)
    }
}

/// Region formulas plus the qualifying multiplier. A region whose formula
/// could not be derived is `None` and its households stay unclassified.
#[derive(Debug, Clone)]
pub struct EligibilityModel {
    pub contiguous: Option<RegionFormula>,
    pub alaska: Option<RegionFormula>,
    pub hawaii: Option<RegionFormula>,
    pub multiplier: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    Eligible,
    Ineligible,
    Indeterminate,
}

impl EligibilityModel {
    /// Derive all three region formulas from guideline lookups
    pub async fn derive<S: GuidelineSource>(
        client: &mut GuidelineClient<S>,
        multiplier: f64,
    ) -> Self {
        let mut model = Self {
            contiguous: None,
            alaska: None,
            hawaii: None,
            multiplier,
        };

        for region in Region::ALL {
            let base = client.lookup(region, BASE_SIZE).await.amount();
            let reference = client.lookup(region, REFERENCE_SIZE).await.amount();

            let formula = match (base, reference) {
                (Some(base), Some(reference)) => {
                    let formula = RegionFormula::from_guidelines(base, reference);
                    debug!(
                        "Formula for {}: base {:.2}, per member {:.2}",
                        region, formula.base, formula.per_member
                    );
                    Some(formula)
                }
                _ => {
                    warn!("No eligibility formula for region {}", region);
                    None
                }
            };

            match region {
                Region::Contiguous => model.contiguous = formula,
                Region::Alaska => model.alaska = formula,
                Region::Hawaii => model.hawaii = formula,
            }
        }

        model
    }

    pub fn formula_for(&self, region: Region) -> Option<&RegionFormula> {
        match region {
            Region::Contiguous => self.contiguous.as_ref(),
            Region::Alaska => self.alaska.as_ref(),
            Region::Hawaii => self.hawaii.as_ref(),
        }
    }

    /// Income cutoff for a household, if its region's formula is known
    pub fn threshold(&self, household: &Household) -> Option<f64> {
        self.formula_for(household.region())
            .map(|f| f.poverty_line(household.members) * self.multiplier)
    }

    pub fn classify(&self, household: &Household) -> Eligibility {
        match self.threshold(household) {
            Some(threshold) if household.income < threshold => Eligibility::Eligible,
            Some(_) => Eligibility::Ineligible,
            None => Eligibility::Indeterminate,
        }
    }

    /// Classify every household. Ids in `unresolved` had no poverty line in
    /// the poverty pass and stay indeterminate here too.
    pub fn assess(&self, households: &[Household], unresolved: &[i64]) -> EligibilityAssessment {
        let mut assessment = EligibilityAssessment {
            total: households.len(),
            ..Default::default()
        };

        for household in households {
            let eligibility = if unresolved.contains(&household.id) {
                Eligibility::Indeterminate
            } else {
                self.classify(household)
            };
            match eligibility {
                Eligibility::Eligible => assessment.eligible += 1,
                Eligibility::Ineligible => {}
                Eligibility::Indeterminate => assessment.indeterminate.push(household.id),
            }
        }

        info!(
            "{} of {} households eligible ({} indeterminate)",
            assessment.eligible,
            assessment.total,
            assessment.indeterminate.len()
        );
        assessment
    }
}

#[derive(Debug, Clone, Default)]
pub struct EligibilityAssessment {
    pub eligible: usize,
    pub indeterminate: Vec<i64>,
    pub total: usize,
}

impl EligibilityAssessment {
    pub fn percent_eligible(&self) -> Option<f64> {
        percentage(self.eligible, self.total)
    }
}

use std::collections::{BTreeSet, HashMap};

use tracing::{info, warn};

use crate::analysis::percentage;
use crate::guidelines::{GuidelineClient, GuidelineSource, Lookup, Region};
use crate::household::Household;

/// A household whose income falls under its size's poverty line
#[derive(Debug, Clone)]
pub struct PovertyRow {
    pub household: Household,
    pub threshold: f64,
}

/// Poverty classification of a whole dataset against the contiguous guidelines
#[derive(Debug, Clone, Default)]
pub struct PovertyAssessment {
    pub below: Vec<PovertyRow>,
    /// Ids of households whose size has no resolved guideline
    pub indeterminate: Vec<i64>,
    pub total: usize,
}

impl PovertyAssessment {
    pub fn below_count(&self) -> usize {
        self.below.len()
    }

    /// Share below poverty over all households, indeterminate ones included
    pub fn percent_below(&self) -> Option<f64> {
        percentage(self.below_count(), self.total)
    }
}

/// Resolve the poverty line for every household size present, then classify
/// each household. One lookup per distinct size.
pub async fn assess_poverty<S: GuidelineSource>(
    households: &[Household],
    client: &mut GuidelineClient<S>,
) -> PovertyAssessment {
    let sizes: BTreeSet<u32> = households.iter().map(|h| h.members).collect();
    let mut thresholds = HashMap::new();
    for size in sizes {
        thresholds.insert(size, client.lookup(Region::Contiguous, size).await);
    }

    let mut assessment = PovertyAssessment {
        total: households.len(),
        ..Default::default()
    };

    for household in households {
        match thresholds.get(&household.members) {
            Some(Lookup::Resolved(threshold)) => {
                if household.income < *threshold {
                    assessment.below.push(PovertyRow {
                        household: household.clone(),
                        threshold: *threshold,
                    });
                }
            }
            _ => assessment.indeterminate.push(household.id),
        }
    }

    if !assessment.indeterminate.is_empty() {
        warn!(
            "{} households could not be classified against the poverty line",
            assessment.indeterminate.len()
        );
    }
    info!(
        "{} of {} households below the poverty line",
        assessment.below_count(),
        assessment.total
    );

    assessment
}

use crate::household::Household;

/// Mean income across all households, or `None` for an empty set
pub fn average_income(households: &[Household]) -> Option<f64> {
    if households.is_empty() {
        return None;
    }
    let total: f64 = households.iter().map(|h| h.income).sum();
    Some(total / households.len() as f64)
}

/// Households strictly above `average`, in their original order
pub fn above_average(households: &[Household], average: f64) -> Vec<&Household> {
    households.iter().filter(|h| h.income > average).collect()
}

/// `100 * count / total`; `None` when there is nothing to divide by
pub fn percentage(count: usize, total: usize) -> Option<f64> {
    if total == 0 {
        None
    } else {
        Some(count as f64 * 100.0 / total as f64)
    }
}

/// Average income and the households exceeding it
#[derive(Debug, Clone)]
pub struct IncomeSummary {
    pub average: f64,
    pub above_average: Vec<Household>,
}

impl IncomeSummary {
    pub fn from_households(households: &[Household]) -> Option<Self> {
        let average = average_income(households)?;
        Some(Self {
            average,
            above_average: above_average(households, average)
                .into_iter()
                .cloned()
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Household> {
        vec![
            Household::new(1, 10_000.0, 1, "Texas"),
            Household::new(2, 30_000.0, 2, "Ohio"),
            Household::new(3, 20_000.0, 3, "Alaska"),
            Household::new(4, 25_000.0, 4, "Hawaii"),
        ]
    }

    #[test]
    fn test_average_income() {
        let avg = average_income(&sample()).unwrap();
        assert!((avg - 21_250.0).abs() < 1e-9);
    }

    #[test]
    fn test_average_of_empty_is_none() {
        assert!(average_income(&[]).is_none());
        assert!(IncomeSummary::from_households(&[]).is_none());
    }

    #[test]
    fn test_above_average_keeps_order() {
        let households = sample();
        let ids: Vec<i64> = above_average(&households, 21_250.0)
            .iter()
            .map(|h| h.id)
            .collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn test_above_average_excludes_equal_income() {
        let households = vec![
            Household::new(1, 100.0, 1, "Texas"),
            Household::new(2, 200.0, 1, "Texas"),
            Household::new(3, 300.0, 1, "Texas"),
        ];
        let summary = IncomeSummary::from_households(&households).unwrap();
        assert_eq!(summary.average, 200.0);
        assert_eq!(summary.above_average.len(), 1);
        assert_eq!(summary.above_average[0].id, 3);
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(1, 4), Some(25.0));
        assert_eq!(percentage(0, 0), None);
    }
}

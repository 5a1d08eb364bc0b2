use crate::guidelines::Region;

/// A single household record read from the input file
#[derive(Debug, Clone, PartialEq)]
pub struct Household {
    pub id: i64,
    pub income: f64,
    pub members: u32,
    pub state: String,
}

impl Household {
    pub fn new(id: i64, income: f64, members: u32, state: impl Into<String>) -> Self {
        Self {
            id,
            income,
            members,
            state: state.into(),
        }
    }

    /// Guideline region this household's state falls under
    pub fn region(&self) -> Region {
        Region::for_state(&self.state)
    }
}

impl std::fmt::Display for Household {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<6} {:<12.2} {:<8} {}",
            self.id, self.income, self.members, self.state
        )
    }
}

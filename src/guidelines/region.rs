use std::fmt;
use std::str::FromStr;

/// Poverty guideline region published by the guideline service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// The 48 contiguous states and DC
    Contiguous,
    Alaska,
    Hawaii,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::Contiguous, Region::Alaska, Region::Hawaii];

    /// Path segment used by the guideline service
    pub fn code(&self) -> &'static str {
        match self {
            Region::Contiguous => "us",
            Region::Alaska => "ak",
            Region::Hawaii => "hi",
        }
    }

    /// Select the region for a state name. Only Alaska and Hawaii have their
    /// own guidelines; every other name maps to the contiguous table.
    pub fn for_state(state: &str) -> Self {
        if state.eq_ignore_ascii_case("alaska") {
            Region::Alaska
        } else if state.eq_ignore_ascii_case("hawaii") {
            Region::Hawaii
        } else {
            Region::Contiguous
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "us" => Ok(Region::Contiguous),
            "ak" => Ok(Region::Alaska),
            "hi" => Ok(Region::Hawaii),
            other => Err(format!("unknown region '{}' (expected us, ak or hi)", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_selection_is_case_insensitive() {
        for name in ["ALASKA", "Alaska", "alaska"] {
            assert_eq!(Region::for_state(name), Region::Alaska);
        }
        for name in ["HAWAII", "Hawaii", "hawaii"] {
            assert_eq!(Region::for_state(name), Region::Hawaii);
        }
    }

    #[test]
    fn test_other_states_are_contiguous() {
        for name in ["Texas", "New York", "", "Alaska North", "ak"] {
            assert_eq!(Region::for_state(name), Region::Contiguous);
        }
    }

    #[test]
    fn test_codes_round_trip() {
        for region in Region::ALL {
            assert_eq!(region.code().parse::<Region>().unwrap(), region);
        }
        assert!("xx".parse::<Region>().is_err());
    }
}

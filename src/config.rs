use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result};

pub const DEFAULT_BASE_URL: &str =
    "https://aspe.hhs.gov/topics/poverty-economic-mobility/poverty-guidelines/api";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub guidelines: GuidelinesConfig,
    pub eligibility: EligibilityConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct InputConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OutputConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GuidelinesConfig {
    pub base_url: String,
    pub year: u32,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct EligibilityConfig {
    /// Fraction of the poverty line under which a household qualifies
    pub multiplier: f64,
}

impl Config {
    /// Load defaults, then the optional config file, then `FPL__*` environment overrides.
    pub fn load(path: &str) -> Result<Self> {
        dotenv::dotenv().ok();

        let config = config::Config::builder()
            .set_default("input.path", "households.txt")?
            .set_default("output.path", "household-report.txt")?
            .set_default("guidelines.base_url", DEFAULT_BASE_URL)?
            .set_default("guidelines.year", 2025)?
            .set_default("eligibility.multiplier", 1.38)?
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("FPL")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.guidelines.base_url.trim().is_empty() {
            return Err(ReportError::Config("guidelines.base_url is empty".to_string()));
        }
        if self.guidelines.year == 0 {
            return Err(ReportError::Config("guidelines.year must be positive".to_string()));
        }
        let multiplier = self.eligibility.multiplier;
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return Err(ReportError::Config(format!(
                "eligibility.multiplier must be positive, got {}",
                multiplier
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: InputConfig {
                path: "households.txt".to_string(),
            },
            output: OutputConfig {
                path: "household-report.txt".to_string(),
            },
            guidelines: GuidelinesConfig {
                base_url: DEFAULT_BASE_URL.to_string(),
                year: 2025,
            },
            eligibility: EligibilityConfig { multiplier: 1.38 },
        }
    }
}

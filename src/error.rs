use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Cannot open household data '{path}': {source}")]
    SourceUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("Line {line}: negative income {income:.2}")]
    NegativeIncome { line: usize, income: f64 },

    #[error("Poverty guideline unavailable for {region} size {size}: {reason}")]
    GuidelineUnavailable {
        region: String,
        size: u32,
        reason: String,
    },

    #[error("No household data available")]
    EmptyDataset,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigSource(#[from] config::ConfigError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;

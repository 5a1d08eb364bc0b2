use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;

use crate::config::GuidelinesConfig;
use crate::error::{ReportError, Result};
use crate::guidelines::region::Region;

/// Anything that can resolve the poverty guideline for a region and household size
#[allow(async_fn_in_trait)]
pub trait GuidelineSource {
    async fn fetch(&self, region: Region, size: u32) -> Result<f64>;
}

/// Guideline source backed by the remote income-guidelines API
pub struct HttpGuidelineSource {
    client: reqwest::Client,
    base_url: String,
    year: u32,
}

impl HttpGuidelineSource {
    pub fn new(base_url: &str, year: u32) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            year,
        }
    }

    pub fn from_config(config: &GuidelinesConfig) -> Self {
        Self::new(&config.base_url, config.year)
    }

    pub fn url_for(&self, region: Region, size: u32) -> String {
        format!("{}/{}/{}/{}", self.base_url, self.year, region.code(), size)
    }
}

impl GuidelineSource for HttpGuidelineSource {
    async fn fetch(&self, region: Region, size: u32) -> Result<f64> {
        let url = self.url_for(region, size);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(unavailable(region, size, format!("HTTP {}", status)));
        }

        let body = response.text().await?;
        parse_income(&body).map_err(|e| unavailable(region, size, e.to_string()))
    }
}

fn unavailable(region: Region, size: u32, reason: String) -> ReportError {
    ReportError::GuidelineUnavailable {
        region: region.code().to_string(),
        size,
        reason,
    }
}

/// Read the numeric `income` field out of a guideline response body.
///
/// The field may sit at the top level or inside a nested object. String
/// values are stripped down to digits and `.` before parsing.
pub fn parse_income(body: &str) -> Result<f64> {
    let value: Value = serde_json::from_str(body)?;
    let income = find_key(&value, "income")
        .ok_or_else(|| anyhow::anyhow!("response has no 'income' field"))?;

    match income {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| anyhow::anyhow!("income {} is not representable", n).into()),
        Value::String(s) => {
            let digits: String = s
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.')
                .collect();
            digits
                .parse::<f64>()
                .map_err(|_| anyhow::anyhow!("cannot parse income '{}'", s).into())
        }
        other => Err(anyhow::anyhow!("income has unexpected type: {}", other).into()),
    }
}

fn find_key<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map
            .get(key)
            .or_else(|| map.values().find_map(|v| find_key(v, key))),
        Value::Array(items) => items.iter().find_map(|v| find_key(v, key)),
        _ => None,
    }
}

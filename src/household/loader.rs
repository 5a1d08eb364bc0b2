use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{info, warn};

use crate::error::{ReportError, Result};
use crate::household::models::Household;

/// A line that could not be turned into a household
#[derive(Debug)]
pub struct RejectedLine {
    pub line: usize,
    pub error: ReportError,
}

/// Households in file order, plus every line skipped along the way
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub households: Vec<Household>,
    pub rejected: Vec<RejectedLine>,
}

/// Load households from a whitespace-separated text file.
///
/// Malformed lines are skipped with a warning rather than aborting the load.
/// Only a missing or unreadable file is an error.
pub fn load_households(path: impl AsRef<Path>) -> Result<LoadOutcome> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ReportError::SourceUnavailable {
        path: path.display().to_string(),
        source,
    })?;

    let outcome = parse_reader(BufReader::new(file))?;
    info!(
        "Loaded {} households from {} ({} lines rejected)",
        outcome.households.len(),
        path.display(),
        outcome.rejected.len()
    );
    Ok(outcome)
}

pub fn parse_reader<R: BufRead>(reader: R) -> Result<LoadOutcome> {
    let mut outcome = LoadOutcome::default();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_line(&line, line_no) {
            Ok(household) => outcome.households.push(household),
            Err(error) => {
                warn!("Skipping input line: {}", error);
                outcome.rejected.push(RejectedLine {
                    line: line_no,
                    error,
                });
            }
        }
    }

    Ok(outcome)
}

/// Parse `<id> <income> <members> <state...>`; the state keeps its inner words
/// joined by single spaces.
pub fn parse_line(line: &str, line_no: usize) -> Result<Household> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 4 {
        return Err(ReportError::Parse {
            line: line_no,
            reason: format!("expected at least 4 fields, found {}", parts.len()),
        });
    }

    let id: i64 = parts[0].parse().map_err(|_| ReportError::Parse {
        line: line_no,
        reason: format!("invalid id '{}'", parts[0]),
    })?;

    let income = parts[1]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ReportError::Parse {
            line: line_no,
            reason: format!("invalid income '{}'", parts[1]),
        })?;
    if income < 0.0 {
        return Err(ReportError::NegativeIncome {
            line: line_no,
            income,
        });
    }

    let members = parts[2]
        .parse::<u32>()
        .ok()
        .filter(|m| *m >= 1)
        .ok_or_else(|| ReportError::Parse {
            line: line_no,
            reason: format!("invalid member count '{}'", parts[2]),
        })?;

    let state = parts[3..].join(" ");

    Ok(Household::new(id, income, members, state))
}

use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::household::Household;
use crate::report::Report;
use crate::utils::{format_ids, format_money, format_percent, table_border, table_row};

const HOUSEHOLD_WIDTHS: [usize; 3] = [6, 12, 8];
const HOUSEHOLD_BORDER: usize = 55;
const POVERTY_WIDTHS: [usize; 4] = [6, 12, 14, 8];
const POVERTY_BORDER: usize = 67;

/// Renders a [`Report`] as fixed-width text
pub struct ReportGenerator<'a> {
    report: &'a Report,
}

impl<'a> ReportGenerator<'a> {
    pub fn new(report: &'a Report) -> Self {
        Self { report }
    }

    pub fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        let report = self.report;
        write_household_table(out, &report.households)?;

        let (Some(income), Some(poverty), Some(eligibility)) =
            (&report.income, &report.poverty, &report.eligibility)
        else {
            writeln!(out)?;
            writeln!(out, "No household data available.")?;
            return Ok(());
        };

        writeln!(out)?;
        writeln!(out, "Average Household Income: ${}", format_money(income.average))?;

        writeln!(out)?;
        writeln!(
            out,
            "Households with Income Above Average (${}):",
            format_money(income.average)
        )?;
        let above: Vec<&Household> = income.above_average.iter().collect();
        write_household_rows(out, &above)?;

        writeln!(out)?;
        writeln!(out, "Households Below {} Poverty Level:", report.year)?;
        writeln!(
            out,
            "{}",
            table_row(&["ID", "Income", "FPL", "Members", "State"], &POVERTY_WIDTHS)
        )?;
        writeln!(out, "{}", table_border(POVERTY_BORDER))?;
        for row in &poverty.below {
            let h = &row.household;
            writeln!(
                out,
                "{}",
                table_row(
                    &[
                        &h.id.to_string(),
                        &format_money(h.income),
                        &format_money(row.threshold),
                        &h.members.to_string(),
                        &h.state,
                    ],
                    &POVERTY_WIDTHS,
                )
            )?;
        }

        if let Some(pct) = poverty.percent_below() {
            writeln!(out)?;
            writeln!(out, "Percentage of households below FPL: {}", format_percent(pct))?;
        }
        if !poverty.indeterminate.is_empty() {
            writeln!(
                out,
                "Note: poverty guideline unavailable for {} household(s), not classified: {}",
                poverty.indeterminate.len(),
                format_ids(&poverty.indeterminate)
            )?;
        }

        if let Some(pct) = eligibility.percent_eligible() {
            writeln!(out)?;
            writeln!(
                out,
                "Percentage of households eligible for Medicaid: {}",
                format_percent(pct)
            )?;
        }
        if !eligibility.indeterminate.is_empty() {
            writeln!(
                out,
                "Note: eligibility undetermined for {} household(s), not classified: {}",
                eligibility.indeterminate.len(),
                format_ids(&eligibility.indeterminate)
            )?;
        }

        Ok(())
    }

    pub fn render_to_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.render(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Render the whole report first, then write it in one go. A rendering
    /// error never truncates an existing file.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let text = self.render_to_string()?;
        std::fs::write(path, text)?;
        Ok(())
    }
}

/// Header, border and one row per household
pub fn write_household_table<W: Write>(out: &mut W, households: &[Household]) -> Result<()> {
    let rows: Vec<&Household> = households.iter().collect();
    write_household_rows(out, &rows)
}

fn write_household_rows<W: Write>(out: &mut W, households: &[&Household]) -> Result<()> {
    writeln!(
        out,
        "{}",
        table_row(&["ID", "Income", "Members", "State"], &HOUSEHOLD_WIDTHS)
    )?;
    writeln!(out, "{}", table_border(HOUSEHOLD_BORDER))?;
    for household in households {
        writeln!(out, "{}", household)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guidelines::cache::stub::StubSource;
    use crate::guidelines::{GuidelineClient, Region};

    async fn render(households: Vec<Household>, source: StubSource) -> String {
        let mut client = GuidelineClient::new(source);
        let report = Report::build(households, &mut client, 2025, 1.38).await;
        ReportGenerator::new(&report).render_to_string().unwrap()
    }

    #[tokio::test]
    async fn test_sections_in_order() {
        let text = render(
            vec![
                Household::new(1, 20_000.0, 2, "Texas"),
                Household::new(2, 9_000.0, 2, "Alaska"),
                Household::new(3, 15_000.0, 4, "Hawaii"),
            ],
            StubSource::standard(),
        )
        .await;

        let markers = [
            "ID     Income       Members  State",
            "Average Household Income: $14666.67",
            "Households with Income Above Average ($14666.67):",
            "Households Below 2025 Poverty Level:",
            "Percentage of households below FPL: 66.67%",
            "Percentage of households eligible for Medicaid: 100.00%",
        ];
        let mut cursor = 0;
        for marker in markers {
            let pos = text[cursor..]
                .find(marker)
                .unwrap_or_else(|| panic!("missing or out of order: {}", marker));
            cursor += pos + marker.len();
        }

        assert!(text.contains("2      9000.00      20000.00       2        Alaska"));
        assert!(text.contains("3      15000.00     25000.00       4        Hawaii"));
        assert!(!text.contains("Note:"));
    }

    #[tokio::test]
    async fn test_empty_dataset_note() {
        let text = render(Vec::new(), StubSource::standard()).await;

        assert!(text.contains("No household data available."));
        assert!(!text.contains("Average Household Income"));
        assert!(!text.contains("Percentage"));
    }

    #[tokio::test]
    async fn test_failed_size_is_noted_not_listed() {
        let source = StubSource::standard();
        let text = render(
            vec![
                Household::new(1, 10_000.0, 2, "Texas"),
                Household::new(2, 5.0, 5, "Texas"),
            ],
            source,
        )
        .await;

        assert!(text.contains("Percentage of households below FPL: 50.00%"));
        assert!(text.contains(
            "Note: poverty guideline unavailable for 1 household(s), not classified: 2"
        ));
        let start = text.find("Households Below").unwrap();
        let end = text.find("Percentage of households below").unwrap();
        let section = &text[start..end];
        assert!(section.contains("\n1      10000.00"));
        assert!(!section.contains("\n2      5.00"));

        assert!(text.contains("Percentage of households eligible for Medicaid: 50.00%"));
        assert!(text.contains(
            "Note: eligibility undetermined for 1 household(s), not classified: 2"
        ));
    }

    #[tokio::test]
    async fn test_write_to_file_replaces_stale_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        std::fs::write(&path, "stale\n".repeat(1000)).unwrap();

        let mut client = GuidelineClient::new(StubSource::standard());
        let report = Report::build(
            vec![Household::new(1, 20_000.0, 2, "Texas")],
            &mut client,
            2025,
            1.38,
        )
        .await;
        let generator = ReportGenerator::new(&report);
        generator.write_to_file(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, generator.render_to_string().unwrap());
        assert!(!written.contains("stale"));
    }

    #[tokio::test]
    async fn test_write_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let report = Report::build(
            Vec::new(),
            &mut GuidelineClient::new(StubSource::standard()),
            2025,
            1.38,
        )
        .await;

        let result = ReportGenerator::new(&report).write_to_file(dir.path().join("nope/report.txt"));
        assert!(matches!(result, Err(crate::error::ReportError::Io(_))));
    }

    #[tokio::test]
    async fn test_missing_region_formula_is_noted() {
        let source = StubSource::default()
            .with(Region::Contiguous, 2, 20_000.0)
            .with(Region::Contiguous, 4, 25_000.0);
        let text = render(vec![Household::new(8, 1_000.0, 2, "Hawaii")], source).await;

        assert!(text.contains("Percentage of households eligible for Medicaid: 0.00%"));
        assert!(text.contains("not classified: 8"));
    }
}

/// Format an amount with exactly two decimals
pub fn format_money(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// Format a percentage with two decimals and a trailing `%`
pub fn format_percent(percent: f64) -> String {
    format!("{:.2}%", percent)
}

/// Format a list of household ids for a note line
pub fn format_ids(ids: &[i64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Table separator line
pub fn table_border(width: usize) -> String {
    "-".repeat(width)
}

/// Left-justify each column to its width; columns past the last width are
/// appended unpadded.
pub fn table_row(columns: &[&str], widths: &[usize]) -> String {
    let cells: Vec<String> = columns
        .iter()
        .enumerate()
        .map(|(i, col)| match widths.get(i) {
            Some(width) => format!("{:<width$}", col, width = width),
            None => col.to_string(),
        })
        .collect();
    cells.join(" ").trim_end().to_string()
}

use crate::model::QueryResult;

/// Separator between columns
pub const COLUMN_GAP: &str = "  ";

/// Render a query result as a left-aligned text table
///
/// Each column is as wide as the longest of its header and its cells
/// (counted in chars). NULL cells render as empty strings. The header is
/// always emitted, even for an empty result.
pub fn render_table(result: &QueryResult) -> String {
    let mut widths: Vec<usize> = result
        .columns
        .iter()
        .map(|header| header.chars().count())
        .collect();

    for row in &result.rows {
        for (idx, cell) in row.iter().enumerate() {
            let len = cell.as_deref().unwrap_or("").chars().count();
            if let Some(width) = widths.get_mut(idx) {
                *width = (*width).max(len);
            }
        }
    }

    let mut output = String::new();
    push_line(&mut output, result.columns.iter().map(String::as_str), &widths);
    for row in &result.rows {
        push_line(
            &mut output,
            row.iter().map(|cell| cell.as_deref().unwrap_or("")),
            &widths,
        );
    }
    output
}

fn push_line<'a>(output: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect();
    output.push_str(&line.join(COLUMN_GAP));
    output.push('\n');
}

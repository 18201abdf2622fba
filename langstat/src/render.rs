//! Plain-text rendering for CLI output

use console::Style;
use langstatlib::{LanguageTable, Summary};

/// Render a language table with aligned columns.
///
/// An empty table renders as its message only.
pub fn render_table(table: &LanguageTable) -> String {
    if let Some(message) = &table.message {
        return format!("{message}\n");
    }

    let header_style = Style::new().bold();
    let footer_style = Style::new().bold();
    let detail_style = Style::new().dim();

    let name_width = table
        .rows
        .iter()
        .map(|r| r.label.len())
        .chain([table.headers[0].len(), table.footer.label.len()])
        .max()
        .unwrap_or(0);

    let value_widths: Vec<usize> = (0..table.headers.len() - 1)
        .map(|i| {
            table
                .rows
                .iter()
                .chain(std::iter::once(&table.footer))
                .map(|r| r.values.get(i).map_or(0, String::len))
                .chain(std::iter::once(table.headers[i + 1].len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let line = |label: &str, values: &[String]| -> String {
        let mut out = format!("{:<width$}", label, width = name_width);
        for (value, width) in values.iter().zip(&value_widths) {
            out.push_str(&format!("  {:>width$}", value, width = *width));
        }
        out
    };

    let headers: Vec<String> = table.headers[1..].to_vec();
    let header = line(table.headers[0].as_str(), headers.as_slice());
    let separator = "-".repeat(header.len());

    let mut out = String::new();
    out.push_str(&format!("{}\n", header_style.apply_to(&header)));
    out.push_str(&separator);
    out.push('\n');
    for row in &table.rows {
        out.push_str(&line(row.label.as_str(), row.values.as_slice()));
        out.push('\n');
        for detail in &row.details {
            out.push_str(&format!("    {}\n", detail_style.apply_to(detail)));
        }
    }
    out.push_str(&separator);
    out.push('\n');
    out.push_str(&format!(
        "{}\n",
        footer_style.apply_to(line(
            table.footer.label.as_str(),
            table.footer.values.as_slice()
        ))
    ));
    out
}

/// Render a summary as a single line.
pub fn render_summary(summary: &Summary) -> String {
    format!("{summary}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use langstatlib::{aggregate, ExtensionIndex, FileRecord, LanguageStats};

    fn sample() -> LanguageStats {
        let mut index = ExtensionIndex::new();
        index.insert(FileRecord::new(".py", 30, 2048));
        index.insert(FileRecord::new(".rs", 10, 100));
        aggregate(index)
    }

    #[test]
    fn test_render_table_columns() {
        console::set_colors_enabled(false);
        let output = render_table(&LanguageTable::from_stats(&sample()));
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with("Language"));
        assert!(lines[0].ends_with("Share"));
        assert!(lines[2].starts_with("Python"));
        assert!(lines[2].ends_with("75.0%"));
        assert!(lines[3].starts_with("Rust"));
        assert!(lines[5].starts_with("Total (2 files)"));
        assert_eq!(lines[0].len(), lines[2].len());
    }

    #[test]
    fn test_render_table_details() {
        console::set_colors_enabled(false);
        let stats = sample();
        let table = LanguageTable::from_stats(&stats).with_details(&stats);
        let output = render_table(&table);

        assert!(output.contains("    Size: 2 KB"));
        assert!(output.contains("    Percentage: 25.00%"));
    }

    #[test]
    fn test_render_empty_table() {
        let output = render_table(&LanguageTable::from_stats(&LanguageStats::new()));

        assert!(output.starts_with("No statistics available."));
    }

    #[test]
    fn test_render_summary() {
        let summary = Summary::from_stats(&sample()).unwrap();

        assert_eq!(
            render_summary(&summary),
            "Workspace Summary: 40 total lines | Top languages: Python: 75.0%, Rust: 25.0%\n"
        );
    }
}

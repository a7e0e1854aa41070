//! Fixed-width ASCII tables for the interactive tools
//!
//! The menu programs print results as bordered tables with fixed column
//! widths so repeated runs line up under each other.

use ndarray::Array2;
use std::fmt::Write;

enum Row {
    Cells(Vec<String>),
    /// A first cell plus a message spanning the remaining columns.
    Spanning { first: String, message: String },
}

/// A bordered table with fixed column widths.
pub struct Table {
    widths: Vec<usize>,
    header: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Create a table; each header is paired with a minimum column width.
    pub fn new(columns: &[(&str, usize)]) -> Self {
        Self {
            widths: columns.iter().map(|(h, w)| (*w).max(h.len())).collect(),
            header: columns.iter().map(|(h, _)| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a data row. Missing cells render blank.
    pub fn push_row(&mut self, cells: Vec<String>) {
        self.rows.push(Row::Cells(cells));
    }

    /// Append a row whose message spans every column after the first.
    ///
    /// Used for per-method failures in the "run all methods" table.
    pub fn push_spanning_row(&mut self, first: String, message: String) {
        self.rows.push(Row::Spanning { first, message });
    }

    /// Render the table with borders and a divider under the header.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let total: usize = self.widths.iter().map(|w| w + 3).sum::<usize>() + 1;
        let divider = "-".repeat(total);

        writeln!(out, "{divider}").unwrap();
        out.push('|');
        for (h, w) in self.header.iter().zip(&self.widths) {
            write!(out, " {h:^w$} |", w = *w).unwrap();
        }
        out.push('\n');
        writeln!(out, "{divider}").unwrap();

        for row in &self.rows {
            out.push('|');
            match row {
                Row::Cells(cells) => {
                    for (i, w) in self.widths.iter().enumerate() {
                        let cell = cells.get(i).map(String::as_str).unwrap_or("");
                        if i == 0 {
                            write!(out, " {cell:<w$} |", w = *w).unwrap();
                        } else {
                            write!(out, " {cell:>w$} |", w = *w).unwrap();
                        }
                    }
                }
                Row::Spanning { first, message } => {
                    let span: usize = self.widths[1..].iter().map(|w| w + 3).sum::<usize>() - 3;
                    write!(out, " {first:<w$} |", w = self.widths[0]).unwrap();
                    write!(out, " {message:^span$} |").unwrap();
                }
            }
            out.push('\n');
        }
        writeln!(out, "{divider}").unwrap();
        out
    }
}

/// Render a matrix with bordered rows, four decimals per entry.
pub fn format_matrix(m: &Array2<f64>, title: &str) -> String {
    let mut out = String::new();
    writeln!(out, "> {title}:").unwrap();
    for row in m.rows() {
        let cells: Vec<String> = row.iter().map(|v| format!("{v:8.4}")).collect();
        writeln!(out, "  | {} |", cells.join(" | ")).unwrap();
    }
    out
}

/// Print a boxed section title.
pub fn print_title(text: &str) {
    let bar = "=".repeat(60);
    println!("\n{bar}");
    println!("  {}", text.to_uppercase());
    println!("{bar}");
}

/// Print a minor section heading.
pub fn print_heading(text: &str) {
    println!("\n--- {text} ---");
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_table_alignment() {
        let mut t = Table::new(&[("METHOD", 20), ("VALUE", 14)]);
        t.push_row(vec!["Trapezoid".into(), "1.234567".into()]);
        let text = t.render();
        let lines: Vec<&str> = text.lines().collect();
        // divider, header, divider, row, divider
        assert_eq!(lines.len(), 5);
        assert!(lines[3].contains("Trapezoid"));
        assert_eq!(lines[1].len(), lines[3].len());
    }

    #[test]
    fn test_spanning_row() {
        let mut t = Table::new(&[("METHOD", 12), ("VALUE", 10), ("ERROR", 10)]);
        t.push_spanning_row("Simpson 1/3".into(), "FAILED: n must be even".into());
        let text = t.render();
        assert!(text.contains("FAILED: n must be even"));
    }

    #[test]
    fn test_format_matrix() {
        let m = array![[1.0, 2.0], [3.0, 4.5]];
        let text = format_matrix(&m, "Matrix U");
        assert!(text.starts_with("> Matrix U:"));
        assert!(text.contains("4.5000"));
    }
}

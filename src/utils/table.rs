//! Table rendering utilities for CLI outputs.
//! Column widths follow the widest cell, measured in terminal columns.

use unicode_width::UnicodeWidthStr;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

fn pad(cell: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(cell);
    format!("{}{}", cell, " ".repeat(width.saturating_sub(w)))
}

impl Table {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| UnicodeWidthStr::width(c.as_str()))
                    .chain(std::iter::once(UnicodeWidthStr::width(h.as_str())))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self, separator: char) -> String {
        let widths = self.widths();
        let mut out = String::new();

        let line = |cells: &[String]| -> String {
            widths
                .iter()
                .enumerate()
                .map(|(i, w)| pad(cells.get(i).map(String::as_str).unwrap_or(""), *w))
                .collect::<Vec<_>>()
                .join(" | ")
                .trim_end()
                .to_string()
        };

        out.push_str(&line(self.headers.as_slice()));
        out.push('\n');

        let total: usize = widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1);
        out.push_str(&separator.to_string().repeat(total));
        out.push('\n');

        for row in &self.rows {
            out.push_str(&line(row.as_slice()));
            out.push('\n');
        }

        out
    }
}

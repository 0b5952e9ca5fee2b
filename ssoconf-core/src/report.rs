//! Two-column name/value tables for diagnostic reporting.
//!
//! Configuration sections expose their effective values through
//! [`Reportable`]. Secrets go through [`redact`] before they reach a row.

use serde::Serialize;

/// Column headers of every settings report.
pub const REPORT_COLUMNS: [&str; 2] = ["Name", "Value"];

/// A single labelled value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub name: String,
    pub value: String,
}

/// An ordered table of labelled values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    columns: Vec<String>,
    rows: Vec<ReportRow>,
}

impl Report {
    /// Create an empty report with the standard `["Name", "Value"]` header.
    pub fn new() -> Self {
        Self::with_columns(REPORT_COLUMNS)
    }

    /// Create an empty report with custom column headers.
    pub fn with_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Report {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row. Rows keep insertion order.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.rows.push(ReportRow {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Value of the first row with the given name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.name == name)
            .map(|row| row.value.as_str())
    }

    /// Render as a plain-text table: header line, then one line per row,
    /// with the name column padded to its widest entry.
    pub fn render(&self) -> String {
        let header_name = self.columns.first().map(String::as_str).unwrap_or_default();
        let header_value = self.columns.get(1).map(String::as_str).unwrap_or_default();

        let width = self
            .rows
            .iter()
            .map(|row| row.name.chars().count())
            .chain(std::iter::once(header_name.chars().count()))
            .max()
            .unwrap_or_default();

        let mut out = String::new();
        for (name, value) in std::iter::once((header_name, header_value))
            .chain(self.rows.iter().map(|r| (r.name.as_str(), r.value.as_str())))
        {
            let line = format!("{name:<width$}  {value}");
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}

impl Default for Report {
    fn default() -> Self {
        Self::new()
    }
}

/// Anything that can describe its effective settings as a [`Report`].
pub trait Reportable {
    fn report(&self) -> Report;
}

/// Mask a secret with one `*` per Unicode scalar value.
///
/// Only the length of the secret survives; multi-byte characters count once.
pub fn redact(secret: &str) -> String {
    "*".repeat(secret.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redact_counts_chars_not_bytes() {
        assert_eq!(redact(""), "");
        assert_eq!(redact("xyz123"), "******");
        assert_eq!(redact("pässwörd"), "********");
        assert_eq!(redact("🔑"), "*");
    }

    #[test]
    fn render_aligns_name_column() {
        let mut report = Report::new();
        report.push("a", "1").push("longer", "");
        assert_eq!(report.render(), "Name    Value\na       1\nlonger\n");
    }

    #[test]
    fn get_returns_first_match() {
        let mut report = Report::new();
        report.push("k", "first").push("k", "second");
        assert_eq!(report.get("k"), Some("first"));
        assert_eq!(report.get("missing"), None);
    }
}

//! Table model shared by the text and JSON renderers.

use serde_json::{Map, Value};
use unicode_width::UnicodeWidthStr;

use super::OutputFormat;

/// Shown for values the API did not return.
pub const EMPTY_VALUE: &str = "-";

const COLUMN_GAP: &str = "   ";

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row.
    ///
    /// # Panics
    ///
    /// If the row does not have exactly one cell per header.
    pub fn add<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = cells.into_iter().map(Into::into).collect();
        assert_eq!(
            row.len(),
            self.headers.len(),
            "table row has {} cells but there are {} headers",
            row.len(),
            self.headers.len()
        );
        self.rows.push(row);
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Table => self.render_text(),
            OutputFormat::Json => self.render_json(),
        }
    }

    /// Aligned columns with a header row. Multi-line cells (nested tables)
    /// span several physical lines and keep their column.
    pub fn render_text(&self) -> String {
        let widths: Vec<usize> = (0..self.headers.len())
            .map(|col| {
                std::iter::once(&self.headers[col])
                    .chain(self.rows.iter().map(|r| &r[col]))
                    .flat_map(|cell| cell.lines())
                    .map(UnicodeWidthStr::width)
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();
        self.write_row(&mut out, &self.headers, &widths);
        for row in &self.rows {
            self.write_row(&mut out, row, &widths);
        }
        out
    }

    fn write_row(&self, out: &mut String, cells: &[String], widths: &[usize]) {
        let split: Vec<Vec<&str>> = cells
            .iter()
            .map(|c| {
                let lines: Vec<&str> = c.lines().collect();
                if lines.is_empty() { vec![""] } else { lines }
            })
            .collect();
        let height = split.iter().map(Vec::len).max().unwrap_or(1);

        for line_no in 0..height {
            let mut line = String::new();
            for (col, lines) in split.iter().enumerate() {
                let text = lines.get(line_no).copied().unwrap_or("");
                if col > 0 {
                    line.push_str(COLUMN_GAP);
                }
                line.push_str(text);
                let pad = widths[col].saturating_sub(UnicodeWidthStr::width(text));
                line.extend(std::iter::repeat_n(' ', pad));
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
    }

    /// Array of objects keyed by header. Nested tables stay pre-rendered text.
    pub fn render_json(&self) -> String {
        let records: Vec<Value> = self
            .rows
            .iter()
            .map(|row| {
                let object: Map<String, Value> = self
                    .headers
                    .iter()
                    .cloned()
                    .zip(row.iter().cloned().map(Value::String))
                    .collect();
                Value::Object(object)
            })
            .collect();
        // Serializing a Value tree of strings cannot fail.
        serde_json::to_string_pretty(&records).unwrap_or_else(|_| "[]".to_string())
    }
}

/// Render an optional value, falling back to [`EMPTY_VALUE`].
pub fn or_empty<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| EMPTY_VALUE.to_string())
}

/// Render an optional string, treating blank strings as missing.
pub fn str_or_empty(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => EMPTY_VALUE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_alignment() {
        let mut table = Table::new(["id", "hostname"]);
        table.add(["1", "web"]);
        table.add(["1234", "database"]);

        let text = table.render_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "id     hostname");
        assert_eq!(lines[1], "1      web");
        assert_eq!(lines[2], "1234   database");
    }

    #[test]
    fn test_nested_table_keeps_column() {
        let mut inner = Table::new(["Type", "Number"]);
        inner.add(["PUBLIC", "1234"]);

        let mut outer = Table::new(["Name", "Value"]);
        outer.add(["ID".to_string(), "42".to_string()]);
        outer.add(["Vlans".to_string(), inner.render_text()]);

        let text = outer.render_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[2], "Vlans   Type     Number");
        assert_eq!(lines[3], "        PUBLIC   1234");
    }

    #[test]
    fn test_json_keeps_header_order_and_nested_text() {
        let mut inner = Table::new(["Id"]);
        inner.add(["7"]);

        let mut table = Table::new(["Name", "Value"]);
        table.add(["Members".to_string(), inner.render_text()]);

        let parsed: Value = serde_json::from_str(&table.render_json()).unwrap();
        assert_eq!(parsed[0]["Name"], "Members");
        assert_eq!(parsed[0]["Value"], "Id\n7\n");

        let json = table.render_json();
        assert!(json.find("\"Name\"").unwrap() < json.find("\"Value\"").unwrap());
    }

    #[test]
    fn test_empty_table() {
        let table = Table::new(["id", "hostname"]);
        assert_eq!(table.render_text(), "id   hostname\n");
        assert_eq!(table.render_json(), "[]");
    }

    #[test]
    #[should_panic]
    fn test_row_length_is_enforced() {
        let mut table = Table::new(["a", "b"]);
        table.add(["only one"]);
    }

    #[test]
    fn test_empty_helpers() {
        assert_eq!(or_empty(Some(3)), "3");
        assert_eq!(or_empty::<u64>(None), "-");
        assert_eq!(str_or_empty(Some("")), "-");
    }
}

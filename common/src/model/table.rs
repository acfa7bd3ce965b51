//! In-memory representation of a decoded CSV file.
//!
//! A [`Table`] keeps the header line once and one value vector per data line, always
//! exactly as wide as the header. Rows are read through borrowed [`Record`] views, and a
//! subset of rows that has to be echoed back to a client is carried as a [`RecordSet`],
//! which shares the table instead of copying the rows.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::sync::Arc;

/// An ordered sequence of rows decoded against a single header line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    /// One entry per distinct header name, in first-occurrence order, holding the index
    /// of the last column carrying that name.
    visible: Vec<usize>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Builds a table, padding short rows with empty strings and dropping values past
    /// the last header.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        let visible = visible_columns(&headers);
        Self {
            headers,
            visible,
            rows,
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of the column named `name`. With repeated header names the last one wins.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().rposition(|h| h == name)
    }

    pub fn record(&self, index: usize) -> Option<Record<'_>> {
        self.rows.get(index).map(|row| Record { table: self, row })
    }

    pub fn records(&self) -> impl ExactSizeIterator<Item = Record<'_>> + '_ {
        self.rows.iter().map(move |row| Record { table: self, row })
    }
}

fn visible_columns(headers: &[String]) -> Vec<usize> {
    let mut visible = Vec::with_capacity(headers.len());
    for (idx, name) in headers.iter().enumerate() {
        if headers[..idx].contains(name) {
            continue;
        }
        let last = headers.iter().rposition(|h| h == name).unwrap_or(idx);
        visible.push(last);
    }
    visible
}

/// A borrowed view over one row of a [`Table`].
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    table: &'a Table,
    row: &'a [String],
}

impl<'a> Record<'a> {
    /// Value of the column named `name`, or `None` when the header has no such column.
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.table.column(name).map(|idx| self.row[idx].as_str())
    }

    /// Value at a column position resolved up front with [`Table::column`]. An
    /// unresolved column reads as the empty string.
    pub fn value(&self, column: Option<usize>) -> &'a str {
        match column {
            Some(idx) => self.row.get(idx).map(String::as_str).unwrap_or(""),
            None => "",
        }
    }
}

impl Serialize for Record<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.table.visible.len()))?;
        for &idx in &self.table.visible {
            map.serialize_entry(&self.table.headers[idx], &self.row[idx])?;
        }
        map.end()
    }
}

/// A selection of rows from a shared table, serialized as an array of JSON objects.
#[derive(Debug, Clone)]
pub struct RecordSet {
    table: Arc<Table>,
    rows: Vec<usize>,
}

impl RecordSet {
    /// Selects `rows` from `table`. Indices past the end of the table are discarded.
    pub fn new(table: Arc<Table>, rows: Vec<usize>) -> Self {
        let len = table.len();
        let rows = rows.into_iter().filter(|&idx| idx < len).collect();
        Self { table, rows }
    }

    /// The first `limit` rows of `table`, in file order.
    pub fn head(table: Arc<Table>, limit: usize) -> Self {
        let rows = (0..table.len().min(limit)).collect();
        Self { table, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn records(&self) -> impl ExactSizeIterator<Item = Record<'_>> + '_ {
        self.rows.iter().map(move |&idx| Record {
            table: &self.table,
            row: &self.table.rows[idx],
        })
    }
}

impl Serialize for RecordSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
        for record in self.records() {
            seq.serialize_element(&record)?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn short_rows_are_padded_and_long_rows_truncated() {
        let table = Table::new(
            strings(&["a", "b", "c"]),
            vec![strings(&["1"]), strings(&["1", "2", "3", "4"])],
        );
        let first = table.record(0).unwrap();
        assert_eq!(first.get("b"), Some(""));
        assert_eq!(first.get("c"), Some(""));
        let second = table.record(1).unwrap();
        assert_eq!(second.get("c"), Some("3"));
        assert_eq!(
            serde_json::to_value(second).unwrap(),
            serde_json::json!({"a": "1", "b": "2", "c": "3"})
        );
    }

    #[test]
    fn unknown_column_reads_as_empty() {
        let table = Table::new(strings(&["a"]), vec![strings(&["x"])]);
        let record = table.record(0).unwrap();
        assert_eq!(record.get("missing"), None);
        assert_eq!(record.value(table.column("missing")), "");
        assert_eq!(record.value(table.column("a")), "x");
    }

    #[test]
    fn repeated_header_keeps_first_position_and_last_value() {
        let table = Table::new(
            strings(&["id", "name", "id"]),
            vec![strings(&["1", "n", "2"])],
        );
        assert_eq!(table.column("id"), Some(2));
        let json = serde_json::to_string(&table.record(0).unwrap()).unwrap();
        assert_eq!(json, r#"{"id":"2","name":"n"}"#);
    }

    #[test]
    fn record_set_head_is_bounded_by_table_length() {
        let table = Arc::new(Table::new(
            strings(&["n"]),
            (0..5).map(|i| vec![i.to_string()]).collect(),
        ));
        assert_eq!(RecordSet::head(table.clone(), 3).len(), 3);
        assert_eq!(RecordSet::head(table.clone(), 100).len(), 5);

        let picked = RecordSet::new(table, vec![4, 1, 9]);
        assert_eq!(
            serde_json::to_value(&picked).unwrap(),
            serde_json::json!([{"n": "4"}, {"n": "1"}])
        );
    }
}

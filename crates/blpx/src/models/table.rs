//! Tabular result assembly.
//!
//! A [`Table`] is the shape every operation returns: ordered rows under a
//! declared column header, with an optional row-label index. Row order is
//! vendor response order; there is no uniqueness invariant. Tables
//! serialize losslessly, which is what the disk cache relies on.

use serde::{Deserialize, Serialize};

/// One table cell. `None` marks a value that was absent from the vendor
/// response (null-filled during assembly or concatenation).
pub type Cell = Option<String>;

/// An ordered collection of rows with named columns.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<String>,
    index: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// An empty table with the given column header.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            index: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Assemble a table from records of named values.
    ///
    /// The column header is the union of the record keys in first-seen
    /// order; values a record does not carry are null-filled. This is how
    /// reference-data responses, whose records can differ in shape across
    /// events, collapse into one table.
    pub fn from_records(records: Vec<Vec<(String, String)>>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for record in &records {
            for (name, _) in record {
                if !columns.iter().any(|column| column == name) {
                    columns.push(name.clone());
                }
            }
        }
        let mut table = Table::new(columns);
        for record in records {
            let cells = table
                .columns
                .iter()
                .map(|column| {
                    record
                        .iter()
                        .find(|(name, _)| name == column)
                        .map(|(_, value)| value.clone())
                })
                .collect();
            table.rows.push(cells);
        }
        table
    }

    /// Concatenate tables top to bottom without deduplication.
    ///
    /// The result's header is the union of the parts' headers in
    /// first-seen order; columns missing from a part are null-filled for
    /// its rows. Row labels are kept whenever any part carries them.
    pub fn concat<I>(tables: I) -> Self
    where
        I: IntoIterator<Item = Table>,
    {
        let parts: Vec<Table> = tables.into_iter().collect();
        let mut columns: Vec<String> = Vec::new();
        for part in &parts {
            for column in &part.columns {
                if !columns.iter().any(|existing| existing == column) {
                    columns.push(column.clone());
                }
            }
        }
        let labeled = parts.iter().any(|part| !part.index.is_empty());
        let mut out = Table::new(columns);
        for part in parts {
            let positions: Vec<Option<usize>> = out
                .columns
                .iter()
                .map(|column| part.columns.iter().position(|name| name == column))
                .collect();
            for (i, row) in part.rows.iter().enumerate() {
                let cells = positions
                    .iter()
                    .map(|position| position.and_then(|p| row.get(p).cloned().flatten()))
                    .collect();
                out.rows.push(cells);
                if labeled {
                    out.index.push(part.index.get(i).cloned().unwrap_or_default());
                }
            }
        }
        out
    }

    /// Append a row. The cell count must match the column header.
    pub fn push_row(&mut self, cells: Vec<Cell>) {
        assert_eq!(cells.len(), self.columns.len());
        self.rows.push(cells);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn index(&self) -> &[String] {
        &self.index
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column == name)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All cells of one column, or `None` for an unknown column name.
    pub fn column(&self, name: &str) -> Option<Vec<Cell>> {
        let position = self.columns.iter().position(|column| column == name)?;
        Some(
            self.rows
                .iter()
                .map(|row| row.get(position).cloned().flatten())
                .collect(),
        )
    }

    /// One cell by row position and column name.
    pub fn cell(&self, row: usize, column: &str) -> Cell {
        let position = self.columns.iter().position(|name| name == column)?;
        self.rows.get(row)?.get(position)?.clone()
    }

    /// Move a column out of the body and use its values as the row index.
    /// Absent cells become empty labels. Unknown columns are a no-op.
    pub fn index_by(&mut self, column: &str) {
        let position = match self.columns.iter().position(|name| name == column) {
            Some(position) => position,
            None => return,
        };
        self.columns.remove(position);
        self.index = self
            .rows
            .iter_mut()
            .map(|row| row.remove(position).unwrap_or_default())
            .collect();
    }

    /// Drop a column and its cells. Unknown columns are a no-op.
    pub fn drop_column(&mut self, column: &str) {
        let position = match self.columns.iter().position(|name| name == column) {
            Some(position) => position,
            None => return,
        };
        self.columns.remove(position);
        for row in &mut self.rows {
            row.remove(position);
        }
    }

    /// Rewrite every column name through `rename`.
    pub fn rename_columns<F>(&mut self, rename: F)
    where
        F: Fn(&str) -> String,
    {
        for column in &mut self.columns {
            *column = rename(column);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn test_from_records_unions_columns_in_first_seen_order() {
        let table = Table::from_records(vec![
            record(&[("ticker", "AAPL US Equity"), ("field", "PX_LAST"), ("value", "1")]),
            record(&[("ticker", "AAPL US Equity"), ("field", "DVD_HIST"), ("Ex-Date", "2024-02-09")]),
        ]);
        assert_eq!(table.columns(), ["ticker", "field", "value", "Ex-Date"]);
        assert_eq!(table.cell(0, "value"), Some("1".to_string()));
        assert_eq!(table.cell(0, "Ex-Date"), None);
        assert_eq!(table.cell(1, "value"), None);
        assert_eq!(table.cell(1, "Ex-Date"), Some("2024-02-09".to_string()));
    }

    #[test]
    fn test_from_records_empty() {
        let table = Table::from_records(Vec::new());
        assert!(table.is_empty());
        assert!(table.columns().is_empty());
    }

    #[test]
    fn test_concat_null_fills_missing_columns() {
        let mut first = Table::new(["a", "b"]);
        first.push_row(vec![Some("1".to_string()), Some("2".to_string())]);
        let mut second = Table::new(["b", "c"]);
        second.push_row(vec![Some("3".to_string()), Some("4".to_string())]);

        let joined = Table::concat([first, second]);
        assert_eq!(joined.columns(), ["a", "b", "c"]);
        assert_eq!(joined.len(), 2);
        assert_eq!(joined.cell(0, "c"), None);
        assert_eq!(joined.cell(1, "a"), None);
        assert_eq!(joined.cell(1, "b"), Some("3".to_string()));
    }

    #[test]
    fn test_concat_keeps_row_labels() {
        let mut first = Table::new(["ticker", "value"]);
        first.push_row(vec![Some("AAPL US Equity".to_string()), Some("1".to_string())]);
        first.index_by("ticker");
        let mut second = Table::new(["ticker", "value"]);
        second.push_row(vec![Some("IBM US Equity".to_string()), Some("2".to_string())]);
        second.index_by("ticker");

        let joined = Table::concat([first, second]);
        assert_eq!(joined.index(), ["AAPL US Equity", "IBM US Equity"]);
        assert_eq!(joined.columns(), ["value"]);
    }

    #[test]
    fn test_index_by_moves_column_to_labels() {
        let mut table = Table::new(["ticker", "field", "value"]);
        table.push_row(vec![
            Some("AAPL US Equity".to_string()),
            Some("PX_LAST".to_string()),
            Some("123.4".to_string()),
        ]);
        table.index_by("ticker");
        table.drop_column("field");
        assert_eq!(table.columns(), ["value"]);
        assert_eq!(table.index(), ["AAPL US Equity"]);
        assert_eq!(table.cell(0, "value"), Some("123.4".to_string()));
    }

    #[test]
    fn test_drop_unknown_column_is_noop() {
        let mut table = Table::new(["a"]);
        table.push_row(vec![Some("1".to_string())]);
        table.drop_column("missing");
        assert_eq!(table.columns(), ["a"]);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_rename_columns() {
        let mut table = Table::new(["Ex-Date", "Dividend Amount"]);
        table.push_row(vec![None, None]);
        table.rename_columns(|name| name.to_lowercase());
        assert_eq!(table.columns(), ["ex-date", "dividend amount"]);
    }

    #[test]
    fn test_serde_round_trip_is_structural_identity() {
        let mut table = Table::new(["declared_date", "amount"]);
        table.push_row(vec![Some("2024-02-01".to_string()), Some("0.24".to_string())]);
        table.push_row(vec![Some("2024-05-02".to_string()), None]);
        table.index_by("declared_date");

        let encoded = serde_json::to_string(&table).unwrap();
        let decoded: Table = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, table);
    }
}

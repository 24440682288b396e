//! In-memory table abstraction shared by every pipeline stage.
//!
//! A [`Table`] is an ordered collection of named [`Column`]s that all hold the
//! same number of rows. Each column stores its values in a typed
//! [`ColumnData`] vector where `None` marks an absent cell.
//!
//! # Example
//!
//! ```rust
//! use titanic_prep::dataset::{Column, ColumnData, Table};
//!
//! let table = Table::new(vec![
//!     Column::new("Age", ColumnData::Float(vec![Some(22.0), None])),
//!     Column::new("Sex", ColumnData::Text(vec![Some("male".into()), Some("female".into())])),
//! ])
//! .unwrap();
//!
//! assert_eq!(table.shape(), (2, 2));
//! assert_eq!(table.missing_count(), 1);
//! ```

use crate::preprocessing::error::{PreprocessingError, Result};

pub mod csv_io;
pub use self::csv_io::{load_csv, write_csv};

/// Typed storage for one column. `None` is an absent value.
#[derive(Clone, Debug, PartialEq)]
pub enum ColumnData {
    /// Integer values (counts, flags, label codes).
    Int(Vec<Option<i64>>),
    /// Real values.
    Float(Vec<Option<f64>>),
    /// Free text.
    Text(Vec<Option<String>>),
}

impl ColumnData {
    /// Number of cells, absent ones included.
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Int(v) => v.len(),
            ColumnData::Float(v) => v.len(),
            ColumnData::Text(v) => v.len(),
        }
    }

    /// Returns `true` if the column has no cells.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Short name of the storage kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            ColumnData::Int(_) => "integer",
            ColumnData::Float(_) => "float",
            ColumnData::Text(_) => "text",
        }
    }

    /// Returns `true` for `Int` and `Float` columns.
    pub fn is_numeric(&self) -> bool {
        !self.is_text()
    }

    /// Returns `true` for `Text` columns.
    pub fn is_text(&self) -> bool {
        matches!(self, ColumnData::Text(_))
    }

    /// Returns `true` if the cell at `row` is absent.
    pub fn is_missing(&self, row: usize) -> bool {
        match self {
            ColumnData::Int(v) => v[row].is_none(),
            ColumnData::Float(v) => v[row].is_none(),
            ColumnData::Text(v) => v[row].is_none(),
        }
    }

    /// Number of absent cells.
    pub fn missing_count(&self) -> usize {
        (0..self.len()).filter(|&row| self.is_missing(row)).count()
    }

    /// Numeric view of the column as `f64`, or `None` for text columns.
    pub fn to_f64(&self) -> Option<Vec<Option<f64>>> {
        match self {
            ColumnData::Int(v) => Some(v.iter().map(|x| x.map(|i| i as f64)).collect()),
            ColumnData::Float(v) => Some(v.clone()),
            ColumnData::Text(_) => None,
        }
    }

    /// Keep only the cells whose entry in `keep` is `true`.
    ///
    /// `keep` must have exactly [`len`](Self::len) entries.
    fn retain_mask(&mut self, keep: &[bool]) {
        match self {
            ColumnData::Int(v) => retain_by_mask(v, keep),
            ColumnData::Float(v) => retain_by_mask(v, keep),
            ColumnData::Text(v) => retain_by_mask(v, keep),
        }
    }
}

fn retain_by_mask<T>(values: &mut Vec<T>, keep: &[bool]) {
    let mut idx = 0;
    values.retain(|_| {
        let k = keep[idx];
        idx += 1;
        k
    });
}

/// A named column.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    name: String,
    data: ColumnData,
}

impl Column {
    /// Create a column from a name and its values.
    pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &ColumnData {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Ordered collection of equally long, uniquely named columns.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    n_rows: usize,
}

impl Table {
    /// Build a table, checking that names are unique and lengths agree.
    ///
    /// # Errors
    /// [`PreprocessingError::DuplicateColumn`] or
    /// [`PreprocessingError::LengthMismatch`].
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let mut table = Table::default();
        for column in columns {
            if table.has_column(column.name()) {
                return Err(PreprocessingError::DuplicateColumn(column.name().to_string()));
            }
            table.insert_column(column)?;
        }
        Ok(table)
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.columns.len())
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    /// Look a column up by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Append a column, or replace an existing column of the same name in place.
    ///
    /// The first column inserted into a table without columns fixes the row count.
    pub fn insert_column(&mut self, column: Column) -> Result<()> {
        if self.columns.is_empty() {
            self.n_rows = column.len();
        } else if column.len() != self.n_rows {
            return Err(PreprocessingError::LengthMismatch {
                column: column.name().to_string(),
                expected: self.n_rows,
                got: column.len(),
            });
        }

        match self.columns.iter_mut().find(|c| c.name() == column.name()) {
            Some(existing) => *existing = column,
            None => self.columns.push(column),
        }
        Ok(())
    }

    /// Remove a column and return it, if present.
    pub fn drop_column(&mut self, name: &str) -> Option<Column> {
        let pos = self.columns.iter().position(|c| c.name() == name)?;
        Some(self.columns.remove(pos))
    }

    /// Remove every listed column that is present; returns the names removed.
    pub fn drop_columns(&mut self, names: &[&str]) -> Vec<String> {
        names
            .iter()
            .filter_map(|name| self.drop_column(name))
            .map(|c| c.name)
            .collect()
    }

    /// Total number of absent cells.
    pub fn missing_count(&self) -> usize {
        self.columns.iter().map(|c| c.data().missing_count()).sum()
    }

    /// Returns `true` if any column is absent at `row`.
    pub fn row_has_missing(&self, row: usize) -> bool {
        self.columns.iter().any(|c| c.data().is_missing(row))
    }

    /// Keep the rows whose entry in `keep` is `true`.
    pub fn retain_rows(&mut self, keep: &[bool]) -> Result<()> {
        if keep.len() != self.n_rows {
            return Err(PreprocessingError::LengthMismatch {
                column: "<row mask>".to_string(),
                expected: self.n_rows,
                got: keep.len(),
            });
        }
        for column in &mut self.columns {
            column.data.retain_mask(keep);
        }
        self.n_rows = keep.iter().filter(|&&k| k).count();
        Ok(())
    }

    /// Remove every row holding at least one absent value; returns how many were removed.
    pub fn drop_missing_rows(&mut self) -> Result<usize> {
        let keep: Vec<bool> = (0..self.n_rows).map(|r| !self.row_has_missing(r)).collect();
        let before = self.n_rows;
        self.retain_rows(&keep)?;
        Ok(before - self.n_rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Table {
        Table::new(vec![
            Column::new("Pclass", ColumnData::Int(vec![Some(3), Some(1), Some(3)])),
            Column::new("Age", ColumnData::Float(vec![Some(22.0), None, Some(26.0)])),
            Column::new(
                "Sex",
                ColumnData::Text(vec![
                    Some("male".to_string()),
                    Some("female".to_string()),
                    None,
                ]),
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_table_shape() {
        let table = sample_table();
        assert_eq!(table.shape(), (3, 3));
        assert_eq!(table.column_names(), vec!["Pclass", "Age", "Sex"]);
    }

    #[test]
    fn test_table_rejects_duplicate_column() {
        let result = Table::new(vec![
            Column::new("Age", ColumnData::Float(vec![Some(1.0)])),
            Column::new("Age", ColumnData::Float(vec![Some(2.0)])),
        ]);
        assert!(matches!(result, Err(PreprocessingError::DuplicateColumn(_))));
    }

    #[test]
    fn test_table_rejects_ragged_column() {
        let mut table = sample_table();
        let result = table.insert_column(Column::new("Fare", ColumnData::Float(vec![Some(1.0)])));
        assert!(matches!(
            result,
            Err(PreprocessingError::LengthMismatch {
                expected: 3,
                got: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_insert_column_replaces_in_place() {
        let mut table = sample_table();
        table
            .insert_column(Column::new(
                "Age",
                ColumnData::Float(vec![Some(1.0), Some(2.0), Some(3.0)]),
            ))
            .unwrap();
        assert_eq!(table.column_names(), vec!["Pclass", "Age", "Sex"]);
        assert_eq!(table.column("Age").unwrap().data().missing_count(), 0);
    }

    #[test]
    fn test_drop_columns_ignores_absent_names() {
        let mut table = sample_table();
        let dropped = table.drop_columns(&["Ticket", "Sex", "Name"]);
        assert_eq!(dropped, vec!["Sex".to_string()]);
        assert_eq!(table.column_names(), vec!["Pclass", "Age"]);
    }

    #[test]
    fn test_missing_count() {
        let table = sample_table();
        assert_eq!(table.missing_count(), 2);
        assert!(!table.row_has_missing(0));
        assert!(table.row_has_missing(1));
        assert!(table.row_has_missing(2));
    }

    #[test]
    fn test_drop_missing_rows() {
        let mut table = sample_table();
        let dropped = table.drop_missing_rows().unwrap();
        assert_eq!(dropped, 2);
        assert_eq!(table.n_rows(), 1);
        assert_eq!(
            table.column("Pclass").unwrap().data(),
            &ColumnData::Int(vec![Some(3)])
        );
    }

    #[test]
    fn test_retain_rows_mask_length() {
        let mut table = sample_table();
        assert!(table.retain_rows(&[true]).is_err());
    }

    #[test]
    fn test_to_f64_promotes_int() {
        let data = ColumnData::Int(vec![Some(1), None]);
        assert_eq!(data.to_f64(), Some(vec![Some(1.0), None]));
        assert_eq!(ColumnData::Text(vec![]).to_f64(), None);
    }
}

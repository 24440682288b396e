//! Stage that label-encodes every text column of a table.

use crate::dataset::{Column, ColumnData, Table};
use crate::preprocessing::encoding::label::LabelEncoder;
use crate::preprocessing::error::Result;
use crate::preprocessing::pipeline::Stage;
use crate::preprocessing::traits::{FittedTransformer, Transformer};
use tracing::debug;

/// Replaces each text column with integer codes, one independent
/// [`LabelEncoder`] per column. Numeric columns pass through.
#[derive(Clone, Copy, Debug, Default)]
pub struct CategoricalEncoder;

impl CategoricalEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for CategoricalEncoder {
    fn name(&self) -> &'static str {
        "CategoricalEncoder"
    }

    fn apply(&self, table: &Table) -> Result<Table> {
        let mut out = table.clone();

        for column in table.columns() {
            let ColumnData::Text(values) = column.data() else {
                continue;
            };
            if values.is_empty() {
                out.insert_column(Column::new(column.name(), ColumnData::Int(Vec::new())))?;
                continue;
            }

            let fitted = LabelEncoder::new().fit(values)?;
            let codes = fitted.transform(values)?;
            debug!(
                column = column.name(),
                classes = ?fitted.classes(),
                "Label encoded column"
            );
            out.insert_column(Column::new(column.name(), ColumnData::Int(codes)))?;
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(values: &[Option<&str>]) -> ColumnData {
        ColumnData::Text(values.iter().map(|v| v.map(str::to_string)).collect())
    }

    fn table() -> Table {
        Table::new(vec![
            Column::new("Sex", text(&[Some("male"), Some("female"), Some("male")])),
            Column::new("Age", ColumnData::Float(vec![Some(22.0), Some(38.0), Some(26.0)])),
            Column::new("Embarked", text(&[Some("S"), Some("C"), Some("Q")])),
            Column::new("Title", text(&[Some("Mr"), Some("Mrs"), Some("Rare")])),
        ])
        .unwrap()
    }

    #[test]
    fn test_no_text_columns_remain() {
        let out = CategoricalEncoder::new().apply(&table()).unwrap();
        assert!(out.columns().iter().all(|c| c.data().is_numeric()));
        assert_eq!(out.column_names(), vec!["Sex", "Age", "Embarked", "Title"]);
    }

    #[test]
    fn test_codes_follow_sorted_order_per_column() {
        let out = CategoricalEncoder::new().apply(&table()).unwrap();
        assert_eq!(
            out.column("Sex").unwrap().data(),
            &ColumnData::Int(vec![Some(1), Some(0), Some(1)])
        );
        assert_eq!(
            out.column("Embarked").unwrap().data(),
            &ColumnData::Int(vec![Some(2), Some(0), Some(1)])
        );
        assert_eq!(
            out.column("Title").unwrap().data(),
            &ColumnData::Int(vec![Some(0), Some(1), Some(2)])
        );
    }

    #[test]
    fn test_numeric_columns_untouched() {
        let input = table();
        let out = CategoricalEncoder::new().apply(&input).unwrap();
        assert_eq!(out.column("Age"), input.column("Age"));
    }

    #[test]
    fn test_empty_text_column() {
        let input = Table::new(vec![Column::new("Sex", ColumnData::Text(vec![]))]).unwrap();
        let out = CategoricalEncoder::new().apply(&input).unwrap();
        assert_eq!(out.column("Sex").unwrap().data(), &ColumnData::Int(vec![]));
    }
}

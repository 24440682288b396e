//! Derived features and feature selection for the passenger manifest.

pub mod title;

use crate::columns::{FAMILY_SIZE, LOW_VALUE_COLUMNS, NAME, PARCH, SIBSP, TITLE};
use crate::dataset::{Column, ColumnData, Table};
use crate::preprocessing::error::{PreprocessingError, Result};
use crate::preprocessing::pipeline::Stage;
use tracing::debug;

pub use title::{extract_title, group_title, title_of};

/// Adds `Title` and `FamilySize`, then drops `PassengerId`, `Name` and `Ticket`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FeatureEngineer;

impl FeatureEngineer {
    pub fn new() -> Self {
        Self
    }
}

fn expect_text<'a>(column: &'a Column) -> Result<&'a [Option<String>]> {
    match column.data() {
        ColumnData::Text(values) => Ok(values),
        other => Err(PreprocessingError::ColumnType {
            column: column.name().to_string(),
            expected: "text",
            got: other.kind(),
        }),
    }
}

fn expect_numeric(column: &Column) -> Result<()> {
    if column.data().is_text() {
        return Err(PreprocessingError::ColumnType {
            column: column.name().to_string(),
            expected: "numeric",
            got: column.data().kind(),
        });
    }
    Ok(())
}

/// `sibsp + parch + 1`, absent where either input is absent.
///
/// Stays integral when both inputs are integral; an integer overflow is a
/// [`PreprocessingError::NumericalError`].
fn family_size(sibsp: &Column, parch: &Column) -> Result<ColumnData> {
    expect_numeric(sibsp)?;
    expect_numeric(parch)?;

    let sizes = match (sibsp.data(), parch.data()) {
        (ColumnData::Int(s), ColumnData::Int(p)) => ColumnData::Int(
            s.iter()
                .zip(p)
                .map(|(s, p)| match s.zip(*p) {
                    None => Ok(None),
                    Some((s, p)) => s
                        .checked_add(p)
                        .and_then(|sum| sum.checked_add(1))
                        .map(Some)
                        .ok_or_else(|| {
                            PreprocessingError::NumericalError(format!(
                                "{} overflows for {} = {}, {} = {}",
                                FAMILY_SIZE, SIBSP, s, PARCH, p
                            ))
                        }),
                })
                .collect::<Result<_>>()?,
        ),
        (s, p) => {
            let s = s.to_f64().unwrap_or_default();
            let p = p.to_f64().unwrap_or_default();
            ColumnData::Float(
                s.iter()
                    .zip(&p)
                    .map(|(s, p)| s.zip(*p).map(|(s, p)| s + p + 1.0))
                    .collect(),
            )
        }
    };
    Ok(sizes)
}

impl Stage for FeatureEngineer {
    fn name(&self) -> &'static str {
        "FeatureEngineer"
    }

    fn apply(&self, table: &Table) -> Result<Table> {
        let mut table = table.clone();

        if let Some(names) = table.column(NAME) {
            let titles = expect_text(names)?
                .iter()
                .map(|name| Some(title_of(name.as_deref()).to_string()))
                .collect();
            table.insert_column(Column::new(TITLE, ColumnData::Text(titles)))?;
        }

        if let (Some(sibsp), Some(parch)) = (table.column(SIBSP), table.column(PARCH)) {
            let sizes = family_size(sibsp, parch)?;
            table.insert_column(Column::new(FAMILY_SIZE, sizes))?;
        }

        let dropped = table.drop_columns(&LOW_VALUE_COLUMNS);
        debug!(?dropped, "Dropped low-value columns");

        Ok(table)
    }
}

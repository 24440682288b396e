//! Missing-value handling for the passenger manifest.

use crate::columns::{AGE, CABIN, EMBARKED, HAS_CABIN};
use crate::dataset::{Column, ColumnData, Table};
use crate::preprocessing::error::Result;
use crate::preprocessing::imputation::simple::{ImputeStrategy, SimpleImputer};
use crate::preprocessing::pipeline::Stage;
use crate::preprocessing::traits::{FittedTransformer, Transformer};
use tracing::{debug, warn};

/// Removes absent values from the manifest.
///
/// - `Age`: filled with the median age.
/// - `Embarked`: filled with the most frequent port.
/// - `Cabin`: replaced by a `hasCabin` 0/1 flag.
/// - Rows still holding an absent value afterwards are dropped.
///
/// Each step is skipped when its column is not in the table or the table
/// has no rows.
#[derive(Clone, Copy, Debug, Default)]
pub struct MissingValueHandler;

impl MissingValueHandler {
    pub fn new() -> Self {
        Self
    }
}

/// Fit an imputer on `name` and write the filled column back in place.
fn impute_column(table: &mut Table, name: &str, strategy: ImputeStrategy) -> Result<()> {
    let Some(column) = table.column(name).filter(|c| !c.is_empty()) else {
        return Ok(());
    };

    let fitted = SimpleImputer::new(strategy).fit(column.data())?;
    let filled = fitted.transform(column.data())?;
    if let Some(fill) = fitted.statistic() {
        debug!(
            column = name,
            fill = %fill,
            strategy = ?fitted.strategy(),
            "Imputed absent values"
        );
    }
    table.insert_column(Column::new(name, filled))
}

impl Stage for MissingValueHandler {
    fn name(&self) -> &'static str {
        "MissingValueHandler"
    }

    fn apply(&self, table: &Table) -> Result<Table> {
        let mut table = table.clone();

        impute_column(&mut table, AGE, ImputeStrategy::Median)?;
        impute_column(&mut table, EMBARKED, ImputeStrategy::MostFrequent)?;

        if let Some(cabin) = table.drop_column(CABIN) {
            let flags = (0..cabin.len())
                .map(|row| Some(i64::from(!cabin.data().is_missing(row))))
                .collect();
            table.insert_column(Column::new(HAS_CABIN, ColumnData::Int(flags)))?;
        }

        if table.missing_count() > 0 {
            let dropped = table.drop_missing_rows()?;
            warn!(dropped, "Residual missing values remain, dropped affected rows");
        }

        Ok(table)
    }
}

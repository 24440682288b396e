//! Stage that log-transforms `Fare` and standardizes `Age` and `Fare`.

use crate::columns::{FARE, SCALED_COLUMNS};
use crate::dataset::{Column, ColumnData, Table};
use crate::preprocessing::error::{PreprocessingError, Result};
use crate::preprocessing::pipeline::Stage;
use crate::preprocessing::scaling::log::log1p;
use crate::preprocessing::scaling::standard::StandardScaler;
use crate::preprocessing::traits::{FittedTransformer, Transformer};
use ndarray::Array2;
use tracing::debug;

/// Compresses `Fare` with `ln(1 + x)`, then fits one [`StandardScaler`] on
/// whichever of `Age` and `Fare` are present and standardizes them.
///
/// Statistics come from the table being transformed; nothing is kept.
/// An infinite value in either column, including `ln(1 + -1)`, is a
/// [`PreprocessingError::NumericalError`].
#[derive(Clone, Copy, Debug, Default)]
pub struct NumericScaler;

impl NumericScaler {
    pub fn new() -> Self {
        Self
    }
}

fn numeric_values(column: &Column) -> Result<Vec<Option<f64>>> {
    column
        .data()
        .to_f64()
        .ok_or_else(|| PreprocessingError::ColumnType {
            column: column.name().to_string(),
            expected: "numeric",
            got: column.data().kind(),
        })
}

impl Stage for NumericScaler {
    fn name(&self) -> &'static str {
        "NumericScaler"
    }

    fn apply(&self, table: &Table) -> Result<Table> {
        let mut table = table.clone();

        if let Some(fare) = table.column(FARE) {
            let logged = log1p(&numeric_values(fare)?)?;
            table.insert_column(Column::new(FARE, ColumnData::Float(logged)))?;
        }

        let targets = SCALED_COLUMNS
            .iter()
            .filter_map(|&name| table.column(name))
            .map(|column| Ok((column.name().to_string(), numeric_values(column)?)))
            .collect::<Result<Vec<_>>>()?;
        if targets.is_empty() {
            return Ok(table);
        }

        // Absent cells travel through the scaler as NaN.
        let matrix = Array2::from_shape_fn((table.n_rows(), targets.len()), |(i, j)| {
            targets[j].1[i].unwrap_or(f64::NAN)
        });

        let fitted = StandardScaler::new().fit(&matrix)?;
        let scaled = fitted.transform(&matrix)?;

        for (j, (name, _)) in targets.iter().enumerate() {
            debug!(
                column = %name,
                mean = fitted.mean()[j],
                std = fitted.std()[j],
                "Standardized column"
            );
            let values = scaled
                .column(j)
                .iter()
                .map(|&v| (!v.is_nan()).then_some(v))
                .collect();
            table.insert_column(Column::new(name.as_str(), ColumnData::Float(values)))?;
        }

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::AGE;

    fn values(table: &Table, name: &str) -> Vec<f64> {
        table
            .column(name)
            .unwrap()
            .data()
            .to_f64()
            .unwrap()
            .into_iter()
            .flatten()
            .collect()
    }

    fn population_stats(values: &[f64]) -> (f64, f64) {
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        (mean, var.sqrt())
    }

    fn table() -> Table {
        Table::new(vec![
            Column::new("Pclass", ColumnData::Int(vec![Some(3), Some(1), Some(3), Some(1)])),
            Column::new(AGE, ColumnData::Int(vec![Some(22), Some(38), Some(26), Some(35)])),
            Column::new(
                FARE,
                ColumnData::Float(vec![Some(7.25), Some(71.2833), Some(7.925), Some(53.1)]),
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_scaled_columns_have_zero_mean_unit_std() {
        let out = NumericScaler::new().apply(&table()).unwrap();
        for name in [AGE, FARE] {
            let (mean, std) = population_stats(&values(&out, name));
            assert!(mean.abs() < 1e-10, "{} mean = {}", name, mean);
            assert!((std - 1.0).abs() < 1e-10, "{} std = {}", name, std);
        }
    }

    #[test]
    fn test_fare_is_log_transformed_before_scaling() {
        let out = NumericScaler::new().apply(&table()).unwrap();

        let logged: Vec<f64> = [7.25f64, 71.2833, 7.925, 53.1]
            .iter()
            .map(|x| x.ln_1p())
            .collect();
        let (mean, std) = population_stats(&logged);
        let expected = (logged[0] - mean) / std;

        assert!((values(&out, FARE)[0] - expected).abs() < 1e-10);
    }

    #[test]
    fn test_other_columns_untouched() {
        let input = table();
        let out = NumericScaler::new().apply(&input).unwrap();
        assert_eq!(out.column("Pclass"), input.column("Pclass"));
        assert!(matches!(
            out.column(AGE).unwrap().data(),
            ColumnData::Float(_)
        ));
    }

    #[test]
    fn test_only_age_present() {
        let input = Table::new(vec![Column::new(
            AGE,
            ColumnData::Float(vec![Some(20.0), Some(30.0), None]),
        )])
        .unwrap();

        let out = NumericScaler::new().apply(&input).unwrap();
        assert_eq!(
            out.column(AGE).unwrap().data(),
            &ColumnData::Float(vec![Some(-1.0), Some(1.0), None])
        );
    }

    #[test]
    fn test_no_target_columns() {
        let input = Table::new(vec![Column::new("Pclass", ColumnData::Int(vec![Some(3)]))]).unwrap();
        let out = NumericScaler::new().apply(&input).unwrap();
        assert_eq!(out, input);
    }

    #[test]
    fn test_non_finite_fare_is_rejected() {
        // -1 becomes -inf after log1p; inf stays infinite.
        for bad in [-1.0, f64::INFINITY] {
            let input = Table::new(vec![
                Column::new(AGE, ColumnData::Float(vec![Some(22.0), Some(38.0)])),
                Column::new(FARE, ColumnData::Float(vec![Some(7.25), Some(bad)])),
            ])
            .unwrap();
            assert!(matches!(
                NumericScaler::new().apply(&input),
                Err(PreprocessingError::NumericalError(_))
            ));
        }
    }

    #[test]
    fn test_text_fare_is_rejected() {
        let input = Table::new(vec![Column::new(
            FARE,
            ColumnData::Text(vec![Some("cheap".to_string())]),
        )])
        .unwrap();
        assert!(matches!(
            NumericScaler::new().apply(&input),
            Err(PreprocessingError::ColumnType { .. })
        ));
    }
}

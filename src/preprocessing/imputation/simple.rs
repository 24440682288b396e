//! Simple Imputer.
//!
//! Imputation transformer for completing absent values in a single column.
//! Supports median and most_frequent strategies.
//!
//! # Example
//! ```ignore
//! use titanic_prep::preprocessing::{Transformer, SimpleImputer, ImputeStrategy};
//!
//! let imputer = SimpleImputer::new(ImputeStrategy::Median);
//! let fitted = imputer.fit(&age)?;
//! let imputed = fitted.transform(&age)?;
//! ```

use crate::dataset::ColumnData;
use crate::preprocessing::error::PreprocessingError;
use crate::preprocessing::traits::{FittedTransformer, Transformer};
use std::fmt;

/// Strategy for imputing absent values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImputeStrategy {
    /// Replace absent values with the median of the present values.
    /// Numeric columns only.
    Median,
    /// Replace absent values with the most frequent present value.
    /// Ties go to the smallest value.
    MostFrequent,
}

/// The value written into absent cells.
#[derive(Clone, Debug, PartialEq)]
pub enum FillValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for FillValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FillValue::Int(v) => write!(f, "{}", v),
            FillValue::Float(v) => write!(f, "{}", v),
            FillValue::Text(v) => write!(f, "{}", v),
        }
    }
}

/// SimpleImputer transformer (unfitted).
#[derive(Clone, Debug)]
pub struct SimpleImputer {
    strategy: ImputeStrategy,
}

impl SimpleImputer {
    /// Create a new SimpleImputer with the specified strategy.
    pub fn new(strategy: ImputeStrategy) -> Self {
        Self { strategy }
    }
}

fn median(mut values: Vec<f64>) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);
    let n = values.len();
    if n % 2 == 0 {
        Some((values[n / 2 - 1] + values[n / 2]) / 2.0)
    } else {
        Some(values[n / 2])
    }
}

/// Most frequent element of an already sorted slice. The first longest run
/// wins, so ties resolve to the smallest value.
fn mode_of_sorted<T: PartialEq + Clone>(sorted: &[T]) -> Option<T> {
    sorted
        .chunk_by(|a, b| a == b)
        .fold(None, |best: Option<&[T]>, run| match best {
            Some(b) if b.len() >= run.len() => Some(b),
            _ => Some(run),
        })
        .map(|run| run[0].clone())
}

fn compute_statistic(
    data: &ColumnData,
    strategy: ImputeStrategy,
) -> Result<Option<FillValue>, PreprocessingError> {
    let statistic = match (strategy, data) {
        (ImputeStrategy::Median, ColumnData::Text(_)) => {
            return Err(PreprocessingError::ColumnType {
                column: "<imputer input>".to_string(),
                expected: "numeric",
                got: data.kind(),
            });
        }
        (ImputeStrategy::Median, _) => {
            let present: Vec<f64> = data.to_f64().unwrap_or_default().into_iter().flatten().collect();
            median(present).map(FillValue::Float)
        }
        (ImputeStrategy::MostFrequent, ColumnData::Int(v)) => {
            let mut present: Vec<i64> = v.iter().flatten().copied().collect();
            present.sort_unstable();
            mode_of_sorted(&present).map(FillValue::Int)
        }
        (ImputeStrategy::MostFrequent, ColumnData::Float(v)) => {
            let mut present: Vec<f64> = v.iter().flatten().copied().collect();
            present.sort_by(f64::total_cmp);
            mode_of_sorted(&present).map(FillValue::Float)
        }
        (ImputeStrategy::MostFrequent, ColumnData::Text(v)) => {
            let mut present: Vec<&str> = v.iter().flatten().map(String::as_str).collect();
            present.sort_unstable();
            mode_of_sorted(&present).map(|s| FillValue::Text(s.to_string()))
        }
    };
    Ok(statistic)
}

impl Transformer for SimpleImputer {
    type Input = ColumnData;
    type Output = ColumnData;
    type Fitted = FittedSimpleImputer;

    fn fit(&self, data: &ColumnData) -> Result<FittedSimpleImputer, PreprocessingError> {
        if data.is_empty() {
            return Err(PreprocessingError::EmptyData(
                "Cannot fit SimpleImputer on empty data".to_string(),
            ));
        }

        Ok(FittedSimpleImputer {
            strategy: self.strategy,
            statistic: compute_statistic(data, self.strategy)?,
        })
    }
}

/// Fitted SimpleImputer.
///
/// `statistic` is `None` when the fitted column had no present value; such an
/// imputer leaves its input unchanged.
#[derive(Clone, Debug)]
pub struct FittedSimpleImputer {
    strategy: ImputeStrategy,
    statistic: Option<FillValue>,
}

impl FittedSimpleImputer {
    pub fn strategy(&self) -> ImputeStrategy {
        self.strategy
    }

    /// The fill value learned during fit.
    pub fn statistic(&self) -> Option<&FillValue> {
        self.statistic.as_ref()
    }
}

impl FittedTransformer for FittedSimpleImputer {
    type Input = ColumnData;
    type Output = ColumnData;

    fn transform(&self, data: &ColumnData) -> Result<ColumnData, PreprocessingError> {
        let Some(fill) = &self.statistic else {
            return Ok(data.clone());
        };

        let filled = match (data, fill) {
            (ColumnData::Int(v), FillValue::Int(x)) => {
                ColumnData::Int(v.iter().map(|c| Some(c.unwrap_or(*x))).collect())
            }
            // A real fill value promotes an integer column.
            (ColumnData::Int(v), FillValue::Float(x)) => ColumnData::Float(
                v.iter()
                    .map(|c| Some(c.map_or(*x, |i| i as f64)))
                    .collect(),
            ),
            (ColumnData::Float(v), FillValue::Float(x)) => {
                ColumnData::Float(v.iter().map(|c| Some(c.unwrap_or(*x))).collect())
            }
            (ColumnData::Float(v), FillValue::Int(x)) => {
                ColumnData::Float(v.iter().map(|c| Some(c.unwrap_or(*x as f64))).collect())
            }
            (ColumnData::Text(v), FillValue::Text(x)) => ColumnData::Text(
                v.iter()
                    .map(|c| Some(c.clone().unwrap_or_else(|| x.clone())))
                    .collect(),
            ),
            (data, fill) => {
                return Err(PreprocessingError::ColumnType {
                    column: "<imputer input>".to_string(),
                    expected: match fill {
                        FillValue::Text(_) => "text",
                        _ => "numeric",
                    },
                    got: data.kind(),
                });
            }
        };
        Ok(filled)
    }

    fn n_features_in(&self) -> usize {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(values: &[Option<&str>]) -> ColumnData {
        ColumnData::Text(values.iter().map(|v| v.map(str::to_string)).collect())
    }

    #[test]
    fn test_median_odd_count() {
        let data = ColumnData::Float(vec![Some(22.0), None, Some(38.0), Some(26.0)]);
        let fitted = SimpleImputer::new(ImputeStrategy::Median).fit(&data).unwrap();
        assert_eq!(fitted.statistic(), Some(&FillValue::Float(26.0)));

        let filled = fitted.transform(&data).unwrap();
        assert_eq!(
            filled,
            ColumnData::Float(vec![Some(22.0), Some(26.0), Some(38.0), Some(26.0)])
        );
    }

    #[test]
    fn test_median_even_count_promotes_int() {
        let data = ColumnData::Int(vec![Some(22), Some(35), None, Some(21), Some(40)]);
        let filled = SimpleImputer::new(ImputeStrategy::Median)
            .fit_transform(&data)
            .unwrap();
        assert_eq!(
            filled,
            ColumnData::Float(vec![
                Some(22.0),
                Some(35.0),
                Some(28.5),
                Some(21.0),
                Some(40.0)
            ])
        );
    }

    #[test]
    fn test_median_rejects_text() {
        let data = text(&[Some("a"), None]);
        let result = SimpleImputer::new(ImputeStrategy::Median).fit(&data);
        assert!(matches!(result, Err(PreprocessingError::ColumnType { .. })));
    }

    #[test]
    fn test_most_frequent_text() {
        let data = text(&[Some("S"), Some("C"), None, Some("S"), Some("Q")]);
        let filled = SimpleImputer::new(ImputeStrategy::MostFrequent)
            .fit_transform(&data)
            .unwrap();
        assert_eq!(
            filled,
            text(&[Some("S"), Some("C"), Some("S"), Some("S"), Some("Q")])
        );
    }

    #[test]
    fn test_most_frequent_tie_goes_to_smallest() {
        let data = text(&[Some("S"), Some("C"), Some("S"), Some("C"), None]);
        let fitted = SimpleImputer::new(ImputeStrategy::MostFrequent)
            .fit(&data)
            .unwrap();
        assert_eq!(fitted.statistic(), Some(&FillValue::Text("C".to_string())));

        let ints = ColumnData::Int(vec![Some(3), Some(1), Some(3), Some(1)]);
        let fitted = SimpleImputer::new(ImputeStrategy::MostFrequent)
            .fit(&ints)
            .unwrap();
        assert_eq!(fitted.statistic(), Some(&FillValue::Int(1)));
    }

    #[test]
    fn test_all_absent_leaves_column_unchanged() {
        let data = ColumnData::Float(vec![None, None]);
        let fitted = SimpleImputer::new(ImputeStrategy::Median).fit(&data).unwrap();
        assert!(fitted.statistic().is_none());
        assert_eq!(fitted.transform(&data).unwrap(), data);
    }

    #[test]
    fn test_empty_data() {
        let data = ColumnData::Float(vec![]);
        let result = SimpleImputer::new(ImputeStrategy::Median).fit(&data);
        assert!(matches!(result, Err(PreprocessingError::EmptyData(_))));
    }

    #[test]
    fn test_transform_kind_mismatch() {
        let fitted = SimpleImputer::new(ImputeStrategy::MostFrequent)
            .fit(&text(&[Some("S")]))
            .unwrap();
        let result = fitted.transform(&ColumnData::Int(vec![None]));
        assert!(matches!(result, Err(PreprocessingError::ColumnType { .. })));
    }
}

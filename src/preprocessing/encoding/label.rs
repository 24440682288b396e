//! Label encoding for a single text column.
//!
//! Maps each distinct value to its index in the sorted list of distinct values.

use crate::preprocessing::error::PreprocessingError;
use crate::preprocessing::traits::{FittedTransformer, Transformer};
use std::collections::{BTreeSet, HashMap};

/// Label encoder for one column of text values.
///
/// Absent cells are ignored during fit and stay absent after transform.
///
/// # Example
/// ```ignore
/// use titanic_prep::preprocessing::{LabelEncoder, Transformer};
///
/// let sex = vec![Some("male".to_string()), Some("female".to_string())];
/// let codes = LabelEncoder::new().fit_transform(&sex)?;
/// assert_eq!(codes, vec![Some(1), Some(0)]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct LabelEncoder;

impl LabelEncoder {
    /// Create a new LabelEncoder.
    pub fn new() -> Self {
        Self
    }
}

impl Transformer for LabelEncoder {
    type Input = [Option<String>];
    type Output = Vec<Option<i64>>;
    type Fitted = FittedLabelEncoder;

    fn fit(&self, labels: &[Option<String>]) -> Result<FittedLabelEncoder, PreprocessingError> {
        if labels.is_empty() {
            return Err(PreprocessingError::EmptyData(
                "Cannot fit LabelEncoder on empty data".to_string(),
            ));
        }

        // Find unique classes
        let classes: BTreeSet<&str> = labels.iter().flatten().map(String::as_str).collect();
        let classes_: Vec<String> = classes.into_iter().map(str::to_string).collect();

        // Create mapping from class to index
        let class_to_idx = classes_
            .iter()
            .enumerate()
            .map(|(idx, class)| (class.clone(), idx as i64))
            .collect();

        Ok(FittedLabelEncoder {
            classes_,
            class_to_idx,
        })
    }
}

/// Fitted LabelEncoder.
#[derive(Clone, Debug)]
pub struct FittedLabelEncoder {
    /// Unique classes in sorted order.
    classes_: Vec<String>,
    /// Mapping from class value to code.
    class_to_idx: HashMap<String, i64>,
}

impl FittedLabelEncoder {
    /// Get the unique classes; a value's code is its position here.
    pub fn classes(&self) -> &[String] {
        &self.classes_
    }

    /// Get the number of classes.
    pub fn n_classes(&self) -> usize {
        self.classes_.len()
    }
}

impl FittedTransformer for FittedLabelEncoder {
    type Input = [Option<String>];
    type Output = Vec<Option<i64>>;

    fn transform(&self, labels: &[Option<String>]) -> Result<Vec<Option<i64>>, PreprocessingError> {
        labels
            .iter()
            .map(|label| match label {
                None => Ok(None),
                Some(value) => self
                    .class_to_idx
                    .get(value)
                    .map(|&idx| Some(idx))
                    .ok_or_else(|| PreprocessingError::UnknownLabel(value.clone())),
            })
            .collect()
    }

    fn n_features_in(&self) -> usize {
        1
    }
}

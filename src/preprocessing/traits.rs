//! Core traits for preprocessing transformers.
//!
//! This module defines the two column-level traits:
//! - [`Transformer`]: Unfitted; holds hyperparameters and learns from data.
//! - [`FittedTransformer`]: After fitting; applies what it learned.
//!
//! Pipeline stages operate on whole tables and are described by
//! [`Stage`](crate::preprocessing::pipeline::Stage); they fit and apply these
//! transformers on the same data in one pass.

use crate::preprocessing::error::PreprocessingError;

/// Trait for unfitted transformers with hyperparameters.
///
/// # Example
/// ```ignore
/// use titanic_prep::preprocessing::{SimpleImputer, ImputeStrategy, Transformer};
///
/// let imputer = SimpleImputer::new(ImputeStrategy::Median);
/// let fitted = imputer.fit(&age)?;
/// let filled = fitted.transform(&age)?;
/// ```
pub trait Transformer: Clone {
    /// Input data type.
    type Input: ?Sized;
    /// Output data type after transformation.
    type Output;
    /// The fitted transformer type.
    type Fitted: FittedTransformer<Input = Self::Input, Output = Self::Output>;

    /// Fit the transformer to the data.
    ///
    /// # Errors
    /// Returns [`PreprocessingError`] if the data is empty or of the wrong kind.
    fn fit(&self, data: &Self::Input) -> Result<Self::Fitted, PreprocessingError>;

    /// Fit the transformer and transform the same data in one step.
    fn fit_transform(&self, data: &Self::Input) -> Result<Self::Output, PreprocessingError> {
        self.fit(data)?.transform(data)
    }
}

/// Trait for fitted transformers.
pub trait FittedTransformer: Clone {
    /// Input data type.
    type Input: ?Sized;
    /// Output data type after transformation.
    type Output;

    /// Transform data using learned parameters.
    ///
    /// # Errors
    /// Returns [`PreprocessingError`] if the input is incompatible with what
    /// was seen during fit.
    fn transform(&self, data: &Self::Input) -> Result<Self::Output, PreprocessingError>;

    /// Number of features seen during fit.
    fn n_features_in(&self) -> usize;
}

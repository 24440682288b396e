//! Standard Scaler (Z-score normalization).
//!
//! Transforms features by removing the mean and scaling to unit variance.
//!
//! The standard score of a sample `x` is calculated as:
//! ```text
//! z = (x - u) / s
//! ```
//! where `u` is the mean of the fitted samples, and `s` is the population
//! standard deviation (ddof = 0). NaN entries are treated as absent: they are
//! ignored while fitting and stay NaN after transform. Infinite entries are
//! rejected.
//!
//! # Example
//! ```ignore
//! use titanic_prep::preprocessing::{Transformer, StandardScaler};
//!
//! let scaler = StandardScaler::new()
//!     .with_mean(true)
//!     .with_std(true);
//!
//! let scaled = scaler.fit_transform(&data)?;
//! ```

use crate::preprocessing::error::PreprocessingError;
use crate::preprocessing::traits::{FittedTransformer, Transformer};
use ndarray::{Array1, Array2, Axis};

/// Configuration for StandardScaler.
#[derive(Clone, Debug)]
pub struct StandardScalerConfig {
    /// If true, center the data before scaling.
    pub with_mean: bool,
    /// If true, scale the data to unit variance.
    pub with_std: bool,
}

impl Default for StandardScalerConfig {
    fn default() -> Self {
        Self {
            with_mean: true,
            with_std: true,
        }
    }
}

/// StandardScaler transformer (unfitted).
#[derive(Clone, Debug, Default)]
pub struct StandardScaler {
    config: StandardScalerConfig,
}

impl StandardScaler {
    /// Create a new StandardScaler with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to center data by mean.
    pub fn with_mean(mut self, with_mean: bool) -> Self {
        self.config.with_mean = with_mean;
        self
    }

    /// Set whether to scale data to unit variance.
    pub fn with_std(mut self, with_std: bool) -> Self {
        self.config.with_std = with_std;
        self
    }
}

impl Transformer for StandardScaler {
    type Input = Array2<f64>;
    type Output = Array2<f64>;
    type Fitted = FittedStandardScaler;

    fn fit(&self, data: &Array2<f64>) -> Result<FittedStandardScaler, PreprocessingError> {
        let (rows, cols) = data.dim();

        if rows == 0 {
            return Err(PreprocessingError::EmptyData(
                "Cannot fit StandardScaler on empty data".to_string(),
            ));
        }

        if let Some(((row, col), v)) = data.indexed_iter().find(|(_, v)| v.is_infinite()) {
            return Err(PreprocessingError::NumericalError(format!(
                "StandardScaler input contains {} at row {}, column {}",
                v, row, col
            )));
        }

        let mut mean = Array1::<f64>::zeros(cols);
        let mut std = Array1::<f64>::ones(cols);

        for (j, column) in data.axis_iter(Axis(1)).enumerate() {
            let present: Array1<f64> = column.iter().copied().filter(|v| !v.is_nan()).collect();
            if present.is_empty() {
                continue;
            }
            if self.config.with_mean {
                mean[j] = present.mean().unwrap_or(0.0);
            }
            if self.config.with_std {
                let s = present.std(0.0);
                // A constant feature is left unscaled.
                std[j] = if s == 0.0 { 1.0 } else { s };
            }
        }

        Ok(FittedStandardScaler {
            mean,
            std,
            n_features: cols,
        })
    }
}

/// Fitted StandardScaler.
#[derive(Clone, Debug)]
pub struct FittedStandardScaler {
    mean: Array1<f64>,
    std: Array1<f64>,
    n_features: usize,
}

impl FittedStandardScaler {
    /// Per-feature mean (zeros when `with_mean` is off).
    pub fn mean(&self) -> &Array1<f64> {
        &self.mean
    }

    /// Per-feature scale (ones when `with_std` is off).
    pub fn std(&self) -> &Array1<f64> {
        &self.std
    }
}

impl FittedTransformer for FittedStandardScaler {
    type Input = Array2<f64>;
    type Output = Array2<f64>;

    fn transform(&self, data: &Array2<f64>) -> Result<Array2<f64>, PreprocessingError> {
        if data.ncols() != self.n_features {
            return Err(PreprocessingError::FeatureMismatch {
                expected_features: self.n_features,
                got_features: data.ncols(),
            });
        }
        Ok((data - &self.mean) / &self.std)
    }

    fn n_features_in(&self) -> usize {
        self.n_features
    }
}

//! `ln(1 + x)` transform for right-skewed, non-negative features.

use crate::preprocessing::error::{PreprocessingError, Result};

/// Apply `ln(1 + x)` to every present value.
///
/// # Errors
/// [`PreprocessingError::NumericalError`] for a value below `-1`.
pub fn log1p(values: &[Option<f64>]) -> Result<Vec<Option<f64>>> {
    values
        .iter()
        .map(|value| match *value {
            Some(x) if x < -1.0 => Err(PreprocessingError::NumericalError(format!(
                "log1p is undefined for {}",
                x
            ))),
            Some(x) => Ok(Some(x.ln_1p())),
            None => Ok(None),
        })
        .collect()
}

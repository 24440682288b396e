//! Feature scaling transformers.
//!
//! - [`StandardScaler`]: Z-score normalization over the columns of a matrix
//! - [`log1p`]: `ln(1 + x)` compression of skewed values
//! - [`NumericScaler`]: table stage combining both for `Age` and `Fare`

pub mod log;
pub mod numeric;
pub mod standard;

pub use log::log1p;
pub use numeric::NumericScaler;
pub use standard::{FittedStandardScaler, StandardScaler, StandardScalerConfig};

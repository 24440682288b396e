//! Table preprocessing for the passenger manifest.
//!
//! Column-level transformers follow a fit/transform split: an unfitted
//! [`Transformer`] learns from data and yields a [`FittedTransformer`] that
//! applies what it learned. Table-level [`Stage`]s fit those transformers on
//! the table they are given and return a new table; a [`Pipeline`] runs the
//! stages in order.
//!
//! # Stages
//!
//! - [`MissingValueHandler`]: median/mode imputation, cabin flag, residual row drop
//! - [`FeatureEngineer`]: `Title`, `FamilySize`, low-value column removal
//! - [`CategoricalEncoder`]: label encoding of every text column
//! - [`NumericScaler`]: `log1p(Fare)` and standardization of `Age`/`Fare`
//!
//! # Example
//!
//! ```ignore
//! use titanic_prep::dataset::load_csv;
//! use titanic_prep::preprocessing::Pipeline;
//!
//! let raw = load_csv("titanic_raw/titanic.csv")?;
//! let features = Pipeline::manifest().transform(&raw)?;
//! ```

pub mod encoding;
pub mod error;
pub mod feature_engineering;
pub mod imputation;
pub mod pipeline;
pub mod scaling;
pub mod traits;

// Re-export main types
pub use encoding::{CategoricalEncoder, FittedLabelEncoder, LabelEncoder};
pub use error::{PreprocessingError, Result};
pub use feature_engineering::FeatureEngineer;
pub use imputation::{
    FillValue, FittedSimpleImputer, ImputeStrategy, MissingValueHandler, SimpleImputer,
};
pub use pipeline::{Pipeline, Stage};
pub use scaling::{FittedStandardScaler, NumericScaler, StandardScaler, StandardScalerConfig};
pub use traits::{FittedTransformer, Transformer};

//! Imputation of absent values.

pub mod missing;
pub mod simple;

pub use missing::MissingValueHandler;
pub use simple::{FillValue, FittedSimpleImputer, ImputeStrategy, SimpleImputer};

//! Categorical encoding: text values to integer codes.

pub mod categorical;
pub mod label;

pub use categorical::CategoricalEncoder;
pub use label::{FittedLabelEncoder, LabelEncoder};

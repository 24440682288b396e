//! # titanic_prep
//!
//! Turns the raw Titanic passenger manifest into a numerically encoded,
//! scaled feature table ready for model training.
//!
//! ## Pipeline
//!
//! 1. **Load** the comma-delimited manifest into a [`Table`].
//! 2. **Handle missing values**: median `Age`, most frequent `Embarked`,
//!    `Cabin` replaced by a `hasCabin` flag, leftover incomplete rows dropped.
//! 3. **Engineer features**: `Title` from `Name`, `FamilySize` from
//!    `SibSp + Parch + 1`; `PassengerId`, `Name` and `Ticket` dropped.
//! 4. **Encode** every text column as integer codes.
//! 5. **Scale**: `ln(1 + Fare)`, then standardize `Age` and `Fare`.
//! 6. **Write** the result as a comma-delimited file.
//!
//! Every stage takes a table by reference and returns a new one.
//!
//! ## Quick Start
//!
//! ```no_run
//! use titanic_prep::config::PipelineConfig;
//!
//! let config = PipelineConfig::default()
//!     .with_input_path("titanic_raw/titanic.csv")
//!     .with_output_path("preprocessing/titanic_preprocessing.csv");
//!
//! let summary = titanic_prep::run(&config).unwrap();
//! println!("{:?} -> {:?}", summary.input_shape, summary.output_shape);
//! ```
//!
//! ## Module Structure
//!
//! - `dataset`: In-memory table and CSV reading/writing
//! - `preprocessing`: Transformers, stages and the stage pipeline
//! - `columns`: Manifest column names
//! - `config`: Input/output paths
//! - `runner`: End-to-end orchestration

/// Manifest column names.
pub mod columns;

/// Input and output locations.
pub mod config;

/// In-memory table and CSV I/O.
pub mod dataset;

/// Table preprocessing stages and transformers.
pub mod preprocessing;

/// End-to-end orchestration.
pub mod runner;

pub use dataset::{Column, ColumnData, Table};
pub use preprocessing::{PreprocessingError, Result};
pub use runner::{run, PipelineSummary};

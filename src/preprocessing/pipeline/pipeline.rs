//! Sequential chaining of table stages.

use crate::dataset::Table;
use crate::preprocessing::encoding::CategoricalEncoder;
use crate::preprocessing::error::Result;
use crate::preprocessing::feature_engineering::FeatureEngineer;
use crate::preprocessing::imputation::MissingValueHandler;
use crate::preprocessing::scaling::NumericScaler;
use tracing::info;

use super::step::Stage;

/// An ordered list of stages; the output of one is the input of the next.
///
/// # Example
/// ```ignore
/// use titanic_prep::preprocessing::Pipeline;
///
/// let cleaned = Pipeline::manifest().transform(&raw)?;
/// ```
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    /// Create a new empty pipeline.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// The manifest cleaning sequence: missing values, feature engineering,
    /// encoding, scaling.
    pub fn manifest() -> Self {
        Self::new()
            .add_stage(MissingValueHandler::new())
            .add_stage(FeatureEngineer::new())
            .add_stage(CategoricalEncoder::new())
            .add_stage(NumericScaler::new())
    }

    /// Append a stage.
    pub fn add_stage(mut self, stage: impl Stage + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Get the number of stages in the pipeline.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Check if the pipeline is empty.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Get stage names in execution order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Run every stage in order. The first failing stage aborts the run.
    pub fn transform(&self, table: &Table) -> Result<Table> {
        let mut current = table.clone();
        for stage in &self.stages {
            info!("Starting {}...", stage.name());
            current = stage.apply(&current)?;
            let (rows, cols) = current.shape();
            info!("Finished {}. Shape: ({}, {})", stage.name(), rows, cols);
        }
        Ok(current)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

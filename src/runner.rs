//! End-to-end run: load, clean, write.

use crate::config::PipelineConfig;
use crate::dataset::{load_csv, write_csv};
use crate::preprocessing::error::Result;
use crate::preprocessing::pipeline::Pipeline;
use std::path::PathBuf;
use tracing::info;

/// What a successful run did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineSummary {
    /// `(rows, columns)` of the raw table.
    pub input_shape: (usize, usize),
    /// `(rows, columns)` of the written table.
    pub output_shape: (usize, usize),
    /// Stages applied, in order.
    pub stages: Vec<&'static str>,
    /// Where the cleaned table was written.
    pub output_path: PathBuf,
}

impl PipelineSummary {
    /// Rows removed by the residual missing-value drop.
    pub fn rows_dropped(&self) -> usize {
        self.input_shape.0 - self.output_shape.0
    }
}

/// Load the raw manifest, run [`Pipeline::manifest`] over it and write the
/// result.
///
/// Nothing is written when loading or any stage fails.
pub fn run(config: &PipelineConfig) -> Result<PipelineSummary> {
    let raw = load_csv(config.input_path())?;

    let pipeline = Pipeline::manifest();
    let cleaned = pipeline.transform(&raw)?;

    write_csv(&cleaned, config.output_path())?;
    info!("Preprocessing complete.");

    Ok(PipelineSummary {
        input_shape: raw.shape(),
        output_shape: cleaned.shape(),
        stages: pipeline.stage_names(),
        output_path: config.output_path().to_path_buf(),
    })
}

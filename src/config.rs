//! Input and output locations of a pipeline run.

use std::path::{Path, PathBuf};

/// Default location of the raw manifest, relative to the working directory.
pub const RAW_DATA_PATH: &str = "titanic_raw/titanic.csv";

/// Default location of the cleaned feature table.
pub const OUTPUT_PATH: &str = "preprocessing/titanic_preprocessing.csv";

/// Where a run reads from and writes to.
///
/// # Example
/// ```rust
/// use titanic_prep::config::PipelineConfig;
///
/// let config = PipelineConfig::default().with_output_path("out/features.csv");
/// assert_eq!(config.input_path().to_str(), Some("titanic_raw/titanic.csv"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineConfig {
    input_path: PathBuf,
    output_path: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(RAW_DATA_PATH),
            output_path: PathBuf::from(OUTPUT_PATH),
        }
    }
}

impl PipelineConfig {
    /// Set the raw manifest path.
    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    /// Set the cleaned output path.
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = PipelineConfig::default();
        assert_eq!(config.input_path(), Path::new(RAW_DATA_PATH));
        assert_eq!(config.output_path(), Path::new(OUTPUT_PATH));
    }

    #[test]
    fn test_builder_overrides() {
        let config = PipelineConfig::default()
            .with_input_path("a.csv")
            .with_output_path("b/c.csv");
        assert_eq!(config.input_path(), Path::new("a.csv"));
        assert_eq!(config.output_path(), Path::new("b/c.csv"));
    }
}

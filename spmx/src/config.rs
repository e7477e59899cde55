//! Run configuration for the SPMX command line
//!
//! Directories and output naming are passed explicitly into the pipeline
//! instead of being read from process state.

use std::path::{Path, PathBuf};

use spmx_core::{DecodeOptions, Operation};

/// Default directory input files are resolved against
pub const DEFAULT_INPUT_DIR: &str = "sample_inputs";

/// Default directory results are written to
pub const DEFAULT_OUTPUT_DIR: &str = "results";

/// Default extension of result files
pub const DEFAULT_EXTENSION: &str = "txt";

/// Where inputs come from, where results go, and how strictly inputs are read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Directory input file names are relative to
    pub input_dir: PathBuf,
    /// Directory the result file is written into (created when missing)
    pub output_dir: PathBuf,
    /// Extension of the result file, without the dot
    pub extension: String,
    /// Reject input entries outside the declared dimensions
    pub strict_bounds: bool,
}

impl RunConfig {
    /// Create config with explicit input and output directories
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    /// Set the result file extension
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Set strict bounds checking for inputs
    pub fn with_strict_bounds(mut self, strict_bounds: bool) -> Self {
        self.strict_bounds = strict_bounds;
        self
    }

    /// Resolve an input file name against the input directory
    pub fn input_path(&self, file: impl AsRef<Path>) -> PathBuf {
        self.input_dir.join(file)
    }

    /// Path of the result file for `operation`, e.g. `results/result_add.txt`
    pub fn output_path(&self, operation: Operation) -> PathBuf {
        let name = if self.extension.is_empty() {
            format!("result_{operation}")
        } else {
            format!("result_{operation}.{}", self.extension)
        };
        self.output_dir.join(name)
    }

    /// Decoder options implied by this config
    pub fn decode_options(&self) -> DecodeOptions {
        DecodeOptions::default().with_strict_bounds(self.strict_bounds)
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            extension: DEFAULT_EXTENSION.to_string(),
            strict_bounds: false,
        }
    }
}

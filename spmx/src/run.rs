//! The load, compute and store pipeline behind the `spmx` command

use std::path::{Path, PathBuf};

use log::{debug, info};
use spmx_core::Operation;

use crate::config::RunConfig;
use crate::error::Result;
use crate::io::{read_matrix, write_matrix};

/// Apply `operation` to two input files and write the result
///
/// Inputs are resolved against `config.input_dir`. On success the result is
/// written to [`RunConfig::output_path`] and that path is returned. Nothing
/// is written when decoding or the operation fails.
pub fn execute(
    operation: Operation,
    file1: impl AsRef<Path>,
    file2: impl AsRef<Path>,
    config: &RunConfig,
) -> Result<PathBuf> {
    debug!("Running {operation} with {config:?}");

    let options = config.decode_options();
    let left_path = config.input_path(file1);
    let right_path = config.input_path(file2);

    let left = read_matrix(&left_path, options)?;
    info!(
        "Loaded {}: {}x{} with {} non-zeros",
        left_path.display(),
        left.rows(),
        left.cols(),
        left.nnz()
    );
    let right = read_matrix(&right_path, options)?;
    info!(
        "Loaded {}: {}x{} with {} non-zeros",
        right_path.display(),
        right.rows(),
        right.cols(),
        right.nnz()
    );

    let result = operation.apply(&left, &right)?;
    info!(
        "Computed {operation}: {}x{} with {} non-zeros",
        result.rows(),
        result.cols(),
        result.nnz()
    );

    let output_path = config.output_path(operation);
    write_matrix(&output_path, &result)?;
    info!("Result written to {}", output_path.display());

    Ok(output_path)
}

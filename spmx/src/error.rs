//! Error type for the SPMX command line

use std::path::PathBuf;

use spmx_core::MatrixError;
use thiserror::Error;

/// Errors that can occur while running an SPMX job
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", .path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: MatrixError,
    },

    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

impl CliError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CliError::Io {
            path: path.into(),
            source,
        }
    }

    /// The core error behind this failure, if any
    pub fn matrix_error(&self) -> Option<&MatrixError> {
        match self {
            CliError::Io { .. } => None,
            CliError::Input { source, .. } | CliError::Matrix(source) => Some(source),
        }
    }
}

/// Result type for SPMX command line operations
pub type Result<T> = std::result::Result<T, CliError>;

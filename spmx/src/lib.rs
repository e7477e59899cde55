//! SPMX - Sparse integer matrix arithmetic over a plain text format
//!
//! This crate wires the pure `spmx-core` library to the filesystem and the
//! command line.
//!
//! ## Architecture
//!
//! - **spmx-core**: matrix type, arithmetic and text codec (no I/O)
//! - **spmx**: file I/O, run configuration and the `spmx` binary
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spmx::{execute, Operation, RunConfig};
//!
//! fn example() -> spmx::Result<()> {
//!     let config = RunConfig::new("sample_inputs", "results");
//!     let output = execute(Operation::Multiply, "a.txt", "b.txt", &config)?;
//!     println!("Result written to: {}", output.display());
//!     Ok(())
//! }
//! ```

// Re-export core abstractions
pub use spmx_core::{
    decode, decode_with, encode, DecodeOptions, MatrixError, Operation, SparseMatrix,
    SparseView,
};

pub mod config;
pub mod error;
pub mod io;
pub mod run;

pub use config::RunConfig;
pub use error::{CliError, Result};
pub use io::{read_matrix, write_matrix};
pub use run::execute;

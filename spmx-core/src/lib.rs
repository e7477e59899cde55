#![no_std]

//! SPMX Core - Sparse Integer Matrix Definitions
//!
//! This crate provides the sparse matrix value type, its arithmetic and the
//! line-oriented text format. It performs no I/O.

extern crate alloc;

pub mod error;
pub mod format;
pub mod matrix;
pub mod ops;
pub mod traits;

#[cfg(feature = "serde")]
mod serde_support;

pub use error::*;
pub use format::{decode, decode_with, encode, DecodeOptions};
pub use matrix::SparseMatrix;
pub use ops::Operation;
pub use traits::SparseView;

//! File I/O for SPMX text matrices

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;
use spmx_core::{decode_with, encode, DecodeOptions, SparseMatrix, SparseView};

use crate::error::{CliError, Result};

/// Read and decode a matrix file
pub fn read_matrix(path: impl AsRef<Path>, options: DecodeOptions) -> Result<SparseMatrix> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    debug!("Read {} bytes from {}", text.len(), path.display());

    decode_with(&text, options).map_err(|source| CliError::Input {
        path: path.to_path_buf(),
        source,
    })
}

/// Encode a matrix and write it to `path`
///
/// The text is written to a temporary sibling first and renamed into place,
/// so `path` is either left untouched or holds the complete result. Missing
/// parent directories are created.
pub fn write_matrix<M: SparseView + ?Sized>(path: impl AsRef<Path>, matrix: &M) -> Result<()> {
    let path = path.as_ref();
    let text = encode(matrix);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| CliError::io(parent, e))?;
    }

    let temp_path = temp_path_for(path);
    let written = write_file(&temp_path, text.as_bytes())
        .and_then(|()| fs::rename(&temp_path, path));
    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(CliError::io(path, e));
    }

    debug!("Wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}

fn write_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(bytes)?;
    writer.flush()?;
    writer.get_ref().sync_all()
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = std::ffi::OsString::from(".");
    name.push(path.file_name().unwrap_or_default());
    name.push(".tmp");
    path.with_file_name(name)
}

//! Plain comma-separated text decoding for the dataset files.
//!
//! The exports this service reads never quote or escape fields, so a line is split on
//! every comma. A field containing a literal comma would shift the columns after it;
//! that format limitation is accepted rather than guessed around.

mod decode;

pub use decode::{decode, parse_int};

use super::LoadError;
use common::model::table::Table;
use std::fs;
use std::path::Path;

/// Reads `path` and decodes it. Absence is checked before reading so it can be told
/// apart from other I/O failures. Invalid UTF-8 is replaced, never rejected.
pub(crate) fn read_table(path: &Path) -> Result<Table, LoadError> {
    if !path.exists() {
        return Err(LoadError::Missing {
            path: path.to_path_buf(),
        });
    }
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decode(&String::from_utf8_lossy(&bytes)))
}

//! Dataset loading.
//!
//! Whole-file, blocking reads -- the dataset is a small flat file that is
//! re-read fresh on every request or run, never cached.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::CoreError;
use crate::reading::Reading;

/// Load all readings from a JSON file containing an array of records.
///
/// Distinguishes three failures: the file does not exist
/// ([`CoreError::NotFound`]), the file is not valid JSON or not an array of
/// readings ([`CoreError::Parse`]), or any other read error
/// ([`CoreError::Io`]).
pub fn load_readings(path: &Path) -> Result<Vec<Reading>, CoreError> {
    let bytes = fs::read(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            CoreError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            CoreError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    serde_json::from_slice(&bytes).map_err(|source| CoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

use std::path::PathBuf;

/// Errors produced while loading or processing a readings dataset.
///
/// A missing input file is its own variant so callers can report it
/// distinctly from a malformed file (the cleaner binary prints different
/// messages for the two cases).
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Input file {} not found", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

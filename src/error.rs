//! Ambient I/O errors.
//!
//! [`solve`](crate::solve) itself never fails: pathological input is resolved
//! through saturation, not errors. [`DiscadeltaError`] covers the one fallible
//! surface this crate has — loading segment configs from a file.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DiscadeltaError {
    #[error("failed to read segment config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse segment config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

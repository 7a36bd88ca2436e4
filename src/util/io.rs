//! JSON load/save helpers for the demo CLI and tests.

use crate::assemble::Segment;
use crate::error::DiscadeltaError;
use crate::metrics::SegmentConfig;
use log::info;
use std::fs;
use std::path::Path;

/// Reads an ordered list of segment configs from a JSON file.
pub fn read_segment_configs(path: &Path) -> Result<Vec<SegmentConfig>, DiscadeltaError> {
    let text = fs::read_to_string(path).map_err(|source| DiscadeltaError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let configs = serde_json::from_str(&text)?;
    Ok(configs)
}

/// Writes a solved segment list to a JSON file.
pub fn write_segments_json(path: &Path, segments: &[Segment]) -> anyhow::Result<()> {
    let file = fs::File::create(path)?;
    serde_json::to_writer_pretty(file, segments)?;
    info!(
        "[IO] segments written to file://{}",
        fs::canonicalize(path)?.display()
    );
    Ok(())
}

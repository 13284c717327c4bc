//! Snapshot Writer
//!
//! Writes the result set as tab-indented JSON, replacing the previous file.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::aggregate::ResultSet;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write snapshot to {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Render the result set exactly as it is written to disk
pub fn render_snapshot(accounts: &ResultSet) -> Result<Vec<u8>, SnapshotError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"\t");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    accounts.serialize(&mut serializer)?;
    Ok(buf)
}

/// Write the snapshot to `path`, overwriting any existing file
pub fn write_snapshot(path: &Path, accounts: &ResultSet) -> Result<(), SnapshotError> {
    let raw = render_snapshot(accounts)?;
    std::fs::write(path, raw).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("Wrote {} accounts to {}", accounts.len(), path.display());
    Ok(())
}

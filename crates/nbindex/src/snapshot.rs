//! Generated snapshot model.
//!
//! The notebook exporter scans the authored units and emits a snapshot:
//! which notebook defines each exported symbol, which modules were
//! written, and where the rendered documentation and browsable sources
//! live. This module only reads snapshots; the exporter rebuilds them
//! wholesale whenever the notebooks change.

use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Error reading a snapshot file.
///
/// These are the loud failures: a snapshot that cannot be parsed means a
/// broken export, not a missing symbol. Lookup misses are reported
/// separately by [`LookupError`](crate::LookupError).
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed JSON snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed TOML snapshot: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unsupported snapshot format: {0} (expected .json or .toml)")]
    UnsupportedFormat(String),
}

/// A point-in-time export table, immutable once constructed.
///
/// All four fields are required; a snapshot missing any of them fails to
/// deserialize. Unknown fields are ignored so older consumers keep
/// working when the exporter grows the format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Snapshot {
    /// Exported symbol name → notebook that defines it.
    pub index: HashMap<String, String>,
    /// Compiled module filenames, in generation order.
    pub modules: Vec<String>,
    /// Root of the hosted documentation site.
    pub doc_url: String,
    /// Root for browsing source files in the repository.
    pub git_url: String,
}

impl Snapshot {
    /// Parse a snapshot from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parse a snapshot from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, SnapshotError> {
        Ok(toml::from_str(text)?)
    }

    /// Read a snapshot from disk, dispatching on the file extension.
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !matches!(ext, "json" | "toml") {
            return Err(SnapshotError::UnsupportedFormat(
                path.display().to_string(),
            ));
        }

        let text = std::fs::read_to_string(path)?;
        let snapshot = match ext {
            "json" => Self::from_json_str(&text)?,
            _ => Self::from_toml_str(&text)?,
        };
        tracing::debug!(
            path = %path.display(),
            symbols = snapshot.index.len(),
            modules = snapshot.modules.len(),
            "loaded snapshot"
        );
        Ok(snapshot)
    }

    /// The snapshot generated from the current notebook sources,
    /// embedded at build time and parsed once per process.
    pub fn builtin() -> &'static Snapshot {
        static BUILTIN: OnceLock<Snapshot> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            toml::from_str(include_str!("builtin_snapshot.toml"))
                .expect("embedded snapshot is generated; a parse failure is a broken build")
        })
    }
}

//! Manifest serialization.
//!
//! Encodes a prepared manifest as pretty-printed JSON. Output is
//! deterministic: struct fields serialize in declaration order and
//! collections keep template order, so encoding the same manifest twice
//! yields byte-identical documents.

use std::io::Write;
use std::path::{Path, PathBuf};

use podwright_common::error::{PodwrightError, Result};

use crate::schema::PodManifest;

/// Encodes the manifest as indented JSON with a trailing newline.
///
/// # Errors
///
/// Returns an error if the manifest cannot be encoded.
pub fn to_vec(manifest: &PodManifest) -> Result<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(manifest)?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Writes the encoded manifest to `out`, or to stdout when `out` is
/// `None`.
///
/// # Errors
///
/// Returns an error if encoding fails or the destination cannot be
/// written.
pub fn write_to(manifest: &PodManifest, out: Option<&Path>) -> Result<()> {
    let bytes = to_vec(manifest)?;
    match out {
        Some(path) => std::fs::write(path, &bytes).map_err(|e| PodwrightError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(&bytes)
                .map_err(|e| PodwrightError::Io {
                    path: PathBuf::from("/dev/stdout"),
                    source: e,
                })
        }
    }
}

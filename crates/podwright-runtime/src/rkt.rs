//! Foreground pod execution.

use podwright_common::constants::RKT;
use podwright_common::error::Result;

use crate::invoke;

/// Runs the pod in the foreground with the encoded manifest piped to
/// the container runtime's stdin. The child's stdio is inherited, so
/// its output and exit status are the operator's.
///
/// # Errors
///
/// Returns an error if the runtime is not installed, cannot be spawned,
/// or exits non-zero.
pub fn run_foreground(manifest: &[u8], passthrough: &[String]) -> Result<()> {
    invoke::require_binary(RKT)?;

    let mut cmd = invoke::elevated(RKT);
    let _ = cmd
        .arg("run")
        .arg("--pod-manifest=/dev/stdin")
        .args(passthrough);

    invoke::run_with_input(cmd, manifest)
}

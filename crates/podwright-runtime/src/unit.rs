//! Transient-unit management via the init system.
//!
//! A started pod runs as a systemd transient unit named after the pod,
//! launched with `systemd-run` and controlled with `systemctl` and
//! `journalctl`. Every operation here is a single terminal action; the
//! init system owns all supervision.

use std::io::Write;
use std::path::PathBuf;

use podwright_common::config::Config;
use podwright_common::constants::{
    JOURNALCTL, MACHINE_PREFIX, MANIFEST_TMP_PREFIX, RKT, SYSTEMCTL, SYSTEMD_RUN, unit_name,
};
use podwright_common::error::{PodwrightError, Result};

use crate::invoke;

/// Launches the pod as a supervised background unit.
///
/// Any previous incarnation of the unit is stopped first, so `start` is
/// safe to repeat. The manifest is persisted to a uniquely named file
/// in the system temp directory; the unit outlives this process, so the
/// file is deliberately kept on disk.
///
/// # Errors
///
/// Returns an error if the launcher is not installed, the manifest
/// cannot be persisted, or the launch command fails.
pub fn start(config: &Config, manifest: &[u8]) -> Result<()> {
    let pod = config.require_name()?;
    invoke::require_binary(SYSTEMD_RUN)?;

    stop(pod)?;

    let path = persist_manifest(manifest)?;
    tracing::info!(pod, manifest = %path.display(), "launching transient unit");

    let mut cmd = invoke::elevated(SYSTEMD_RUN);
    let _ = cmd.arg("--unit").arg(pod);
    if let Some(slice) = config.slice.as_deref() {
        let _ = cmd.arg("--slice").arg(slice);
    }
    let _ = cmd
        .arg(RKT)
        .arg("run")
        .arg(format!("--pod-manifest={}", path.display()))
        .args(&config.passthrough);

    invoke::run_interactive(cmd)
}

/// Stops the pod's unit and resets its failure state.
///
/// Idempotent: stopping a non-running or unknown unit is not an error,
/// so both calls ignore their exit status.
///
/// # Errors
///
/// Returns an error if `systemctl` is not installed or cannot be
/// spawned.
pub fn stop(pod: &str) -> Result<()> {
    invoke::require_binary(SYSTEMCTL)?;
    let unit = unit_name(pod);
    tracing::info!(%unit, "stopping unit");

    let mut stop_cmd = invoke::elevated(SYSTEMCTL);
    let _ = stop_cmd.arg("stop").arg(&unit);
    invoke::run_tolerant(stop_cmd)?;

    let mut reset_cmd = invoke::elevated(SYSTEMCTL);
    let _ = reset_cmd.arg("reset-failed").arg(&unit);
    invoke::run_tolerant(reset_cmd)
}

/// Prints the init system's status for the pod's unit.
///
/// # Errors
///
/// Returns an error if `systemctl` is not installed, cannot be spawned,
/// or reports failure.
pub fn status(pod: &str) -> Result<()> {
    invoke::require_binary(SYSTEMCTL)?;

    let mut cmd = invoke::elevated(SYSTEMCTL);
    let _ = cmd.arg("status").arg(unit_name(pod)).arg("--no-pager");
    invoke::run_interactive(cmd)
}

/// Streams journal entries for the pod's container machine.
///
/// The running container registers a machine named `rkt-<uuid>`; its
/// name is recovered from the unit's status output and handed to
/// `journalctl -M` together with the passthrough flags (e.g. `-f`).
///
/// # Errors
///
/// Returns an error if the query commands are unavailable, no machine
/// can be located for the unit, or the journal command fails.
pub fn logs(pod: &str, passthrough: &[String]) -> Result<()> {
    invoke::require_binary(SYSTEMCTL)?;
    invoke::require_binary(JOURNALCTL)?;
    let unit = unit_name(pod);

    let mut status_cmd = invoke::elevated(SYSTEMCTL);
    let _ = status_cmd
        .arg("status")
        .arg(&unit)
        .arg("--no-pager")
        .arg("--full");
    let output = invoke::run_captured_lenient(status_cmd)?;

    let machine =
        machine_name(&output).ok_or_else(|| PodwrightError::MachineName { unit: unit.clone() })?;
    tracing::debug!(%unit, machine, "resolved container machine");

    let mut cmd = invoke::elevated(JOURNALCTL);
    let _ = cmd.arg("-M").arg(machine).args(passthrough);
    invoke::run_interactive(cmd)
}

/// Extracts the container runtime's machine name from unit status
/// output.
///
/// The only place that knows the `rkt-<uuid>` text convention: the
/// first token of the form `rkt-` followed by at least one of
/// `[a-f0-9-]` wins. The init system exposes no structured property
/// carrying this name, so the status text is scanned directly.
#[must_use]
pub fn machine_name(status_output: &str) -> Option<&str> {
    for (idx, _) in status_output.match_indices(MACHINE_PREFIX) {
        let rest = &status_output[idx + MACHINE_PREFIX.len()..];
        let len = rest
            .find(|c: char| !matches!(c, '0'..='9' | 'a'..='f' | '-'))
            .unwrap_or(rest.len());
        if len > 0 {
            return Some(&status_output[idx..idx + MACHINE_PREFIX.len() + len]);
        }
    }
    None
}

fn persist_manifest(manifest: &[u8]) -> Result<PathBuf> {
    let mut file = tempfile::Builder::new()
        .prefix(MANIFEST_TMP_PREFIX)
        .suffix(".json")
        .tempfile()
        .map_err(|e| PodwrightError::Io {
            path: std::env::temp_dir(),
            source: e,
        })?;

    file.write_all(manifest).map_err(|e| PodwrightError::Io {
        path: file.path().to_path_buf(),
        source: e,
    })?;

    // The unit reads the file after this process exits.
    let (_, path) = file.keep().map_err(|e| PodwrightError::Io {
        path: e.file.path().to_path_buf(),
        source: e.error,
    })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATUS_OUTPUT: &str = "\
● web.service - /usr/bin/rkt run --pod-manifest=/tmp/pod-manifest8WbY2k.json
   Loaded: loaded (/run/systemd/transient/web.service; transient)
   Active: active (running) since Mon 2018-02-12 10:14:07 UTC; 2min ago
 Main PID: 4117 (ld-linux-x86-64)
   CGroup: /system.slice/web.service
           ├─4117 stage1/rootfs/usr/lib/ld-linux-x86-64.so.2 ...
           └─4160 /usr/bin/systemd-nspawn --boot --register=true \
--machine=rkt-df13d890-2cc8-4a5d-8eca-b14d9e6f9d51 ...
";

    #[test]
    fn machine_name_extracts_rkt_machine() {
        assert_eq!(
            machine_name(STATUS_OUTPUT),
            Some("rkt-df13d890-2cc8-4a5d-8eca-b14d9e6f9d51")
        );
    }

    #[test]
    fn machine_name_returns_none_without_machine() {
        let output = "● web.service\n   Active: inactive (dead)\n";
        assert!(machine_name(output).is_none());
    }

    #[test]
    fn machine_name_skips_prefix_without_identifier() {
        // "rkt-metadata" carries no [a-f0-9-] run after the prefix.
        let output = "rkt-metadata rkt-0a1b2c";
        assert_eq!(machine_name(output), Some("rkt-0a1b2c"));
    }

    #[test]
    fn machine_name_stops_at_non_identifier_characters() {
        let output = "--machine=rkt-df13d890-2cc8 --boot";
        assert_eq!(machine_name(output), Some("rkt-df13d890-2cc8"));
    }

    #[test]
    fn persist_manifest_keeps_file_on_disk() {
        let path = persist_manifest(b"{}\n").expect("should persist");
        let contents = std::fs::read(&path).expect("should read back");
        assert_eq!(contents, b"{}\n");
        std::fs::remove_file(&path).expect("should clean up");
    }
}

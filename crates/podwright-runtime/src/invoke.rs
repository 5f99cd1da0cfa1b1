//! Privileged command construction and execution.
//!
//! Every collaborator call goes through this module: commands are built
//! with explicit argv (never a shell), prefixed with the
//! privilege-escalation command, logged at debug level, and their I/O
//! failures and exit statuses mapped onto the shared error type.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use podwright_common::constants::ELEVATE;
use podwright_common::error::{PodwrightError, Result};

/// Builds a privileged command invoking `program` via sudo.
#[must_use]
pub fn elevated(program: &str) -> Command {
    let mut cmd = Command::new(ELEVATE);
    let _ = cmd.arg(program);
    cmd
}

/// Confirms `binary` resolves on `PATH`.
///
/// Spawn failures under sudo produce opaque diagnostics; resolving the
/// binary first turns a missing installation into a direct message.
///
/// # Errors
///
/// Returns an error if the binary cannot be found.
pub fn require_binary(binary: &str) -> Result<()> {
    match which::which(binary) {
        Ok(path) => {
            tracing::debug!(binary, path = %path.display(), "resolved external binary");
            Ok(())
        }
        Err(e) => Err(PodwrightError::MissingBinary {
            binary: binary.to_string(),
            message: e.to_string(),
        }),
    }
}

/// Renders a command's argv as a single display string for logs and
/// error messages.
#[must_use]
pub fn command_line(cmd: &Command) -> String {
    std::iter::once(cmd.get_program())
        .chain(cmd.get_args())
        .map(|part| part.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Runs a command with inherited stdio, failing on non-zero exit.
///
/// # Errors
///
/// Returns an error if the command cannot be spawned or exits non-zero.
pub fn run_interactive(mut cmd: Command) -> Result<()> {
    let command = command_line(&cmd);
    tracing::debug!(command = %command, "running");

    let status = cmd.status().map_err(|e| PodwrightError::Spawn {
        command: command.clone(),
        source: e,
    })?;

    if status.success() {
        Ok(())
    } else {
        Err(PodwrightError::Exec { command, status })
    }
}

/// Runs a command with inherited stdio, ignoring its exit status.
///
/// Used where failure carries no information for this tool, such as
/// stopping a unit that may not exist.
///
/// # Errors
///
/// Returns an error only if the command cannot be spawned.
pub fn run_tolerant(mut cmd: Command) -> Result<()> {
    let command = command_line(&cmd);
    tracing::debug!(command = %command, "running (exit status ignored)");

    let status = cmd.status().map_err(|e| PodwrightError::Spawn {
        command: command.clone(),
        source: e,
    })?;

    if !status.success() {
        tracing::debug!(command = %command, %status, "ignoring failure");
    }
    Ok(())
}

/// Runs a command capturing stdout, with stderr passed through to the
/// operator. Fails on non-zero exit.
///
/// # Errors
///
/// Returns an error if the command cannot be spawned or exits non-zero.
pub fn run_captured(mut cmd: Command) -> Result<String> {
    let command = command_line(&cmd);
    tracing::debug!(command = %command, "running (stdout captured)");

    let output = cmd
        .stderr(Stdio::inherit())
        .output()
        .map_err(|e| PodwrightError::Spawn {
            command: command.clone(),
            source: e,
        })?;

    if !output.status.success() {
        return Err(PodwrightError::Exec {
            command,
            status: output.status,
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Runs a command capturing stdout regardless of its exit status.
///
/// Query commands such as `systemctl status` exit non-zero for inactive
/// units while still printing the output the caller needs.
///
/// # Errors
///
/// Returns an error only if the command cannot be spawned.
pub fn run_captured_lenient(mut cmd: Command) -> Result<String> {
    let command = command_line(&cmd);
    tracing::debug!(command = %command, "running (stdout captured, exit status ignored)");

    let output = cmd
        .stderr(Stdio::inherit())
        .output()
        .map_err(|e| PodwrightError::Spawn {
            command,
            source: e,
        })?;

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Runs a command with `input` piped to its stdin and stdout/stderr
/// inherited. Fails on non-zero exit.
///
/// # Errors
///
/// Returns an error if the command cannot be spawned, the pipe write
/// fails, or the command exits non-zero.
pub fn run_with_input(mut cmd: Command, input: &[u8]) -> Result<()> {
    let command = command_line(&cmd);
    tracing::debug!(command = %command, bytes = input.len(), "running (input on stdin)");

    let mut child = cmd
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| PodwrightError::Spawn {
            command: command.clone(),
            source: e,
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(input).map_err(|e| PodwrightError::Io {
            path: PathBuf::from("/dev/stdin"),
            source: e,
        })?;
    }

    let status = child.wait().map_err(|e| PodwrightError::Spawn {
        command: command.clone(),
        source: e,
    })?;

    if status.success() {
        Ok(())
    } else {
        Err(PodwrightError::Exec { command, status })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_renders_program_and_args() {
        let mut cmd = Command::new("rkt");
        let _ = cmd.args(["run", "--pod-manifest=/dev/stdin"]);
        assert_eq!(command_line(&cmd), "rkt run --pod-manifest=/dev/stdin");
    }

    #[test]
    fn elevated_prefixes_sudo() {
        let cmd = elevated("systemctl");
        assert_eq!(command_line(&cmd), "sudo systemctl");
    }

    #[test]
    fn run_captured_returns_stdout() {
        let mut cmd = Command::new("echo");
        let _ = cmd.arg("sha512-cafe");
        let output = run_captured(cmd).expect("should run");
        assert_eq!(output.trim(), "sha512-cafe");
    }

    #[test]
    fn run_interactive_fails_on_nonzero_exit() {
        let err = run_interactive(Command::new("false")).expect_err("should fail");
        assert!(matches!(err, PodwrightError::Exec { .. }));
    }

    #[test]
    fn run_tolerant_swallows_nonzero_exit() {
        run_tolerant(Command::new("false")).expect("should tolerate failure");
    }

    #[test]
    fn spawn_failure_is_reported_as_such() {
        let err = run_interactive(Command::new("/nonexistent/binary"))
            .expect_err("should fail");
        assert!(matches!(err, PodwrightError::Spawn { .. }));
    }

    #[test]
    fn require_binary_reports_missing_binaries() {
        let err = require_binary("definitely-not-installed-anywhere")
            .expect_err("should fail");
        assert!(matches!(err, PodwrightError::MissingBinary { .. }));
    }
}

//! `podw logs` — Stream journal logs for the running pod.

use podwright_common::config::Config;
use podwright_runtime::unit;

/// Executes the `logs` command.
///
/// Passthrough arguments reach `journalctl` unmodified, so `-- -f`
/// follows the log.
///
/// # Errors
///
/// Returns an error if no pod name is configured, no container machine
/// can be located, or the journal query fails.
pub fn execute(config: &Config) -> anyhow::Result<()> {
    let pod = config.require_name()?;
    unit::logs(pod, &config.passthrough)?;
    Ok(())
}

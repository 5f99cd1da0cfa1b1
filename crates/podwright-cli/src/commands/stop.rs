//! `podw stop` — Stop the pod's background unit.

use podwright_common::config::Config;
use podwright_runtime::unit;

/// Executes the `stop` command.
///
/// # Errors
///
/// Returns an error if no pod name is configured or the unit commands
/// cannot be spawned.
pub fn execute(config: &Config) -> anyhow::Result<()> {
    let pod = config.require_name()?;
    unit::stop(pod)?;
    Ok(())
}

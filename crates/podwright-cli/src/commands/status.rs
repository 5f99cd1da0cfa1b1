//! `podw status` — Show the init system's status for the pod's unit.

use podwright_common::config::Config;
use podwright_runtime::unit;

/// Executes the `status` command.
///
/// # Errors
///
/// Returns an error if no pod name is configured or the status query
/// fails.
pub fn execute(config: &Config) -> anyhow::Result<()> {
    let pod = config.require_name()?;
    unit::status(pod)?;
    Ok(())
}

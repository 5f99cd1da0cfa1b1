//! `podw start` — Compile the template and launch the pod as a
//! background unit.

use podwright_common::config::Config;
use podwright_manifest::{pipeline, serialize};
use podwright_runtime::fetch::RktFetcher;
use podwright_runtime::unit;

/// Executes the `start` command.
///
/// # Errors
///
/// Returns an error if no pod name is configured, the pipeline fails,
/// or the unit launch fails.
pub fn execute(config: &Config) -> anyhow::Result<()> {
    // Fail on a missing name before any manifest work.
    let pod = config.require_name()?;
    tracing::info!(pod, template = %config.template.display(), "starting pod in background");

    let manifest = pipeline::prepare(config, &RktFetcher)?;
    let encoded = serialize::to_vec(&manifest)?;
    unit::start(config, &encoded)?;
    Ok(())
}

//! `podw run` — Compile the template and run the pod in the foreground.

use podwright_common::config::Config;
use podwright_manifest::{pipeline, serialize};
use podwright_runtime::fetch::RktFetcher;
use podwright_runtime::rkt;

/// Executes the `run` command.
///
/// The pod inherits this process's stdio; its exit status becomes ours.
///
/// # Errors
///
/// Returns an error if the pipeline fails or the runtime exits
/// non-zero.
pub fn execute(config: &Config) -> anyhow::Result<()> {
    tracing::info!(template = %config.template.display(), "running pod in foreground");

    let manifest = pipeline::prepare(config, &RktFetcher)?;
    let encoded = serialize::to_vec(&manifest)?;
    rkt::run_foreground(&encoded, &config.passthrough)?;
    Ok(())
}

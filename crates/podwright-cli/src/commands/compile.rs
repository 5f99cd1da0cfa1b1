//! `podw compile` — Compile the template and emit the finished manifest.

use podwright_common::config::Config;
use podwright_manifest::{pipeline, serialize};
use podwright_runtime::fetch::RktFetcher;

/// Executes the `compile` command.
///
/// # Errors
///
/// Returns an error if the pipeline or manifest output fails.
pub fn execute(config: &Config) -> anyhow::Result<()> {
    tracing::info!(template = %config.template.display(), "compiling pod template");

    let manifest = pipeline::prepare(config, &RktFetcher)?;
    serialize::write_to(&manifest, config.out.as_deref())?;
    Ok(())
}

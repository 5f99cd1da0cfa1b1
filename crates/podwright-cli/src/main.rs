//! # podw — podwright CLI
//!
//! Compiles declarative pod templates into container-runtime manifests
//! and runs them in the foreground or as supervised background units.

mod commands;

use clap::Parser;

use crate::commands::Cli;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
        )
        .init();

    let cli = Cli::parse();
    commands::execute(cli)
}

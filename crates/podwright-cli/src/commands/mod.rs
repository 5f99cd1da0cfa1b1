//! CLI command definitions and dispatch.

pub mod compile;
pub mod logs;
pub mod run;
pub mod start;
pub mod status;
pub mod stop;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use podwright_common::config::Config;
use podwright_common::constants::{DEFAULT_BASE, DEFAULT_TEMPLATE};

/// podwright — compile pod templates and drive their lifecycle.
#[derive(Parser, Debug)]
#[command(name = "podw", version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Pod template to use.
    #[arg(short, long, global = true, default_value = DEFAULT_TEMPLATE)]
    pub template: PathBuf,

    /// Base path prepended to relative volume sources.
    #[arg(short, long, global = true, default_value = DEFAULT_BASE)]
    pub base: PathBuf,

    /// Name of the pod; required for background-unit subcommands.
    #[arg(short, long, global = true)]
    pub name: Option<String>,

    /// Resource slice the background unit is assigned to.
    #[arg(short, long, global = true)]
    pub slice: Option<String>,

    /// Write the compiled manifest here instead of stdout.
    #[arg(short, long, global = true)]
    pub out: Option<PathBuf>,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compile the template and emit the finished manifest.
    Compile,
    /// Compile the template and run the pod in the foreground.
    Run(PassthroughArgs),
    /// Compile the template and launch the pod as a background unit.
    Start(PassthroughArgs),
    /// Stop the pod's background unit and reset its failure state.
    Stop,
    /// Show the init system's status for the pod's unit.
    Status,
    /// Stream journal logs for the running pod.
    Logs(PassthroughArgs),
}

/// Trailing arguments forwarded verbatim to the underlying invocation.
#[derive(Args, Debug, Default)]
pub struct PassthroughArgs {
    /// Arguments after `--`, passed through unmodified.
    #[arg(last = true)]
    pub passthrough: Vec<String>,
}

impl Cli {
    /// Splits the parsed arguments into the immutable run configuration
    /// and the selected subcommand.
    fn into_parts(self) -> (Config, Command) {
        let passthrough = match &self.command {
            Command::Run(args) | Command::Start(args) | Command::Logs(args) => {
                args.passthrough.clone()
            }
            Command::Compile | Command::Stop | Command::Status => Vec::new(),
        };
        let config = Config {
            template: self.template,
            base: self.base,
            name: self.name,
            slice: self.slice,
            out: self.out,
            passthrough,
        };
        (config, self.command)
    }
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let (config, command) = cli.into_parts();
    match command {
        Command::Compile => compile::execute(&config),
        Command::Run(_) => run::execute(&config),
        Command::Start(_) => start::execute(&config),
        Command::Stop => stop::execute(&config),
        Command::Status => status::execute(&config),
        Command::Logs(_) => logs::execute(&config),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_declaration_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_rejects_missing_subcommand() {
        assert!(Cli::try_parse_from(["podw"]).is_err());
    }

    #[test]
    fn parse_rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["podw", "restart"]).is_err());
    }

    #[test]
    fn parse_applies_flag_defaults() {
        let cli = Cli::try_parse_from(["podw", "compile"]).expect("should parse");
        let (config, _) = cli.into_parts();
        assert_eq!(config.template, PathBuf::from(DEFAULT_TEMPLATE));
        assert_eq!(config.base, PathBuf::from(DEFAULT_BASE));
        assert!(config.out.is_none());
        assert!(config.passthrough.is_empty());
    }

    #[test]
    fn parse_accepts_short_flags() {
        let cli = Cli::try_parse_from([
            "podw", "start", "-t", "web.yaml", "-b", "/srv", "-n", "web", "-s", "pods.slice",
        ])
        .expect("should parse");
        let (config, _) = cli.into_parts();
        assert_eq!(config.template, PathBuf::from("web.yaml"));
        assert_eq!(config.base, PathBuf::from("/srv"));
        assert_eq!(config.name.as_deref(), Some("web"));
        assert_eq!(config.slice.as_deref(), Some("pods.slice"));
    }

    #[test]
    fn parse_collects_passthrough_after_separator() {
        let cli = Cli::try_parse_from([
            "podw", "run", "-t", "web.yaml", "--", "--net=host", "--dns=8.8.8.8",
        ])
        .expect("should parse");
        let (config, _) = cli.into_parts();
        assert_eq!(config.passthrough, ["--net=host", "--dns=8.8.8.8"]);
    }

    #[test]
    fn parse_keeps_passthrough_empty_without_separator() {
        let cli = Cli::try_parse_from(["podw", "logs", "-n", "web"]).expect("should parse");
        let (config, _) = cli.into_parts();
        assert!(config.passthrough.is_empty());
    }
}

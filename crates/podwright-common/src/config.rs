//! Immutable run configuration.
//!
//! All values are fixed at argument-parse time and passed by reference
//! to every component; no process-global state is read afterwards.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{PodwrightError, Result};

/// Configuration for one podwright invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the pod template.
    pub template: PathBuf,
    /// Base directory prepended to relative volume sources.
    pub base: PathBuf,
    /// Pod name; required for background-unit subcommands.
    pub name: Option<String>,
    /// Resource slice the transient unit is assigned to.
    pub slice: Option<String>,
    /// Manifest output path; `None` writes to stdout.
    pub out: Option<PathBuf>,
    /// Arguments after `--`, forwarded verbatim to the runtime invocation.
    pub passthrough: Vec<String>,
}

impl Config {
    /// Returns the pod name, failing when it was not configured.
    ///
    /// Background-unit subcommands call this before touching any file
    /// or process.
    ///
    /// # Errors
    ///
    /// Returns an error if no pod name was given.
    pub fn require_name(&self) -> Result<&str> {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .ok_or_else(|| PodwrightError::Config {
                message: "a pod name is required for this subcommand: pass --name".into(),
            })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template: PathBuf::from(crate::constants::DEFAULT_TEMPLATE),
            base: PathBuf::from(crate::constants::DEFAULT_BASE),
            name: None,
            slice: None,
            out: None,
            passthrough: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_name_rejects_missing_name() {
        let config = Config::default();
        assert!(config.require_name().is_err());
    }

    #[test]
    fn require_name_rejects_empty_name() {
        let config = Config {
            name: Some(String::new()),
            ..Config::default()
        };
        assert!(config.require_name().is_err());
    }

    #[test]
    fn require_name_returns_configured_name() {
        let config = Config {
            name: Some("web".into()),
            ..Config::default()
        };
        assert_eq!(config.require_name().expect("should have name"), "web");
    }
}

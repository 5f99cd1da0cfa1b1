//! # podwright-runtime
//!
//! Everything that touches external processes. The collaborating
//! binaries (container runtime, init system, journal) are driven purely
//! through argv, stdio, and exit codes; this crate never interprets
//! their behavior beyond that contract.
//!
//! Handles:
//! - **Invoke**: privileged command construction and execution.
//! - **Fetch**: the production [`ImageFetcher`] backed by `rkt fetch`.
//! - **Rkt**: foreground pod execution with the manifest on stdin.
//! - **Unit**: transient-unit start/stop/status/logs via the init system.
//!
//! [`ImageFetcher`]: podwright_manifest::pipeline::ImageFetcher

pub mod fetch;
pub mod invoke;
pub mod rkt;
pub mod unit;

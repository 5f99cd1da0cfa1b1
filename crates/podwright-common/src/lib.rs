//! # podwright-common
//!
//! Shared error definitions, the immutable run configuration, and
//! constants used across the podwright workspace.
//!
//! This crate is the leaf of the dependency graph — it depends on no
//! other internal crate.

pub mod config;
pub mod constants;
pub mod error;

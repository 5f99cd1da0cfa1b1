//! # podwright-manifest
//!
//! Pod manifest handling: schema types, template loading, and the
//! prepare pipeline that turns a declarative template into a concrete,
//! fully normalized manifest.
//!
//! Handles:
//! - **Schema**: appc pod-manifest types with their wire (de)serialization.
//! - **Template**: YAML template loading.
//! - **Pipeline**: image resolution, volume path normalization, and
//!   user/group defaulting, composed into one `prepare` operation.
//! - **Serialize**: deterministic pretty-JSON manifest output.

pub mod pipeline;
pub mod schema;
pub mod serialize;
pub mod template;

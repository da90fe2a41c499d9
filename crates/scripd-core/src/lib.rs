//! scripd Core - shared vocabulary for the JSON-to-DDL generator
//!
//! This crate provides the types every other scripd crate depends on:
//!
//! - `ScripdError` - The error type shared by loader, engine and walker
//! - `KindRegistry` - The whitelist of object kinds and object definers
//! - `CrudAction` - The `create` / `alter` / `drop` action of a declaration
//! - `Vendor` - The SQL dialect a template variant is selected by
//! - `ScripdConfig` - TOML-backed run configuration
//! - Attribute helpers for looking up placeholder values in a declaration

pub mod attributes;
pub mod config;
mod error;
mod kinds;
mod vendor;

pub use attributes::{AttributeMap, attribute_key, is_set, lookup};
pub use config::{DEFAULT_DELIMITER, DEFAULT_TEMPLATE_EXTENSION, ScripdConfig};
pub use error::*;
pub use kinds::*;
pub use vendor::*;

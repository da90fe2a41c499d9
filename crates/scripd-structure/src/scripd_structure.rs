//! scripd Structure - turns a JSON structure document into SQL statements
//!
//! This crate provides:
//! - Decoding structure documents from JSON text or files
//! - The structure walker that orders declarations and descends into nested ones
//! - Statement assembly with a configurable delimiter
//! - `JsonDbStructure`, the one-call entry point tying them together

pub mod assembly;
pub mod document;
mod structure;
pub mod walker;

pub use assembly::*;
pub use document::*;
pub use structure::*;
pub use walker::*;

//! scripd Templates - jsyn token templates for SQL generation
//!
//! A jsyn document maps vendor names to a flat list of tokens:
//!
//! ```json
//! {
//!     "default": ["create", "table", "{if not exists}", "{name}", "[{columns}]"]
//! }
//! ```
//!
//! Literal tokens are SQL keywords. Placeholders pull values out of the attribute
//! map of a declaration:
//!
//! - `{name}` substitutes the attribute value, or the upper-cased placeholder
//!   text when the attribute is `true`
//! - `[{name}]` renders a list of sub-declarations through the template named
//!   after the attribute, comma-joined inside parentheses
//! - `[(name)]` emits `, NAME` when the attribute is switched on
//! - `[name]` emits `NAME` when the attribute is switched on
//!
//! Placeholders without a value vanish, together with an `=` right before them.
//!
//! ## Example
//!
//! ```rust,ignore
//! use scripd_core::{CrudAction, KindRegistry, Vendor};
//! use scripd_templates::{SubstitutionEngine, TemplateLoader};
//!
//! let loader = TemplateLoader::embedded(Vendor::from("mysql"));
//! let engine = SubstitutionEngine::new(loader, KindRegistry::new());
//!
//! let attributes = serde_json::json!({"name": "faculty", "if-exists": true});
//! let sql = engine
//!     .render_declaration(CrudAction::Drop, "table", attributes.as_object().unwrap())
//!     .unwrap();
//! assert_eq!(sql, "DROP TABLE IF EXISTS faculty");
//! ```

mod embedded;
mod engine;
mod loader;
mod repository;
mod token;

pub use embedded::EmbeddedSource;
pub use engine::SubstitutionEngine;
pub use loader::TemplateLoader;
pub use repository::{DirectorySource, TemplateDocument, TemplateSource};
pub use token::{Token, classify, parse_tokens};

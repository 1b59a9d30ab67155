//! # richenum-catalog — Enums Declared in Files
//!
//! Declares rich enums from YAML catalog documents. A catalog is validated
//! against an embedded JSON Schema, then every enum in it is built through
//! the `richenum-core` builder, so catalog enums obey exactly the same
//! construction rules as enums declared in code.
//!
//! ```
//! use richenum_catalog::Catalog;
//!
//! let catalog = Catalog::from_yaml_str(r#"
//! enums:
//!   - name: Vegetable
//!     members:
//!       - { field: OKRA, canonical_name: okra, display_name: Okra }
//! "#).unwrap();
//!
//! let vegetable = catalog.get("Vegetable").unwrap().as_rich();
//! assert_eq!(vegetable.from_display("Okra").unwrap().canonical_name(), "okra");
//! ```

pub mod document;
pub mod error;
pub mod loader;
pub mod schema;
pub mod value;

pub use document::{CatalogDocument, EnumDeclaration, EnumKind, MemberDeclaration};
pub use error::CatalogError;
pub use loader::{Catalog, CatalogEnum};
pub use schema::{CatalogSchema, ValidationViolations, Violation, CATALOG_SCHEMA};
pub use value::{attribute_from_json, CatalogValue, DeclaredValue, OrderedCatalogValue};

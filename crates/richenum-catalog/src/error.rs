//! # Catalog Errors

use richenum_core::ConstructionError;
use thiserror::Error;

use crate::schema::ValidationViolations;

/// Any failure while loading a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("cannot read catalog '{path}': {source}")]
    Io {
        /// Path of the catalog file.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The catalog is not well-formed YAML.
    #[error("catalog is not valid YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The catalog does not conform to `catalog.schema.json`.
    #[error("catalog does not conform to its schema:\n{0}")]
    Schema(ValidationViolations),

    /// The embedded schema failed to compile.
    #[error("catalog schema failed to compile: {0}")]
    SchemaBuild(String),

    /// A schema-valid document could not be mapped onto declarations.
    #[error("catalog document is malformed: {0}")]
    Document(#[from] serde_json::Error),

    /// A member attribute holds a value that has no attribute form.
    #[error("member '{member}' has unsupported attribute '{field}': {reason}")]
    Attribute {
        /// Canonical name of the member.
        member: String,
        /// Attribute name.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// The core validator rejected an enum declaration.
    #[error("cannot declare enum '{enum_name}': {source}")]
    Declaration {
        /// Name of the rejected enum.
        enum_name: String,
        /// The violated construction rule.
        #[source]
        source: ConstructionError,
    },

    /// Two enums in one catalog share a name.
    #[error("enum '{0}' is declared more than once")]
    DuplicateEnum(String),
}

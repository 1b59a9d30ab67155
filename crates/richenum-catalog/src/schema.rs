//! # Catalog Schema
//!
//! Catalog documents are checked against `schemas/catalog.schema.json`
//! (Draft 2020-12) before anything is deserialized. The schema is compiled
//! into the binary, so validation never touches the filesystem or network.
//!
//! Failures are reported as structured [`Violation`]s carrying the JSON
//! Pointer of the offending instance location and of the schema keyword
//! that rejected it.

use std::fmt;

use jsonschema::Validator;
use serde_json::Value;

use crate::error::CatalogError;

/// Source of the embedded schema.
pub const CATALOG_SCHEMA: &str = include_str!("../schemas/catalog.schema.json");

/// A single schema violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON Pointer to the violating location in the document.
    pub instance_path: String,
    /// JSON Pointer to the schema keyword that failed.
    pub schema_path: String,
    /// Human-readable description.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let at = if self.instance_path.is_empty() {
            "(root)"
        } else {
            &self.instance_path
        };
        write!(f, "  {at}: {}", self.message)
    }
}

/// Every violation found in one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationViolations(Vec<Violation>);

impl ValidationViolations {
    /// Number of violations.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are none.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The violations, in the order the validator reported them.
    pub fn violations(&self) -> &[Violation] {
        &self.0
    }
}

impl fmt::Display for ValidationViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// The compiled catalog schema.
///
/// `Send + Sync`; compile once and reuse for many documents.
pub struct CatalogSchema {
    validator: Validator,
}

impl fmt::Debug for CatalogSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogSchema").finish_non_exhaustive()
    }
}

impl CatalogSchema {
    /// Compile the embedded schema.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::SchemaBuild`] if the embedded schema is not
    /// valid JSON or not a valid Draft 2020-12 schema.
    pub fn embedded() -> Result<Self, CatalogError> {
        let schema: Value = serde_json::from_str(CATALOG_SCHEMA)
            .map_err(|e| CatalogError::SchemaBuild(format!("invalid JSON: {e}")))?;

        let mut opts = jsonschema::options();
        opts.with_draft(jsonschema::Draft::Draft202012);
        let validator = opts
            .build(&schema)
            .map_err(|e| CatalogError::SchemaBuild(e.to_string()))?;

        Ok(Self { validator })
    }

    /// Check a parsed document.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Schema`] listing every violation.
    pub fn validate(&self, document: &Value) -> Result<(), CatalogError> {
        let violations: Vec<Violation> = self
            .validator
            .iter_errors(document)
            .map(|e| Violation {
                instance_path: e.instance_path.to_string(),
                schema_path: e.schema_path.to_string(),
                message: e.to_string(),
            })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            tracing::debug!(count = violations.len(), "catalog schema violations");
            Err(CatalogError::Schema(ValidationViolations(violations)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema() -> CatalogSchema {
        CatalogSchema::embedded().expect("embedded schema compiles")
    }

    #[test]
    fn test_minimal_document_is_valid() {
        let doc = json!({
            "enums": [{
                "name": "Vegetable",
                "members": [{"field": "OKRA", "canonical_name": "okra", "display_name": "Okra"}]
            }]
        });
        assert!(schema().validate(&doc).is_ok());
    }

    #[test]
    fn test_missing_enums_is_rejected() {
        let err = schema().validate(&json!({})).unwrap_err();
        match err {
            CatalogError::Schema(violations) => {
                assert_eq!(violations.len(), 1);
                assert!(violations.to_string().contains("(root)"));
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_index_is_rejected() {
        let doc = json!({
            "enums": [{
                "name": "Breakfast",
                "kind": "ordered",
                "members": [{"field": "BACON", "canonical_name": "bacon", "display_name": "Bacon", "index": -1}]
            }]
        });
        let Err(CatalogError::Schema(violations)) = schema().validate(&doc) else {
            panic!("negative index must be rejected by the schema");
        };
        assert!(violations
            .violations()
            .iter()
            .any(|v| v.instance_path.ends_with("/index")));
    }

    #[test]
    fn test_reserved_and_unsupported_attributes_are_rejected() {
        let with = |attributes: Value| {
            json!({
                "enums": [{
                    "name": "Vegetable",
                    "members": [{
                        "field": "OKRA", "canonical_name": "okra", "display_name": "Okra",
                        "attributes": attributes
                    }]
                }]
            })
        };
        assert!(schema().validate(&with(json!({"flavor": "gross"}))).is_ok());
        assert!(schema().validate(&with(json!({"aliases": ["gumbo", 3]}))).is_ok());
        assert!(schema().validate(&with(json!({"index": 1}))).is_err());
        assert!(schema().validate(&with(json!({"flavor": null}))).is_err());
        assert!(schema().validate(&with(json!({"flavor": {"a": 1}}))).is_err());
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let doc = json!({"enums": [{"name": "X", "kind": "flags"}]});
        assert!(schema().validate(&doc).is_err());
    }
}

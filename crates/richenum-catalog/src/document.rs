//! # Catalog Documents
//!
//! Serde model of a catalog file. Only schema-valid documents are
//! deserialized into these types.
//!
//! ```yaml
//! enums:
//!   - name: Breakfast
//!     kind: ordered
//!     members:
//!       - { field: COFFEE, canonical_name: coffee, display_name: Coffee, index: 0 }
//!       - { field: OATMEAL, canonical_name: oatmeal, display_name: Oatmeal, index: 1 }
//!     auxiliary:
//!       owner: kitchen
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A whole catalog file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogDocument {
    /// Enum declarations, in file order.
    pub enums: Vec<EnumDeclaration>,
}

/// Which template an enum is declared with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnumKind {
    /// Any member kind, stored in declaration order.
    #[default]
    Rich,
    /// Ordered members only, stored by index.
    Ordered,
}

/// One enum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumDeclaration {
    pub name: String,
    #[serde(default)]
    pub kind: EnumKind,
    /// Abstract root; may have no members.
    #[serde(default, rename = "virtual")]
    pub is_virtual: bool,
    #[serde(default)]
    pub members: Vec<MemberDeclaration>,
    /// Opaque metadata, never validated.
    #[serde(default)]
    pub auxiliary: BTreeMap<String, Value>,
}

/// One member. A member with an `index` becomes an ordered value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemberDeclaration {
    /// Field name the member is declared under, e.g. `OKRA`.
    pub field: String,
    pub canonical_name: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<i64>,
    /// Extra lookup attributes.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, Value>,
}

//! # Catalog Member Values
//!
//! Members declared in a catalog become one of two concrete value types:
//! [`CatalogValue`] when no index is given, [`OrderedCatalogValue`] when
//! one is. Being distinct types, the two never mix in one enum; the core
//! validator reports the mix like any other.

use std::collections::BTreeMap;

use richenum_core::{Attribute, EnumValue, Member, OrderedRichEnumValue, RichEnumValue};
use serde_json::Value;

use crate::document::MemberDeclaration;
use crate::error::CatalogError;

/// A plain member read from a catalog.
#[derive(Debug, Clone)]
pub struct CatalogValue {
    base: RichEnumValue,
    attributes: BTreeMap<String, Attribute>,
}

impl CatalogValue {
    /// Names of the extra attributes, sorted.
    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }
}

impl EnumValue for CatalogValue {
    fn rich(&self) -> &RichEnumValue {
        &self.base
    }

    fn attribute(&self, field: &str) -> Option<Attribute> {
        self.attributes.get(field).cloned()
    }
}

/// An ordered member read from a catalog.
#[derive(Debug, Clone)]
pub struct OrderedCatalogValue {
    base: OrderedRichEnumValue,
    attributes: BTreeMap<String, Attribute>,
}

impl OrderedCatalogValue {
    /// Names of the extra attributes, sorted.
    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }
}

impl EnumValue for OrderedCatalogValue {
    fn rich(&self) -> &RichEnumValue {
        self.base.rich()
    }

    fn index(&self) -> Option<usize> {
        Some(self.base.position())
    }

    fn attribute(&self, field: &str) -> Option<Attribute> {
        self.attributes.get(field).cloned()
    }
}

/// Either kind of catalog value, before it is wrapped in a `Member`.
#[derive(Debug, Clone)]
pub enum DeclaredValue {
    /// Declared without an index.
    Plain(CatalogValue),
    /// Declared with an index.
    Ordered(OrderedCatalogValue),
}

impl DeclaredValue {
    /// Convert a member declaration of the enum `enum_name`.
    ///
    /// # Errors
    ///
    /// [`CatalogError::Attribute`] for an attribute with no [`Attribute`]
    /// form, [`CatalogError::Declaration`] for a negative index.
    pub fn from_declaration(enum_name: &str, decl: &MemberDeclaration) -> Result<Self, CatalogError> {
        let attributes = decl
            .attributes
            .iter()
            .map(|(field, value)| {
                let attribute = attribute_from_json(value).map_err(|reason| CatalogError::Attribute {
                    member: decl.canonical_name.clone(),
                    field: field.clone(),
                    reason,
                })?;
                Ok((field.clone(), attribute))
            })
            .collect::<Result<BTreeMap<_, _>, CatalogError>>()?;

        let Some(index) = decl.index else {
            return Ok(Self::Plain(CatalogValue {
                base: RichEnumValue::new(decl.canonical_name.as_str(), decl.display_name.as_str()),
                attributes,
            }));
        };

        let base = OrderedRichEnumValue::new(index, decl.canonical_name.as_str(), decl.display_name.as_str())
            .map_err(|source| CatalogError::Declaration {
                enum_name: enum_name.to_string(),
                source,
            })?;
        Ok(Self::Ordered(OrderedCatalogValue { base, attributes }))
    }

    /// Wrap in a member handle.
    pub fn into_member(self) -> Member {
        match self {
            Self::Plain(value) => Member::new(value),
            Self::Ordered(value) => Member::new(value),
        }
    }
}

/// Map a JSON value onto an [`Attribute`]. Nulls and objects are rejected.
pub fn attribute_from_json(value: &Value) -> Result<Attribute, String> {
    match value {
        Value::String(s) => Ok(Attribute::Text(s.clone())),
        Value::Bool(b) => Ok(Attribute::Boolean(*b)),
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => Ok(Attribute::Integer(i)),
            (None, Some(x)) => Ok(Attribute::Float(x)),
            (None, None) => Err(format!("number {n} is out of range")),
        },
        Value::Array(items) => items
            .iter()
            .map(attribute_from_json)
            .collect::<Result<Vec<_>, _>>()
            .map(Attribute::List),
        Value::Null => Err("null has no attribute form".to_string()),
        Value::Object(_) => Err("mappings have no attribute form".to_string()),
    }
}

//! # Catalog Loader
//!
//! Turns a catalog file into frozen enums:
//!
//! 1. Parse YAML into a `serde_json::Value`.
//! 2. Validate against the embedded schema.
//! 3. Deserialize into [`CatalogDocument`].
//! 4. Declare each enum through the core builder, so every construction
//!    rule applies exactly as it does to enums declared in code.
//!
//! Loading is all-or-nothing: the first failing enum aborts the catalog.

use std::collections::HashMap;
use std::path::Path;

use richenum_core::{EnumBuilder, OrderedRichEnum, RichEnum, Template};
use serde_json::Value;

use crate::document::{CatalogDocument, EnumDeclaration, EnumKind};
use crate::error::CatalogError;
use crate::schema::CatalogSchema;
use crate::value::DeclaredValue;

/// A loaded enum of either template.
#[derive(Debug, Clone)]
pub enum CatalogEnum {
    /// Declared with `kind: rich`.
    Rich(RichEnum),
    /// Declared with `kind: ordered`.
    Ordered(OrderedRichEnum),
}

impl CatalogEnum {
    /// The enum viewed through the shared rich interface.
    pub fn as_rich(&self) -> &RichEnum {
        match self {
            Self::Rich(e) => e,
            Self::Ordered(e) => e.as_rich(),
        }
    }

    /// The ordered enum, if this is one.
    pub fn as_ordered(&self) -> Option<&OrderedRichEnum> {
        match self {
            Self::Rich(_) => None,
            Self::Ordered(e) => Some(e),
        }
    }

    /// Declared name.
    pub fn name(&self) -> &str {
        self.as_rich().name()
    }
}

/// Every enum declared in one catalog, in file order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    enums: Vec<CatalogEnum>,
    by_name: HashMap<String, usize>,
}

impl Catalog {
    /// Load a catalog file.
    ///
    /// # Errors
    ///
    /// Any [`CatalogError`]; see [`from_yaml_str`](Self::from_yaml_str).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_yaml_str(&text)?;
        tracing::info!(path = %path.display(), enums = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Load a catalog from YAML text.
    ///
    /// # Errors
    ///
    /// [`CatalogError::Parse`] for malformed YAML, [`CatalogError::Schema`]
    /// for a schema violation, and the declaration errors of
    /// [`from_document`](Self::from_document).
    pub fn from_yaml_str(text: &str) -> Result<Self, CatalogError> {
        let raw: Value = serde_yaml::from_str(text)?;
        CatalogSchema::embedded()?.validate(&raw)?;
        let document: CatalogDocument = serde_json::from_value(raw)?;
        Self::from_document(&document)
    }

    /// Declare every enum in an already-parsed document.
    ///
    /// # Errors
    ///
    /// [`CatalogError::DuplicateEnum`], [`CatalogError::Attribute`], or
    /// [`CatalogError::Declaration`] wrapping the core validator's error.
    pub fn from_document(document: &CatalogDocument) -> Result<Self, CatalogError> {
        let mut catalog = Self::default();
        for declaration in &document.enums {
            if catalog.by_name.contains_key(&declaration.name) {
                return Err(CatalogError::DuplicateEnum(declaration.name.clone()));
            }
            let declared = match declaration.kind {
                EnumKind::Rich => CatalogEnum::Rich(declare(RichEnum::builder(&declaration.name), declaration)?),
                EnumKind::Ordered => {
                    CatalogEnum::Ordered(declare(OrderedRichEnum::builder(&declaration.name), declaration)?)
                }
            };
            catalog.by_name.insert(declaration.name.clone(), catalog.enums.len());
            catalog.enums.push(declared);
        }
        Ok(catalog)
    }

    /// The enum named `name`.
    pub fn get(&self, name: &str) -> Option<&CatalogEnum> {
        self.by_name.get(name).map(|&i| &self.enums[i])
    }

    /// Enums in file order.
    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEnum> {
        self.enums.iter()
    }

    /// Number of enums.
    pub fn len(&self) -> usize {
        self.enums.len()
    }

    /// Whether the catalog declares no enums.
    pub fn is_empty(&self) -> bool {
        self.enums.is_empty()
    }

    /// Enum names in file order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.enums.iter().map(CatalogEnum::name)
    }
}

fn declare<T: Template>(
    mut builder: EnumBuilder<T>,
    declaration: &EnumDeclaration,
) -> Result<T::Enum, CatalogError> {
    for member in &declaration.members {
        let value = DeclaredValue::from_declaration(&declaration.name, member)?;
        builder = builder.member(member.field.as_str(), value.into_member());
    }
    for (name, value) in &declaration.auxiliary {
        builder = builder.auxiliary(name.as_str(), value.clone());
    }
    if declaration.is_virtual {
        builder = builder.declare_virtual();
    }
    tracing::debug!(enum_name = %declaration.name, kind = ?declaration.kind, "declaring enum");
    builder.build().map_err(|source| CatalogError::Declaration {
        enum_name: declaration.name.clone(),
        source,
    })
}

//! # Error Types
//!
//! Two failure kinds cross the public boundary of this crate:
//!
//! - [`ConstructionError`] is raised while an enum is being declared (or an
//!   ordered value is being constructed). It is fatal to that declaration:
//!   no partially-valid enum is ever produced.
//! - [`LookupError`] is raised when a query matches no member. It is always
//!   recoverable. Every error records the [`EnumId`] of the enum that raised
//!   it, so callers can tell "not found in *this* enum" apart from failures
//!   in unrelated enums while still handling all lookups through one type.
//!
//! [`RichEnumError`] unifies both for callers that do not care which.

use thiserror::Error;

use crate::attribute::Attribute;
use crate::facade::EnumId;

/// Raised when an enum declaration or an ordered value violates a
/// structural invariant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    /// An ordered value was constructed with an index below zero.
    #[error("Index cannot be a negative number: {index}")]
    NegativeIndex {
        /// The rejected index.
        index: i64,
    },

    /// A member field holds something the enum's template does not accept.
    #[error("Invalid attribute: {field}")]
    InvalidAttribute {
        /// Declared field name.
        field: String,
    },

    /// Two member fields hold values of different concrete types.
    #[error("Differing member types: have seen {seen}, encountered {encountered}")]
    DifferingMemberTypes {
        /// Full type name of the first member declared.
        seen: &'static str,
        /// Full type name of the offending member.
        encountered: &'static str,
    },

    /// A non-virtual enum declared no members.
    #[error("Must specify at least one attribute when using {kind} (enum {enum_name})")]
    NoMembers {
        /// Name of the enum being declared.
        enum_name: String,
        /// Template name, `RichEnum` or `OrderedRichEnum`.
        kind: &'static str,
    },

    /// Two ordered members share one index.
    #[error("Index already defined: {index}.")]
    DuplicateIndex {
        /// The repeated index.
        index: usize,
    },

    /// The same field name was declared twice.
    #[error("Field declared more than once: {field}")]
    DuplicateField {
        /// The repeated field name.
        field: String,
    },
}

/// Raised when no member of an enum matches a lookup.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("could not find member matching {field} = {value} in enum {enum_name}")]
pub struct LookupError {
    pub(crate) enum_id: EnumId,
    pub(crate) enum_name: String,
    pub(crate) field: String,
    pub(crate) value: Attribute,
}

impl LookupError {
    /// Identifier of the enum that raised this error.
    pub fn enum_id(&self) -> EnumId {
        self.enum_id
    }

    /// Name of the enum that raised this error.
    pub fn enum_name(&self) -> &str {
        &self.enum_name
    }

    /// The attribute that was searched.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The value that was searched for.
    pub fn value(&self) -> &Attribute {
        &self.value
    }

    /// Whether this error was raised by the enum identified by `id`.
    pub fn is_from(&self, id: EnumId) -> bool {
        self.enum_id == id
    }
}

/// Any failure produced by this crate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RichEnumError {
    /// Enum declaration failed.
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    /// A lookup matched nothing.
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// A member type does not expose the requested attribute.
    #[error("{value_type} has no attribute {field:?}")]
    UnknownAttribute {
        /// Short name of the member's concrete type.
        value_type: &'static str,
        /// The requested attribute.
        field: String,
    },
}

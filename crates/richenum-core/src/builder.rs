//! # Enum Builder and Validator
//!
//! Declares an enum, validates it, and freezes it. A declaration is a list
//! of named fields, each explicitly annotated as either a **member** or an
//! **auxiliary** entry. Auxiliary entries are opaque metadata: they are
//! stored but never validated.
//!
//! ## Validation (in order)
//!
//! 1. No field name may be declared twice.
//! 2. Every member field must hold a [`Member`] admitted by the template:
//!    any member for [`Rich`], only ordered members for [`Ordered`].
//!    Anything else is an invalid attribute.
//! 3. All members must share the concrete type of the first member.
//! 4. At least one member is required unless the enum is declared virtual
//!    (an abstract root that exists only to be extended).
//! 5. Ordered enums are sorted by index, and a repeated index is rejected.
//!
//! Declaration is all-or-nothing: `build` either returns a fully frozen
//! enum or an error, never something in between.
//!
//! ## Templates
//!
//! The template is a type parameter, so `EnumBuilder<Ordered>` builds an
//! [`OrderedRichEnum`] and `EnumBuilder<Rich>` builds a [`RichEnum`].
//! Templates are sealed; only the two defined here exist.

use std::any::Any;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::marker::PhantomData;

use crate::error::ConstructionError;
use crate::facade::{EnumId, Frozen, OrderedRichEnum, RichEnum};
use crate::value::{Member, ValueType};

// ─── Templates ───────────────────────────────────────────────────────

/// Template for enums of any member kind, stored in declaration order.
#[derive(Debug, Clone, Copy)]
pub struct Rich;

/// Template for enums of ordered members, stored in index order.
#[derive(Debug, Clone, Copy)]
pub struct Ordered;

mod private {
    pub trait Sealed {}
    impl Sealed for super::Rich {}
    impl Sealed for super::Ordered {}
}

/// The kind of enum being declared.
///
/// Sealed: only [`Rich`] and [`Ordered`] implement it.
pub trait Template: private::Sealed + fmt::Debug {
    /// The frozen enum type this template produces.
    type Enum;

    /// Template name used in messages.
    fn name() -> &'static str;

    /// Whether `member` may be declared in an enum of this template.
    fn admits(member: &Member) -> bool;

    /// Put validated entries into stored order.
    fn arrange(_entries: &mut Vec<(String, Member)>) -> Result<(), ConstructionError> {
        Ok(())
    }

    /// Wrap the frozen enum.
    fn finish(frozen: RichEnum) -> Self::Enum;
}

impl Template for Rich {
    type Enum = RichEnum;

    fn name() -> &'static str {
        "RichEnum"
    }

    fn admits(_member: &Member) -> bool {
        true
    }

    fn finish(frozen: RichEnum) -> RichEnum {
        frozen
    }
}

impl Template for Ordered {
    type Enum = OrderedRichEnum;

    fn name() -> &'static str {
        "OrderedRichEnum"
    }

    fn admits(member: &Member) -> bool {
        member.is_ordered()
    }

    fn arrange(entries: &mut Vec<(String, Member)>) -> Result<(), ConstructionError> {
        entries.sort_by_key(|(_, member)| member.index());

        let mut seen = HashSet::new();
        for (_, member) in entries.iter() {
            if let Some(index) = member.index() {
                if !seen.insert(index) {
                    return Err(ConstructionError::DuplicateIndex { index });
                }
            }
        }
        Ok(())
    }

    fn finish(frozen: RichEnum) -> OrderedRichEnum {
        OrderedRichEnum::from_rich(frozen)
    }
}

// ─── Fields ──────────────────────────────────────────────────────────

/// The value held by a declared field.
pub enum Field {
    /// An enum member.
    Member(Member),
    /// Anything else.
    Opaque(Box<dyn Any + Send + Sync>),
}

impl Field {
    /// Wrap an arbitrary value.
    pub fn opaque<T: Any + Send + Sync>(value: T) -> Self {
        Self::Opaque(Box::new(value))
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Member(member) => f.debug_tuple("Member").field(member).finish(),
            Self::Opaque(_) => f.write_str("Opaque(..)"),
        }
    }
}

impl From<Member> for Field {
    fn from(member: Member) -> Self {
        Self::Member(member)
    }
}

impl From<&Member> for Field {
    fn from(member: &Member) -> Self {
        Self::Member(member.clone())
    }
}

impl From<&'static str> for Field {
    fn from(value: &'static str) -> Self {
        Self::opaque(value)
    }
}

impl From<String> for Field {
    fn from(value: String) -> Self {
        Self::opaque(value)
    }
}

impl From<i64> for Field {
    fn from(value: i64) -> Self {
        Self::opaque(value)
    }
}

impl From<bool> for Field {
    fn from(value: bool) -> Self {
        Self::opaque(value)
    }
}

/// Whether a field name denotes a member under the naming convention used
/// by [`EnumBuilder::field`]: no leading underscore, at least one cased
/// character, and no lowercase characters.
pub fn is_member_name(name: &str) -> bool {
    !name.starts_with('_')
        && name.chars().any(char::is_uppercase)
        && !name.chars().any(char::is_lowercase)
}

enum Declaration {
    Member { name: String, field: Field },
    Auxiliary { name: String, value: Box<dyn Any + Send + Sync> },
}

impl Declaration {
    fn name(&self) -> &str {
        match self {
            Self::Member { name, .. } | Self::Auxiliary { name, .. } => name,
        }
    }
}

// ─── Builder ─────────────────────────────────────────────────────────

/// Declares one enum. Consumed by [`build`](Self::build).
pub struct EnumBuilder<T: Template> {
    name: String,
    is_virtual: bool,
    declarations: Vec<Declaration>,
    _template: PhantomData<T>,
}

impl<T: Template> EnumBuilder<T> {
    /// Start a declaration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_virtual: false,
            declarations: Vec::new(),
            _template: PhantomData,
        }
    }

    /// Declare a member field.
    pub fn member(mut self, name: impl Into<String>, field: impl Into<Field>) -> Self {
        self.declarations.push(Declaration::Member {
            name: name.into(),
            field: field.into(),
        });
        self
    }

    /// Declare several member fields at once.
    pub fn members<I, N, F>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (N, F)>,
        N: Into<String>,
        F: Into<Field>,
    {
        for (name, field) in fields {
            self = self.member(name, field);
        }
        self
    }

    /// Declare auxiliary metadata. Never validated.
    pub fn auxiliary<V: Any + Send + Sync>(mut self, name: impl Into<String>, value: V) -> Self {
        self.declarations.push(Declaration::Auxiliary {
            name: name.into(),
            value: Box::new(value),
        });
        self
    }

    /// Declare a field, classifying it by name: see [`is_member_name`].
    pub fn field(mut self, name: impl Into<String>, field: impl Into<Field>) -> Self {
        let name = name.into();
        if is_member_name(&name) {
            return self.member(name, field);
        }
        let value: Box<dyn Any + Send + Sync> = match field.into() {
            Field::Member(member) => Box::new(member),
            Field::Opaque(value) => value,
        };
        self.declarations.push(Declaration::Auxiliary { name, value });
        self
    }

    /// Mark this enum as an abstract root. Virtual enums may be empty.
    pub fn declare_virtual(mut self) -> Self {
        self.is_virtual = true;
        self
    }

    /// Validate the declaration and freeze it.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstructionError`] describing the first violated rule.
    pub fn build(self) -> Result<T::Enum, ConstructionError> {
        let Self {
            name,
            is_virtual,
            declarations,
            _template,
        } = self;

        let mut seen_names = HashSet::new();
        let mut entries: Vec<(String, Member)> = Vec::new();
        let mut auxiliary = HashMap::new();
        let mut member_type: Option<ValueType> = None;

        for declaration in declarations {
            if !seen_names.insert(declaration.name().to_string()) {
                return Err(ConstructionError::DuplicateField {
                    field: declaration.name().to_string(),
                });
            }
            match declaration {
                Declaration::Auxiliary { name: field, value } => {
                    tracing::debug!(enum_name = %name, field = %field, "skipping auxiliary field");
                    auxiliary.insert(field, value);
                }
                Declaration::Member { name: field, field: value } => {
                    let member = match value {
                        Field::Member(member) if T::admits(&member) => member,
                        _ => return Err(ConstructionError::InvalidAttribute { field }),
                    };
                    match member_type {
                        Some(seen) if seen != member.value_type() => {
                            return Err(ConstructionError::DifferingMemberTypes {
                                seen: seen.full_name(),
                                encountered: member.value_type().full_name(),
                            });
                        }
                        Some(_) => {}
                        None => member_type = Some(member.value_type()),
                    }
                    entries.push((field, member));
                }
            }
        }

        if entries.is_empty() && !is_virtual {
            return Err(ConstructionError::NoMembers {
                enum_name: name,
                kind: T::name(),
            });
        }

        T::arrange(&mut entries)?;

        let mut field_names = Vec::with_capacity(entries.len());
        let mut members = Vec::with_capacity(entries.len());
        let mut by_field = HashMap::with_capacity(entries.len());
        for (position, (field, member)) in entries.into_iter().enumerate() {
            by_field.insert(field.clone(), position);
            field_names.push(field);
            members.push(member);
        }

        tracing::debug!(
            enum_name = %name,
            kind = T::name(),
            members = members.len(),
            "enum frozen"
        );

        Ok(T::finish(RichEnum::from_frozen(Frozen {
            id: EnumId::new(),
            name,
            kind: T::name(),
            is_virtual,
            members,
            field_names,
            by_field,
            auxiliary,
        })))
    }
}

impl<T: Template> fmt::Debug for EnumBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumBuilder")
            .field("template", &T::name())
            .field("name", &self.name)
            .field("is_virtual", &self.is_virtual)
            .field("fields", &self.declarations.iter().map(Declaration::name).collect::<Vec<_>>())
            .finish()
    }
}

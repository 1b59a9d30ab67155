//! # Enum Facade
//!
//! The closed, queryable type produced by [`EnumBuilder::build`]. A frozen
//! enum is immutable: there is no API that adds, removes or replaces a
//! member, and the member sequence is shared behind an `Arc`, so a
//! `RichEnum` can be cloned freely and read from any number of threads.
//!
//! [`EnumBuilder::build`]: crate::builder::EnumBuilder::build

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use uuid::Uuid;

use crate::attribute::Attribute;
use crate::builder::{EnumBuilder, Ordered, Rich};
use crate::error::{LookupError, RichEnumError};
use crate::lookup;
use crate::value::{Member, CANONICAL_NAME, DISPLAY_NAME, INDEX};

// ─── Identity ────────────────────────────────────────────────────────

/// Unique identity of one frozen enum.
///
/// Two enums with the same name and members still have distinct ids, so
/// lookup failures can always be traced back to the enum that raised them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumId(Uuid);

impl EnumId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for EnumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "enum:{}", self.0)
    }
}

// ─── Frozen state ────────────────────────────────────────────────────

pub(crate) struct Frozen {
    pub(crate) id: EnumId,
    pub(crate) name: String,
    pub(crate) kind: &'static str,
    pub(crate) is_virtual: bool,
    pub(crate) members: Vec<Member>,
    pub(crate) field_names: Vec<String>,
    pub(crate) by_field: HashMap<String, usize>,
    pub(crate) auxiliary: HashMap<String, Box<dyn Any + Send + Sync>>,
}

// ─── Rich enum ───────────────────────────────────────────────────────

/// A frozen enumeration of rich members.
///
/// ```
/// use richenum_core::{Member, RichEnum, RichEnumValue};
///
/// let okra = Member::new(RichEnumValue::new("okra", "Okra"));
/// let vegetable = RichEnum::builder("Vegetable")
///     .member("OKRA", okra.clone())
///     .member("BROCCOLI", Member::new(RichEnumValue::new("broccoli", "Broccoli")))
///     .build()
///     .unwrap();
///
/// assert_eq!(vegetable.len(), 2);
/// assert!(vegetable.contains(&okra));
/// assert_eq!(vegetable.from_canonical("okra").unwrap(), &okra);
/// assert!(vegetable.from_canonical("parsnip").is_err());
/// ```
#[derive(Clone)]
pub struct RichEnum {
    inner: Arc<Frozen>,
}

impl RichEnum {
    /// Start declaring a rich enum.
    pub fn builder(name: impl Into<String>) -> EnumBuilder<Rich> {
        EnumBuilder::new(name)
    }

    pub(crate) fn from_frozen(frozen: Frozen) -> Self {
        Self {
            inner: Arc::new(frozen),
        }
    }

    /// Unique identity of this enum.
    pub fn id(&self) -> EnumId {
        self.inner.id
    }

    /// Declared name.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Template name, `RichEnum` or `OrderedRichEnum`.
    pub fn kind(&self) -> &'static str {
        self.inner.kind
    }

    /// Whether this enum was declared as an abstract root.
    pub fn is_virtual(&self) -> bool {
        self.inner.is_virtual
    }

    /// The frozen member sequence.
    pub fn members(&self) -> &[Member] {
        &self.inner.members
    }

    /// Iterate over members in stored order.
    pub fn iter(&self) -> std::slice::Iter<'_, Member> {
        self.inner.members.iter()
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.inner.members.len()
    }

    /// Whether the enum has no members (only possible for virtual roots).
    pub fn is_empty(&self) -> bool {
        self.inner.members.is_empty()
    }

    /// Membership test.
    ///
    /// `false` whenever `candidate` is not of the same concrete type as the
    /// enum's members; otherwise equality decides.
    pub fn contains(&self, candidate: &Member) -> bool {
        match self.inner.members.first() {
            Some(first) if first.value_type() == candidate.value_type() => {
                self.inner.members.contains(candidate)
            }
            _ => false,
        }
    }

    /// The member declared under `field_name`, e.g. `"OKRA"`.
    pub fn get(&self, field_name: &str) -> Option<&Member> {
        self.inner
            .by_field
            .get(field_name)
            .map(|&position| &self.inner.members[position])
    }

    /// Declared member field names, in stored order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.inner.field_names.iter().map(String::as_str)
    }

    /// Pairs of declared field name and member, in stored order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Member)> {
        self.field_names().zip(self.inner.members.iter())
    }

    /// Auxiliary metadata declared alongside the members.
    pub fn auxiliary<T: Any>(&self, name: &str) -> Option<&T> {
        self.inner
            .auxiliary
            .get(name)
            .and_then(|value| value.downcast_ref::<T>())
    }

    /// Find the first member whose attribute `field` equals `value`, or
    /// whose `field` is a container holding `value`.
    ///
    /// # Errors
    ///
    /// Returns a [`LookupError`] scoped to this enum when nothing matches.
    pub fn lookup(&self, field: &str, value: impl Into<Attribute>) -> Result<&Member, LookupError> {
        let needle = value.into();
        match lookup::find(&self.inner.members, field, &needle) {
            Some(member) => Ok(member),
            None => {
                tracing::trace!(enum_name = %self.inner.name, field, value = %needle, "lookup miss");
                Err(LookupError {
                    enum_id: self.inner.id,
                    enum_name: self.inner.name.clone(),
                    field: field.to_string(),
                    value: needle,
                })
            }
        }
    }

    /// Every member matching `field = value`, in stored order.
    pub fn lookup_all(&self, field: &str, value: impl Into<Attribute>) -> Vec<&Member> {
        let needle = value.into();
        lookup::find_all(&self.inner.members, field, &needle)
    }

    /// Find a member by canonical name.
    pub fn from_canonical(&self, canonical_name: &str) -> Result<&Member, LookupError> {
        self.lookup(CANONICAL_NAME, canonical_name)
    }

    /// Find a member by rendered display name.
    pub fn from_display(&self, display_name: &str) -> Result<&Member, LookupError> {
        self.lookup(DISPLAY_NAME, display_name)
    }

    /// Whether `error` was raised by this enum.
    pub fn owns(&self, error: &LookupError) -> bool {
        error.is_from(self.inner.id)
    }

    /// `(value, display)` pairs for legacy choice-list consumers.
    ///
    /// # Errors
    ///
    /// Returns [`RichEnumError::UnknownAttribute`] if the member type does
    /// not expose one of the fields.
    #[deprecated(note = "build choice lists from `iter` and `Member::get` directly")]
    #[allow(deprecated)]
    pub fn choices(
        &self,
        value_field: &str,
        display_field: &str,
    ) -> Result<Vec<(Attribute, Attribute)>, RichEnumError> {
        self.iter()
            .map(|member| member.choicify(value_field, display_field))
            .collect()
    }
}

impl fmt::Debug for RichEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(self.inner.kind)
            .field("name", &self.inner.name)
            .field("members", &self.inner.members)
            .finish()
    }
}

impl<'a> IntoIterator for &'a RichEnum {
    type Item = &'a Member;
    type IntoIter = std::slice::Iter<'a, Member>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ─── Ordered enum ────────────────────────────────────────────────────

/// A frozen enumeration of ordered members, stored by ascending index.
///
/// Dereferences to [`RichEnum`] for everything but index lookup.
#[derive(Clone)]
pub struct OrderedRichEnum(RichEnum);

impl OrderedRichEnum {
    /// Start declaring an ordered enum.
    pub fn builder(name: impl Into<String>) -> EnumBuilder<Ordered> {
        EnumBuilder::new(name)
    }

    pub(crate) fn from_rich(inner: RichEnum) -> Self {
        Self(inner)
    }

    /// Find a member by index.
    pub fn from_index(&self, index: usize) -> Result<&Member, LookupError> {
        self.0.lookup(INDEX, index)
    }

    /// The underlying rich enum.
    pub fn as_rich(&self) -> &RichEnum {
        &self.0
    }
}

impl Deref for OrderedRichEnum {
    type Target = RichEnum;

    fn deref(&self) -> &RichEnum {
        &self.0
    }
}

impl fmt::Debug for OrderedRichEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl<'a> IntoIterator for &'a OrderedRichEnum {
    type Item = &'a Member;
    type IntoIter = std::slice::Iter<'a, Member>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

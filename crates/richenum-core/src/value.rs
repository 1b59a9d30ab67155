//! # Member Values
//!
//! A member value is an immutable record describing one enum entry: a
//! stable `canonical_name`, a human-facing `display_name`, and, for ordered
//! kinds, a non-negative `index`.
//!
//! ## Concrete types
//!
//! Applications describe their own member types by embedding
//! [`RichEnumValue`] or [`OrderedRichEnumValue`] in a struct and
//! implementing [`EnumValue`]. Extra fields become lookup attributes
//! through [`EnumValue::attribute`].
//!
//! ```
//! use richenum_core::{Attribute, EnumValue, RichEnumValue};
//!
//! #[derive(Debug, Clone)]
//! struct VegetableValue {
//!     base: RichEnumValue,
//!     flavor: String,
//! }
//!
//! impl EnumValue for VegetableValue {
//!     fn rich(&self) -> &RichEnumValue {
//!         &self.base
//!     }
//!
//!     fn attribute(&self, field: &str) -> Option<Attribute> {
//!         (field == "flavor").then(|| self.flavor.as_str().into())
//!     }
//! }
//! ```
//!
//! ## Identity
//!
//! Values are handled through [`Member`], a shared handle that remembers
//! the exact concrete type it was created from. Two members are equal iff
//! they have the same concrete type and the same key: the canonical name
//! for plain kinds, the index for ordered kinds. Instance identity never
//! matters.

use std::any::{Any, TypeId};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::attribute::Attribute;
use crate::display::DisplayName;
use crate::error::{ConstructionError, RichEnumError};

/// Attribute name of the canonical name.
pub const CANONICAL_NAME: &str = "canonical_name";
/// Attribute name of the display name.
pub const DISPLAY_NAME: &str = "display_name";
/// Attribute name of the ordered index.
pub const INDEX: &str = "index";

// ─── Trait ───────────────────────────────────────────────────────────

/// Behaviour shared by every member value type.
pub trait EnumValue: Any + fmt::Debug + Send + Sync {
    /// The canonical and display names.
    fn rich(&self) -> &RichEnumValue;

    /// Position of an ordered value. `None` for plain kinds.
    fn index(&self) -> Option<usize> {
        None
    }

    /// Extra attributes beyond `canonical_name`, `display_name` and `index`.
    fn attribute(&self, _field: &str) -> Option<Attribute> {
        None
    }
}

// ─── Plain value ─────────────────────────────────────────────────────

/// The plain member value: a canonical name plus a display name.
#[derive(Clone)]
pub struct RichEnumValue {
    canonical_name: String,
    display_name: DisplayName,
}

impl RichEnumValue {
    /// Create a plain value.
    pub fn new(canonical_name: impl Into<String>, display_name: impl Into<DisplayName>) -> Self {
        Self {
            canonical_name: canonical_name.into(),
            display_name: display_name.into(),
        }
    }

    /// The stable machine-readable identifier.
    pub fn canonical_name(&self) -> &str {
        &self.canonical_name
    }

    /// The human-facing label, unrendered.
    pub fn display_name(&self) -> &DisplayName {
        &self.display_name
    }

    /// Render the display name.
    pub fn to_display_string(&self) -> String {
        self.display_name.render()
    }
}

impl EnumValue for RichEnumValue {
    fn rich(&self) -> &RichEnumValue {
        self
    }
}

impl fmt::Debug for RichEnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_repr(f, "RichEnumValue", None, self)
    }
}

impl fmt::Display for RichEnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_name, f)
    }
}

impl PartialEq for RichEnumValue {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_name == other.canonical_name
    }
}

impl Eq for RichEnumValue {}

impl Hash for RichEnumValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_name.hash(state);
    }
}

impl PartialOrd for RichEnumValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RichEnumValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical_name.cmp(&other.canonical_name)
    }
}

// ─── Ordered value ───────────────────────────────────────────────────

/// A member value with a position. Equality and ordering use the index,
/// not the canonical name.
#[derive(Clone)]
pub struct OrderedRichEnumValue {
    index: usize,
    rich: RichEnumValue,
}

impl OrderedRichEnumValue {
    /// Create an ordered value.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::NegativeIndex`] if `index < 0`.
    pub fn new(
        index: i64,
        canonical_name: impl Into<String>,
        display_name: impl Into<DisplayName>,
    ) -> Result<Self, ConstructionError> {
        let index = usize::try_from(index).map_err(|_| ConstructionError::NegativeIndex { index })?;
        Ok(Self {
            index,
            rich: RichEnumValue::new(canonical_name, display_name),
        })
    }

    /// The position of this value.
    pub fn position(&self) -> usize {
        self.index
    }

    /// The stable machine-readable identifier.
    pub fn canonical_name(&self) -> &str {
        self.rich.canonical_name()
    }

    /// The human-facing label, unrendered.
    pub fn display_name(&self) -> &DisplayName {
        self.rich.display_name()
    }
}

impl EnumValue for OrderedRichEnumValue {
    fn rich(&self) -> &RichEnumValue {
        &self.rich
    }

    fn index(&self) -> Option<usize> {
        Some(self.index)
    }
}

impl fmt::Debug for OrderedRichEnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_repr(f, "OrderedRichEnumValue", Some(self.index), &self.rich)
    }
}

impl fmt::Display for OrderedRichEnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.rich, f)
    }
}

impl PartialEq for OrderedRichEnumValue {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for OrderedRichEnumValue {}

impl Hash for OrderedRichEnumValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

impl PartialOrd for OrderedRichEnumValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrderedRichEnumValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index.cmp(&other.index)
    }
}

fn write_repr(
    f: &mut fmt::Formatter<'_>,
    type_name: &str,
    index: Option<usize>,
    rich: &RichEnumValue,
) -> fmt::Result {
    match index {
        Some(index) => write!(
            f,
            "<{type_name} #{index}: {} ('{}')>",
            rich.canonical_name(),
            rich.to_display_string()
        ),
        None => write!(
            f,
            "<{type_name}: {} ('{}')>",
            rich.canonical_name(),
            rich.to_display_string()
        ),
    }
}

// ─── Value type ──────────────────────────────────────────────────────

/// The exact concrete type behind a [`Member`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueType {
    id: TypeId,
    name: &'static str,
    full_name: &'static str,
}

impl ValueType {
    /// The value type of `V`.
    pub fn of<V: EnumValue>() -> Self {
        Self {
            id: TypeId::of::<V>(),
            name: short_type_name(std::any::type_name::<V>()),
            full_name: std::any::type_name::<V>(),
        }
    }

    /// Unqualified type name, e.g. `VegetableValue`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Fully qualified type name, e.g. `my_crate::menu::VegetableValue`.
    pub fn full_name(&self) -> &'static str {
        self.full_name
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Strip module paths from a type name, keeping generic arguments readable.
fn short_type_name(full: &'static str) -> &'static str {
    let head = full.split('<').next().unwrap_or(full);
    match head.rfind("::") {
        Some(pos) => &full[pos + 2..],
        None => full,
    }
}

// ─── Member handle ───────────────────────────────────────────────────

/// A shared handle over one member value.
///
/// Cloning is cheap and yields a handle to the same instance.
#[derive(Clone)]
pub struct Member {
    value: Arc<dyn EnumValue>,
    any: Arc<dyn Any + Send + Sync>,
    value_type: ValueType,
}

impl Member {
    /// Wrap a value.
    pub fn new<V: EnumValue>(value: V) -> Self {
        let shared = Arc::new(value);
        Self {
            value: shared.clone(),
            any: shared,
            value_type: ValueType::of::<V>(),
        }
    }

    /// The exact concrete type of the wrapped value.
    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// Whether the wrapped value is of type `V`.
    pub fn is<V: EnumValue>(&self) -> bool {
        self.value_type.id == TypeId::of::<V>()
    }

    /// The wrapped value, if it is of type `V`.
    pub fn downcast_ref<V: EnumValue>(&self) -> Option<&V> {
        self.any.downcast_ref::<V>()
    }

    /// The wrapped value as a trait object.
    pub fn as_value(&self) -> &dyn EnumValue {
        &*self.value
    }

    /// The stable machine-readable identifier.
    pub fn canonical_name(&self) -> &str {
        self.value.rich().canonical_name()
    }

    /// The human-facing label, unrendered.
    pub fn display_name(&self) -> &DisplayName {
        self.value.rich().display_name()
    }

    /// Render the display name.
    pub fn to_display_string(&self) -> String {
        self.value.rich().to_display_string()
    }

    /// Position of an ordered member.
    pub fn index(&self) -> Option<usize> {
        self.value.index()
    }

    /// Whether this member is of an ordered kind.
    pub fn is_ordered(&self) -> bool {
        self.index().is_some()
    }

    /// Read an attribute by name. The display name is rendered to text.
    pub fn get(&self, field: &str) -> Option<Attribute> {
        match field {
            CANONICAL_NAME => Some(Attribute::from(self.canonical_name())),
            DISPLAY_NAME => Some(Attribute::Text(self.to_display_string())),
            INDEX => self.index().map(Attribute::from),
            other => self.value.attribute(other),
        }
    }

    /// Whether both handles point at the same instance.
    pub fn ptr_eq(a: &Member, b: &Member) -> bool {
        Arc::ptr_eq(&a.any, &b.any)
    }

    /// A `(value, display)` pair for legacy choice-list consumers.
    ///
    /// # Errors
    ///
    /// Returns [`RichEnumError::UnknownAttribute`] if either field is not
    /// exposed by this member's type.
    #[deprecated(note = "build choice lists from `get` directly")]
    pub fn choicify(
        &self,
        value_field: &str,
        display_field: &str,
    ) -> Result<(Attribute, Attribute), RichEnumError> {
        let read = |field: &str| {
            self.get(field).ok_or_else(|| RichEnumError::UnknownAttribute {
                value_type: self.value_type.name,
                field: field.to_string(),
            })
        };
        Ok((read(value_field)?, read(display_field)?))
    }

    /// The key that decides equality within one concrete type.
    pub(crate) fn key(&self) -> MemberKey<'_> {
        match self.index() {
            Some(index) => MemberKey::Index(index),
            None => MemberKey::Canonical(self.canonical_name()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) enum MemberKey<'a> {
    Canonical(&'a str),
    Index(usize),
}

impl PartialEq for Member {
    fn eq(&self, other: &Self) -> bool {
        self.value_type == other.value_type && self.key() == other.key()
    }
}

impl Eq for Member {}

impl Hash for Member {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value_type.hash(state);
        self.key().hash(state);
    }
}

impl PartialOrd for Member {
    /// `None` when the members are of different concrete types.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.value_type == other.value_type).then(|| self.key().cmp(&other.key()))
    }
}

impl fmt::Debug for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_repr(f, self.value_type.name, self.index(), self.value.rich())
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.display_name(), f)
    }
}

impl<V: EnumValue> From<V> for Member {
    fn from(value: V) -> Self {
        Self::new(value)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(member: &Member) -> u64 {
        let mut hasher = DefaultHasher::new();
        member.hash(&mut hasher);
        hasher.finish()
    }

    proptest! {
        /// Equal members always hash alike.
        #[test]
        fn equal_ordered_members_hash_alike(
            index in 0i64..10_000,
            a in "[a-z]{1,12}",
            b in "[a-z]{1,12}",
        ) {
            let left = Member::new(OrderedRichEnumValue::new(index, a.clone(), a).unwrap());
            let right = Member::new(OrderedRichEnumValue::new(index, b.clone(), b).unwrap());
            prop_assert_eq!(&left, &right);
            prop_assert_eq!(hash_of(&left), hash_of(&right));
        }

        /// Plain equality is exactly canonical-name equality.
        #[test]
        fn plain_equality_follows_canonical_name(a in "[a-z]{1,6}", b in "[a-z]{1,6}") {
            let left = Member::new(RichEnumValue::new(a.clone(), "x"));
            let right = Member::new(RichEnumValue::new(b.clone(), "y"));
            prop_assert_eq!(left == right, a == b);
            if left == right {
                prop_assert_eq!(hash_of(&left), hash_of(&right));
            }
            prop_assert_eq!(left.partial_cmp(&right), Some(a.cmp(&b)));
        }
    }
}

//! # Attribute Values
//!
//! Lookup is polymorphic over any attribute a member type exposes, so the
//! lookup engine needs one value type that can hold whatever those
//! attributes are. [`Attribute`] is that type.
//!
//! `List` is the only container. `Text` is deliberately *not* a container:
//! looking up `"k"` never matches a member whose attribute is `"okra"`.

use std::fmt;

/// A dynamically typed attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum Attribute {
    /// A text value.
    Text(String),
    /// A signed integer.
    Integer(i64),
    /// A floating-point number.
    Float(f64),
    /// A boolean.
    Boolean(bool),
    /// Several matchable values, e.g. aliases.
    List(Vec<Attribute>),
}

impl Attribute {
    /// Returns the text if this is a `Text` value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer if this is an `Integer` value.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the items if this value is a container.
    pub fn as_container(&self) -> Option<&[Attribute]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Value equality, comparing integers and floats numerically.
    pub fn loosely_equals(&self, other: &Attribute) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Float(b)) | (Self::Float(b), Self::Integer(a)) => {
                integer_equals_float(*a, *b)
            }
            (Self::List(a), Self::List(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.loosely_equals(y))
            }
            _ => self == other,
        }
    }

    /// Whether this attribute matches `needle`: either it equals the needle,
    /// or it is a container holding the needle.
    pub fn matches(&self, needle: &Attribute) -> bool {
        if self.loosely_equals(needle) {
            return true;
        }
        self.as_container()
            .is_some_and(|items| items.iter().any(|item| item.loosely_equals(needle)))
    }
}

/// Exact comparison; an `f64` cast of `i` would round above 2^53.
fn integer_equals_float(i: i64, x: f64) -> bool {
    // i64::MIN is exactly representable; i64::MAX rounds up to 2^63.
    x.is_finite() && x.fract() == 0.0 && x >= i64::MIN as f64 && x < i64::MAX as f64 && x as i64 == i
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<&str> for Attribute {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Attribute {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for Attribute {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<i64> for Attribute {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<i32> for Attribute {
    fn from(i: i32) -> Self {
        Self::Integer(i64::from(i))
    }
}

impl From<u32> for Attribute {
    fn from(i: u32) -> Self {
        Self::Integer(i64::from(i))
    }
}

impl From<usize> for Attribute {
    fn from(i: usize) -> Self {
        // Indices beyond i64::MAX cannot be declared, so saturating is lossless in practice.
        Self::Integer(i64::try_from(i).unwrap_or(i64::MAX))
    }
}

impl From<f64> for Attribute {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<bool> for Attribute {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl<T: Into<Attribute>> From<Vec<T>> for Attribute {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

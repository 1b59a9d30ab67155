//! # richenum-core — Rich Enumerations
//!
//! A rich enum is a closed, named set of constant values. Every member
//! carries a stable machine identifier (`canonical_name`), a human-facing
//! label (`display_name`), and, for ordered kinds, a non-negative position
//! (`index`). Members can be found again by any attribute they expose.
//!
//! ## Key Design Principles
//!
//! 1. **Declare, validate, freeze.** Enums are declared through
//!    [`EnumBuilder`] and validated once. The frozen [`RichEnum`] or
//!    [`OrderedRichEnum`] is immutable and `Send + Sync`.
//!
//! 2. **Members and metadata are explicit.** A declaration marks each field
//!    as a member or as auxiliary metadata. Nothing is inferred from
//!    whatever happens to be attached to a type.
//!
//! 3. **Typed identity.** A [`Member`] remembers its exact concrete type.
//!    Members of different types are never equal, and comparing them is
//!    either refused (`PartialOrd` returns `None`) or done with the lenient,
//!    logged policy in [`compare`].
//!
//! 4. **Scoped lookup errors.** Every [`LookupError`] carries the [`EnumId`]
//!    of the enum that raised it.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `.unwrap()` outside tests.
//! - No I/O. Loading enums from files lives in `richenum-catalog`.

pub mod attribute;
pub mod builder;
pub mod compare;
pub mod display;
pub mod error;
pub mod facade;
pub mod lookup;
pub mod simple;
pub mod value;

pub use attribute::Attribute;
pub use builder::{is_member_name, EnumBuilder, Field, Ordered, Rich, Template};
pub use compare::sort_lenient;
pub use display::DisplayName;
pub use error::{ConstructionError, LookupError, RichEnumError};
pub use facade::{EnumId, OrderedRichEnum, RichEnum};
pub use simple::SimpleEnum;
pub use value::{
    EnumValue, Member, OrderedRichEnumValue, RichEnumValue, ValueType, CANONICAL_NAME,
    DISPLAY_NAME, INDEX,
};

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

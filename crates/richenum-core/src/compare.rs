//! # Cross-Type Comparison
//!
//! Within one concrete type, members are totally ordered and `Member`'s
//! `PartialOrd` answers directly. Across types there is no meaningful
//! answer, and the strict comparison says so by returning `None`.
//!
//! Some callers still need a deterministic result, e.g. to sort a mixed
//! list the way the legacy library did. The lenient operations here keep
//! that policy: a member always sorts *before* a foreign value (a non-member
//! or a member of another concrete type) and is never equal to one. Every
//! such comparison emits a `warn` event, because relying on it usually
//! means two unrelated things are being compared by mistake.

use std::any::Any;
use std::cmp::Ordering;

use crate::value::Member;

impl Member {
    /// Compare against an arbitrary value.
    ///
    /// Same-type members compare by key. Anything else compares as
    /// `Ordering::Less` (this member first) and logs a warning.
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use richenum_core::{Member, RichEnumValue};
    ///
    /// let okra = Member::new(RichEnumValue::new("okra", "Okra"));
    /// assert_eq!(okra.compare_lenient(&"okra"), Ordering::Less);
    /// assert_eq!(okra.compare_lenient(&11_i64), Ordering::Less);
    /// ```
    pub fn compare_lenient(&self, other: &dyn Any) -> Ordering {
        match other.downcast_ref::<Member>().and_then(|m| self.partial_cmp(m)) {
            Some(ordering) => ordering,
            None => {
                tracing::warn!(
                    member = ?self,
                    "comparing an enum member against a value of a different type; treating the member as less"
                );
                Ordering::Less
            }
        }
    }

    /// Equality against an arbitrary value.
    ///
    /// `false` for anything that is not a same-type member; the mismatch is
    /// logged as a warning.
    pub fn equals_lenient(&self, other: &dyn Any) -> bool {
        match other.downcast_ref::<Member>() {
            Some(m) if m.value_type() == self.value_type() => self == m,
            _ => {
                tracing::warn!(
                    member = ?self,
                    "testing an enum member for equality against a value of a different type"
                );
                false
            }
        }
    }
}

/// Sort members with the lenient policy.
///
/// Members are grouped by concrete type, groups in the order their type
/// first appears in the slice, and sorted by key within each group. A
/// slice holding more than one type logs a single warning per call.
pub fn sort_lenient(members: &mut [Member]) {
    let mut seen = Vec::new();
    for member in members.iter() {
        if !seen.contains(&member.value_type()) {
            seen.push(member.value_type());
        }
    }
    if seen.len() > 1 {
        tracing::warn!(
            types = ?seen,
            "sorting enum members of different types; grouping by first-seen type"
        );
    }
    members.sort_by(|a, b| {
        let rank = |m: &Member| seen.iter().position(|t| *t == m.value_type());
        rank(a)
            .cmp(&rank(b))
            .then_with(|| a.partial_cmp(b).unwrap_or(Ordering::Equal))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{OrderedRichEnumValue, RichEnumValue};
    use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
    use std::sync::Arc;
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    struct WarnCounter(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for WarnCounter {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == Level::WARN {
                self.0.fetch_add(1, AtomicOrdering::SeqCst);
            }
        }
    }

    fn count_warnings(f: impl FnOnce()) -> usize {
        let counter = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(WarnCounter(counter.clone()));
        tracing::subscriber::with_default(subscriber, f);
        counter.load(AtomicOrdering::SeqCst)
    }

    #[test]
    fn test_less_than_foreign_values() {
        let okra = Member::new(RichEnumValue::new("okra", "Okra"));
        let warnings = count_warnings(|| {
            assert_eq!(okra.compare_lenient(&"okra"), Ordering::Less);
            assert_eq!(okra.compare_lenient(&11i64), Ordering::Less);
            assert_eq!(okra.compare_lenient(&vec![("foo", "bar")]), Ordering::Less);
        });
        assert_eq!(warnings, 3);
    }

    #[test]
    fn test_less_than_other_member_type() {
        let ordered = Member::new(OrderedRichEnumValue::new(0, "okra", "Okra").unwrap());
        let plain = Member::new(RichEnumValue::new("okra", "Okra"));
        let warnings = count_warnings(|| {
            assert_eq!(plain.compare_lenient(&ordered), Ordering::Less);
            assert!(!plain.equals_lenient(&ordered));
            assert!(!plain.equals_lenient(&"okra"));
        });
        assert_eq!(warnings, 3);
    }

    #[test]
    fn test_same_type_is_silent() {
        let broccoli = Member::new(RichEnumValue::new("broccoli", "Broccoli"));
        let okra = Member::new(RichEnumValue::new("okra", "Okra"));
        let warnings = count_warnings(|| {
            assert_eq!(broccoli.compare_lenient(&okra), Ordering::Less);
            assert_eq!(okra.compare_lenient(&broccoli), Ordering::Greater);
            assert!(okra.equals_lenient(&okra.clone()));
        });
        assert_eq!(warnings, 0);
    }

    #[test]
    fn test_sort_lenient_groups_types() {
        let b = Member::new(RichEnumValue::new("b", "B"));
        let a = Member::new(RichEnumValue::new("a", "A"));
        let one = Member::new(OrderedRichEnumValue::new(1, "z", "Z").unwrap());
        let zero = Member::new(OrderedRichEnumValue::new(0, "y", "Y").unwrap());
        let mut mixed = vec![b.clone(), one.clone(), a.clone(), zero.clone()];
        let warnings = count_warnings(|| sort_lenient(&mut mixed));
        assert_eq!(warnings, 1);
        assert_eq!(mixed, vec![a, b, zero, one]);
    }

    #[test]
    fn test_sort_lenient_single_type_is_silent() {
        let b = Member::new(RichEnumValue::new("b", "B"));
        let a = Member::new(RichEnumValue::new("a", "A"));
        let mut plain = vec![b.clone(), a.clone()];
        let warnings = count_warnings(|| sort_lenient(&mut plain));
        assert_eq!(warnings, 0);
        assert_eq!(plain, vec![a, b]);
    }
}

//! # Simple Enums
//!
//! A label-to-value mapping for callers that need nothing richer than a
//! name for a constant. Values must be hashable; that is enforced by the
//! `Eq + Hash` bound rather than checked at runtime.

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::ConstructionError;

/// An immutable mapping of labels to hashable values.
///
/// ```
/// use richenum_core::SimpleEnum;
///
/// let animal = SimpleEnum::new([("CAT", 1), ("DOG", 2)]).unwrap();
/// assert_eq!(animal.get("CAT"), Some(&1));
/// assert_eq!(animal.get_label_by_id(&2), Some("DOG"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleEnum<V: Eq + Hash + Clone> {
    entries: Vec<(String, V)>,
    by_label: HashMap<String, usize>,
    by_value: HashMap<V, usize>,
}

impl<V: Eq + Hash + Clone> SimpleEnum<V> {
    /// Build from `(label, value)` pairs, keeping declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::DuplicateField`] if a label repeats.
    pub fn new<I, L>(pairs: I) -> Result<Self, ConstructionError>
    where
        I: IntoIterator<Item = (L, V)>,
        L: Into<String>,
    {
        let mut entries = Vec::new();
        let mut by_label = HashMap::new();
        let mut by_value = HashMap::new();
        for (label, value) in pairs {
            let label = label.into();
            if by_label.contains_key(&label) {
                return Err(ConstructionError::DuplicateField { field: label });
            }
            let position = entries.len();
            by_label.insert(label.clone(), position);
            // Several labels may share a value; the last one declared wins.
            by_value.insert(value.clone(), position);
            entries.push((label, value));
        }
        Ok(Self {
            entries,
            by_label,
            by_value,
        })
    }

    /// The value declared under `label`.
    pub fn get(&self, label: &str) -> Option<&V> {
        self.by_label.get(label).map(|&i| &self.entries[i].1)
    }

    /// Alias of [`get`](Self::get).
    pub fn get_id_by_label(&self, label: &str) -> Option<&V> {
        self.get(label)
    }

    /// The label of `value`. When several labels share it, the last one
    /// declared is returned.
    pub fn get_label_by_id(&self, value: &V) -> Option<&str> {
        self.by_value.get(value).map(|&i| self.entries[i].0.as_str())
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no labels were declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(label, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(label, value)| (label.as_str(), value))
    }

    /// Labels in declaration order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(label, _)| label.as_str())
    }
}

impl<V: Eq + Hash + Clone + Ord> SimpleEnum<V> {
    /// `(value, label)` pairs sorted by value.
    #[deprecated(note = "iterate with `iter` and sort as needed")]
    pub fn choices(&self) -> Vec<(V, String)> {
        let mut choices: Vec<(V, String)> = self
            .entries
            .iter()
            .map(|(label, value)| (value.clone(), label.clone()))
            .collect();
        choices.sort_by(|a, b| a.0.cmp(&b.0));
        choices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_both_ways() {
        let animal = SimpleEnum::new([("CAT", 1), ("DOG", 2)]).unwrap();
        assert_eq!(animal.get_id_by_label("DOG"), Some(&2));
        assert_eq!(animal.get_label_by_id(&1), Some("CAT"));
        assert_eq!(animal.get("BIRD"), None);
        assert_eq!(animal.get_label_by_id(&3), None);
        assert_eq!(animal.len(), 2);
    }

    #[test]
    fn test_shared_value_last_label_wins() {
        let alias = SimpleEnum::new([("CAT", 1), ("KITTY", 1)]).unwrap();
        assert_eq!(alias.get_label_by_id(&1), Some("KITTY"));
        assert_eq!(alias.get("CAT"), Some(&1));
    }

    #[test]
    fn test_duplicate_label_rejected() {
        let err = SimpleEnum::new([("CAT", 1), ("CAT", 2)]).unwrap_err();
        assert_eq!(err, ConstructionError::DuplicateField { field: "CAT".into() });
    }

    #[test]
    #[allow(deprecated)]
    fn test_choices_sorted_by_value() {
        let animal = SimpleEnum::new([("DOG", 2), ("CAT", 1), ("ANT", 3)]).unwrap();
        assert_eq!(
            animal.choices(),
            vec![(1, "CAT".to_string()), (2, "DOG".to_string()), (3, "ANT".to_string())]
        );
        let labels: Vec<&str> = animal.labels().collect();
        assert_eq!(labels, vec!["DOG", "CAT", "ANT"]);
    }
}

//! # Lookup Engine
//!
//! "Find the member whose attribute `field` equals `value`", shared by both
//! enum templates.
//!
//! Members are scanned in the enum's stored order (declaration order for
//! rich enums, index order for ordered enums). For each member the named
//! attribute is read, and the first member where it either equals the
//! needle or is a container holding the needle wins. Text attributes are
//! never searched as containers. Members that do not expose the attribute
//! are skipped.

use crate::attribute::Attribute;
use crate::value::Member;

/// Return the first member whose `field` matches `needle`.
pub fn find<'a>(members: &'a [Member], field: &str, needle: &Attribute) -> Option<&'a Member> {
    members.iter().find(|member| {
        member
            .get(field)
            .is_some_and(|attribute| attribute.matches(needle))
    })
}

/// Return every member whose `field` matches `needle`, in stored order.
pub fn find_all<'a>(members: &'a [Member], field: &str, needle: &Attribute) -> Vec<&'a Member> {
    members
        .iter()
        .filter(|member| {
            member
                .get(field)
                .is_some_and(|attribute| attribute.matches(needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{EnumValue, RichEnumValue};

    #[derive(Debug)]
    struct Aliased {
        base: RichEnumValue,
        aliases: Vec<&'static str>,
    }

    impl EnumValue for Aliased {
        fn rich(&self) -> &RichEnumValue {
            &self.base
        }

        fn attribute(&self, field: &str) -> Option<Attribute> {
            (field == "aliases").then(|| Attribute::from(self.aliases.clone()))
        }
    }

    fn aliased(canonical: &str, aliases: Vec<&'static str>) -> Member {
        Member::new(Aliased {
            base: RichEnumValue::new(canonical, canonical.to_uppercase()),
            aliases,
        })
    }

    #[test]
    fn test_first_match_wins() {
        let members = vec![aliased("okra", vec!["shared"]), aliased("kale", vec!["shared"])];
        let found = find(&members, "aliases", &"shared".into()).unwrap();
        assert_eq!(found.canonical_name(), "okra");
        assert_eq!(find_all(&members, "aliases", &"shared".into()).len(), 2);
    }

    #[test]
    fn test_container_fallback() {
        let members = vec![aliased("okra", vec!["gumbo", "ladyfinger"])];
        assert!(find(&members, "aliases", &"ladyfinger".into()).is_some());
        assert!(find(&members, "aliases", &"parsnip".into()).is_none());
    }

    #[test]
    fn test_text_attribute_is_not_searched_by_substring() {
        let members = vec![aliased("okra", vec![])];
        assert!(find(&members, "canonical_name", &"ok".into()).is_none());
        assert!(find(&members, "canonical_name", &"okra".into()).is_some());
    }

    #[test]
    fn test_missing_attribute_never_matches() {
        let members = vec![aliased("okra", vec![])];
        assert!(find(&members, "flavor", &"okra".into()).is_none());
        assert!(find(&members, "index", &Attribute::Integer(0)).is_none());
    }
}

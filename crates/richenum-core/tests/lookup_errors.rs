//! # Per-Enum Lookup Errors
//!
//! Every enum raises lookup errors that can be told apart from those of
//! any other enum while still being handled through one error type.

use richenum_core::{LookupError, Member, RichEnum, RichEnumError, RichEnumValue};

fn single(enum_name: &str, canonical: &str) -> RichEnum {
    RichEnum::builder(enum_name)
        .member(canonical.to_uppercase(), Member::new(RichEnumValue::new(canonical, canonical)))
        .build()
        .expect("single-member declaration is valid")
}

#[test]
fn test_specific_lookup_error_is_caught() {
    let vegetable = single("Vegetable", "okra");
    let err = vegetable.lookup("canonical_name", "meat").unwrap_err();
    assert!(vegetable.owns(&err));
    assert_eq!(err.enum_id(), vegetable.id());
}

#[test]
fn test_other_specific_lookup_error_is_not_caught() {
    let vegetable = single("Vegetable", "okra");
    let meat = single("Meat", "cow");
    let err = vegetable.lookup("canonical_name", "meat").unwrap_err();
    assert!(!meat.owns(&err));
    assert!(!err.is_from(meat.id()));
}

#[test]
fn test_same_declaration_twice_has_distinct_errors() {
    let first = single("Vegetable", "okra");
    let second = single("Vegetable", "okra");
    let err = first.from_canonical("parsnip").unwrap_err();
    assert!(first.owns(&err));
    assert!(!second.owns(&err));
}

#[test]
fn test_generic_handling_through_one_type() {
    fn find(e: &RichEnum, name: &str) -> Result<String, RichEnumError> {
        Ok(e.from_canonical(name)?.to_display_string())
    }

    let vegetable = single("Vegetable", "okra");
    let meat = single("Meat", "cow");
    let errors: Vec<LookupError> = [find(&vegetable, "cow"), find(&meat, "okra")]
        .into_iter()
        .filter_map(|result| match result {
            Err(RichEnumError::Lookup(err)) => Some(err),
            _ => None,
        })
        .collect();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].enum_name(), "Vegetable");
    assert_eq!(errors[1].enum_name(), "Meat");
    assert_eq!(
        errors[1].to_string(),
        "could not find member matching canonical_name = okra in enum Meat"
    );
}

#[test]
fn test_clone_shares_identity() {
    let vegetable = single("Vegetable", "okra");
    let err = vegetable.clone().from_canonical("parsnip").unwrap_err();
    assert!(vegetable.owns(&err));
}

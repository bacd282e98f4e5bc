use pretty_assertions::assert_eq;

use super::*;

#[test]
fn codes_are_stable_and_distinct() {
    let codes: Vec<_> = DeductionErrorKind::ALL.iter().map(|k| k.code()).collect();
    assert_eq!(codes, vec!["D0001", "D0002", "D0003", "D0004"]);
}

#[test]
fn every_kind_has_an_explanation() {
    for kind in DeductionErrorKind::ALL {
        assert!(!kind.explain().is_empty());
    }
}

#[test]
fn error_display_carries_the_pairing() {
    let err = DeductionError::new(
        DeductionErrorKind::BracedInitializerNotDeducible,
        "T",
        "{11, 23, 9}",
    );
    assert_eq!(
        err.to_string(),
        "cannot deduce a template parameter from a braced initializer \
         (pattern `T`, argument `{11, 23, 9}`)"
    );
}

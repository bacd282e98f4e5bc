use super::*;

#[test]
fn default_is_unqualified() {
    assert_eq!(CvQualifiers::default(), CvQualifiers::NONE);
    assert!(!CvQualifiers::NONE.is_const());
    assert!(!CvQualifiers::NONE.is_volatile());
}

#[test]
fn predicates_work() {
    assert!(CvQualifiers::CONST.is_const());
    assert!(!CvQualifiers::CONST.is_volatile());
    assert!(CvQualifiers::VOLATILE.is_volatile());
    assert!(!CvQualifiers::VOLATILE.is_const());

    let both = CvQualifiers::CONST | CvQualifiers::VOLATILE;
    assert!(both.is_const());
    assert!(both.is_volatile());
}

#[test]
fn prefix_spellings() {
    assert_eq!(CvQualifiers::NONE.prefix(), "");
    assert_eq!(CvQualifiers::CONST.prefix(), "const ");
    assert_eq!(CvQualifiers::VOLATILE.prefix(), "volatile ");
    assert_eq!(
        (CvQualifiers::CONST | CvQualifiers::VOLATILE).prefix(),
        "const volatile "
    );
}

#[test]
fn absorption_is_set_difference() {
    let arg = CvQualifiers::CONST | CvQualifiers::VOLATILE;
    let pattern = CvQualifiers::CONST;
    assert_eq!(arg - pattern, CvQualifiers::VOLATILE);
    assert_eq!(pattern - arg, CvQualifiers::NONE);
}

#[test]
fn size_is_1_byte() {
    assert_eq!(std::mem::size_of::<CvQualifiers>(), 1);
}

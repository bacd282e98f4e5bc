use super::*;

#[test]
fn default_is_lvalue() {
    assert_eq!(ValueCategory::default(), ValueCategory::Lvalue);
}

#[test]
fn predicates_work() {
    assert!(ValueCategory::Lvalue.is_lvalue());
    assert!(!ValueCategory::Lvalue.is_rvalue());
    assert!(ValueCategory::Lvalue.is_glvalue());

    assert!(!ValueCategory::Xvalue.is_lvalue());
    assert!(ValueCategory::Xvalue.is_rvalue());
    assert!(ValueCategory::Xvalue.is_glvalue());

    assert!(!ValueCategory::Prvalue.is_lvalue());
    assert!(ValueCategory::Prvalue.is_rvalue());
    assert!(!ValueCategory::Prvalue.is_glvalue());
}

#[test]
fn display_names() {
    assert_eq!(ValueCategory::Lvalue.to_string(), "lvalue");
    assert_eq!(ValueCategory::Xvalue.to_string(), "xvalue");
    assert_eq!(ValueCategory::Prvalue.to_string(), "prvalue");
}

#[test]
fn size_is_1_byte() {
    assert_eq!(std::mem::size_of::<ValueCategory>(), 1);
}

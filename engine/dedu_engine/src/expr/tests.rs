use super::*;

#[test]
fn names_are_lvalues() {
    let d = ExpressionDescriptor::name(CppType::named("int"));
    assert!(d.form.is_name());
    assert!(d.category.is_lvalue());
}

#[test]
fn parenthesized_name_is_not_a_name() {
    let d = ExpressionDescriptor::parenthesized_name(CppType::named("int"));
    assert!(!d.form.is_name());
    assert!(d.category.is_lvalue());
}

#[test]
fn compound_carries_its_category() {
    let d = ExpressionDescriptor::compound(CppType::named("int"), ValueCategory::Xvalue);
    assert_eq!(d.form, ExprForm::Compound);
    assert_eq!(d.category, ValueCategory::Xvalue);
}

use dedu_engine::{ArgumentKind, PatternShape};
use pretty_assertions::assert_eq;

use super::*;

fn parsed(line: &str) -> Query {
    match parse_query(line) {
        Ok(query) => query,
        Err(err) => panic!("failed to parse `{line}`: {err}"),
    }
}

// === Patterns ===

#[test]
fn parses_reference_patterns() {
    let Query::Template { pattern, .. } = parsed("template: const T& <- lvalue int") else {
        panic!("expected a template query");
    };
    assert_eq!(pattern, ParameterPattern::lvalue_ref(CvQualifiers::CONST));
}

#[test]
fn unqualified_rref_pattern_is_universal_only_when_deducing() {
    let Query::Template { pattern, .. } = parsed("template: T&& <- lvalue int") else {
        panic!("expected a template query");
    };
    assert_eq!(*pattern.shape(), PatternShape::UniversalRef);

    let Query::Template { pattern, .. } = parsed("template: const T&& <- lvalue int") else {
        panic!("expected a template query");
    };
    assert_eq!(*pattern.shape(), PatternShape::RvalueRef);
}

#[test]
fn parses_pointer_patterns() {
    let Query::Template { pattern, .. } = parsed("template: const T* <- lvalue int*") else {
        panic!("expected a template query");
    };
    assert_eq!(
        pattern,
        ParameterPattern::pointer_to(ParameterPattern::pointee(CvQualifiers::CONST))
    );
}

// === Arguments ===

#[test]
fn parses_value_categories_with_lvalue_default() {
    let Query::Template { arg, .. } = parsed("template: T <- const int") else {
        panic!("expected a template query");
    };
    assert_eq!(arg.category, ValueCategory::Lvalue);

    let Query::Template { arg, .. } = parsed("template: T <- rvalue int") else {
        panic!("expected a template query");
    };
    assert_eq!(arg.category, ValueCategory::Prvalue);
}

#[test]
fn parses_braced_arguments() {
    let Query::Auto { arg, .. } = parsed("auto: T <- {int, int, int}") else {
        panic!("expected an auto query");
    };
    let ArgumentKind::BracedInit(elements) = &arg.kind else {
        panic!("expected a braced argument");
    };
    assert_eq!(elements.len(), 3);
}

#[test]
fn parses_special_argument_forms() {
    let Query::Template { arg, .. } = parsed("template: T <- overload") else {
        panic!("expected a template query");
    };
    assert_eq!(arg.kind, ArgumentKind::OverloadSet { target: None });

    let Query::Template { arg, .. } = parsed("template: T& <- bitfield unsigned") else {
        panic!("expected a template query");
    };
    assert_eq!(arg.kind, ArgumentKind::Bitfield);

    let Query::Template { arg, .. } = parsed("template: const T& <- static-const const int")
    else {
        panic!("expected a template query");
    };
    assert_eq!(arg.kind, ArgumentKind::StaticConstMember { defined: false });
}

#[test]
fn parses_compound_types() {
    let Query::Template { arg, .. } = parsed("template: T <- const char[13]") else {
        panic!("expected a template query");
    };
    assert_eq!(arg.ty.to_string(), "const char[13]");

    let Query::Template { arg, .. } = parsed("template: T& <- void(int, double)") else {
        panic!("expected a template query");
    };
    assert_eq!(arg.ty.to_string(), "void (int, double)");

    let Query::Template { arg, .. } = parsed("template: T <- lvalue char* const") else {
        panic!("expected a template query");
    };
    assert_eq!(arg.ty.to_string(), "char* const");
}

// === decltype modes ===

#[test]
fn parses_decltype_forms() {
    let Query::Decltype { expr } = parsed("decltype: const int") else {
        panic!("expected a decltype query");
    };
    assert!(expr.form.is_name());

    let Query::Decltype { expr } = parsed("decltype: paren const int") else {
        panic!("expected a decltype query");
    };
    assert_eq!(expr.form, dedu_engine::ExprForm::Parenthesized);

    let Query::Decltype { expr } = parsed("decltype: expr xvalue int") else {
        panic!("expected a decltype query");
    };
    assert_eq!(expr.category, ValueCategory::Xvalue);
}

#[test]
fn parses_decltype_auto_return() {
    let Query::DecltypeAuto { is_return, .. } = parsed("decltype-auto-return: paren int") else {
        panic!("expected a decltype-auto query");
    };
    assert!(is_return);
}

// === Errors ===

#[test]
fn rejects_unknown_modes_and_trailing_garbage() {
    assert_eq!(
        parse_query("consteval: T <- int"),
        Err(ParseError::UnknownMode("consteval".to_string()))
    );
    assert!(matches!(
        parse_query("template: T <- int int"),
        Err(ParseError::Unexpected { .. })
    ));
    assert!(matches!(
        parse_query("template: T"),
        Err(ParseError::UnexpectedEnd(_))
    ));
}

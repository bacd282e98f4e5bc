use pretty_assertions::assert_eq;

use super::*;

// === The universal-reference invariant ===

#[test]
fn unqualified_rref_syntax_is_universal_under_deducing_modes() {
    let under_template =
        ParameterPattern::rvalue_ref_syntax(CvQualifiers::NONE, DeductionMode::Template);
    let under_auto = ParameterPattern::rvalue_ref_syntax(CvQualifiers::NONE, DeductionMode::Auto);

    assert_eq!(*under_template.shape(), PatternShape::UniversalRef);
    assert_eq!(*under_auto.shape(), PatternShape::UniversalRef);
}

#[test]
fn rref_syntax_is_plain_rvalue_ref_without_deduction() {
    let under_decltype =
        ParameterPattern::rvalue_ref_syntax(CvQualifiers::NONE, DeductionMode::Decltype);
    let under_decltype_auto =
        ParameterPattern::rvalue_ref_syntax(CvQualifiers::NONE, DeductionMode::DecltypeAuto);

    assert_eq!(*under_decltype.shape(), PatternShape::RvalueRef);
    assert_eq!(*under_decltype_auto.shape(), PatternShape::RvalueRef);
}

#[test]
fn qualified_rref_syntax_is_never_universal() {
    let pattern =
        ParameterPattern::rvalue_ref_syntax(CvQualifiers::CONST, DeductionMode::Template);
    assert_eq!(*pattern.shape(), PatternShape::RvalueRef);
    assert!(pattern.quals().is_const());
}

// === Binding predicates ===

#[test]
fn reference_and_pointer_patterns_require_an_address() {
    assert!(ParameterPattern::lvalue_ref(CvQualifiers::NONE).requires_reference_or_address());
    assert!(
        ParameterPattern::rvalue_ref_syntax(CvQualifiers::NONE, DeductionMode::Template)
            .requires_reference_or_address()
    );
    assert!(
        ParameterPattern::pointer_to(ParameterPattern::pointee(CvQualifiers::NONE))
            .requires_reference_or_address()
    );
    assert!(!ParameterPattern::by_value().requires_reference_or_address());
    assert!(!ParameterPattern::initializer_list().requires_reference_or_address());
}

#[test]
fn only_const_lvalue_ref_and_by_value_accept_bitfields() {
    assert!(!ParameterPattern::lvalue_ref(CvQualifiers::CONST).forbids_bitfield());
    assert!(!ParameterPattern::by_value().forbids_bitfield());

    assert!(ParameterPattern::lvalue_ref(CvQualifiers::NONE).forbids_bitfield());
    assert!(
        ParameterPattern::rvalue_ref_syntax(CvQualifiers::NONE, DeductionMode::Template)
            .forbids_bitfield()
    );
    assert!(
        ParameterPattern::pointer_to(ParameterPattern::pointee(CvQualifiers::NONE))
            .forbids_bitfield()
    );
}

// === Display ===

#[test]
fn display_spellings() {
    assert_eq!(ParameterPattern::by_value().to_string(), "T");
    assert_eq!(
        ParameterPattern::lvalue_ref(CvQualifiers::NONE).to_string(),
        "T&"
    );
    assert_eq!(
        ParameterPattern::lvalue_ref(CvQualifiers::CONST).to_string(),
        "const T&"
    );
    assert_eq!(
        ParameterPattern::rvalue_ref_syntax(CvQualifiers::NONE, DeductionMode::Template)
            .to_string(),
        "T&&"
    );
    assert_eq!(
        ParameterPattern::pointer_to(ParameterPattern::pointee(CvQualifiers::CONST)).to_string(),
        "const T*"
    );
    assert_eq!(
        ParameterPattern::initializer_list().to_string(),
        "std::initializer_list<T>"
    );
}

//! The ordered decision procedures for each deduction mode.
//!
//! Template deduction runs in three layers, in order:
//!
//! 1. special-form checks that can fail (braces, overload sets,
//!    undefined `static const` members, bitfields);
//! 2. the shape dispatch (reference / universal reference / pointer /
//!    by-value);
//! 3. qualifier arithmetic and reference collapsing on the type tree.
//!
//! `auto` reuses the template table wholesale, diverging only on braced
//! initializers. The decltype modes never deduce; they read a type off
//! the expression descriptor.

use dedu_types::{CppType, CvQualifiers, RefKind, ValueCategory};

use crate::{
    common_type, ArgumentDescriptor, ArgumentKind, DeducedResult, DeductionError,
    DeductionErrorKind, ExprForm, ExpressionDescriptor, ParameterPattern, PatternShape,
};

/// Where an `auto` appears. Braced-initializer deduction applies only to
/// `auto` variables; `auto` as a function return type or lambda parameter
/// uses template rules instead (the C++14 carve-out).
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AutoPlacement {
    /// `auto x = …;` — ordinary variable initializer.
    #[default]
    Initializer,
    /// `auto f() { return …; }` — deduced return type.
    FunctionReturn,
    /// `[](auto param) { … }` — generic lambda parameter.
    LambdaParameter,
}

impl AutoPlacement {
    /// Whether this placement falls back to template deduction rules.
    #[inline]
    pub const fn uses_template_rules(self) -> bool {
        !matches!(self, Self::Initializer)
    }
}

/// A parameter pattern for `auto` deduction, with its placement.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct AutoPattern {
    /// The declared shape (`auto`, `const auto&`, `auto&&`, …), expressed
    /// over `T`.
    pub pattern: ParameterPattern,
    /// Where the `auto` appears.
    pub placement: AutoPlacement,
}

impl AutoPattern {
    /// An `auto` variable pattern.
    pub fn new(pattern: ParameterPattern) -> Self {
        AutoPattern {
            pattern,
            placement: AutoPlacement::Initializer,
        }
    }

    /// The same pattern at an explicit placement.
    pub fn at(pattern: ParameterPattern, placement: AutoPlacement) -> Self {
        AutoPattern { pattern, placement }
    }
}

/// Template argument deduction for one parameter/argument pair.
#[tracing::instrument(level = "trace")]
pub fn deduce_template_type(
    pattern: &ParameterPattern,
    arg: &ArgumentDescriptor,
) -> DeducedResult {
    if let Some(early) = check_special_forms(pattern, arg) {
        return early;
    }

    let (template_param, param_type) = match pattern.shape() {
        PatternShape::LvalueRef => {
            deduce_against_reference(pattern.quals(), RefKind::Lvalue, arg.ty.clone())
        }
        PatternShape::RvalueRef => {
            deduce_against_reference(pattern.quals(), RefKind::Rvalue, arg.ty.clone())
        }
        PatternShape::UniversalRef => deduce_against_universal_reference(arg),
        PatternShape::Pointer(pointee_pattern) => {
            deduce_against_pointer(pointee_pattern, arg.ty.clone())
        }
        PatternShape::ByValue => {
            let t = deduce_by_value(arg.ty.clone());
            (t.clone(), t)
        }
        PatternShape::InitializerList => deduce_against_initializer_list(arg.ty.clone()),
    };

    tracing::debug!(%template_param, %param_type, "deduced");
    DeducedResult::resolved(param_type, Some(template_param))
}

/// `auto` type deduction: the template table, except braced initializers
/// deduce `std::initializer_list<T>` for `auto` variables.
#[tracing::instrument(level = "trace")]
pub fn deduce_auto_type(auto_pattern: &AutoPattern, arg: &ArgumentDescriptor) -> DeducedResult {
    if let ArgumentKind::BracedInit(elements) = &arg.kind {
        if !auto_pattern.placement.uses_template_rules() {
            // The braces become a real initializer_list value; the rest of
            // the pattern (`auto`, `const auto&`, …) deduces against it
            // with the ordinary rules.
            let list = ArgumentDescriptor::rvalue(CppType::initializer_list_of(common_type(
                elements,
            )));
            return deduce_template_type(&auto_pattern.pattern, &list);
        }
        tracing::debug!(placement = ?auto_pattern.placement, "braces fall back to template rules");
    }
    deduce_template_type(&auto_pattern.pattern, arg)
}

/// `decltype(expr)`: report the declared type of a name, `T&` for any
/// other lvalue expression, `T&&` for xvalues, `T` for prvalues.
#[tracing::instrument(level = "trace")]
pub fn deduce_decltype(expr: &ExpressionDescriptor) -> DeducedResult {
    let reported = match (expr.form, expr.category) {
        // A bare name echoes its declared type, qualifiers and all.
        (ExprForm::Name, _) => expr.ty.clone(),
        (_, ValueCategory::Lvalue) => expr
            .ty
            .clone()
            .stripped_of_reference()
            .referenced(RefKind::Lvalue),
        (_, ValueCategory::Xvalue) => expr
            .ty
            .clone()
            .stripped_of_reference()
            .referenced(RefKind::Rvalue),
        (_, ValueCategory::Prvalue) => expr.ty.clone().stripped_of_reference().without_top_quals(),
    };
    DeducedResult::resolved(reported, None)
}

/// `decltype(auto)`: deduction from an initializer or return expression
/// using the decltype rules. Wrapping a returned name in parentheses
/// turns `T` into `T&`, exactly as `deduce_decltype` reports it.
#[tracing::instrument(level = "trace")]
pub fn deduce_decltype_auto(is_return: bool, expr: &ExpressionDescriptor) -> DeducedResult {
    tracing::debug!(is_return, "decltype(auto) delegates to decltype");
    deduce_decltype(expr)
}

/// The failure table, checked before any shape dispatch.
fn check_special_forms(
    pattern: &ParameterPattern,
    arg: &ArgumentDescriptor,
) -> Option<DeducedResult> {
    let fail = |kind: DeductionErrorKind| {
        Some(DeducedResult::failed(DeductionError::new(
            kind,
            pattern.to_string(),
            arg.describe(),
        )))
    };

    match &arg.kind {
        ArgumentKind::BracedInit(elements) => {
            if matches!(pattern.shape(), PatternShape::InitializerList) {
                let t = common_type(elements);
                let param = CppType::initializer_list_of(t.clone());
                return Some(DeducedResult::resolved(param, Some(t)));
            }
            fail(DeductionErrorKind::BracedInitializerNotDeducible)
        }
        ArgumentKind::OverloadSet { target: None } => {
            fail(DeductionErrorKind::AmbiguousOverloadedName)
        }
        ArgumentKind::StaticConstMember { defined: false }
            if pattern.requires_reference_or_address() =>
        {
            fail(DeductionErrorKind::UndefinedStaticConstMember)
        }
        ArgumentKind::Bitfield if pattern.forbids_bitfield() => {
            fail(DeductionErrorKind::BitfieldReferenceBindingForbidden)
        }
        _ => None,
    }
}

/// Case 1 (reference, non-universal): strip the argument's reference-ness,
/// pattern-match with the pattern's own qualifiers absorbed out of `T`.
fn deduce_against_reference(
    pattern_quals: CvQualifiers,
    kind: RefKind,
    arg_ty: CppType,
) -> (CppType, CppType) {
    let stripped = arg_ty.stripped_of_reference();
    let t = subtract_quals(stripped.clone(), pattern_quals);
    let param = stripped.with_quals(pattern_quals).referenced(kind);
    (t, param)
}

/// Case 2 (universal reference): lvalues deduce `T` as an lvalue
/// reference — the only place deduction ever produces a reference for
/// `T` — and reference collapsing then makes the parameter an lvalue
/// reference too. Rvalues use the by-value rules and bind `T&&`.
fn deduce_against_universal_reference(arg: &ArgumentDescriptor) -> (CppType, CppType) {
    if arg.category.is_lvalue() {
        let t = arg
            .ty
            .clone()
            .stripped_of_reference()
            .referenced(RefKind::Lvalue);
        let param = t.clone().referenced(RefKind::Rvalue);
        (t, param)
    } else {
        let t = deduce_by_value(arg.ty.clone());
        let param = t.clone().referenced(RefKind::Rvalue);
        (t, param)
    }
}

/// Case 1, pointer form: match the pointee position, recursing through
/// nested pointer patterns. A non-pointer argument (after decay) is
/// treated as the pointee itself so the procedure stays total.
fn deduce_against_pointer(
    pointee_pattern: &ParameterPattern,
    arg_ty: CppType,
) -> (CppType, CppType) {
    let decayed = arg_ty.stripped_of_reference().decayed();
    let pointee = match decayed {
        CppType::Pointer { pointee, .. } => *pointee,
        other => other,
    };
    let (t, deduced_pointee) = match_pointee(pointee_pattern, pointee);
    (t, CppType::pointer_to(deduced_pointee))
}

fn match_pointee(pattern: &ParameterPattern, pointee: CppType) -> (CppType, CppType) {
    match pattern.shape() {
        PatternShape::Pointer(deeper) => {
            let inner = match pointee {
                CppType::Pointer { pointee: inner, .. } => *inner,
                other => other,
            };
            let (t, deduced) = match_pointee(deeper, inner);
            (t, CppType::pointer_to(deduced))
        }
        _ => {
            let t = subtract_quals(pointee.clone(), pattern.quals());
            let deduced = pointee.with_quals(pattern.quals());
            (t, deduced)
        }
    }
}

/// Case 3 (by value): references are ignored, arrays and functions decay,
/// and the copy sheds top-level cv. Decay runs first so qualification that
/// moves below a pointer (`const char[13]` → `const char*`) survives.
fn deduce_by_value(arg_ty: CppType) -> CppType {
    arg_ty
        .stripped_of_reference()
        .decayed()
        .without_top_quals()
}

/// `std::initializer_list<T>` pattern against an already-typed
/// initializer_list argument (braces are handled earlier).
fn deduce_against_initializer_list(arg_ty: CppType) -> (CppType, CppType) {
    match arg_ty.stripped_of_reference() {
        CppType::InitializerList { element, .. } => {
            let t = *element;
            (t.clone(), CppType::initializer_list_of(t))
        }
        other => {
            let t = deduce_by_value(other);
            (t.clone(), t)
        }
    }
}

/// Drop from `ty`'s top level exactly the qualifiers the pattern already
/// supplies.
fn subtract_quals(ty: CppType, pattern_quals: CvQualifiers) -> CppType {
    let kept = ty.top_quals() - pattern_quals;
    ty.without_top_quals().with_quals(kept)
}

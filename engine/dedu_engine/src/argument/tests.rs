use dedu_types::CvQualifiers;
use pretty_assertions::assert_eq;
use smallvec::smallvec;

use super::*;

#[test]
fn plain_constructors_record_category() {
    let int = CppType::named("int");
    assert_eq!(ArgumentDescriptor::lvalue(int.clone()).category, ValueCategory::Lvalue);
    assert_eq!(ArgumentDescriptor::rvalue(int.clone()).category, ValueCategory::Prvalue);
    assert_eq!(ArgumentDescriptor::xvalue(int).category, ValueCategory::Xvalue);
}

#[test]
fn braced_records_initializer_list_type() {
    let arg = ArgumentDescriptor::braced(smallvec![
        CppType::named("int"),
        CppType::named("int"),
        CppType::named("int"),
    ]);
    assert_eq!(arg.ty, CppType::initializer_list_of(CppType::named("int")));
    assert_eq!(arg.category, ValueCategory::Prvalue);
}

#[test]
fn common_type_of_uniform_elements() {
    let elems = [CppType::named("int"), CppType::named("int")];
    assert_eq!(common_type(&elems), CppType::named("int"));
}

#[test]
fn common_type_drops_top_level_cv() {
    let elems = [
        CppType::named("int").with_quals(CvQualifiers::CONST),
        CppType::named("int"),
    ];
    assert_eq!(common_type(&elems), CppType::named("int"));
}

#[test]
fn common_type_of_empty_list_falls_back_to_int() {
    assert_eq!(common_type(&[]), CppType::named("int"));
}

#[test]
fn describe_renders_special_forms() {
    let braced = ArgumentDescriptor::braced(smallvec![CppType::named("int")]);
    assert_eq!(braced.describe(), "{int}");

    assert_eq!(
        ArgumentDescriptor::unresolved_overload().describe(),
        "<overloaded function>"
    );
    assert_eq!(
        ArgumentDescriptor::bitfield(CppType::named("unsigned")).describe(),
        "bitfield of type unsigned"
    );
    assert_eq!(
        ArgumentDescriptor::lvalue(CppType::named("int").with_quals(CvQualifiers::CONST))
            .describe(),
        "lvalue const int"
    );
}

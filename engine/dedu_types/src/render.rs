//! C++ spellings for `CppType`.
//!
//! Declarator rendering works inside-out: the declarator string (`*`,
//! `(&)[13]`, `(*)(int, double)`) is accumulated while walking toward the
//! base type, which is printed last. Pointers and references into arrays
//! or functions need the extra parentheses, which is the whole reason this
//! lives in its own module instead of a ten-line `Display` impl.

use std::fmt;

use crate::{CppType, CvQualifiers};

impl fmt::Display for CppType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self, String::new()))
    }
}

/// Suffix spelling for qualifiers on a pointer itself (`int* const`).
fn pointer_quals_suffix(quals: CvQualifiers) -> &'static str {
    match (quals.is_const(), quals.is_volatile()) {
        (true, true) => " const volatile",
        (true, false) => " const",
        (false, true) => " volatile",
        (false, false) => "",
    }
}

/// Whether a declarator for `inner` must be parenthesized when applied to
/// an array or function type (`char (*)[13]`, `void (&)(int, double)`).
fn needs_parens(ty: &CppType) -> bool {
    matches!(ty, CppType::Array { .. } | CppType::Function { .. })
}

fn render(ty: &CppType, declarator: String) -> String {
    match ty {
        CppType::Named { name, quals } => join_base(&format!("{}{name}", quals.prefix()), &declarator),
        CppType::InitializerList { element, quals } => join_base(
            &format!(
                "{}std::initializer_list<{}>",
                quals.prefix(),
                render(element, String::new())
            ),
            &declarator,
        ),
        CppType::Pointer { pointee, quals } => {
            let decl = format!("*{}{declarator}", pointer_quals_suffix(*quals));
            let decl = if needs_parens(pointee) {
                format!("({decl})")
            } else {
                decl
            };
            render(pointee, decl)
        }
        CppType::LvalueRef(inner) => {
            let decl = format!("&{declarator}");
            let decl = if needs_parens(inner) {
                format!("({decl})")
            } else {
                decl
            };
            render(inner, decl)
        }
        CppType::RvalueRef(inner) => {
            let decl = format!("&&{declarator}");
            let decl = if needs_parens(inner) {
                format!("({decl})")
            } else {
                decl
            };
            render(inner, decl)
        }
        CppType::Array { element, len } => {
            let bound = match len {
                Some(n) => format!("[{n}]"),
                None => "[]".to_string(),
            };
            render(element, format!("{declarator}{bound}"))
        }
        CppType::Function { params, ret } => {
            let list = params
                .iter()
                .map(|p| render(p, String::new()))
                .collect::<Vec<_>>()
                .join(", ");
            render(ret, format!("{declarator}({list})"))
        }
    }
}

/// Attach a declarator to its base type: `&`, `*`, and `[` hug the base
/// (`int&`, `char[13]`), parenthesized declarators get a space
/// (`void (*)(int, double)`).
fn join_base(base: &str, declarator: &str) -> String {
    if declarator.is_empty() {
        base.to_string()
    } else if declarator.starts_with('(') {
        format!("{base} {declarator}")
    } else {
        format!("{base}{declarator}")
    }
}

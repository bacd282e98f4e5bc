//! Argument descriptors: the static facts about an expression at a
//! deduction site.
//!
//! A descriptor records everything deduction can observe about an
//! argument: its declared type (which carries cv-qualifiers and
//! array/function-ness), its value category, and whether it is one of the
//! special forms with their own rules (braced initializers, overloaded
//! names, in-class-initialized `static const` members, bitfields).
//! Descriptors are immutable and built fresh per query.

use dedu_types::{CppType, ValueCategory};
use smallvec::SmallVec;

/// Element types of a braced initializer; small lists stay inline.
pub type BracedElements = SmallVec<[CppType; 4]>;

/// The special-form classification of an argument expression.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ArgumentKind {
    /// An ordinary expression: the declared type tells the whole story.
    Plain,

    /// A braced initializer `{a, b, c}` — has no type of its own, only
    /// element types.
    BracedInit(BracedElements),

    /// An overloaded function name or function-template name. `target`
    /// is the destination signature when an annotation disambiguates
    /// which overload is meant; `None` means the name is ambiguous.
    OverloadSet {
        /// The resolved signature, if any.
        target: Option<CppType>,
    },

    /// An integral `static const` data member initialized in-class.
    /// Without an out-of-line definition it has no storage, so nothing
    /// can bind a reference to it or take its address.
    StaticConstMember {
        /// Whether an out-of-line definition exists.
        defined: bool,
    },

    /// A bitfield member: no addressable storage of its own.
    Bitfield,
}

/// The static facts about an expression being passed to a deduction
/// context.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ArgumentDescriptor {
    /// The declared type of the expression.
    pub ty: CppType,
    /// The expression's value category.
    pub category: ValueCategory,
    /// Special-form classification.
    pub kind: ArgumentKind,
}

impl ArgumentDescriptor {
    /// An ordinary lvalue of the given declared type.
    pub fn lvalue(ty: CppType) -> Self {
        ArgumentDescriptor {
            ty,
            category: ValueCategory::Lvalue,
            kind: ArgumentKind::Plain,
        }
    }

    /// An ordinary prvalue (temporary) of the given type.
    pub fn rvalue(ty: CppType) -> Self {
        ArgumentDescriptor {
            ty,
            category: ValueCategory::Prvalue,
            kind: ArgumentKind::Plain,
        }
    }

    /// An xvalue (e.g. the result of `std::move`) of the given type.
    pub fn xvalue(ty: CppType) -> Self {
        ArgumentDescriptor {
            ty,
            category: ValueCategory::Xvalue,
            kind: ArgumentKind::Plain,
        }
    }

    /// A braced initializer with the given element types. The recorded
    /// declared type is the `std::initializer_list` the elements would
    /// form; whether deduction may use it depends on the mode.
    pub fn braced(elements: BracedElements) -> Self {
        let ty = CppType::initializer_list_of(common_type(&elements));
        ArgumentDescriptor {
            ty,
            category: ValueCategory::Prvalue,
            kind: ArgumentKind::BracedInit(elements),
        }
    }

    /// An overloaded function name with no disambiguating annotation.
    pub fn unresolved_overload() -> Self {
        ArgumentDescriptor {
            ty: CppType::named("<overloaded function>"),
            category: ValueCategory::Lvalue,
            kind: ArgumentKind::OverloadSet { target: None },
        }
    }

    /// An overloaded function name resolved to one signature.
    pub fn resolved_overload(signature: CppType) -> Self {
        ArgumentDescriptor {
            ty: signature.clone(),
            category: ValueCategory::Lvalue,
            kind: ArgumentKind::OverloadSet {
                target: Some(signature),
            },
        }
    }

    /// An in-class-initialized integral `static const` member.
    pub fn static_const_member(ty: CppType, defined: bool) -> Self {
        ArgumentDescriptor {
            ty,
            category: ValueCategory::Lvalue,
            kind: ArgumentKind::StaticConstMember { defined },
        }
    }

    /// A bitfield member of the given underlying type.
    pub fn bitfield(ty: CppType) -> Self {
        ArgumentDescriptor {
            ty,
            category: ValueCategory::Lvalue,
            kind: ArgumentKind::Bitfield,
        }
    }

    /// Render the argument for error messages.
    pub fn describe(&self) -> String {
        match &self.kind {
            ArgumentKind::BracedInit(elements) => {
                let list = elements
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{{{list}}}")
            }
            ArgumentKind::OverloadSet { target: None } => "<overloaded function>".to_string(),
            ArgumentKind::StaticConstMember { .. } => {
                format!("static const member of type {}", self.ty)
            }
            ArgumentKind::Bitfield => format!("bitfield of type {}", self.ty),
            _ => format!("{} {}", self.category, self.ty),
        }
    }
}

/// The common type of a braced initializer's elements: all elements must
/// agree once top-level cv-qualifiers are dropped. Heterogeneous or empty
/// lists fall back to the first element (or `int`), since `auto` braced
/// deduction is specified to always produce a result.
pub fn common_type(elements: &[CppType]) -> CppType {
    let mut iter = elements.iter();
    let Some(first) = iter.next() else {
        return CppType::named("int");
    };
    let first = first.clone().without_top_quals();
    for element in iter {
        if element.clone().without_top_quals() != first {
            tracing::debug!(?first, ?element, "heterogeneous braced initializer");
            break;
        }
    }
    first
}

#[cfg(test)]
mod tests;

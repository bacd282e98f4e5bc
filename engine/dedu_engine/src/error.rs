//! Structured deduction failures.
//!
//! Every documented way deduction can fail is an enumerated kind with a
//! stable short code. Failures are values carried inside
//! [`DeducedResult`](crate::DeducedResult); the engine never panics and
//! callers branch on the error's presence.

use thiserror::Error;

/// The enumerated ways a deduction query can fail.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeductionErrorKind {
    /// Template deduction cannot infer an element type for `{…}`.
    #[error("cannot deduce a template parameter from a braced initializer")]
    BracedInitializerNotDeducible,

    /// An overloaded (or template) function name with no annotation
    /// selecting which overload is meant.
    #[error("overloaded function name is ambiguous without a target signature")]
    AmbiguousOverloadedName,

    /// An in-class-initialized integral `static const` member has no
    /// storage; references and addresses need a definition.
    #[error("static const member has no out-of-line definition to bind to")]
    UndefinedStaticConstMember,

    /// Bitfields have no addressable storage; only `const T&` (via a
    /// temporary) or by-value can accept one.
    #[error("cannot bind a non-const reference or pointer to a bitfield")]
    BitfieldReferenceBindingForbidden,
}

impl DeductionErrorKind {
    /// Stable short code, usable with `dedu explain`.
    pub const fn code(self) -> &'static str {
        match self {
            Self::BracedInitializerNotDeducible => "D0001",
            Self::AmbiguousOverloadedName => "D0002",
            Self::UndefinedStaticConstMember => "D0003",
            Self::BitfieldReferenceBindingForbidden => "D0004",
        }
    }

    /// Long-form explanation of the failure and its fix.
    pub const fn explain(self) -> &'static str {
        match self {
            Self::BracedInitializerNotDeducible => {
                "A braced initializer like {11, 23, 9} has no type of its own, so \
                 template argument deduction cannot infer T from it. Only a parameter \
                 declared as std::initializer_list<T> can deduce through braces. \
                 (auto variable deduction is the exception: it deduces \
                 std::initializer_list<T> directly, unless the auto appears as a \
                 function return type or lambda parameter, where template rules apply.)"
            }
            Self::AmbiguousOverloadedName => {
                "Passing the name of an overloaded function (or function template) \
                 gives deduction a set of possible types, not one. Annotate the call \
                 with the intended signature, e.g. via a cast or a typed function \
                 pointer, to select one overload."
            }
            Self::UndefinedStaticConstMember => {
                "An integral static const data member initialized in-class has no \
                 storage unless an out-of-line definition exists. Deducing against a \
                 reference or pointer pattern needs that storage. Add a definition, \
                 or pass the member by value."
            }
            Self::BitfieldReferenceBindingForbidden => {
                "Bitfields are not addressable, so non-const references and pointers \
                 cannot bind to them. Bind a const reference (which copies into a \
                 temporary) or pass by value."
            }
        }
    }

    /// All kinds, for `explain` lookup tables.
    pub const ALL: [Self; 4] = [
        Self::BracedInitializerNotDeducible,
        Self::AmbiguousOverloadedName,
        Self::UndefinedStaticConstMember,
        Self::BitfieldReferenceBindingForbidden,
    ];
}

/// A deduction failure: the kind plus the offending pattern/argument
/// pairing, rendered for presentation.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Error)]
#[error("{kind} (pattern `{pattern}`, argument `{argument}`)")]
pub struct DeductionError {
    /// What went wrong.
    pub kind: DeductionErrorKind,
    /// The pattern side of the offending pairing, as spelled.
    pub pattern: String,
    /// The argument side of the offending pairing, as spelled.
    pub argument: String,
}

impl DeductionError {
    /// Build an error for a pattern/argument pairing.
    pub fn new(
        kind: DeductionErrorKind,
        pattern: impl Into<String>,
        argument: impl Into<String>,
    ) -> Self {
        DeductionError {
            kind,
            pattern: pattern.into(),
            argument: argument.into(),
        }
    }
}

#[cfg(test)]
mod tests;

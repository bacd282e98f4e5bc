//! Expression descriptors for `decltype`.
//!
//! `decltype` distinguishes a *name* from every other expression: a bare
//! name echoes its declared type, while any other lvalue expression —
//! including a parenthesized name — reports `T&`. The descriptor records
//! the syntactic form alongside the type and value category so the rule
//! table can make that distinction.

use dedu_types::{CppType, ValueCategory};

/// The syntactic form of a `decltype` operand.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExprForm {
    /// A bare, unparenthesized name (`decltype(x)`).
    Name,
    /// A name wrapped in parentheses (`decltype((x))`) — the canonical
    /// surprise: this is an lvalue expression, not a name.
    Parenthesized,
    /// Any other expression: a call, a member access, an arithmetic
    /// expression.
    Compound,
}

impl ExprForm {
    /// Whether this form is a bare name.
    #[inline]
    pub const fn is_name(self) -> bool {
        matches!(self, Self::Name)
    }
}

/// The facts `decltype` consults about its operand.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ExpressionDescriptor {
    /// The declared type of the name, or the value type of the expression.
    pub ty: CppType,
    /// Syntactic form of the operand.
    pub form: ExprForm,
    /// Value category of the operand expression.
    pub category: ValueCategory,
}

impl ExpressionDescriptor {
    /// A bare name of the given declared type. Names are lvalues.
    pub fn name(ty: CppType) -> Self {
        ExpressionDescriptor {
            ty,
            form: ExprForm::Name,
            category: ValueCategory::Lvalue,
        }
    }

    /// A parenthesized name: same type, but now an lvalue *expression*.
    pub fn parenthesized_name(ty: CppType) -> Self {
        ExpressionDescriptor {
            ty,
            form: ExprForm::Parenthesized,
            category: ValueCategory::Lvalue,
        }
    }

    /// A general expression with an explicit value category.
    pub fn compound(ty: CppType, category: ValueCategory) -> Self {
        ExpressionDescriptor {
            ty,
            form: ExprForm::Compound,
            category,
        }
    }
}

#[cfg(test)]
mod tests;

//! Value categories of C++ expressions.
//!
//! Deduction only ever asks two questions of an expression: is it an
//! lvalue (universal-reference special case), and for `decltype`, which of
//! the three categories it falls in. The full three-way split is kept
//! because `decltype` distinguishes xvalues (`T&&`) from prvalues (`T`).

/// Value category of an argument or operand expression.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueCategory {
    /// Has identity and persists: a name, a dereference, a member of an
    /// lvalue.
    #[default]
    Lvalue,

    /// Has identity but may be moved from: the result of `std::move`, a
    /// function returning `T&&`.
    Xvalue,

    /// A pure temporary: a literal, a function returning `T` by value.
    Prvalue,
}

impl ValueCategory {
    /// Check if this is an lvalue.
    #[inline]
    pub const fn is_lvalue(self) -> bool {
        matches!(self, Self::Lvalue)
    }

    /// Check if this is an rvalue (xvalue or prvalue). This is the split
    /// template deduction cares about.
    #[inline]
    pub const fn is_rvalue(self) -> bool {
        matches!(self, Self::Xvalue | Self::Prvalue)
    }

    /// Check if this is a glvalue (lvalue or xvalue): has identity.
    #[inline]
    pub const fn is_glvalue(self) -> bool {
        matches!(self, Self::Lvalue | Self::Xvalue)
    }

    /// Get a human-readable name for this category.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lvalue => "lvalue",
            Self::Xvalue => "xvalue",
            Self::Prvalue => "prvalue",
        }
    }
}

impl std::fmt::Display for ValueCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests;

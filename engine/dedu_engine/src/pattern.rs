//! Parameter patterns: the declared shape of the thing being deduced.
//!
//! A pattern is what the programmer wrote to the left of the argument:
//! `T`, `T&`, `const T&`, `T&&`, `T*`, `std::initializer_list<T>`. The one
//! non-obvious rule lives here: unqualified `T&&` is a *universal*
//! reference only when the surrounding mode actually performs deduction.
//! The same spelling under `decltype` is a plain rvalue reference.
//!
//! That rule is enforced structurally: `PatternShape::UniversalRef` can
//! only be produced by [`ParameterPattern::rvalue_ref_syntax`], which
//! consults both the written qualifiers and the [`DeductionMode`]. The
//! fields of `ParameterPattern` are private so no other path exists.

use dedu_types::CvQualifiers;

use crate::DeductionMode;

/// The structural category of a parameter pattern.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PatternShape {
    /// `T` — by value.
    ByValue,
    /// `T&` / `const T&`.
    LvalueRef,
    /// Qualified `T&&` (e.g. `const T&&`), or unqualified `T&&` in a
    /// non-deducing context. Never universal.
    RvalueRef,
    /// Unqualified `T&&` (or `auto&&`) where deduction is performed.
    UniversalRef,
    /// `T*` / `const T*` / `T**` — the inner pattern describes the
    /// pointee position.
    Pointer(Box<ParameterPattern>),
    /// `std::initializer_list<T>`.
    InitializerList,
}

/// A parameter pattern: a shape plus the cv-qualifiers written directly
/// on `T` (`const T&` carries `CONST`; the `&` itself is the shape).
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterPattern {
    shape: PatternShape,
    quals: CvQualifiers,
}

impl ParameterPattern {
    /// `T` — by-value pattern. Qualifiers written on a by-value parameter
    /// are ignored by deduction, so none are accepted here.
    pub fn by_value() -> Self {
        ParameterPattern {
            shape: PatternShape::ByValue,
            quals: CvQualifiers::NONE,
        }
    }

    /// `T&` / `const T&` / `volatile T&`.
    pub fn lvalue_ref(quals: CvQualifiers) -> Self {
        ParameterPattern {
            shape: PatternShape::LvalueRef,
            quals,
        }
    }

    /// The pattern for `T&&` syntax under a given mode. This is the only
    /// constructor that can produce a universal reference: unqualified
    /// `T&&` where the mode deduces. `const T&&`, or `T&&` under
    /// `decltype`, is an ordinary rvalue reference.
    pub fn rvalue_ref_syntax(quals: CvQualifiers, mode: DeductionMode) -> Self {
        let shape = if quals.is_empty() && mode.performs_deduction() {
            PatternShape::UniversalRef
        } else {
            PatternShape::RvalueRef
        };
        ParameterPattern { shape, quals }
    }

    /// `T*` and friends: a pointer whose pointee position is described by
    /// `pointee` (itself a pattern, so `const T*` and `T**` compose).
    pub fn pointer_to(pointee: ParameterPattern) -> Self {
        ParameterPattern {
            shape: PatternShape::Pointer(Box::new(pointee)),
            quals: CvQualifiers::NONE,
        }
    }

    /// The innermost `T` position of a pointer pattern, with qualifiers.
    pub fn pointee(quals: CvQualifiers) -> Self {
        ParameterPattern {
            shape: PatternShape::ByValue,
            quals,
        }
    }

    /// `std::initializer_list<T>`.
    pub fn initializer_list() -> Self {
        ParameterPattern {
            shape: PatternShape::InitializerList,
            quals: CvQualifiers::NONE,
        }
    }

    /// The structural shape.
    #[inline]
    pub fn shape(&self) -> &PatternShape {
        &self.shape
    }

    /// The cv-qualifiers written on `T` in this pattern.
    #[inline]
    pub fn quals(&self) -> CvQualifiers {
        self.quals
    }

    /// Whether deducing against this pattern binds a reference to, or
    /// takes the address of, the argument. Such patterns require the
    /// argument to have a real memory location.
    pub fn requires_reference_or_address(&self) -> bool {
        matches!(
            self.shape,
            PatternShape::LvalueRef
                | PatternShape::RvalueRef
                | PatternShape::UniversalRef
                | PatternShape::Pointer(_)
        )
    }

    /// Whether deducing against this pattern binds the argument in a way
    /// a bitfield cannot satisfy. `const T&` is fine (it binds to a
    /// temporary copy of the bitfield); everything else that references
    /// or addresses the argument is not.
    pub fn forbids_bitfield(&self) -> bool {
        match self.shape {
            PatternShape::LvalueRef => !self.quals.is_const(),
            PatternShape::RvalueRef | PatternShape::UniversalRef | PatternShape::Pointer(_) => {
                true
            }
            PatternShape::ByValue | PatternShape::InitializerList => false,
        }
    }
}

impl std::fmt::Display for ParameterPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.shape {
            PatternShape::ByValue => write!(f, "{}T", self.quals.prefix()),
            PatternShape::LvalueRef => write!(f, "{}T&", self.quals.prefix()),
            PatternShape::RvalueRef | PatternShape::UniversalRef => {
                write!(f, "{}T&&", self.quals.prefix())
            }
            PatternShape::Pointer(pointee) => write!(f, "{pointee}*"),
            PatternShape::InitializerList => write!(f, "std::initializer_list<T>"),
        }
    }
}

#[cfg(test)]
mod tests;

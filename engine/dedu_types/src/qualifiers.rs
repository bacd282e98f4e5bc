//! cv-qualifier sets.
//!
//! `CvQualifiers` is a two-bit flag set computed into every `CppType`
//! level, enabling qualifier arithmetic (absorb, strip, merge) without
//! re-walking the type tree.

use bitflags::bitflags;

bitflags! {
    /// The `const` / `volatile` qualifiers attached to one level of a type.
    ///
    /// Qualifier arithmetic is set arithmetic: pattern absorption is set
    /// difference, reference binding is set union.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct CvQualifiers: u8 {
        /// The `const` qualifier.
        const CONST = 1 << 0;
        /// The `volatile` qualifier.
        const VOLATILE = 1 << 1;
    }
}

impl CvQualifiers {
    /// The unqualified set.
    pub const NONE: Self = Self::empty();

    /// Check for the `const` qualifier.
    #[inline]
    pub const fn is_const(self) -> bool {
        self.contains(Self::CONST)
    }

    /// Check for the `volatile` qualifier.
    #[inline]
    pub const fn is_volatile(self) -> bool {
        self.contains(Self::VOLATILE)
    }

    /// The C++ spelling, with a trailing space when non-empty so it can
    /// prefix a type name directly (`"const "` + `"int"`).
    pub fn prefix(self) -> &'static str {
        match (self.is_const(), self.is_volatile()) {
            (true, true) => "const volatile ",
            (true, false) => "const ",
            (false, true) => "volatile ",
            (false, false) => "",
        }
    }
}

impl std::fmt::Display for CvQualifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.prefix().trim_end())
    }
}

#[cfg(test)]
mod tests;

//! Deduction modes.

/// Which rule table a deduction query runs under.
///
/// The mode matters in two places: whether unqualified `T&&` syntax forms
/// a universal reference (only where deduction is actually performed), and
/// how braced initializers are treated (`Auto` deduces
/// `std::initializer_list`, `Template` fails).
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeductionMode {
    /// Template argument deduction at a call site.
    Template,
    /// `auto` variable deduction.
    Auto,
    /// `decltype(expr)` — no deduction is performed, the type is read off.
    Decltype,
    /// `decltype(auto)` — deduction using the decltype rules.
    DecltypeAuto,
}

impl DeductionMode {
    /// Whether this mode performs type deduction. Unqualified `T&&` is a
    /// universal reference only under a mode where this is true.
    #[inline]
    pub const fn performs_deduction(self) -> bool {
        matches!(self, Self::Template | Self::Auto)
    }

    /// Get a human-readable name for this mode.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Template => "template",
            Self::Auto => "auto",
            Self::Decltype => "decltype",
            Self::DecltypeAuto => "decltype(auto)",
        }
    }
}

impl std::fmt::Display for DeductionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

//! Terminal results of a deduction query.

use dedu_types::CppType;

use crate::DeductionError;

/// What a deduction query produced: either the deduced type(s) or a
/// structured error, never both.
///
/// `template_param` is present for the deducing modes (the `T` of the
/// template, the `auto` of the declaration) and absent for the decltype
/// modes, which read a type off without deducing anything.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct DeducedResult {
    /// The full deduced parameter/variable type (`const int&`).
    pub param_type: Option<CppType>,
    /// The deduced template parameter / `auto` (`const int`).
    pub template_param: Option<CppType>,
    /// The failure, when deduction could not produce a type.
    pub error: Option<DeductionError>,
}

impl DeducedResult {
    /// A successful deduction.
    pub fn resolved(param_type: CppType, template_param: Option<CppType>) -> Self {
        DeducedResult {
            param_type: Some(param_type),
            template_param,
            error: None,
        }
    }

    /// A failed deduction.
    pub fn failed(error: DeductionError) -> Self {
        DeducedResult {
            param_type: None,
            template_param: None,
            error: Some(error),
        }
    }

    /// Whether deduction produced a type.
    #[inline]
    pub const fn is_resolved(&self) -> bool {
        self.error.is_none()
    }
}

//! The recursive C++ type tree.
//!
//! `CppType` is the external, boxed representation: small enough to clone
//! freely per query, structural equality, no interning. Each level carries
//! its own cv-qualifiers where C++ allows them (named types, pointers,
//! array elements); references and function types are never cv-qualified.
//!
//! The operations here are exactly the type surgery deduction performs:
//! stripping reference-ness, stripping or merging top-level qualifiers,
//! array/function decay, and reference collapsing.

use crate::CvQualifiers;

/// Which kind of reference to build.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RefKind {
    /// `T&`
    Lvalue,
    /// `T&&`
    Rvalue,
}

/// A C++ type, as deduction sees it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CppType {
    /// A (possibly qualified) named type: `int`, `const Widget`.
    Named {
        /// The type name, as spelled.
        name: String,
        /// cv-qualifiers on this type.
        quals: CvQualifiers,
    },

    /// A pointer: `const int*`, `int* const`.
    Pointer {
        /// The pointed-to type (carries its own qualifiers).
        pointee: Box<CppType>,
        /// cv-qualifiers on the pointer itself (`int* const`).
        quals: CvQualifiers,
    },

    /// An lvalue reference: `int&`.
    LvalueRef(Box<CppType>),

    /// An rvalue reference: `int&&`.
    RvalueRef(Box<CppType>),

    /// An array: `const char[13]`. `len` is `None` for unbounded arrays.
    Array {
        /// The element type (cv on an array applies to its elements).
        element: Box<CppType>,
        /// The bound, if declared.
        len: Option<u64>,
    },

    /// A function type: `void(int, double)`.
    Function {
        /// Parameter types.
        params: Box<[CppType]>,
        /// Return type.
        ret: Box<CppType>,
    },

    /// `std::initializer_list<T>`.
    InitializerList {
        /// The element type.
        element: Box<CppType>,
        /// cv-qualifiers on the list itself.
        quals: CvQualifiers,
    },
}

impl CppType {
    /// An unqualified named type.
    pub fn named(name: impl Into<String>) -> Self {
        CppType::Named {
            name: name.into(),
            quals: CvQualifiers::NONE,
        }
    }

    /// A pointer to `pointee`, itself unqualified.
    pub fn pointer_to(pointee: CppType) -> Self {
        CppType::Pointer {
            pointee: Box::new(pointee),
            quals: CvQualifiers::NONE,
        }
    }

    /// An array of `element` with an optional bound.
    pub fn array_of(element: CppType, len: Option<u64>) -> Self {
        CppType::Array {
            element: Box::new(element),
            len,
        }
    }

    /// A function type.
    pub fn function(params: Vec<CppType>, ret: CppType) -> Self {
        CppType::Function {
            params: params.into_boxed_slice(),
            ret: Box::new(ret),
        }
    }

    /// `std::initializer_list<element>`.
    pub fn initializer_list_of(element: CppType) -> Self {
        CppType::InitializerList {
            element: Box::new(element),
            quals: CvQualifiers::NONE,
        }
    }

    /// A reference to `self`, applying the reference-collapsing rule:
    /// `&` wins over `&&`; only `&& + && = &&`.
    pub fn referenced(self, kind: RefKind) -> Self {
        match (kind, self) {
            (_, CppType::LvalueRef(inner)) => CppType::LvalueRef(inner),
            (RefKind::Lvalue, CppType::RvalueRef(inner)) => CppType::LvalueRef(inner),
            (RefKind::Rvalue, CppType::RvalueRef(inner)) => CppType::RvalueRef(inner),
            (RefKind::Lvalue, other) => CppType::LvalueRef(Box::new(other)),
            (RefKind::Rvalue, other) => CppType::RvalueRef(Box::new(other)),
        }
    }

    /// The cv-qualifiers visible at the top level. For arrays this is the
    /// element qualification (cv on an array qualifies its elements);
    /// references and function types are never qualified.
    pub fn top_quals(&self) -> CvQualifiers {
        match self {
            CppType::Named { quals, .. }
            | CppType::Pointer { quals, .. }
            | CppType::InitializerList { quals, .. } => *quals,
            CppType::Array { element, .. } => element.top_quals(),
            CppType::LvalueRef(_) | CppType::RvalueRef(_) | CppType::Function { .. } => {
                CvQualifiers::NONE
            }
        }
    }

    /// `self` with `quals` merged into the top level. A no-op on
    /// references and function types, which cannot be qualified.
    pub fn with_quals(self, quals: CvQualifiers) -> Self {
        match self {
            CppType::Named { name, quals: q } => CppType::Named {
                name,
                quals: q | quals,
            },
            CppType::Pointer { pointee, quals: q } => CppType::Pointer {
                pointee,
                quals: q | quals,
            },
            CppType::Array { element, len } => CppType::Array {
                element: Box::new(element.with_quals(quals)),
                len,
            },
            CppType::InitializerList { element, quals: q } => CppType::InitializerList {
                element,
                quals: q | quals,
            },
            other => other,
        }
    }

    /// `self` with all top-level cv-qualifiers removed. Qualification
    /// reached through a pointer is untouched: `const char*` stays
    /// `const char*`, while `char* const` becomes `char*`.
    pub fn without_top_quals(self) -> Self {
        match self {
            CppType::Named { name, .. } => CppType::Named {
                name,
                quals: CvQualifiers::NONE,
            },
            CppType::Pointer { pointee, .. } => CppType::Pointer {
                pointee,
                quals: CvQualifiers::NONE,
            },
            CppType::Array { element, len } => CppType::Array {
                element: Box::new(element.without_top_quals()),
                len,
            },
            CppType::InitializerList { element, .. } => CppType::InitializerList {
                element,
                quals: CvQualifiers::NONE,
            },
            other => other,
        }
    }

    /// Remove one level of reference-ness, if any.
    pub fn stripped_of_reference(self) -> Self {
        match self {
            CppType::LvalueRef(inner) | CppType::RvalueRef(inner) => *inner,
            other => other,
        }
    }

    /// Array-to-pointer and function-to-pointer decay. Anything else is
    /// returned unchanged.
    pub fn decayed(self) -> Self {
        match self {
            CppType::Array { element, .. } => CppType::Pointer {
                pointee: element,
                quals: CvQualifiers::NONE,
            },
            func @ CppType::Function { .. } => CppType::pointer_to(func),
            other => other,
        }
    }

    /// Check if this is a reference of either kind.
    #[inline]
    pub const fn is_reference(&self) -> bool {
        matches!(self, CppType::LvalueRef(_) | CppType::RvalueRef(_))
    }

    /// Check if this is an lvalue reference.
    #[inline]
    pub const fn is_lvalue_reference(&self) -> bool {
        matches!(self, CppType::LvalueRef(_))
    }

    /// Check if this is an rvalue reference.
    #[inline]
    pub const fn is_rvalue_reference(&self) -> bool {
        matches!(self, CppType::RvalueRef(_))
    }

    /// Check if this is a pointer.
    #[inline]
    pub const fn is_pointer(&self) -> bool {
        matches!(self, CppType::Pointer { .. })
    }

    /// Check if this is an array.
    #[inline]
    pub const fn is_array(&self) -> bool {
        matches!(self, CppType::Array { .. })
    }

    /// Check if this is a function type.
    #[inline]
    pub const fn is_function(&self) -> bool {
        matches!(self, CppType::Function { .. })
    }
}

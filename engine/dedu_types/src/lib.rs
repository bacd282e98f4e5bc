//! C++ type model for the dedu deduction simulator.
//!
//! Represents the static facts a compiler consults during type deduction:
//! cv-qualifiers, value categories, and the recursive type shape of an
//! argument or parameter. All types here are plain values — `Clone`, `Eq`,
//! `Hash` — built fresh per deduction query and discarded afterwards.
//!
//! The model deliberately covers only what deduction can observe. There is
//! no symbol table, no scope, no layout information: just enough structure
//! to express `const char[13]`, `void (*)(int, double)`, reference
//! collapsing, and array/function decay.

mod qualifiers;
mod render;
mod ty;
mod value_category;

pub use qualifiers::CvQualifiers;
pub use ty::{CppType, RefKind};
pub use value_category::ValueCategory;

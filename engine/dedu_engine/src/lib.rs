//! Type-deduction rule tables.
//!
//! Implements the deduction a C++ compiler performs for template call
//! arguments, `auto` initializers, `decltype` operands, and
//! `decltype(auto)`, as an ordered, enumerable decision procedure over
//! value-type inputs. Four pure entry points make up the whole surface:
//!
//! - [`deduce_template_type`] — template argument deduction
//! - [`deduce_auto_type`] — `auto`, including the braced-initializer rule
//! - [`deduce_decltype`] — `decltype` on an expression descriptor
//! - [`deduce_decltype_auto`] — `decltype(auto)`, delegating to the above
//!
//! Every query takes immutable inputs, allocates only transient values,
//! and returns a terminal [`DeducedResult`]. Failures are data
//! ([`DeductionError`]), never panics. There is no shared state anywhere
//! in this crate, so callers may run queries concurrently without
//! coordination.

mod argument;
mod deduce;
mod error;
mod expr;
mod mode;
mod pattern;
mod result;

pub use argument::{common_type, ArgumentDescriptor, ArgumentKind, BracedElements};
pub use deduce::{
    deduce_auto_type, deduce_decltype, deduce_decltype_auto, deduce_template_type, AutoPattern,
    AutoPlacement,
};
pub use error::{DeductionError, DeductionErrorKind};
pub use expr::{ExprForm, ExpressionDescriptor};
pub use mode::DeductionMode;
pub use pattern::{ParameterPattern, PatternShape};
pub use result::DeducedResult;

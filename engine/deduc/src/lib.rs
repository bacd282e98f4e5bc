//! Command-line harness for the deduction engine.
//!
//! Feeds textual deduction queries to `dedu_engine` and prints the
//! deduced types. One query per line:
//!
//! ```text
//! template: const T& <- lvalue const int
//! auto: T <- {int, int, int}
//! decltype: paren const int
//! ```
//!
//! The harness is presentation only: every deduction decision lives in
//! `dedu_engine`, and every query here is parsed into the engine's own
//! descriptor types before evaluation.

pub mod commands;
mod lexer;
mod parser;

pub use lexer::Token;
pub use parser::{parse_query, ParseError, Query};

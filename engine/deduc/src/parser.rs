//! Recursive-descent parser for deduction queries.
//!
//! Grammar, one query per line:
//!
//! ```text
//! query    := mode ':' body
//! mode     := 'template' | 'auto' | 'auto-return' | 'auto-lambda'
//!           | 'decltype' | 'decltype-auto' | 'decltype-auto-return'
//! body     := pattern '<-' argument          (template / auto modes)
//!           | expression                     (decltype modes)
//! pattern  := 'init-list' | cv* 'T' ('&' | '&&' | '*'+)?
//! argument := '{' type (',' type)* '}'
//!           | 'overload' ('(' type ')')?
//!           | 'bitfield' type
//!           | 'static-const' type | 'static-const-defined' type
//!           | category? type
//! expression := (form | category)* type
//! category := 'lvalue' | 'rvalue' | 'xvalue' | 'prvalue'
//! form     := 'name' | 'paren' | 'expr'
//! type     := cv* ident ('(' type,* ')')? postfix*
//! postfix  := '*' cv* | '[' number? ']' | '&' | '&&'
//! ```
//!
//! The parser produces engine descriptors directly; no AST of its own.

use dedu_engine::{
    deduce_auto_type, deduce_decltype, deduce_decltype_auto, deduce_template_type,
    ArgumentDescriptor, AutoPattern, AutoPlacement, DeducedResult, DeductionMode,
    ExpressionDescriptor, ParameterPattern,
};
use dedu_types::{CppType, CvQualifiers, RefKind, ValueCategory};
use thiserror::Error;

use crate::lexer::{lex, Token};

/// A query parse failure.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum ParseError {
    /// A character the lexer does not know.
    #[error("unrecognized character at byte {0}")]
    UnrecognizedChar(usize),

    /// The query ended mid-production.
    #[error("unexpected end of query, expected {0}")]
    UnexpectedEnd(&'static str),

    /// Something else stood where `expected` should be.
    #[error("expected {expected}, found `{found}`")]
    Unexpected {
        /// What the grammar wanted here.
        expected: &'static str,
        /// The offending slice.
        found: String,
    },

    /// The leading mode word is not one of the seven modes.
    #[error("unknown mode `{0}` (try `template`, `auto`, `decltype`, ...)")]
    UnknownMode(String),
}

/// A parsed query, ready to evaluate.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Query {
    /// `template: <pattern> <- <argument>`
    Template {
        /// The parameter pattern.
        pattern: ParameterPattern,
        /// The argument descriptor.
        arg: ArgumentDescriptor,
    },
    /// `auto[-return|-lambda]: <pattern> <- <argument>`
    Auto {
        /// The `auto` pattern with its placement.
        pattern: AutoPattern,
        /// The argument descriptor.
        arg: ArgumentDescriptor,
    },
    /// `decltype: <expression>`
    Decltype {
        /// The operand descriptor.
        expr: ExpressionDescriptor,
    },
    /// `decltype-auto[-return]: <expression>`
    DecltypeAuto {
        /// Whether the expression is a return expression.
        is_return: bool,
        /// The operand descriptor.
        expr: ExpressionDescriptor,
    },
}

impl Query {
    /// Run the query against the engine.
    pub fn evaluate(&self) -> DeducedResult {
        match self {
            Query::Template { pattern, arg } => deduce_template_type(pattern, arg),
            Query::Auto { pattern, arg } => deduce_auto_type(pattern, arg),
            Query::Decltype { expr } => deduce_decltype(expr),
            Query::DecltypeAuto { is_return, expr } => deduce_decltype_auto(*is_return, expr),
        }
    }
}

/// Parse one query line.
pub fn parse_query(line: &str) -> Result<Query, ParseError> {
    let tokens = lex(line).map_err(ParseError::UnrecognizedChar)?;
    let mut parser = Parser { tokens, pos: 0 };
    let query = parser.query()?;
    parser.expect_end()?;
    Ok(query)
}

struct Parser<'a> {
    tokens: Vec<(Token, &'a str)>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<(Token, &'a str)> {
        self.tokens.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<(Token, &'a str)> {
        let tok = self.peek();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn expect(&mut self, token: Token, expected: &'static str) -> Result<(), ParseError> {
        match self.bump() {
            Some((t, _)) if t == token => Ok(()),
            Some((_, slice)) => Err(ParseError::Unexpected {
                expected,
                found: slice.to_string(),
            }),
            None => Err(ParseError::UnexpectedEnd(expected)),
        }
    }

    fn expect_end(&mut self) -> Result<(), ParseError> {
        match self.peek() {
            None => Ok(()),
            Some((_, slice)) => Err(ParseError::Unexpected {
                expected: "end of query",
                found: slice.to_string(),
            }),
        }
    }

    /// Consume an ident if the next token is one.
    fn eat_ident(&mut self) -> Option<&'a str> {
        match self.peek() {
            Some((Token::Ident, slice)) => {
                self.pos += 1;
                Some(slice)
            }
            _ => None,
        }
    }

    fn query(&mut self) -> Result<Query, ParseError> {
        let mode = match self.bump() {
            Some((Token::Ident, slice)) => slice,
            Some((_, slice)) => {
                return Err(ParseError::Unexpected {
                    expected: "a mode",
                    found: slice.to_string(),
                })
            }
            None => return Err(ParseError::UnexpectedEnd("a mode")),
        };
        self.expect(Token::Colon, "`:` after the mode")?;

        match mode {
            "template" => {
                let (pattern, arg) = self.pattern_and_argument(DeductionMode::Template)?;
                Ok(Query::Template { pattern, arg })
            }
            "auto" | "auto-return" | "auto-lambda" => {
                let placement = match mode {
                    "auto-return" => AutoPlacement::FunctionReturn,
                    "auto-lambda" => AutoPlacement::LambdaParameter,
                    _ => AutoPlacement::Initializer,
                };
                let (pattern, arg) = self.pattern_and_argument(DeductionMode::Auto)?;
                Ok(Query::Auto {
                    pattern: AutoPattern::at(pattern, placement),
                    arg,
                })
            }
            "decltype" => Ok(Query::Decltype {
                expr: self.expression_descriptor()?,
            }),
            "decltype-auto" | "decltype-auto-return" => Ok(Query::DecltypeAuto {
                is_return: mode == "decltype-auto-return",
                expr: self.expression_descriptor()?,
            }),
            other => Err(ParseError::UnknownMode(other.to_string())),
        }
    }

    fn pattern_and_argument(
        &mut self,
        mode: DeductionMode,
    ) -> Result<(ParameterPattern, ArgumentDescriptor), ParseError> {
        let pattern = self.pattern(mode)?;
        self.expect(Token::Arrow, "`<-` between pattern and argument")?;
        let arg = self.argument()?;
        Ok((pattern, arg))
    }

    /// `init-list`, or cv-qualified `T` with a reference/pointer suffix.
    fn pattern(&mut self, mode: DeductionMode) -> Result<ParameterPattern, ParseError> {
        if let Some((Token::Ident, "init-list")) = self.peek() {
            self.pos += 1;
            return Ok(ParameterPattern::initializer_list());
        }

        let quals = self.cv_qualifiers();
        match self.bump() {
            Some((Token::Ident, "T")) => {}
            Some((_, slice)) => {
                return Err(ParseError::Unexpected {
                    expected: "`T` in the pattern",
                    found: slice.to_string(),
                })
            }
            None => return Err(ParseError::UnexpectedEnd("`T` in the pattern")),
        }

        match self.peek() {
            Some((Token::Amp, _)) => {
                self.pos += 1;
                Ok(ParameterPattern::lvalue_ref(quals))
            }
            Some((Token::AmpAmp, _)) => {
                self.pos += 1;
                Ok(ParameterPattern::rvalue_ref_syntax(quals, mode))
            }
            Some((Token::Star, _)) => {
                let mut pattern = ParameterPattern::pointee(quals);
                while let Some((Token::Star, _)) = self.peek() {
                    self.pos += 1;
                    pattern = ParameterPattern::pointer_to(pattern);
                }
                Ok(pattern)
            }
            // Bare `T`: top-level cv on a by-value parameter is ignored.
            _ => Ok(ParameterPattern::by_value()),
        }
    }

    fn argument(&mut self) -> Result<ArgumentDescriptor, ParseError> {
        match self.peek() {
            Some((Token::LBrace, _)) => self.braced_argument(),
            Some((Token::Ident, "overload")) => {
                self.pos += 1;
                if let Some((Token::LParen, _)) = self.peek() {
                    self.pos += 1;
                    let signature = self.cpp_type()?;
                    self.expect(Token::RParen, "`)` after the overload signature")?;
                    Ok(ArgumentDescriptor::resolved_overload(signature))
                } else {
                    Ok(ArgumentDescriptor::unresolved_overload())
                }
            }
            Some((Token::Ident, "bitfield")) => {
                self.pos += 1;
                Ok(ArgumentDescriptor::bitfield(self.cpp_type()?))
            }
            Some((Token::Ident, "static-const")) => {
                self.pos += 1;
                Ok(ArgumentDescriptor::static_const_member(
                    self.cpp_type()?,
                    false,
                ))
            }
            Some((Token::Ident, "static-const-defined")) => {
                self.pos += 1;
                Ok(ArgumentDescriptor::static_const_member(
                    self.cpp_type()?,
                    true,
                ))
            }
            _ => {
                let category = self.value_category().unwrap_or(ValueCategory::Lvalue);
                let ty = self.cpp_type()?;
                Ok(match category {
                    ValueCategory::Lvalue => ArgumentDescriptor::lvalue(ty),
                    ValueCategory::Xvalue => ArgumentDescriptor::xvalue(ty),
                    ValueCategory::Prvalue => ArgumentDescriptor::rvalue(ty),
                })
            }
        }
    }

    fn braced_argument(&mut self) -> Result<ArgumentDescriptor, ParseError> {
        self.expect(Token::LBrace, "`{`")?;
        let mut elements = dedu_engine::BracedElements::new();
        loop {
            elements.push(self.cpp_type()?);
            match self.bump() {
                Some((Token::Comma, _)) => continue,
                Some((Token::RBrace, _)) => break,
                Some((_, slice)) => {
                    return Err(ParseError::Unexpected {
                        expected: "`,` or `}` in the braced list",
                        found: slice.to_string(),
                    })
                }
                None => return Err(ParseError::UnexpectedEnd("`}` closing the braced list")),
            }
        }
        Ok(ArgumentDescriptor::braced(elements))
    }

    /// `[name|paren|expr] [category] <type>` for the decltype modes.
    fn expression_descriptor(&mut self) -> Result<ExpressionDescriptor, ParseError> {
        let mut form: Option<&str> = None;
        let mut category: Option<ValueCategory> = None;
        loop {
            match self.peek() {
                Some((Token::Ident, slice @ ("name" | "paren" | "expr"))) => {
                    self.pos += 1;
                    form = Some(slice);
                }
                _ => {
                    if let Some(cat) = self.value_category() {
                        category = Some(cat);
                    } else {
                        break;
                    }
                }
            }
        }
        let ty = self.cpp_type()?;
        Ok(match form.unwrap_or("name") {
            "paren" => ExpressionDescriptor::parenthesized_name(ty),
            "expr" => {
                ExpressionDescriptor::compound(ty, category.unwrap_or(ValueCategory::Lvalue))
            }
            _ => ExpressionDescriptor::name(ty),
        })
    }

    fn value_category(&mut self) -> Option<ValueCategory> {
        let category = match self.peek() {
            Some((Token::Ident, "lvalue")) => ValueCategory::Lvalue,
            Some((Token::Ident, "xvalue")) => ValueCategory::Xvalue,
            Some((Token::Ident, "rvalue" | "prvalue")) => ValueCategory::Prvalue,
            _ => return None,
        };
        self.pos += 1;
        Some(category)
    }

    fn cv_qualifiers(&mut self) -> CvQualifiers {
        let mut quals = CvQualifiers::NONE;
        loop {
            match self.peek() {
                Some((Token::Ident, "const")) => {
                    self.pos += 1;
                    quals |= CvQualifiers::CONST;
                }
                Some((Token::Ident, "volatile")) => {
                    self.pos += 1;
                    quals |= CvQualifiers::VOLATILE;
                }
                _ => return quals,
            }
        }
    }

    /// A simplified C++ type: cv, base name, optional function parameter
    /// list, then pointer/array/reference declarators left to right.
    fn cpp_type(&mut self) -> Result<CppType, ParseError> {
        let quals = self.cv_qualifiers();
        let name = match self.eat_ident() {
            Some(name) => name,
            None => match self.peek() {
                Some((_, slice)) => {
                    return Err(ParseError::Unexpected {
                        expected: "a type name",
                        found: slice.to_string(),
                    })
                }
                None => return Err(ParseError::UnexpectedEnd("a type name")),
            },
        };
        let mut ty = CppType::named(name).with_quals(quals);

        // `void(int, double)` — a function type.
        if let Some((Token::LParen, _)) = self.peek() {
            self.pos += 1;
            let mut params = Vec::new();
            if let Some((Token::RParen, _)) = self.peek() {
                self.pos += 1;
            } else {
                loop {
                    params.push(self.cpp_type()?);
                    match self.bump() {
                        Some((Token::Comma, _)) => continue,
                        Some((Token::RParen, _)) => break,
                        Some((_, slice)) => {
                            return Err(ParseError::Unexpected {
                                expected: "`,` or `)` in the parameter list",
                                found: slice.to_string(),
                            })
                        }
                        None => {
                            return Err(ParseError::UnexpectedEnd("`)` closing the parameter list"))
                        }
                    }
                }
            }
            ty = CppType::function(params, ty);
        }

        loop {
            match self.peek() {
                Some((Token::Star, _)) => {
                    self.pos += 1;
                    ty = CppType::pointer_to(ty).with_quals(self.cv_qualifiers());
                }
                Some((Token::LBracket, _)) => {
                    self.pos += 1;
                    let len = match self.peek() {
                        Some((Token::Number, digits)) => {
                            self.pos += 1;
                            digits.parse::<u64>().ok()
                        }
                        _ => None,
                    };
                    self.expect(Token::RBracket, "`]` closing the array bound")?;
                    ty = CppType::array_of(ty, len);
                }
                Some((Token::Amp, _)) => {
                    self.pos += 1;
                    ty = ty.referenced(RefKind::Lvalue);
                }
                Some((Token::AmpAmp, _)) => {
                    self.pos += 1;
                    ty = ty.referenced(RefKind::Rvalue);
                }
                _ => return Ok(ty),
            }
        }
    }
}

#[cfg(test)]
mod tests;

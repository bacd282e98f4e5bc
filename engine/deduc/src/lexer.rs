//! Query lexer using logos.
//!
//! Hyphenated words (`init-list`, `decltype-auto-return`) lex as single
//! identifiers, so the grammar never needs a standalone `-` token.

use logos::Logos;

/// A token of the query language.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token {
    #[token("<-")]
    Arrow,

    #[token(":")]
    Colon,

    #[token(",")]
    Comma,

    #[token("*")]
    Star,

    // `&&` must outrank `&`.
    #[token("&&")]
    AmpAmp,

    #[token("&")]
    Amp,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    /// Array bounds.
    #[regex(r"[0-9]+")]
    Number,

    /// Keywords, mode names, and type names alike; the parser tells them
    /// apart by position.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*(-[A-Za-z0-9_]+)*")]
    Ident,
}

/// Lex a query line into `(token, slice)` pairs, or the byte offset of
/// the first unrecognized character.
pub fn lex(input: &str) -> Result<Vec<(Token, &str)>, usize> {
    let mut lexer = Token::lexer(input);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.slice())),
            Err(()) => return Err(lexer.span().start),
        }
    }
    Ok(tokens)
}

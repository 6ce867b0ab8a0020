//! Token definitions for route-declaration lines
//!
//! The tokens are defined using the logos derive macro. Single-quoted string
//! literals are captured with their quotes stripped; escaped quotes inside
//! literals are not supported (the source ecosystem's route files do not use
//! them in path or name arguments).
use logos::Logos;

/// All tokens the line lexer can produce.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r]+")]
pub enum Token {
    /// A single-quoted literal, quotes stripped: `'/users'` -> `/users`
    #[regex(r"'[^']*'", |lex| {
        let slice = lex.slice();
        slice[1..slice.len() - 1].to_string()
    })]
    Quoted(String),

    #[token("::")]
    DoubleColon,
    #[token("->")]
    Arrow,
    #[token("=>")]
    FatArrow,

    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,

    /// Identifiers: `Route`, HTTP verb names, `prefix`, `name`, class names
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Ident(String),
}

impl Token {
    /// Check if this token is an identifier with the given text
    pub fn is_ident(&self, text: &str) -> bool {
        matches!(self, Token::Ident(s) if s == text)
    }

    /// The literal content of a quoted token, if any
    pub fn quoted(&self) -> Option<&str> {
        match self {
            Token::Quoted(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

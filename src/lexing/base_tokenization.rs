//! Base tokenization for route-declaration lines
//!
//! This is the entry point where source lines become token streams. Input is
//! always a single line; the group scanner feeds lines one at a time.
//! Characters the lexer cannot match (PHP operators, backslashes, ...) are
//! dropped, which is what makes classification lenient: unrecognized syntax
//! degrades to an unclassifiable token stream instead of an error.

use crate::lexing::tokens::Token;
use logos::Logos;

/// Tokenize one line of route-declaration source.
pub fn tokenize(line: &str) -> Vec<Token> {
    let mut lexer = Token::lexer(line);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push(token);
        }
    }

    tokens
}

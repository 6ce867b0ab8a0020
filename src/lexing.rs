//! Lexer for route-declaration source lines
//!
//! Tokenization is done line by line with a logos lexer; there is no
//! cross-line token state. Classification and extraction downstream operate
//! on the token stream of a single line, never on raw text patterns.

pub mod base_tokenization;
pub mod line_classification;
pub mod tokens;

pub use base_tokenization::tokenize;
pub use line_classification::{classify_line, LineKind};
pub use tokens::Token;

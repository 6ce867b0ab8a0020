//! Line Classification
//!
//! Core classification logic for deciding what a source line declares, based
//! on token patterns. The group scanner drives this for every line.

use crate::lexing::base_tokenization::tokenize;
use crate::lexing::tokens::Token;

/// What a single source line declares.
#[derive(Debug, PartialEq, Clone)]
pub enum LineKind {
    /// A `prefix('..')` group opener; carries the quoted prefix argument.
    GroupPrefix(String),
    /// A direct `Route::<verb>(..)` declaration.
    Route,
    /// A `Route::resource(..)` shorthand declaration.
    Resource,
    /// Anything else; contributes no routes.
    Other,
}

/// HTTP verb method names recognized in route declarations.
const ROUTE_VERBS: [&str; 5] = ["get", "post", "put", "patch", "delete"];

/// Determine what a line declares based on its tokens.
///
/// Classification follows this specific order (important for correctness):
/// 1. Group-prefix openers — a `prefix(` call can appear on a line that also
///    starts with `Route::`, so this check runs first.
/// 2. Direct route declarations (`Route::<verb>`).
/// 3. Resource shorthand (`Route::resource`).
/// 4. Everything else is `Other`.
pub fn classify_line(line: &str) -> LineKind {
    let tokens = tokenize(line);

    if let Some(prefix) = group_prefix(&tokens) {
        return LineKind::GroupPrefix(prefix);
    }

    if starts_with_route_call(&tokens, |verb| ROUTE_VERBS.contains(&verb)) {
        return LineKind::Route;
    }

    if starts_with_route_call(&tokens, |verb| verb == "resource") {
        return LineKind::Resource;
    }

    LineKind::Other
}

/// Extract the quoted argument of a `prefix('..')` call anywhere in the line.
///
/// A `prefix(` call with an empty or missing quoted argument starts no group,
/// so `None` is returned for it.
fn group_prefix(tokens: &[Token]) -> Option<String> {
    tokens.windows(3).find_map(|window| match window {
        [Token::Ident(id), Token::OpenParen, Token::Quoted(prefix)]
            if id == "prefix" && !prefix.is_empty() =>
        {
            Some(prefix.clone())
        }
        _ => None,
    })
}

/// Check if the line starts with `Route::<member>` where the member name
/// satisfies the given predicate.
fn starts_with_route_call(tokens: &[Token], member: impl Fn(&str) -> bool) -> bool {
    matches!(
        tokens,
        [Token::Ident(route), Token::DoubleColon, Token::Ident(name), ..]
            if route == "Route" && member(name)
    )
}

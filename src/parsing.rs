//! Route-declaration parsing
//!
//! Turns one flat declaration string into a [ParsedRoute]. Declarations that
//! do not match the `Route::<verb>('<path>'` shape parse to `None`; that is
//! the leniency policy, not an error.

use crate::lexing::tokenize;
use crate::lexing::tokens::Token;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// `{param}` path segments, rewritten to `:param` placeholders.
static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([^}]+)\}").expect("placeholder pattern is valid"));

/// The HTTP methods a route declaration can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    /// Parse a lowercase route-declaration verb.
    pub fn from_verb(verb: &str) -> Option<Self> {
        match verb {
            "get" => Some(Method::Get),
            "post" => Some(Method::Post),
            "put" => Some(Method::Put),
            "patch" => Some(Method::Patch),
            "delete" => Some(Method::Delete),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    /// Whether requests with this method carry a placeholder body.
    pub fn has_body(&self) -> bool {
        matches!(self, Method::Post | Method::Put | Method::Patch)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parsed route. `path` uses `:param` placeholder syntax; `name` is never
/// empty for a non-root path (the fallback derives it from the path).
#[derive(Debug, PartialEq, Clone)]
pub struct ParsedRoute {
    pub method: Method,
    pub path: String,
    pub name: String,
}

/// Parse a single flat route-declaration string.
///
/// The declaration must start with `Route::<verb>('<path>'`. The name comes
/// from a `->name('..')` clause when present; otherwise it falls back to the
/// normalized path with every `/` replaced by a space, trimmed.
pub fn parse_route(declaration: &str) -> Option<ParsedRoute> {
    let tokens = tokenize(declaration);

    let method = match &tokens[..] {
        [Token::Ident(route), Token::DoubleColon, Token::Ident(verb), ..] if route == "Route" => {
            Method::from_verb(verb)?
        }
        _ => return None,
    };

    let raw_path = match (tokens.get(3), tokens.get(4)) {
        (Some(Token::OpenParen), Some(Token::Quoted(path))) if !path.is_empty() => path,
        _ => return None,
    };

    let path = normalize_placeholders(raw_path);
    let name = explicit_name(&tokens)
        .unwrap_or_else(|| path.replace('/', " ").trim().to_string());

    Some(ParsedRoute { method, path, name })
}

/// Rewrite every `{ident}` segment to `:ident`, order-preserving.
pub fn normalize_placeholders(path: &str) -> String {
    PLACEHOLDER.replace_all(path, ":$1").into_owned()
}

/// The literal of a `->name('..')` clause, if one exists.
fn explicit_name(tokens: &[Token]) -> Option<String> {
    tokens.windows(5).find_map(|window| match window {
        [Token::Arrow, Token::Ident(id), Token::OpenParen, Token::Quoted(name), Token::CloseParen]
            if id == "name" && !name.is_empty() =>
        {
            Some(name.clone())
        }
        _ => None,
    })
}

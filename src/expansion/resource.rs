//! Resource shorthand expansion
//!
//! `Route::resource('posts')` stands for the five conventional CRUD routes.
//! Expansion emits canonical single-route declaration strings so the route
//! parser can consume them exactly like hand-written declarations.

use crate::lexing::tokenize;
use crate::lexing::tokens::Token;

/// Fixed action table: (verb, path suffix, action name), in output order.
const RESOURCE_ACTIONS: [(&str, &str, &str); 5] = [
    ("get", "", "index"),
    ("post", "", "store"),
    ("get", "/{id}", "show"),
    ("put", "/{id}", "update"),
    ("delete", "/{id}", "destroy"),
];

/// Expand one resource declaration into its five route-declaration strings.
///
/// Returns an empty list when no base path can be extracted. Route names come
/// from the optional `['names'=>['action'=>'custom', ..]]` map when present,
/// falling back to `"<base>.<action>"` with surrounding slashes stripped from
/// the base.
pub fn expand_resource(line: &str) -> Vec<String> {
    let tokens = tokenize(line);
    let Some(base) = resource_base(&tokens) else {
        return Vec::new();
    };
    let overrides = name_overrides(&tokens);

    let trimmed = base.trim_end_matches('/');
    // Paths in the emitted declarations are always rooted, regardless of how
    // the base was written.
    let base_path = if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    };
    let label = base.trim_matches('/');

    RESOURCE_ACTIONS
        .iter()
        .map(|(verb, suffix, action)| {
            let name = overrides
                .iter()
                .find(|(key, _)| key == action)
                .map(|(_, value)| value.clone())
                .unwrap_or_else(|| format!("{label}.{action}"));
            format!("Route::{verb}('{base_path}{suffix}')->name('{name}');")
        })
        .collect()
}

/// The quoted base path of a `resource('..')` call, if present and non-empty.
fn resource_base(tokens: &[Token]) -> Option<String> {
    tokens.windows(3).find_map(|window| match window {
        [Token::Ident(id), Token::OpenParen, Token::Quoted(base)]
            if id == "resource" && !base.is_empty() =>
        {
            Some(base.clone())
        }
        _ => None,
    })
}

/// Flat quoted key/value pairs of the `'names'=>[..]` map, in source order.
fn name_overrides(tokens: &[Token]) -> Vec<(String, String)> {
    let mut start = None;
    for (i, window) in tokens.windows(3).enumerate() {
        if let [Token::Quoted(key), Token::FatArrow, Token::OpenBracket] = window {
            if key == "names" {
                start = Some(i + 3);
                break;
            }
        }
    }
    let Some(start) = start else {
        return Vec::new();
    };

    let mut pairs = Vec::new();
    let mut i = start;
    while i < tokens.len() {
        match &tokens[i] {
            Token::CloseBracket => break,
            Token::Quoted(key) => {
                if let (Some(Token::FatArrow), Some(Token::Quoted(value))) =
                    (tokens.get(i + 1), tokens.get(i + 2))
                {
                    pairs.push((key.clone(), value.clone()));
                    i += 3;
                    continue;
                }
                i += 1;
            }
            _ => i += 1,
        }
    }
    pairs
}

//! Group scanner: flattens `prefix(..)->group(..)` blocks
//!
//! The scanner walks the source line by line, keeping an explicit stack of
//! active prefixes and a brace-depth counter shared across the whole file.
//! Each pushed prefix remembers the depth its block opened at and is popped
//! when the depth falls back below it, so nesting is attributed correctly at
//! any level. Nested prefixes compose: the effective prefix of a route line
//! is the concatenation of the whole stack, outermost first.
//!
//! Path rewriting is literal string concatenation of prefix and path, with
//! no slash de-duplication: prefix `admin` and path `/stats` produce
//! `admin/stats`, and a doubled slash is reproduced verbatim when the prefix
//! ends where the path begins with `/`.

use crate::expansion::resource::expand_resource;
use crate::lexing::tokens::Token;
use crate::lexing::{classify_line, tokenize, LineKind};

/// A line that contributed no routes, with its 1-based line number.
///
/// Diagnostics only: the conversion succeeds regardless of skipped lines, and
/// the CLI does not print them. They exist so callers (and tests) can see why
/// a route is missing from the output.
#[derive(Debug, PartialEq, Clone)]
pub struct SkippedLine {
    pub line: usize,
    pub text: String,
}

/// Result of scanning a source file: flat route-declaration strings plus
/// the lines that were skipped.
#[derive(Debug, Default)]
pub struct Expansion {
    pub routes: Vec<String>,
    pub skipped: Vec<SkippedLine>,
}

/// A prefix whose group block is still open. `depth` is the brace depth the
/// block established; the group closes when depth falls below it.
struct OpenGroup {
    prefix: String,
    depth: usize,
}

/// Scan the full source text and produce flat single-route declaration
/// strings: direct routes (prefixed when inside groups) and top-level
/// resource expansions, in source order.
pub fn expand_groups(source: &str) -> Expansion {
    let mut expansion = Expansion::default();
    let mut stack: Vec<OpenGroup> = Vec::new();
    let mut depth: usize = 0;

    for (index, raw) in source.lines().enumerate() {
        let line = raw.trim();
        let mut opens = line.matches('{').count();
        let closes = line.matches('}').count();

        match classify_line(line) {
            LineKind::GroupPrefix(prefix) => {
                stack.push(OpenGroup {
                    prefix: prefix.trim_end_matches('/').to_string(),
                    depth: depth + 1,
                });
                // The opener's own brace counts even when it sits on the
                // next line.
                opens = opens.max(1);
            }
            LineKind::Route => {
                if stack.is_empty() {
                    expansion.routes.push(line.to_string());
                } else {
                    let prefix: String =
                        stack.iter().map(|group| group.prefix.as_str()).collect();
                    match first_quoted_path(line) {
                        Some(path) => {
                            // First occurrence is the path argument, the same
                            // literal the tokenizer extracted.
                            let rewritten = line.replacen(
                                &format!("'{path}'"),
                                &format!("'{prefix}{path}'"),
                                1,
                            );
                            expansion.routes.push(rewritten);
                        }
                        // A grouped route with no extractable path cannot be
                        // prefixed; it is dropped, not passed through.
                        None => skip(&mut expansion, index, line),
                    }
                }
            }
            LineKind::Resource => {
                if stack.is_empty() {
                    expansion.routes.extend(expand_resource(line));
                } else {
                    // Resource shorthand is only expanded at top level.
                    skip(&mut expansion, index, line);
                }
            }
            LineKind::Other => {
                if !line.is_empty() && !is_structural_noise(line) {
                    skip(&mut expansion, index, line);
                }
            }
        }

        depth = (depth + opens).saturating_sub(closes);
        while stack.last().is_some_and(|group| depth < group.depth) {
            stack.pop();
        }
    }

    expansion
}

fn skip(expansion: &mut Expansion, index: usize, line: &str) {
    expansion.skipped.push(SkippedLine {
        line: index + 1,
        text: line.to_string(),
    });
}

/// The first non-empty single-quoted argument on the line, i.e. the path of
/// a direct route declaration.
fn first_quoted_path(line: &str) -> Option<String> {
    tokenize(line).into_iter().find_map(|token| match token {
        Token::Quoted(path) if !path.is_empty() => Some(path),
        _ => None,
    })
}

/// Lines that are pure block punctuation (`});`, `{`) carry no information
/// worth reporting.
fn is_structural_noise(line: &str) -> bool {
    line.chars()
        .all(|c| matches!(c, '{' | '}' | '(' | ')' | ';' | ',' | ' ' | '\t'))
}

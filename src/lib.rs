//! # larapost
//!
//! Convert Laravel route files into Postman collection v2.1.0 JSON.
//!
//! The pipeline is line-based: the source file is scanned for route
//! declarations (including `Route::prefix(..)->group(..)` blocks and
//! `Route::resource` shorthand), expanded into flat single-route declaration
//! strings, parsed into routes with `:param` placeholder paths, grouped by
//! their first path segment, and rendered into the Postman schema.
//!
//! See [pipeline::convert_source] for the whole chain and
//! [pipeline::convert_file] for the file-to-file entry point used by the CLI.

pub mod collection;
pub mod expansion;
pub mod grouping;
pub mod lexing;
pub mod parsing;
pub mod pipeline;

//! End-to-end conversion pipeline
//!
//! Source text goes through group expansion, route parsing, grouping, and
//! collection building in one synchronous pass. Parse-level failures never
//! surface here; only I/O and serialization failures become errors.

use crate::collection::{build_collection, Collection};
use crate::expansion::{expand_groups, SkippedLine};
use crate::grouping::group_routes;
use crate::parsing::parse_route;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Errors at the conversion boundary. Everything upstream of I/O is lenient
/// and cannot fail.
#[derive(Debug)]
pub enum ConvertError {
    ReadInput { path: PathBuf, source: io::Error },
    WriteOutput { path: PathBuf, source: io::Error },
    Serialize(serde_json::Error),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::ReadInput { path, source } => {
                write!(f, "Failed to read {}: {}", path.display(), source)
            }
            ConvertError::WriteOutput { path, source } => {
                write!(f, "Failed to write {}: {}", path.display(), source)
            }
            ConvertError::Serialize(source) => {
                write!(f, "Failed to serialize collection: {}", source)
            }
        }
    }
}

impl std::error::Error for ConvertError {}

/// Result of converting source text: the collection plus the skipped-line
/// diagnostics gathered during scanning.
#[derive(Debug)]
pub struct Conversion {
    pub collection: Collection,
    pub skipped: Vec<SkippedLine>,
}

/// Convert route-definition source text into a Postman collection.
pub fn convert_source(source: &str) -> Conversion {
    let expansion = expand_groups(source);
    let routes = expansion
        .routes
        .iter()
        .filter_map(|declaration| parse_route(declaration))
        .collect();
    let grouped = group_routes(routes);

    Conversion {
        collection: build_collection(&grouped),
        skipped: expansion.skipped,
    }
}

/// Convert a route file into a collection file.
///
/// Reads the input in one scoped operation, creates the output's parent
/// directory if absent, and writes the pretty-printed JSON. No partial
/// output is written on failure.
pub fn convert_file(input: &Path, output: &Path) -> Result<(), ConvertError> {
    let source = fs::read_to_string(input).map_err(|source| ConvertError::ReadInput {
        path: input.to_path_buf(),
        source,
    })?;

    let conversion = convert_source(&source);
    let json =
        serde_json::to_string_pretty(&conversion.collection).map_err(ConvertError::Serialize)?;

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| ConvertError::WriteOutput {
                path: output.to_path_buf(),
                source,
            })?;
        }
    }

    fs::write(output, json).map_err(|source| ConvertError::WriteOutput {
        path: output.to_path_buf(),
        source,
    })?;

    Ok(())
}

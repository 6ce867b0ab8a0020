//! Postman collection v2.1.0 data model and builder
//!
//! The types serialize in declaration order, so the emitted JSON is
//! byte-stable for a given grouped-route input. Building is the only write;
//! a [Collection] is never mutated afterwards.

use crate::parsing::ParsedRoute;
use serde::Serialize;
use std::collections::BTreeMap;

pub const COLLECTION_NAME: &str = "API Routes Collection";
pub const COLLECTION_DESCRIPTION: &str = "Generated from Laravel routes";
pub const SCHEMA_URL: &str =
    "https://schema.getpostman.com/json/collection/v2.1.0/collection.json";

/// Placeholder body for mutating requests: an empty JSON object the user
/// fills in.
const EMPTY_JSON_BODY: &str = "{\n    \n}";

#[derive(Debug, Serialize)]
pub struct Collection {
    pub info: Info,
    pub item: Vec<Folder>,
}

#[derive(Debug, Serialize)]
pub struct Info {
    pub name: String,
    pub description: String,
    pub schema: String,
}

#[derive(Debug, Serialize)]
pub struct Folder {
    pub name: String,
    pub item: Vec<RequestItem>,
}

#[derive(Debug, Serialize)]
pub struct RequestItem {
    pub name: String,
    pub request: Request,
}

#[derive(Debug, Serialize)]
pub struct Request {
    pub method: String,
    pub url: Url,
    pub header: Vec<Header>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
}

#[derive(Debug, Serialize)]
pub struct Url {
    pub raw: String,
    pub host: Vec<String>,
    pub path: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct Header {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct Body {
    pub mode: String,
    pub raw: String,
    pub options: BodyOptions,
}

#[derive(Debug, Serialize)]
pub struct BodyOptions {
    pub raw: RawOptions,
}

#[derive(Debug, Serialize)]
pub struct RawOptions {
    pub language: String,
}

/// Render grouped routes into a collection.
///
/// Folders follow the map's key order (ascending); the folder name is the
/// group key with its first character uppercased, rest unchanged. Requests
/// within a folder are sorted by (method, path) ascending.
pub fn build_collection(grouped: &BTreeMap<String, Vec<ParsedRoute>>) -> Collection {
    let item = grouped
        .iter()
        .map(|(key, routes)| {
            let mut sorted: Vec<&ParsedRoute> = routes.iter().collect();
            sorted.sort_by(|a, b| {
                (a.method.as_str(), a.path.as_str()).cmp(&(b.method.as_str(), b.path.as_str()))
            });
            Folder {
                name: capitalize(key),
                item: sorted.into_iter().map(build_request).collect(),
            }
        })
        .collect();

    Collection {
        info: Info {
            name: COLLECTION_NAME.to_string(),
            description: COLLECTION_DESCRIPTION.to_string(),
            schema: SCHEMA_URL.to_string(),
        },
        item,
    }
}

fn build_request(route: &ParsedRoute) -> RequestItem {
    let method = route.method.as_str();
    let segments: Vec<String> = std::iter::once("api".to_string())
        .chain(
            route
                .path
                .trim_matches('/')
                .split('/')
                .filter(|segment| !segment.is_empty())
                .map(str::to_string),
        )
        .collect();

    RequestItem {
        name: format!("{method} {}", route.name),
        request: Request {
            method: method.to_string(),
            url: Url {
                raw: format!("{{{{base_url}}}}/api{}", route.path),
                host: vec!["{{base_url}}".to_string()],
                path: segments,
            },
            header: default_headers(),
            body: route.method.has_body().then(placeholder_body),
        },
    }
}

/// The fixed header set every request carries. `{{token}}` is a Postman
/// template variable, not a literal credential.
fn default_headers() -> Vec<Header> {
    [
        ("Accept", "application/json"),
        ("Content-Type", "application/json"),
        ("Authorization", "Bearer {{token}}"),
    ]
    .into_iter()
    .map(|(key, value)| Header {
        key: key.to_string(),
        value: value.to_string(),
    })
    .collect()
}

fn placeholder_body() -> Body {
    Body {
        mode: "raw".to_string(),
        raw: EMPTY_JSON_BODY.to_string(),
        options: BodyOptions {
            raw: RawOptions {
                language: "json".to_string(),
            },
        },
    }
}

/// Uppercase the first character, leave the rest unchanged.
fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

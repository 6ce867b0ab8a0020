//! Grouping of parsed routes by base path segment
//!
//! The group key is the raw segment right after the first `/` in the route
//! path, including placeholder segments (`/:id/children` groups under the
//! literal `":id"`). An explicit ordered map keeps iteration deterministic;
//! keys come out in ascending lexicographic order.

use crate::parsing::ParsedRoute;
use std::collections::BTreeMap;

/// Bucket routes by their first path segment.
///
/// Routes whose path has no `/`-separated segment after the first separator
/// (the root path) are dropped from the output entirely.
pub fn group_routes(routes: Vec<ParsedRoute>) -> BTreeMap<String, Vec<ParsedRoute>> {
    let mut groups: BTreeMap<String, Vec<ParsedRoute>> = BTreeMap::new();

    for route in routes {
        let parts: Vec<&str> = route.path.split('/').collect();
        if parts.len() > 1 && !parts[1].is_empty() {
            groups.entry(parts[1].to_string()).or_default().push(route);
        }
    }

    groups
}

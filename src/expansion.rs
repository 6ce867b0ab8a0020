//! Expansion of grouped and shorthand declarations into flat route strings
//!
//! The output of this stage is a flat, ordered list of single-route
//! declaration strings, all of the same shape regardless of whether they came
//! from a top-level declaration, a prefixed group, or a resource shorthand.
//! The route parser consumes them uniformly.

pub mod groups;
pub mod resource;

pub use groups::{expand_groups, Expansion, SkippedLine};
pub use resource::expand_resource;

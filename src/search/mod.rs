//! Symbol lookup over a documentation tree.
//!
//! Query parsing, type path resolution, edit-distance ranking and the
//! aggregation of ranked matches across a subtree.

pub mod aggregate;
pub mod distance;
pub mod query;
pub mod resolve;
pub mod scoring;

pub use aggregate::{candidate_scopes, find, lookup_query, search, search_query};
pub use distance::distance;
pub use query::{DEFAULT_LIBRARY, Query, parse_query, parse_query_with_default};
pub use resolve::{Unresolved, diagnose, resolve};
pub use scoring::{Ranked, rank, threshold};

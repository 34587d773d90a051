//! Exact lookup handler: full documentation for one entity.

use super::{load_failure, not_found, unresolved_path};
use crate::context::DocContext;
use crate::format::render_target;
use crate::search::{candidate_scopes, lookup_query};

#[derive(Debug, Clone, Default)]
pub struct LookupRequest {
    pub query: Vec<String>,
    /// Documentation version to read (default: latest installed)
    pub version: Option<String>,
}

/// Show the documentation of the entity a query names exactly.
pub fn handle_lookup(context: &DocContext, request: &LookupRequest) -> Result<String, String> {
    let query = context.parse(&request.query).map_err(|e| e.to_string())?;
    let tree = context
        .load_tree(&query, request.version.as_deref())
        .map_err(|e| load_failure(&query, e))?;
    let root = tree.root();

    if let Some(target) = lookup_query(root, &query, context.default_library()) {
        tracing::debug!("Resolved {} to {}", query, target.name());
        return Ok(render_target(&target));
    }

    if candidate_scopes(root, &query, context.default_library()).is_empty() {
        Err(unresolved_path(root, &query))
    } else {
        Err(not_found(&query))
    }
}

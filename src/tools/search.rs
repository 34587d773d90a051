//! Fuzzy symbol search handler.

use super::{load_failure, not_found, unresolved_path};
use crate::context::DocContext;
use crate::format::render_matches;
use crate::search::search_query;

#[derive(Debug, Clone, Default)]
pub struct SearchRequest {
    /// Query tokens: `[library] [Type::Path] symbol`, or with `.`/`#` joining
    /// the type path and symbol.
    pub query: Vec<String>,
    /// Documentation version to search (default: latest installed)
    pub version: Option<String>,
}

/// Search a library for symbols spelled close to the query.
pub fn handle_search(context: &DocContext, request: &SearchRequest) -> Result<String, String> {
    let query = context.parse(&request.query).map_err(|e| e.to_string())?;
    let tree = context
        .load_tree(&query, request.version.as_deref())
        .map_err(|e| load_failure(&query, e))?;

    let Some(matches) = search_query(tree.root(), &query, context.default_library()) else {
        return Err(unresolved_path(tree.root(), &query));
    };

    if matches.is_empty() {
        return Err(not_found(&query));
    }

    Ok(render_matches(&matches))
}

//! Command handlers. Each returns the text to print on success or the message
//! to report on failure.

pub mod list;
pub mod lookup;
pub mod search;

pub use list::*;
pub use lookup::*;
pub use search::*;

use crate::doc::DocNode;
use crate::error::LoadError;
use crate::search::{Query, diagnose};

/// Message for a documentation file that could not be loaded.
pub(crate) fn load_failure(query: &Query, error: LoadError) -> String {
    match error {
        LoadError::LibraryNotFound { .. } | LoadError::NoVersions { .. } => {
            format!("documentation for {} is not available", query.library)
        }
        other => error_chain(other),
    }
}

/// Message for a type path that resolves nowhere, with spelling suggestions.
pub(crate) fn unresolved_path(root: &DocNode, query: &Query) -> String {
    let mut message = String::from("could not resolve types or namespaces for that symbol");

    if let Some(unresolved) = diagnose(root, &query.type_path)
        && !unresolved.suggestions.is_empty()
    {
        message.push_str(&format!(
            "\n'{}' not found; did you mean {}?",
            unresolved.segment,
            unresolved.suggestions.join(", ")
        ));
    }

    message
}

pub(crate) fn not_found(query: &Query) -> String {
    format!("no documentation found for symbol '{}'", query.symbol)
}

/// An error and its sources, joined by `: `.
pub(crate) fn error_chain(error: impl Into<anyhow::Error>) -> String {
    format!("{:#}", error.into())
}

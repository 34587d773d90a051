//! Exact descent through the namespace tree along a type path.

use super::scoring::rank;
use crate::doc::DocNode;

/// Walk `path` down from `root`, one child per segment.
///
/// A segment matches a child whose short name or full name equals it. The
/// root's own name is never consulted, and an empty path resolves to `root`.
/// Matching is exact; misspelled segments do not resolve.
pub fn resolve<'a, S: AsRef<str>>(root: &'a DocNode, path: &[S]) -> Option<&'a DocNode> {
    path.iter().try_fold(root, |node, segment| {
        let segment = segment.as_ref();
        let child = node.children.iter().find(|child| child.is_named(segment));

        if child.is_none() {
            tracing::trace!("No child '{}' under '{}'", segment, node.full_name);
        }
        child
    })
}

/// Where a type path stopped resolving.
#[derive(Debug, Clone)]
pub struct Unresolved<'a> {
    /// The deepest node that did resolve.
    pub parent: &'a DocNode,
    /// The first segment with no matching child.
    pub segment: String,
    /// Children of `parent` spelled close to `segment`, closest first.
    pub suggestions: Vec<&'a str>,
}

/// Explain why `path` does not resolve under `root`, or `None` if it does.
///
/// Suggestions use the same edit-distance tolerance as symbol search; they
/// are offered to the user and never followed.
pub fn diagnose<'a, S: AsRef<str>>(root: &'a DocNode, path: &[S]) -> Option<Unresolved<'a>> {
    let mut node = root;

    for segment in path {
        let segment = segment.as_ref();
        match node.children.iter().find(|child| child.is_named(segment)) {
            Some(child) => node = child,
            None => {
                let suggestions = rank(segment, &node.children, |child| child.name.as_str())
                    .into_iter()
                    .map(|ranked| ranked.item.full_name.as_str())
                    .collect();

                return Some(Unresolved {
                    parent: node,
                    segment: segment.to_string(),
                    suggestions,
                });
            }
        }
    }

    None
}

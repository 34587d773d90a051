//! Symbol search over a documentation subtree.
//!
//! Member names (constants, constructors, methods, macros) are matched with
//! edit-distance tolerance; types and namespaces only match exactly. Each
//! node is ranked on its own and subtree results are concatenated per
//! category in traversal order, so an exactly named namespace deep in the
//! tree is never pushed out by a near-miss member elsewhere.

use super::query::Query;
use super::resolve::resolve;
use super::scoring::{Ranked, rank};
use crate::doc::{Definition, DocNode};
use crate::types::{Category, Matches, RankedMatch, Target};

/// Search `scope` (or `root` when no scope was resolved) for `symbol`.
///
/// Never fails: a tree without matches yields an empty [`Matches`].
pub fn search<'a>(root: &'a DocNode, scope: Option<&'a DocNode>, symbol: &str) -> Matches<'a> {
    let scope = scope.unwrap_or(root);
    let matches = collect(scope, symbol);

    tracing::debug!(
        "Found {} matches for '{}' under '{}'",
        matches.len(),
        symbol,
        scope.full_name
    );

    matches
}

/// Run a parsed query against a tree: resolve its type path, then search.
///
/// Returns `None` when the type path resolves nowhere. See [`candidate_scopes`]
/// for the fallback applied to libraries other than `default_library`.
pub fn search_query<'a>(
    root: &'a DocNode,
    query: &Query,
    default_library: &str,
) -> Option<Matches<'a>> {
    let scopes = candidate_scopes(root, query, default_library);
    let mut result = None;

    for scope in scopes {
        let matches = search(root, Some(scope), &query.symbol);
        if !matches.is_empty() {
            return Some(matches);
        }
        if result.is_none() {
            result = Some(matches);
        }
    }

    result
}

/// Find the single entity named exactly `symbol`, for detailed display.
///
/// The scope and its descendants are visited breadth first. At each node the
/// node itself is checked by short or full name, then its constants,
/// constructors, class methods, instance methods and macros by name. The first
/// hit wins.
pub fn find<'a>(scope: &'a DocNode, symbol: &str) -> Option<Target<'a>> {
    let mut level = vec![scope];

    while !level.is_empty() {
        if let Some(target) = level.iter().find_map(|&node| find_in(node, symbol)) {
            return Some(target);
        }
        level = level
            .into_iter()
            .flat_map(|node| node.children.iter())
            .collect();
    }

    None
}

/// Resolve a parsed query to one entity; see [`find`].
pub fn lookup_query<'a>(
    root: &'a DocNode,
    query: &Query,
    default_library: &str,
) -> Option<Target<'a>> {
    candidate_scopes(root, query, default_library)
        .into_iter()
        .find_map(|scope| find(scope, &query.symbol))
}

/// Scopes a query should be answered in, in order of preference.
///
/// The first is the type path resolved from `root` (the root itself for an
/// empty path). For libraries other than `default_library`, the path is also
/// resolved from the root's first child, since shard documentation usually
/// nests everything under one namespace named after the shard. An empty
/// vector means the type path resolves nowhere.
pub fn candidate_scopes<'a>(
    root: &'a DocNode,
    query: &Query,
    default_library: &str,
) -> Vec<&'a DocNode> {
    let mut scopes: Vec<&'a DocNode> = resolve(root, &query.type_path).into_iter().collect();

    if query.library != default_library
        && let Some(inner) = root.children.first()
        && let Some(scope) = resolve(inner, &query.type_path)
        && !scopes.iter().any(|s| std::ptr::eq(*s, scope))
    {
        tracing::debug!("Falling back to '{}' for {}", inner.full_name, query);
        scopes.push(scope);
    }

    scopes
}

fn collect<'a>(node: &'a DocNode, symbol: &str) -> Matches<'a> {
    let mut matches = member_matches(node, symbol);

    for child in &node.children {
        if child.is_named(symbol) {
            matches.extend(structural_matches(child));
        } else {
            matches.merge(collect(child, symbol));
        }
    }

    matches
}

fn member_matches<'a>(node: &'a DocNode, symbol: &str) -> Matches<'a> {
    let mut matches = Matches::new();
    // constants and constructors carry no location of their own
    let owner_location = node.locations.first();

    matches.extend(
        rank(symbol, &node.constants, |c| c.name.as_str())
            .into_iter()
            .map(|Ranked { item, distance }| RankedMatch {
                category: Category::Constant,
                display_path: display_path(node, &item.name, ""),
                location: owner_location,
                distance,
                target: Target::Constant {
                    owner: node,
                    constant: item,
                },
            }),
    );

    let definitions = [
        (Category::Constructor, &node.constructors),
        (Category::ClassMethod, &node.class_methods),
        (Category::InstanceMethod, &node.instance_methods),
        (Category::Macro, &node.macros),
    ];

    for (category, definitions) in definitions {
        matches.extend(
            rank(symbol, definitions, |d| d.name.as_str())
                .into_iter()
                .map(|Ranked { item, distance }| RankedMatch {
                    category,
                    display_path: display_path(node, &item.name, &item.args),
                    location: if category == Category::Constructor {
                        owner_location
                    } else {
                        item.location.as_ref()
                    },
                    distance,
                    target: Target::Definition {
                        owner: node,
                        definition: item,
                        category,
                    },
                }),
        );
    }

    matches
}

/// One exact match per source location of `node`, or a single location-less
/// match when none are known.
fn structural_matches(node: &DocNode) -> Vec<RankedMatch<'_>> {
    let category = Category::of_node(node);
    let make = |location| RankedMatch {
        category,
        display_path: vec![node.full_name.clone()],
        location,
        distance: 0,
        target: Target::Node(node),
    };

    if node.locations.is_empty() {
        vec![make(None)]
    } else {
        node.locations.iter().map(|l| make(Some(l))).collect()
    }
}

fn display_path(owner: &DocNode, member: &str, signature: &str) -> Vec<String> {
    let owner = if owner.is_pseudo_namespace() {
        String::new()
    } else {
        owner.name.clone()
    };
    vec![owner, member.to_string(), signature.to_string()]
}

fn find_in<'a>(node: &'a DocNode, symbol: &str) -> Option<Target<'a>> {
    if node.is_named(symbol) {
        return Some(Target::Node(node));
    }

    if let Some(constant) = node.constants.iter().find(|c| c.name == symbol) {
        return Some(Target::Constant {
            owner: node,
            constant,
        });
    }

    let definitions: [(Category, &'a [Definition]); 4] = [
        (Category::Constructor, &node.constructors),
        (Category::ClassMethod, &node.class_methods),
        (Category::InstanceMethod, &node.instance_methods),
        (Category::Macro, &node.macros),
    ];

    definitions.into_iter().find_map(|(category, definitions)| {
        definitions
            .iter()
            .find(|d| d.name == symbol)
            .map(|definition| Target::Definition {
                owner: node,
                definition,
                category,
            })
    })
}

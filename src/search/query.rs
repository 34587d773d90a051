//! Query parsing: turns command-line tokens into a library, type path and symbol.
//!
//! Accepted shapes, with an optional leading library name:
//! - `Symbol`
//! - `Type Symbol`
//! - `Type.Symbol`
//! - `Type#Symbol`
//! - `Type::Type Symbol` and the same with `.` or `#`
//!
//! Parsing is purely syntactic; nothing is looked up here.

use crate::error::QueryError;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Library searched when the query does not name one.
pub const DEFAULT_LIBRARY: &str = "crystal";

static LIBRARY_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A[a-z0-9_-]+\z").expect("library pattern is valid"));

static PATH_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A[\w:]+(?:[.# ]\w+)?\z").expect("path pattern is valid"));

static SEGMENT_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A\w+\z").expect("segment pattern is valid"));

/// Characters that divide the type path from the symbol.
const SEPARATORS: [char; 3] = ['.', '#', ' '];

/// A parsed lookup request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub library: String,
    /// Enclosing namespaces and types, outermost first. Empty when the query
    /// names only a symbol.
    pub type_path: Vec<String>,
    pub symbol: String,
}

impl Query {
    pub fn has_type_path(&self) -> bool {
        !self.type_path.is_empty()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.library)?;
        if self.has_type_path() {
            write!(f, "{} ", self.type_path.join("::"))?;
        }
        f.write_str(&self.symbol)
    }
}

/// Parse query tokens, defaulting the library to [`DEFAULT_LIBRARY`].
pub fn parse_query<S: AsRef<str>>(tokens: &[S]) -> Result<Query, QueryError> {
    parse_query_with_default(tokens, DEFAULT_LIBRARY)
}

/// Parse query tokens, using `default_library` when none is given.
///
/// The first token is taken as the library only when more tokens follow and it
/// is entirely lowercase letters, digits, `_` or `-`. The remaining tokens are
/// joined with single spaces and split on at most one separator.
pub fn parse_query_with_default<S: AsRef<str>>(
    tokens: &[S],
    default_library: &str,
) -> Result<Query, QueryError> {
    let (library, rest) = match tokens {
        [first, rest @ ..] if !rest.is_empty() && LIBRARY_RULE.is_match(first.as_ref()) => {
            (first.as_ref(), rest)
        }
        _ => (default_library, tokens),
    };

    let path = rest
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(" ");

    if path.is_empty() {
        return Err(QueryError::Empty);
    }

    let (types, symbol) = split_symbol(&path)?;

    if !PATH_RULE.is_match(&path) {
        return Err(QueryError::InvalidTypePath);
    }

    let type_path = match types {
        Some(types) => parse_type_path(types)?,
        None => {
            // A bare `JSON::Any` is looked up by its full name; the segments
            // still have to be well formed.
            parse_type_path(symbol)?;
            Vec::new()
        }
    };

    let query = Query {
        library: library.to_string(),
        type_path,
        symbol: symbol.to_string(),
    };
    tracing::debug!("Parsed query: {}", query);

    Ok(query)
}

/// Split `path` at its only separator, if any.
fn split_symbol(path: &str) -> Result<(Option<&str>, &str), QueryError> {
    let mut separators = path.match_indices(SEPARATORS);

    let Some((index, separator)) = separators.next() else {
        return Ok((None, path));
    };

    if separators.next().is_some() {
        return Err(QueryError::InvalidSymbolPath);
    }

    Ok((Some(&path[..index]), &path[index + separator.len()..]))
}

/// Split a `::`-delimited type path, requiring every segment to be a word.
fn parse_type_path(types: &str) -> Result<Vec<String>, QueryError> {
    types
        .split("::")
        .map(|segment| {
            if SEGMENT_RULE.is_match(segment) {
                Ok(segment.to_string())
            } else {
                Err(QueryError::InvalidTypePath)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case(&["JSON::Any", "as_s"], "crystal", &["JSON", "Any"], "as_s")]
    #[case(&["JSON::Any.as_s"], "crystal", &["JSON", "Any"], "as_s")]
    #[case(&["JSON::Any#as_s"], "crystal", &["JSON", "Any"], "as_s")]
    #[case(&["mylib", "Foo", "bar"], "mylib", &["Foo"], "bar")]
    #[case(&["mylib", "Foo.bar"], "mylib", &["Foo"], "bar")]
    #[case(&["puts"], "crystal", &[], "puts")]
    #[case(&["crystal"], "crystal", &[], "crystal")]
    #[case(&["kemal-session", "Session"], "kemal-session", &[], "Session")]
    #[case(&["Array", "push"], "crystal", &["Array"], "push")]
    #[case(&["JSON::Any"], "crystal", &[], "JSON::Any")]
    fn test_parse_query(
        #[case] tokens: &[&str],
        #[case] library: &str,
        #[case] type_path: &[&str],
        #[case] symbol: &str,
    ) {
        let query = parse_query(tokens).unwrap();
        check!(query.library == library);
        check!(query.type_path == type_path);
        check!(query.symbol == symbol);
    }

    #[rstest]
    #[case(&["JSON", "Any", "as_s"], QueryError::InvalidSymbolPath)]
    #[case(&["JSON", "Any.as_s"], QueryError::InvalidSymbolPath)]
    #[case(&["JSON.Any#as_s"], QueryError::InvalidSymbolPath)]
    #[case(&["JSON::Any.as_s.to_s"], QueryError::InvalidSymbolPath)]
    #[case(&["JSON::.as_s"], QueryError::InvalidTypePath)]
    #[case(&["JSON::Any-Thing.as_s"], QueryError::InvalidTypePath)]
    #[case(&["JSON::Any.as?"], QueryError::InvalidTypePath)]
    #[case(&["JSON::"], QueryError::InvalidTypePath)]
    #[case(&["Array."], QueryError::InvalidTypePath)]
    #[case(&[], QueryError::Empty)]
    fn test_parse_query_errors(#[case] tokens: &[&str], #[case] expected: QueryError) {
        check!(parse_query(tokens) == Err(expected));
    }

    #[test]
    fn test_uppercase_first_token_is_not_a_library() {
        let query = parse_query(&["Mylib", "bar"]).unwrap();
        check!(query.library == DEFAULT_LIBRARY);
        check!(query.type_path == vec!["Mylib".to_string()]);
        check!(query.symbol == "bar");
    }

    #[test]
    fn test_custom_default_library() {
        let query = parse_query_with_default(&["Foo.bar"], "shards").unwrap();
        check!(query.library == "shards");
        check!(query.to_string() == "shards Foo bar");
    }

    #[test]
    fn test_error_messages() {
        check!(QueryError::InvalidSymbolPath.to_string() == "invalid symbol path");
        check!(QueryError::InvalidTypePath.to_string() == "invalid module or type path");
    }
}

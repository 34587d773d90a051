//! Error handling types and utilities.

use std::path::PathBuf;

/// A specialized Result type for docr operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` at the command boundary.
pub type Result<T> = anyhow::Result<T>;

/// Raised when the tokens of a query do not follow the path grammar.
///
/// An unresolved path or an absent symbol is not a `QueryError`; those are
/// reported as empty results.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// No tokens, or only a library name, were given.
    #[error("no symbol given")]
    Empty,
    /// More than one `.`, `#` or space separator in the path.
    #[error("invalid symbol path")]
    InvalidSymbolPath,
    /// A `::` segment is empty or contains non-word characters.
    #[error("invalid module or type path")]
    InvalidTypePath,
}

/// Error returned when locating or loading a library's documentation fails.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// No directory exists for the library.
    #[error("documentation for {library} is not available")]
    LibraryNotFound { library: String },
    /// The library directory exists but holds no documentation files.
    #[error("no versions of {library} are installed")]
    NoVersions { library: String },
    /// The requested version has no documentation file.
    #[error("documentation for library {library} version {version} is not available")]
    VersionNotFound { library: String, version: String },
    /// Reading the library directory or documentation file failed.
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The documentation file is not a valid documentation tree.
    #[error("failed to parse documentation at {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Error returned when the configuration cannot be resolved.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("could not determine a data directory; set DOCR_LIBRARY_DIR or pass --library-dir")]
    NoDataDir,
}

//! Command context: resolved configuration plus access to installed docs.

use crate::config::Config;
use crate::doc::DocTree;
use crate::error::{ConfigError, LoadError, QueryError};
use crate::library::LibraryStore;
use crate::search::{Query, parse_query_with_default};
use std::path::Path;

/// Everything a command needs to answer a query.
#[derive(Debug, Clone)]
pub struct DocContext {
    config: Config,
    store: LibraryStore,
}

impl DocContext {
    pub fn new(config: Config) -> Self {
        let store = LibraryStore::new(&config.library_dir);
        Self { config, store }
    }

    /// Build a context from the user's configuration.
    pub fn load(library_dir: Option<&Path>) -> Result<Self, ConfigError> {
        Config::load(library_dir).map(Self::new)
    }

    pub fn store(&self) -> &LibraryStore {
        &self.store
    }

    pub fn default_library(&self) -> &str {
        &self.config.default_library
    }

    /// Parse query tokens against the configured default library.
    pub fn parse<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Query, QueryError> {
        parse_query_with_default(tokens, self.default_library())
    }

    /// Load the documentation for the library a query names.
    pub fn load_tree(&self, query: &Query, version: Option<&str>) -> Result<DocTree, LoadError> {
        self.store.load(&query.library, version)
    }
}

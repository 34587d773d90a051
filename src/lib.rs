pub mod cli;
pub mod config;
pub mod context;
pub mod doc;
pub mod error;
pub mod format;
pub mod library;
pub mod search;
pub mod tools;
pub mod tracing;
pub mod types;

pub use config::Config;
pub use context::DocContext;
pub use doc::{DocNode, DocTree};
pub use error::{ConfigError, LoadError, QueryError};
pub use library::LibraryStore;
pub use types::{Category, Matches, RankedMatch, Target};

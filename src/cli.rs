use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "docr", version)]
#[command(about = "Look up Crystal API documentation from the terminal", long_about = None)]
pub struct Cli {
    /// Directory holding installed documentation (default: <data dir>/docr/libraries)
    #[arg(long, global = true)]
    pub library_dir: Option<PathBuf>,

    /// Increase log verbosity (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search for symbols spelled close to the query
    Search(QueryArgs),
    /// Show the documentation of a type, namespace or symbol
    #[command(visible_aliases = ["info", "i"])]
    Lookup(QueryArgs),
    /// List installed libraries and their versions
    List,
}

#[derive(Debug, Args)]
#[command(after_help = "Examples:\n  docr lookup JSON::Any.as_s\n  docr lookup JSON::Any#as_s\n  docr lookup JSON::Any as_s\n  docr search kemal Config port")]
pub struct QueryArgs {
    /// [library] [Type::Path] symbol
    #[arg(required = true, num_args = 1..=3, value_name = "QUERY")]
    pub query: Vec<String>,

    /// Documentation version to use (default: latest installed)
    #[arg(long = "version", value_name = "VERSION")]
    pub doc_version: Option<String>,
}

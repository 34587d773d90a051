use anyhow::Context as _;
use clap::Parser;
use docr::cli::{Cli, Commands};
use docr::context::DocContext;
use docr::error::Result;
use docr::tools::{LookupRequest, SearchRequest, handle_list, handle_lookup, handle_search};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    docr::tracing::init(cli.verbose);

    match run(cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<String> {
    let context =
        DocContext::load(cli.library_dir.as_deref()).context("failed to load configuration")?;

    let output = match cli.command {
        Commands::Search(args) => handle_search(
            &context,
            &SearchRequest {
                query: args.query,
                version: args.doc_version,
            },
        ),
        Commands::Lookup(args) => handle_lookup(
            &context,
            &LookupRequest {
                query: args.query,
                version: args.doc_version,
            },
        ),
        Commands::List => handle_list(&context),
    }
    .map_err(anyhow::Error::msg)?;

    Ok(output)
}

use std::sync::Arc;

use anyhow::Result;
use async_graphql::{Request, Variables};
use clap::Parser;
use colored::Colorize;

use bookshelf::cli::{Cli, Commands};
use bookshelf::graphql::{build_schema, run_server};
use bookshelf::storage::Library;

fn main() -> Result<()> {
    let cli = Cli::parse();
    bookshelf::logging::init(cli.verbose, cli.log_file.clone());

    match cli.command {
        Commands::Serve { port } => {
            let schema = build_schema(Arc::new(Library::with_seed_data()));

            println!(
                "{} GraphQL on http://localhost:{}/graphql",
                "Serving".green(),
                port
            );
            println!("GraphiQL console: http://localhost:{}/graphql", port);

            tokio::runtime::Runtime::new()?.block_on(run_server(schema, port))?;
            Ok(())
        }
        Commands::Query {
            document,
            variables,
        } => {
            let schema = build_schema(Arc::new(Library::with_seed_data()));

            let mut request = Request::new(document);
            if let Some(raw) = variables {
                let value: serde_json::Value = serde_json::from_str(&raw)?;
                request = request.variables(Variables::from_json(value));
            }

            let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
    }
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Matches the historical default of the original demo service.
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(
    author,
    version,
    about = "A demo GraphQL endpoint serving an in-memory library of authors and books"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose (debug) logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Write JSON logs to this file in addition to stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the GraphQL HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
    },

    /// Execute a GraphQL document against a freshly seeded in-process schema
    ///
    /// State lives only for this invocation: a mutation here is visible to
    /// the rest of the same document, then discarded.
    #[command(visible_alias = "q")]
    Query {
        /// The GraphQL query or mutation document
        document: String,

        /// Variables as a JSON object
        #[arg(long)]
        variables: Option<String>,
    },
}

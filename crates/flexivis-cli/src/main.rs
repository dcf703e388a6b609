//! Print the Flexivis URL for a JSON layout document.
//!
//! # Examples
//!
//! ```sh
//! # Layout from a file
//! flexivis layout.json
//!
//! # Layout from stdin, pointing at a local Flexivis
//! cat layout.json | flexivis --stdin --base-url http://localhost:8080
//!
//! # Document format
//! flexivis --schema
//! ```

use std::path::PathBuf;
use std::process;

use clap::Parser;
use flexivis_cli::{CliConfig, DocumentSource};
use flexivis_url::LayoutDocument;
use tracing::info;

/// Print the Flexivis URL for a JSON layout document.
#[derive(Parser)]
#[command(name = "flexivis")]
struct Cli {
    /// Layout document to read (`-` for stdin)
    file: Option<PathBuf>,

    /// Read the layout document from stdin
    #[arg(long)]
    stdin: bool,

    /// Layout text to use instead of the one compiled from the document
    #[arg(long)]
    layout: Option<String>,

    /// Flexivis deployment to link to
    #[arg(long)]
    base_url: Option<String>,

    /// Print the JSON schema of layout documents and exit
    #[arg(long)]
    schema: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let config = CliConfig {
        base_url: cli.base_url,
        layout: cli.layout,
        verbosity: cli.verbose,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(config.log_level())
        .init();

    if cli.schema {
        match serde_json::to_string_pretty(&LayoutDocument::json_schema()) {
            Ok(schema) => println!("{schema}"),
            Err(e) => fail(&format!("failed to serialize schema: {e}")),
        }
        return;
    }

    let result = DocumentSource::from_args(cli.file, cli.stdin)
        .and_then(|source| {
            info!("Reading layout document from {source:?}");
            source.read()
        })
        .and_then(|document| config.render(&document));

    match result {
        Ok(url) => println!("{url}"),
        Err(e) => fail(&e),
    }
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {message}");
    process::exit(1);
}

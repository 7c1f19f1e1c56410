use anyhow::Result;
use clap::{Parser, Subcommand};
use search_cli::{build_server, load_config, load_documents, search, MatchResponse};
use search_core::{DocId, DocumentStatus, Rating};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "search-cli")]
#[command(about = "Rank documents against a query with TF-IDF", long_about = None)]
struct Cli {
    /// Documents to load (JSON or JSONL)
    #[arg(long)]
    docs: PathBuf,
    /// Space-separated stop words
    #[arg(long, default_value = "")]
    stop_words: String,
    /// JSON file with ranking settings
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the maximum number of hits
    #[arg(long)]
    max_results: Option<usize>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the top documents for a query
    Search {
        #[arg(long, allow_hyphen_values = true)]
        query: String,
        /// Only documents with this status (default: actual)
        #[arg(long)]
        status: Option<DocumentStatus>,
        /// Only documents rated at least this
        #[arg(long, allow_hyphen_values = true)]
        min_rating: Option<Rating>,
    },
    /// Print which query words a document contains
    Match {
        #[arg(long, allow_hyphen_values = true)]
        query: String,
        #[arg(long)]
        id: DocId,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref(), cli.max_results)?;
    let docs = load_documents(&cli.docs)?;
    let server = build_server(config, &cli.stop_words, docs)?;

    let out = match cli.command {
        Commands::Search { query, status, min_rating } => {
            serde_json::to_string_pretty(&search(&server, &query, status, min_rating)?)?
        }
        Commands::Match { query, id } => {
            let matched = server.match_document(&query, id)?;
            serde_json::to_string_pretty(&MatchResponse::new(&query, id, matched))?
        }
    };
    println!("{out}");
    Ok(())
}

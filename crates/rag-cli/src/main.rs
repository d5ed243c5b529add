//! RAG MCP server - stdio entry point.
//!
//! With no subcommand, serves the `search_rag` tool over MCP on stdin/stdout
//! until the client closes the channel. Logs go to stderr.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use rmcp::ServiceExt;
use serde_json::{Map, Value};
use tracing::info;
use tracing_subscriber::EnvFilter;

use rag_core::{RagConfig, StaticKnowledgeBase};
use rag_mcp::{RagMcpServer, SEARCH_TOOL};

/// RAG MCP server - knowledge base search for AI assistants
#[derive(Parser)]
#[command(name = "rag-mcp-server")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (default: <config dir>/rag-mcp/config.toml, then ./rag-mcp.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve MCP over stdio (the default)
    Serve,

    /// Run a search_rag call locally and print the response
    Search {
        /// Search query
        query: String,
    },

    /// Print the tool descriptors as JSON
    Tools,
}

fn setup_logging(verbose: bool, level: &str) {
    // RUST_LOG wins; stdout carries the protocol, so always write to stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
        }
    });

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => RagConfig::load(path)?,
        None => RagConfig::load_default()?,
    };

    setup_logging(cli.verbose, &config.logging.level);

    let server = RagMcpServer::new(Arc::new(StaticKnowledgeBase::new()), config.server);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(server).await?,
        Commands::Search { query } => println!("{}", search(&server, query).await),
        Commands::Tools => println!("{}", tools_json()?),
    }

    Ok(())
}

async fn serve(server: RagMcpServer<StaticKnowledgeBase>) -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting RAG MCP server on stdio");

    let service = server.serve(rmcp::transport::stdio()).await?;
    let reason = service.waiting().await?;

    info!("RAG MCP server stopped: {:?}", reason);
    Ok(())
}

async fn search(server: &RagMcpServer<StaticKnowledgeBase>, query: String) -> String {
    let mut arguments = Map::new();
    arguments.insert("query".to_string(), Value::String(query));

    server.call(SEARCH_TOOL, &arguments).await.content.join("\n")
}

fn tools_json() -> rag_core::Result<String> {
    Ok(serde_json::to_string_pretty(&rag_mcp::tools())?)
}

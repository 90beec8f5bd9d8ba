//! Text Summarization MCP Server
//!
//! Runs the MCP server on stdio by default, or summarizes a single text
//! from a file or stdin with the `summarize` subcommand.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use textsum_mcp_server::config::Config;
use textsum_mcp_server::mcp::server::McpServer;
use textsum_mcp_server::summarizer::summarize_with_report;

/// Text Summarization MCP Server
#[derive(Parser)]
#[command(name = "textsum-mcp-server")]
#[command(author, version, about = "Text Summarization MCP Server - extractive summaries over the Model Context Protocol")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize text from a file or stdin and print the result
    Summarize {
        /// Maximum number of sentences to keep (clamped to the configured bounds)
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        max_sentences: Option<i64>,

        /// Read text from this file instead of stdin
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Print the score and position of each kept sentence to stderr
        #[arg(long)]
        explain: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries protocol messages
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = Config::new().context("failed to load configuration")?;

    match cli.command {
        Some(Commands::Summarize {
            max_sentences,
            input,
            explain,
        }) => summarize_once(&config, max_sentences, input, explain)?,
        None => {
            let mut server = McpServer::new(config);
            server.run_stdio().await?;
        }
    }

    Ok(())
}

fn summarize_once(
    config: &Config,
    max_sentences: Option<i64>,
    input: Option<PathBuf>,
    explain: bool,
) -> anyhow::Result<()> {
    let text = match input {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    if text.len() > config.max_input_bytes {
        anyhow::bail!(
            "input is {} bytes, limit is {} bytes",
            text.len(),
            config.max_input_bytes
        );
    }

    let report = summarize_with_report(&text, config.resolve_max_sentences(max_sentences));

    if explain {
        eprintln!(
            "{} of {} sentences kept{}",
            report.selected.len(),
            report.total_sentences,
            if report.passthrough { " (text returned unchanged)" } else { "" }
        );
        for sentence in &report.selected {
            eprintln!("  [{:>3}] {:>8.3}  {}", sentence.index, sentence.score, sentence.text);
        }
    }

    println!("{}", report.summary);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_max_sentences_is_accepted() {
        let cli = Cli::try_parse_from(["textsum-mcp-server", "summarize", "-n", "-2"]).unwrap();
        match cli.command {
            Some(Commands::Summarize { max_sentences, .. }) => {
                assert_eq!(max_sentences, Some(-2));
                assert_eq!(Config::default().resolve_max_sentences(max_sentences), 1);
            }
            None => panic!("expected summarize subcommand"),
        }
    }

    #[test]
    fn test_no_subcommand_serves() {
        let cli = Cli::try_parse_from(["textsum-mcp-server"]).unwrap();
        assert!(cli.command.is_none());
    }
}

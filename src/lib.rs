//! Text Summarization MCP Server Library
//!
//! Extractive summarization of a single passage, with no language model and
//! no network access, plus a Model Context Protocol adapter exposing it as
//! the `summarize_text` tool.

pub mod config;
pub mod error;
pub mod mcp;
pub mod summarizer;

pub use config::Config;
pub use error::{Result, TextSumError};
pub use summarizer::{summarize, summarize_with_report, DEFAULT_MAX_SENTENCES};

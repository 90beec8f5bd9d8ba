//! MCP (Model Context Protocol) module
//!
//! Boundary adapter that exposes the summarizer as an MCP tool.

pub mod server;
pub mod tools;
pub mod types;

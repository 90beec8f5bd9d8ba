//! MCP tool definitions and handlers
//!
//! Maps `tools/call` arguments onto the summarizer. Rejected requests become
//! JSON-RPC errors; a fault inside the summarizer becomes an error result.

use std::panic::{self, UnwindSafe};

use schemars::{schema_for, JsonSchema};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::Config;
use crate::error::{McpError, Result, SummarizationError, TextSumError, ValidationError};
use crate::mcp::types::{error_codes, CallToolResult, JsonRpcError, Tool};
use crate::summarizer;

/// Name of the summarization tool
pub const SUMMARIZE_TEXT: &str = "summarize_text";

/// Arguments accepted by `summarize_text`
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SummarizeTextArgs {
    /// The text to summarize
    pub text: String,

    /// Maximum number of sentences in the summary (1-10, default 3)
    #[serde(default)]
    #[schemars(with = "Option<u32>")]
    pub max_sentences: Option<Value>,
}

impl SummarizeTextArgs {
    /// Requested sentence count as an integer.
    ///
    /// Fractional numbers are floored; anything that is not a number counts
    /// as not given.
    pub fn requested_sentences(&self) -> Option<i64> {
        match self.max_sentences.as_ref()? {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.floor() as i64)),
            _ => None,
        }
    }
}

/// Tool handler
pub struct ToolHandler {
    config: Config,
}

impl ToolHandler {
    /// Create a new tool handler
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// List all available tools
    pub fn list_tools(&self) -> Vec<Tool> {
        vec![tool_def(
            SUMMARIZE_TEXT,
            "Summarize text by extracting its most important sentences, kept in their original order",
            summarize_text_schema(),
        )]
    }

    /// Call a tool by name.
    ///
    /// Bad arguments and unknown tools are JSON-RPC errors. A fault while
    /// summarizing is an `isError` tool result.
    pub fn call_tool(
        &self,
        name: &str,
        args: Value,
    ) -> std::result::Result<CallToolResult, JsonRpcError> {
        let outcome = match name {
            SUMMARIZE_TEXT => self.handle_summarize_text(args),
            _ => Err(McpError::UnknownTool {
                name: name.to_string(),
            }
            .into()),
        };

        match outcome {
            Ok(summary) => Ok(CallToolResult::text(summary)),
            Err(TextSumError::Summarization(e)) => {
                tracing::error!(tool = name, error = %e, "summarization failed");
                Ok(CallToolResult::error(e.to_string()))
            }
            Err(e) => {
                tracing::warn!(tool = name, error = %e, "rejected tool call");
                Err(rejection(e))
            }
        }
    }

    // ==================== Tool Handlers ====================

    fn handle_summarize_text(&self, args: Value) -> Result<String> {
        let args = parse_args(args)?;

        let size = args.text.len();
        if size > self.config.max_input_bytes {
            return Err(ValidationError::InputTooLarge {
                size,
                limit: self.config.max_input_bytes,
            }
            .into());
        }

        let max_sentences = self
            .config
            .resolve_max_sentences(args.requested_sentences());
        tracing::debug!(bytes = size, max_sentences, "summarizing text");

        run_guarded(|| summarizer::summarize(&args.text, max_sentences))
    }
}

/// JSON-RPC error for a request rejected before summarizing
fn rejection(err: TextSumError) -> JsonRpcError {
    match err {
        TextSumError::Validation(e) => JsonRpcError::invalid_params(e.to_string()),
        TextSumError::Mcp(e @ McpError::UnknownTool { .. }) => {
            JsonRpcError::new(error_codes::METHOD_NOT_FOUND, e.to_string())
        }
        TextSumError::Mcp(e) => JsonRpcError::invalid_params(e.to_string()),
        other => JsonRpcError::internal_error(other.to_string()),
    }
}

/// Deserialize `summarize_text` arguments, naming the offending field
fn parse_args(args: Value) -> Result<SummarizeTextArgs> {
    match args.get("text") {
        None | Some(Value::Null) => {
            return Err(ValidationError::MissingField {
                field: "text".to_string(),
            }
            .into())
        }
        Some(Value::String(_)) => {}
        Some(_) => {
            return Err(ValidationError::InvalidParameter {
                name: "text".to_string(),
                message: "expected a string".to_string(),
            }
            .into())
        }
    }

    serde_json::from_value(args).map_err(|e| {
        McpError::InvalidArguments {
            message: e.to_string(),
        }
        .into()
    })
}

/// Run the summarizer, turning a panic into an error
fn run_guarded<F>(summarize: F) -> Result<String>
where
    F: FnOnce() -> String + UnwindSafe,
{
    panic::catch_unwind(summarize).map_err(|payload| {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        TextSumError::Summarization(SummarizationError::Panicked { message })
    })
}

// ==================== Tool Definitions ====================

fn tool_def(name: &str, description: &str, schema: Value) -> Tool {
    Tool {
        name: name.to_string(),
        description: Some(description.to_string()),
        input_schema: schema,
    }
}

fn summarize_text_schema() -> Value {
    let mut schema = serde_json::to_value(schema_for!(SummarizeTextArgs))
        .unwrap_or_else(|_| json!({"type": "object"}));

    if let Some(max_sentences) = schema.pointer_mut("/properties/max_sentences") {
        max_sentences["minimum"] = json!(1);
        max_sentences["maximum"] = json!(10);
        max_sentences["default"] = json!(3);
    }

    schema
}

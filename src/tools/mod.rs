//! MCP tools, resources, and prompts registered on the server, plus router helpers.

pub mod code_review;
pub mod greeting;
pub mod multiply;

use rmcp::handler::server::router::{prompt::PromptRouter, tool::ToolRouter};

pub use code_review::{code_review_request, CodeReviewPromptArgs, CODE_REVIEW_PROMPT_ID};
pub use greeting::{
    greeting_message, greeting_template, parse_greeting_uri, read_greeting, GREETING_SCHEME,
    GREETING_URI_TEMPLATE,
};
pub use multiply::{multiply, MultiplyRequest, MULTIPLY_TOOL_ID};

pub const NO_REASON_TOOL_ID: &str = "get_no_reason";
pub const QUOTE_TOOL_ID: &str = "get_motivational_quote";

pub type ServerToolRouter<S> = ToolRouter<S>;
pub type ServerPromptRouter<S> = PromptRouter<S>;

/// Helper for building a tool router.
pub fn build_router<S>(builder: impl FnOnce() -> ServerToolRouter<S>) -> ServerToolRouter<S>
where
    S: Send + Sync + 'static,
{
    builder()
}

/// Helper for building a prompt router.
pub fn build_prompt_router<S>(
    builder: impl FnOnce() -> ServerPromptRouter<S>,
) -> ServerPromptRouter<S>
where
    S: Send + Sync + 'static,
{
    builder()
}

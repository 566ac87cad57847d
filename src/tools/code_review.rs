use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const CODE_REVIEW_PROMPT_ID: &str = "ask_code_review";

/// Arguments for the `ask_code_review` prompt.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CodeReviewPromptArgs {
    /// Code to be reviewed.
    pub code_snippet: String,
}

pub fn code_review_request(code_snippet: &str) -> String {
    format!("Please review the following code: {code_snippet}")
}

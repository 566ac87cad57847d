use rmcp::model::ErrorData;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::lib::errors::{descriptor_error, ErrorKind, MULTIPLY_OVERFLOW_ERROR};

pub const MULTIPLY_TOOL_ID: &str = "multiply";

/// Input for `multiply`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MultiplyRequest {
    /// First factor.
    pub a: i64,
    /// Second factor.
    pub b: i64,
}

/// Multiply two integers, rejecting results outside the `i64` range.
pub fn multiply(request: &MultiplyRequest) -> Result<i64, ErrorData> {
    request.a.checked_mul(request.b).ok_or_else(|| {
        descriptor_error(
            &MULTIPLY_OVERFLOW_ERROR,
            ErrorKind::InvalidParams,
            false,
            json!({ "a": request.a, "b": request.b }),
        )
    })
}

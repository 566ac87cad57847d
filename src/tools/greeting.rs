//! `greeting://{name}` resource template.
use rmcp::model::{ErrorData, ReadResourceResult, ResourceContents, ResourceTemplate};
use serde_json::json;

use crate::lib::errors::{
    descriptor_error, ErrorKind, GREETING_NAME_REQUIRED_ERROR, RESOURCE_NOT_FOUND_ERROR,
};

pub const GREETING_SCHEME: &str = "greeting://";
pub const GREETING_URI_TEMPLATE: &str = "greeting://{name}";

pub fn greeting_message(name: &str) -> String {
    format!("Welcome, {name}!")
}

/// Template advertised through `resources/templates/list`.
pub fn greeting_template() -> Result<ResourceTemplate, serde_json::Error> {
    serde_json::from_value(json!({
        "uriTemplate": GREETING_URI_TEMPLATE,
        "name": "greeting",
        "description": "Get a customised welcome message",
        "mimeType": "text/plain"
    }))
}

/// Extract `{name}` from a greeting URI. The name is used verbatim.
///
/// `{name}` is a single path segment, so a name containing `/` matches no template.
pub fn parse_greeting_uri(uri: &str) -> Result<&str, ErrorData> {
    let Some(name) = uri
        .strip_prefix(GREETING_SCHEME)
        .filter(|name| !name.contains('/'))
    else {
        return Err(descriptor_error(
            &RESOURCE_NOT_FOUND_ERROR,
            ErrorKind::ResourceNotFound,
            false,
            json!({ "uri": uri }),
        ));
    };
    if name.is_empty() {
        return Err(descriptor_error(
            &GREETING_NAME_REQUIRED_ERROR,
            ErrorKind::InvalidParams,
            false,
            json!({ "uri": uri }),
        ));
    }
    Ok(name)
}

pub fn read_greeting(uri: &str) -> Result<ReadResourceResult, ErrorData> {
    let name = parse_greeting_uri(uri)?;
    Ok(ReadResourceResult {
        contents: vec![ResourceContents::text(greeting_message(name), uri)],
    })
}
